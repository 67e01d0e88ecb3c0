//! Reine Auswertungs-Funktionen für alle Kurven-Arten.
//!
//! Layer-neutral und frei von Zustand: Renderer, Export-Pipeline und Tests
//! rufen dieselben Funktionen — Determinismus ist hier Vertragsbestandteil,
//! nicht Optimierung.

use super::CurveParams;
use glam::DVec2;

/// Endlicher Ersatzwert für die Potenz-Singularität (`|x−h| = 0`, `b < 0`).
/// Hält das Rendering numerisch stabil statt Inf/NaN zu emittieren.
pub const SINGULARITY_Y: f64 = 1000.0;

/// Kosmetisches Y-Band für Potenz-Polylines. Wirkt nur auf emittierte
/// Punkte, nie auf die gespeicherten Parameter.
pub const RENDER_Y_CLAMP: f64 = 100.0;

/// Standard-Auflösung beim Abtasten einer Kurve für das Rendering.
pub const DEFAULT_RESOLUTION: usize = 250;

/// Wertet eine Kurve an der Stelle `x` aus.
///
/// Total bis auf die dokumentierten Singularitäten, die auf endliche
/// Ersatzwerte abgebildet werden; deterministisch und frei von Seiteneffekten.
pub fn evaluate(params: &CurveParams, x: f64) -> f64 {
    match *params {
        CurveParams::Gaussian {
            mean,
            sigma,
            amplitude,
        } => {
            if sigma == 0.0 {
                // Dirac-artige Spitze: nur am Mittelwert ungleich 0
                return if x == mean { amplitude } else { 0.0 };
            }
            let exponent = -(x - mean).powi(2) / (2.0 * sigma.powi(2));
            amplitude * exponent.exp()
        }
        CurveParams::Linear { slope, intercept } => slope * x + intercept,
        CurveParams::Quadratic { a, h, k } => a * (x - h).powi(2) + k,
        CurveParams::PowerLaw { a, b, h, k } => {
            let dx = (x - h).abs();
            if dx == 0.0 && b < 0.0 {
                return SINGULARITY_Y;
            }
            a * dx.powf(b) + k
        }
        CurveParams::Exponential { a, base, h, k } => a * base.powf(x - h) + k,
    }
}

/// Tastet eine Kurve über `[x_min, x_max]` ab: `resolution + 1` Punkte,
/// gleichmäßig verteilt, beide Ränder inklusive, streng aufsteigend in x.
///
/// Geraden sind durch ihre Endpunkte vollständig bestimmt und werden auf
/// exakt 2 Punkte verkürzt. Potenz-Kurven clampen y auf
/// `±RENDER_Y_CLAMP`, damit pathologische Exponenten keine unrenderbaren
/// Koordinaten erzeugen.
pub fn sample_polyline(
    params: &CurveParams,
    x_min: f64,
    x_max: f64,
    resolution: usize,
) -> Vec<DVec2> {
    if let CurveParams::Linear { .. } = params {
        return vec![
            DVec2::new(x_min, evaluate(params, x_min)),
            DVec2::new(x_max, evaluate(params, x_max)),
        ];
    }

    let resolution = resolution.max(1);
    let step = (x_max - x_min) / resolution as f64;
    let clamp_band = matches!(params, CurveParams::PowerLaw { .. });

    let mut points = Vec::with_capacity(resolution + 1);
    for i in 0..=resolution {
        let x = if i == resolution {
            x_max // letzten Punkt exakt auf den Rand legen
        } else {
            x_min + i as f64 * step
        };
        let mut y = evaluate(params, x);
        if clamp_band {
            y = y.clamp(-RENDER_Y_CLAMP, RENDER_Y_CLAMP);
        }
        points.push(DVec2::new(x, y));
    }
    points
}
