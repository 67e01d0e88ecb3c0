//! Kurven-Modell: fünf parametrische Kurven-Arten mit gemeinsamen Feldern.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Untergrenze für die Standardabweichung einer Gauß-Kurve.
/// Die Drag-Inversen teilen durch σ; der Floor hält sie definiert.
pub const SIGMA_FLOOR: f64 = 0.05;
/// Untergrenze für die Amplitude einer Gauß-Kurve.
pub const AMPLITUDE_FLOOR: f64 = 0.01;

/// Kurven-Art (Diskriminante, nach Erstellung unveränderlich).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurveKind {
    /// Glockenkurve `A·exp(−(x−μ)²/(2σ²))`
    Gaussian,
    /// Gerade `a·x + b`
    Linear,
    /// Parabel in Scheitelform `a·(x−h)² + k`
    Quadratic,
    /// Potenzfunktion `a·|x−h|^b + k`
    PowerLaw,
    /// Exponentialfunktion `a·base^(x−h) + k`
    Exponential,
}

/// Parametersatz je Kurven-Art.
///
/// Geschlossene Summe: Evaluator, Handle-Modell und Snapshot-Builder
/// matchen erschöpfend über alle Varianten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CurveParams {
    /// Gauß: Mittelwert μ, Standardabweichung σ, Amplitude A
    Gaussian { mean: f64, sigma: f64, amplitude: f64 },
    /// Linear: Steigung a, Achsenabschnitt b
    Linear { slope: f64, intercept: f64 },
    /// Quadratisch: Krümmung a, Scheitel (h, k)
    Quadratic { a: f64, h: f64, k: f64 },
    /// Potenz: Koeffizient a, Exponent b, Verschiebung (h, k)
    PowerLaw { a: f64, b: f64, h: f64, k: f64 },
    /// Exponential: Koeffizient a, Basis, Verschiebung (h, k)
    Exponential { a: f64, base: f64, h: f64, k: f64 },
}

impl CurveParams {
    /// Gibt die Diskriminante des Parametersatzes zurück.
    pub fn kind(&self) -> CurveKind {
        match self {
            Self::Gaussian { .. } => CurveKind::Gaussian,
            Self::Linear { .. } => CurveKind::Linear,
            Self::Quadratic { .. } => CurveKind::Quadratic,
            Self::PowerLaw { .. } => CurveKind::PowerLaw,
            Self::Exponential { .. } => CurveKind::Exponential,
        }
    }

    /// Erzwingt die Parameter-Invarianten (σ- und A-Floor).
    ///
    /// Läuft auf jedem Schreibpfad, auch bei direkten Feld-Edits aus dem
    /// externen Panel — die Drag-Inversen setzen die Floors voraus.
    pub fn sanitize(&mut self) {
        if let Self::Gaussian {
            sigma, amplitude, ..
        } = self
        {
            *sigma = sigma.max(SIGMA_FLOOR);
            *amplitude = amplitude.max(AMPLITUDE_FLOOR);
        }
    }

    /// Standard-Parameter für eine neue Kurve nahe dem aktuellen View-Zentrum.
    pub fn default_for(kind: CurveKind, pan_offset: DVec2) -> Self {
        match kind {
            CurveKind::Gaussian => Self::Gaussian {
                mean: pan_offset.x,
                sigma: 1.0,
                amplitude: 1.0,
            },
            CurveKind::Linear => Self::Linear {
                slope: 0.5,
                intercept: pan_offset.y,
            },
            CurveKind::Quadratic => Self::Quadratic {
                a: 1.0,
                h: pan_offset.x,
                k: pan_offset.y,
            },
            CurveKind::PowerLaw => Self::PowerLaw {
                a: 1.0,
                b: 2.0,
                h: pan_offset.x,
                k: pan_offset.y,
            },
            CurveKind::Exponential => Self::Exponential {
                a: 1.0,
                base: 2.0,
                h: pan_offset.x,
                k: pan_offset.y,
            },
        }
    }
}

/// Eine Kurve der Komposition.
///
/// `id` ist eindeutig über die lebende Kurvenmenge; `params.kind()` ist
/// nach der Erstellung unveränderlich. `name` und `color` sind frei
/// editierbar, `visible`/`locked` steuern Rendering und Interaktion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Eindeutige, stabile Kurven-ID
    pub id: u64,
    /// Anzeigename (editierbar)
    pub name: String,
    /// Parametersatz inkl. Kurven-Art
    pub params: CurveParams,
    /// RGBA-Farbe für Renderer und Export-Legende
    pub color: [f32; 4],
    /// Unsichtbare Kurven: kein Rendering, kein Export, keine Handles
    pub visible: bool,
    /// Gesperrte Kurven rendern, zeigen aber keine Handles
    pub locked: bool,
}

impl Curve {
    /// Erstellt eine neue sichtbare, nicht gesperrte Kurve.
    pub fn new(id: u64, name: impl Into<String>, params: CurveParams, color: [f32; 4]) -> Self {
        let mut params = params;
        params.sanitize();
        Self {
            id,
            name: name.into(),
            params,
            color,
            visible: true,
            locked: false,
        }
    }

    /// Gibt die Kurven-Art zurück.
    pub fn kind(&self) -> CurveKind {
        self.params.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_floors_sigma_and_amplitude() {
        let mut params = CurveParams::Gaussian {
            mean: 0.0,
            sigma: 0.0,
            amplitude: -3.0,
        };
        params.sanitize();
        match params {
            CurveParams::Gaussian {
                sigma, amplitude, ..
            } => {
                assert_eq!(sigma, SIGMA_FLOOR);
                assert_eq!(amplitude, AMPLITUDE_FLOOR);
            }
            other => panic!("Unerwartete Variante: {other:?}"),
        }
    }

    #[test]
    fn test_sanitize_leaves_other_kinds_untouched() {
        let mut params = CurveParams::Quadratic {
            a: 0.0,
            h: -2.0,
            k: 5.0,
        };
        let before = params;
        params.sanitize();
        assert_eq!(params, before);
    }

    #[test]
    fn test_default_params_follow_pan_offset() {
        let pan = glam::DVec2::new(3.0, -1.5);
        match CurveParams::default_for(CurveKind::Gaussian, pan) {
            CurveParams::Gaussian { mean, .. } => assert_eq!(mean, 3.0),
            other => panic!("Unerwartete Variante: {other:?}"),
        }
        match CurveParams::default_for(CurveKind::Quadratic, pan) {
            CurveParams::Quadratic { h, k, .. } => {
                assert_eq!(h, 3.0);
                assert_eq!(k, -1.5);
            }
            other => panic!("Unerwartete Variante: {other:?}"),
        }
    }

    #[test]
    fn test_kind_matches_variant() {
        let pan = glam::DVec2::ZERO;
        for kind in [
            CurveKind::Gaussian,
            CurveKind::Linear,
            CurveKind::Quadratic,
            CurveKind::PowerLaw,
            CurveKind::Exponential,
        ] {
            assert_eq!(CurveParams::default_for(kind, pan).kind(), kind);
        }
    }
}
