//! Handle-Modell: ziehbare Kontrollpunkte je Kurven-Art.
//!
//! Handles sind eine abgeleitete Sicht — sie werden in jedem
//! Interaktions-Frame frisch aus den aktuellen Parametern berechnet und nie
//! gespeichert. Jeder Handle hat eine Positions-Funktion und deren lokale
//! Rechts-Inverse als Update-Regel; Offsets von 1 bzw. 2 Ebenen-Einheiten
//! halten die Inversen als einfache Algebra statt numerischer Löser.

use super::{evaluate, Curve, CurveParams, AMPLITUDE_FLOOR, SIGMA_FLOOR};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Offset des Potenz-Exponent-Handles (Ebenen-Einheiten rechts von h).
///
/// Gekoppelt an die Basis-2-Logarithmus-Inverse: bei Offset 2 ist
/// `f(h+2) = a·2^b + k`, also `b = log2((y−k)/a)`. Offset und Log-Basis
/// nur gemeinsam ändern.
pub const EXPONENT_HANDLE_OFFSET: f64 = 2.0;

/// Benannte Handles über alle Kurven-Arten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandleKind {
    /// Gauß: Spitze der Glocke, steuert μ und A gemeinsam
    MeanAmplitude,
    /// Gauß: Wendepunkt-Abstand, steuert σ
    Sigma,
    /// Linear: y-Achsenabschnitt
    Intercept,
    /// Linear: Steigungs-Punkt bei x = 1
    Slope,
    /// Quadratisch/Potenz: Scheitel bzw. Verschiebungs-Anker
    Vertex,
    /// Quadratisch: Krümmungs-Punkt bei h + 1
    Curvature,
    /// Potenz/Exponential: Koeffizienten-Punkt
    Coefficient,
    /// Potenz: Exponenten-Punkt bei h + 2
    Exponent,
    /// Exponential: Basis-Punkt bei h + 1
    Base,
}

/// Ein Handle mit aktueller Ebenen-Position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    /// Welcher Kontrollpunkt
    pub kind: HandleKind,
    /// Position in Ebenen-Koordinaten, abgeleitet aus den Parametern
    pub position: DVec2,
}

/// Treffer eines Handle-Hit-Tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleHit {
    /// Kurve, zu der der Handle gehört
    pub curve_id: u64,
    /// Getroffener Handle
    pub kind: HandleKind,
}

/// Berechnet den Handle-Satz einer Kurve aus ihren aktuellen Parametern.
///
/// Gesperrte und unsichtbare Kurven exponieren keine Handles.
pub fn handles_for(curve: &Curve) -> Vec<Handle> {
    if curve.locked || !curve.visible {
        return Vec::new();
    }
    handles_for_params(&curve.params)
}

/// Handle-Positionen rein aus einem Parametersatz (ohne Sperr-Logik).
pub fn handles_for_params(params: &CurveParams) -> Vec<Handle> {
    let at = |kind: HandleKind, x: f64, y: f64| Handle {
        kind,
        position: DVec2::new(x, y),
    };

    match *params {
        CurveParams::Gaussian {
            mean,
            sigma,
            amplitude,
        } => vec![
            at(HandleKind::MeanAmplitude, mean, amplitude),
            at(HandleKind::Sigma, mean + sigma, evaluate(params, mean + sigma)),
        ],
        CurveParams::Linear { intercept, .. } => vec![
            at(HandleKind::Intercept, 0.0, intercept),
            at(HandleKind::Slope, 1.0, evaluate(params, 1.0)),
        ],
        CurveParams::Quadratic { h, k, .. } => vec![
            at(HandleKind::Vertex, h, k),
            at(HandleKind::Curvature, h + 1.0, evaluate(params, h + 1.0)),
        ],
        CurveParams::PowerLaw { h, k, .. } => vec![
            at(HandleKind::Vertex, h, k),
            at(HandleKind::Coefficient, h + 1.0, evaluate(params, h + 1.0)),
            at(
                HandleKind::Exponent,
                h + EXPONENT_HANDLE_OFFSET,
                evaluate(params, h + EXPONENT_HANDLE_OFFSET),
            ),
        ],
        CurveParams::Exponential { a, h, k, .. } => vec![
            at(HandleKind::Vertex, h, k + a),
            at(HandleKind::Coefficient, h, k + a),
            at(HandleKind::Base, h + 1.0, evaluate(params, h + 1.0)),
        ],
    }
}

/// Wendet die Update-Regel eines Handles auf die Ziel-Position an.
///
/// Gibt `true` zurück, wenn Parameter geschrieben wurden. Fehlgeschlagene
/// Domänen-Guards (log/pow über nicht-positiven Werten) sind ein stilles
/// No-op für diesen Drag-Frame, nie ein Fehler — NaN darf die Parameter
/// nicht erreichen. Ein Handle, der nicht zur Kurven-Art passt
/// (veralteter Drag), ist ebenfalls ein No-op.
pub fn apply_drag(params: &mut CurveParams, handle: HandleKind, target: DVec2) -> bool {
    match (handle, params) {
        (
            HandleKind::MeanAmplitude,
            CurveParams::Gaussian {
                mean, amplitude, ..
            },
        ) => {
            *mean = target.x;
            *amplitude = target.y.max(AMPLITUDE_FLOOR);
            true
        }
        (HandleKind::Sigma, CurveParams::Gaussian { mean, sigma, .. }) => {
            *sigma = (target.x - *mean).abs().max(SIGMA_FLOOR);
            true
        }
        (HandleKind::Intercept, CurveParams::Linear { intercept, .. }) => {
            *intercept = target.y;
            true
        }
        (HandleKind::Slope, CurveParams::Linear { slope, intercept }) => {
            // Handle bei x = 1: a = (y − b) / 1
            *slope = target.y - *intercept;
            true
        }
        (HandleKind::Vertex, CurveParams::Quadratic { h, k, .. }) => {
            *h = target.x;
            *k = target.y;
            true
        }
        (HandleKind::Curvature, CurveParams::Quadratic { a, h: _, k }) => {
            // Handle bei h + 1: a = (y − k) / 1²
            *a = target.y - *k;
            true
        }
        (HandleKind::Vertex, CurveParams::PowerLaw { h, .. }) => {
            // k bleibt unverändert (nur horizontale Verschiebung)
            *h = target.x;
            true
        }
        (HandleKind::Coefficient, CurveParams::PowerLaw { a, k, .. }) => {
            // Handle bei h + 1: 1^b = 1, also a = y − k
            *a = target.y - *k;
            true
        }
        (HandleKind::Exponent, CurveParams::PowerLaw { a, b, k, .. }) => {
            if *a == 0.0 {
                return false;
            }
            let ratio = (target.y - *k) / *a;
            if ratio <= 0.0 {
                return false;
            }
            // Offset 2 ↔ log2, siehe EXPONENT_HANDLE_OFFSET
            *b = ratio.log2();
            true
        }
        (HandleKind::Vertex, CurveParams::Exponential { a, h, k, .. }) => {
            *h = target.x;
            *k = target.y - *a;
            true
        }
        (HandleKind::Coefficient, CurveParams::Exponential { a, k, .. }) => {
            *a = target.y - *k;
            true
        }
        (HandleKind::Base, CurveParams::Exponential { a, base, k, .. }) => {
            if *a == 0.0 {
                return false;
            }
            let ratio = (target.y - *k) / *a;
            if ratio <= 0.0 {
                return false;
            }
            // Handle bei h + 1: base^1 = (y − k) / a
            *base = ratio;
            true
        }
        _ => false,
    }
}

/// Sucht den obersten Handle innerhalb des Pick-Radius.
///
/// `curves_top_down` in umgekehrter Z-Order (oberste zuerst); die erste
/// Kurve mit einem Treffer gewinnt, innerhalb der Kurve der nächstgelegene
/// Handle. Linearer Scan — die Kurvenmenge ist klein und gedeckelt.
pub fn hit_test<'a>(
    curves_top_down: impl Iterator<Item = &'a Curve>,
    plane_pos: DVec2,
    radius: f64,
) -> Option<HandleHit> {
    for curve in curves_top_down {
        let mut best: Option<(f64, HandleKind)> = None;
        for handle in handles_for(curve) {
            let distance = handle.position.distance(plane_pos);
            if distance <= radius && best.map_or(true, |(d, _)| distance < d) {
                best = Some((distance, handle.kind));
            }
        }
        if let Some((_, kind)) = best {
            return Some(HandleHit {
                curve_id: curve.id,
                kind,
            });
        }
    }
    None
}
