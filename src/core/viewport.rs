//! Viewport-Transformation zwischen Screen- und Ebenen-Koordinaten.
//!
//! Pan und Zoom bestimmen den sichtbaren Ebenen-Ausschnitt; die
//! Render-Oberfläche liefert nur ihre Pixel-Maße (Aspekt), besitzt aber
//! keinen eigenen Zustand in diesem Modul.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Sichtbare Ebenen-Breite bei Zoom 1.0 (Ebenen-Einheiten).
pub const BASE_MATH_WIDTH: f64 = 14.0;
/// Minimaler Zoom-Faktor.
pub const ZOOM_MIN: f64 = 0.1;
/// Maximaler Zoom-Faktor.
pub const ZOOM_MAX: f64 = 50.0;
/// Vertikaler Bias: der Ursprung liegt unterhalb der View-Mitte,
/// `y_min = −0.15·math_height + pan.y`.
pub const VERTICAL_BIAS: f64 = 0.15;

/// Sichtbarer Ebenen-Ausschnitt (abgeleitet aus Viewport + Oberfläche).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneBounds {
    /// Linker Rand
    pub x_min: f64,
    /// Rechter Rand
    pub x_max: f64,
    /// Unterer Rand
    pub y_min: f64,
    /// Oberer Rand
    pub y_max: f64,
}

impl PlaneBounds {
    /// Breite des Ausschnitts.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Höhe des Ausschnitts.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Gitterlinien-Positionen für einen Frame (x- und y-Ticks, aufsteigend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLines {
    /// Vertikale Linien (x-Positionen)
    pub x_ticks: Vec<f64>,
    /// Horizontale Linien (y-Positionen)
    pub y_ticks: Vec<f64>,
}

/// Viewport mit Pan-Offset und Zoom-Faktor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Ebenen-Verschiebung des View-Zentrums
    pub pan_offset: DVec2,
    /// Zoom-Faktor, geclampt auf `[ZOOM_MIN, ZOOM_MAX]`
    pub zoom: f64,
}

impl Viewport {
    /// Erstellt den Standard-Viewport (pan 0/0, zoom 1).
    pub fn new() -> Self {
        Self {
            pan_offset: DVec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Setzt den Viewport auf den Standardzustand zurück.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Sichtbare Ebenen-Breite beim aktuellen Zoom.
    pub fn math_width(&self) -> f64 {
        BASE_MATH_WIDTH / self.zoom
    }

    /// Sichtbare Ebenen-Höhe, abgeleitet aus dem Oberflächen-Aspekt.
    pub fn math_height(&self, surface_size: [f64; 2]) -> f64 {
        let aspect = surface_size[0].max(1.0) / surface_size[1].max(1.0);
        self.math_width() / aspect
    }

    /// Sichtbarer Ebenen-Ausschnitt für die gegebene Oberfläche.
    pub fn bounds(&self, surface_size: [f64; 2]) -> PlaneBounds {
        let mw = self.math_width();
        let mh = self.math_height(surface_size);
        let y_min = -VERTICAL_BIAS * mh + self.pan_offset.y;
        PlaneBounds {
            x_min: -mw / 2.0 + self.pan_offset.x,
            x_max: mw / 2.0 + self.pan_offset.x,
            y_min,
            y_max: y_min + mh,
        }
    }

    /// Konvertiert Screen-Pixel zu Ebenen-Koordinaten (y gespiegelt:
    /// Screen-unten ist Ebene-oben).
    pub fn screen_to_plane(&self, screen: DVec2, surface_size: [f64; 2]) -> DVec2 {
        let w = surface_size[0].max(1.0);
        let h = surface_size[1].max(1.0);
        let bounds = self.bounds(surface_size);
        DVec2::new(
            (screen.x / w) * bounds.width() + bounds.x_min,
            (1.0 - screen.y / h) * bounds.height() + bounds.y_min,
        )
    }

    /// Konvertiert Ebenen-Koordinaten zu Screen-Pixeln (Inverse von
    /// [`Self::screen_to_plane`]; Export und Hit-Tests rechnen damit).
    pub fn plane_to_screen(&self, plane: DVec2, surface_size: [f64; 2]) -> DVec2 {
        let w = surface_size[0].max(1.0);
        let h = surface_size[1].max(1.0);
        let bounds = self.bounds(surface_size);
        DVec2::new(
            (plane.x - bounds.x_min) / bounds.width() * w,
            (1.0 - (plane.y - bounds.y_min) / bounds.height()) * h,
        )
    }

    /// Rechnet ein Screen-Pixel-Delta in ein Ebenen-Delta um.
    pub fn screen_delta_to_plane_delta(&self, delta: DVec2, surface_size: [f64; 2]) -> DVec2 {
        let w = surface_size[0].max(1.0);
        let h = surface_size[1].max(1.0);
        DVec2::new(
            delta.x / w * self.math_width(),
            delta.y / h * self.math_height(surface_size),
        )
    }

    /// Verschiebt den View um ein Screen-Pixel-Delta.
    ///
    /// Invertierte Drag-Konvention: nach rechts ziehen bewegt den View nach
    /// links (`pan.x −= dx`), die y-Spiegelung addiert (`pan.y += dy`).
    pub fn pan_by_screen_delta(&mut self, delta: DVec2, surface_size: [f64; 2]) {
        let plane_delta = self.screen_delta_to_plane_delta(delta, surface_size);
        self.pan_offset.x -= plane_delta.x;
        self.pan_offset.y += plane_delta.y;
    }

    /// Multipliziert den Zoom (geclampt).
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Zoomt so, dass der Ebenen-Punkt unter `screen_point` an derselben
    /// Screen-Position bleibt.
    ///
    /// Erst den Anker vor der Zoom-Änderung bestimmen, dann den Zoom
    /// anwenden, dann den Pan-Offset neu auflösen — ohne diesen Schritt
    /// driftet der View beim Zoomen sichtbar.
    pub fn zoom_at(&mut self, screen_point: DVec2, factor: f64, surface_size: [f64; 2]) {
        let anchor = self.screen_to_plane(screen_point, surface_size);
        self.zoom_by(factor);

        let w = surface_size[0].max(1.0);
        let h = surface_size[1].max(1.0);
        let mw = self.math_width();
        let mh = self.math_height(surface_size);
        self.pan_offset.x = anchor.x - (screen_point.x / w) * mw + mw / 2.0;
        self.pan_offset.y = anchor.y - (1.0 - screen_point.y / h) * mh + VERTICAL_BIAS * mh;
    }

    /// Adaptive Gitter-Schrittweiten `(x, y)` für den aktuellen Zoom.
    ///
    /// Feste Schwellen, damit Export und On-Screen-Darstellung dieselbe
    /// Dichte erzeugen: Zoom > 5 verfeinert, Zoom < 0.5 vergröbert.
    pub fn grid_step(&self) -> (f64, f64) {
        if self.zoom > 5.0 {
            (0.2, 0.05)
        } else if self.zoom < 0.5 {
            (5.0, 1.0)
        } else {
            (1.0, 0.2)
        }
    }

    /// Gitterlinien-Positionen, die den sichtbaren Ausschnitt abdecken.
    pub fn grid_lines(&self, surface_size: [f64; 2]) -> GridLines {
        let bounds = self.bounds(surface_size);
        let (step_x, step_y) = self.grid_step();
        GridLines {
            x_ticks: ticks_covering(bounds.x_min, bounds.x_max, step_x),
            y_ticks: ticks_covering(bounds.y_min, bounds.y_max, step_y),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

/// Tick-Positionen von `floor(min/step)·step` bis `ceil(max/step)·step`.
/// Über Integer-Indizes berechnet, damit sich keine Float-Summenfehler
/// aufaddieren.
fn ticks_covering(min: f64, max: f64, step: f64) -> Vec<f64> {
    let first = (min / step).floor() as i64;
    let last = (max / step).ceil() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}
