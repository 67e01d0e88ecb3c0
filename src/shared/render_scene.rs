//! Render-Szene als expliziter Übergabevertrag zwischen Engine und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der externe Renderer bzw. die
//! Export-Pipeline sie konsumiert. Die Export-Pipeline muss dieselbe
//! Abtastung reproduzieren können — deshalb trägt jede Kurve ihre
//! aufgelösten Parameter zusätzlich zur fertigen Polyline.

use crate::core::{CurveKind, CurveParams, GridLines, HandleKind, PlaneBounds, Viewport};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Eine sichtbare Kurve, aufbereitet für einen Render-Frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePlot {
    /// Kurven-ID
    pub id: u64,
    /// Kurven-Art
    pub kind: CurveKind,
    /// Aufgelöste Parameter (für Export-Resampling und Legende)
    pub params: CurveParams,
    /// Anzeigename
    pub name: String,
    /// RGBA-Farbe
    pub color: [f32; 4],
    /// Gesperrte Kurven rendern ohne Interaktions-Affordanzen
    pub locked: bool,
    /// Abgetastete Punkte über den sichtbaren x-Bereich
    pub polyline: Vec<DVec2>,
}

/// Ein Handle-Marker für die aktive Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleMarker {
    /// Kurve, zu der der Handle gehört
    pub curve_id: u64,
    /// Welcher Kontrollpunkt
    pub kind: HandleKind,
    /// Position in Ebenen-Koordinaten
    pub position: DVec2,
    /// `true` während dieser Handle gezogen wird
    pub active: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderScene {
    /// Sichtbare Kurven in Z-Order (unterste zuerst)
    pub curves: Vec<CurvePlot>,
    /// Sichtbarer Ebenen-Ausschnitt
    pub bounds: PlaneBounds,
    /// Gitterlinien-Positionen für diesen Frame
    pub grid: GridLines,
    /// Viewport-Zustand (Pan/Zoom) für diesen Frame
    pub viewport: Viewport,
    /// Oberflächen-Größe in Pixeln [Breite, Höhe]
    pub surface_size: [f64; 2],
    /// Handle-Satz der aktiven Kurve (gehovert oder gezogen), sonst leer
    pub handles: Vec<HandleMarker>,
    /// Darstellungsgröße eines Handles in Ebenen-Einheiten
    pub handle_size_plane: f64,
    /// Deckkraft der Flächenfüllung unter einer Kurve
    pub curve_fill_opacity: f32,
}

impl RenderScene {
    /// Gibt zurück, ob sichtbare Kurven vorhanden sind.
    pub fn has_curves(&self) -> bool {
        !self.curves.is_empty()
    }
}

/// Stil- und Auswahl-Flags für den Bild-Export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Titel einzeichnen
    pub show_title: bool,
    /// Titel-Text
    pub title: String,
    /// Legende einzeichnen
    pub show_legend: bool,
    /// Skalen-Beschriftung einzeichnen
    pub show_scales: bool,
    /// x-Achsen-Werte einzeichnen
    pub show_x_values: bool,
    /// y-Achsen-Werte einzeichnen
    pub show_y_values: bool,
    /// Gitter einzeichnen
    pub show_grid: bool,
    /// Achsen einzeichnen
    pub show_axes: bool,
    /// IDs der zu exportierenden Kurven
    pub selected_curve_ids: Vec<u64>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            show_title: true,
            title: "Distribution Model - 01".to_string(),
            show_legend: true,
            show_scales: true,
            show_x_values: true,
            show_y_values: true,
            show_grid: true,
            show_axes: true,
            selected_curve_ids: Vec::new(),
        }
    }
}
