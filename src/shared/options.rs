//! Zentrale Konfiguration für den Curve-Composer.
//!
//! `EngineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten. Die Komposition
//! selbst (Kurven, Viewport) wird nie persistiert — nur diese Optionen.

use serde::{Deserialize, Serialize};

// ── Zoom ────────────────────────────────────────────────────────────

/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f64 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Handles ─────────────────────────────────────────────────────────

/// Pick-Radius für Handle-Hit-Tests in Screen-Pixeln.
pub const HANDLE_PICK_RADIUS_PX: f64 = 12.0;
/// Darstellungsgröße eines Handles in Ebenen-Einheiten.
pub const HANDLE_SIZE_PLANE: f64 = 0.1;

// ── Kurven-Rendering ───────────────────────────────────────────────

/// Deckkraft der Flächenfüllung unter einer Kurve.
pub const CURVE_FILL_OPACITY: f32 = 0.12;
/// Abtast-Auflösung beim Rendern (Punkte = Auflösung + 1).
pub const SAMPLE_RESOLUTION: usize = crate::core::DEFAULT_RESOLUTION;

/// Alle zur Laufzeit änderbaren Engine-Optionen.
/// Wird als `curve_composer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    // ── Handles ─────────────────────────────────────────────────
    /// Pick-Radius für Handle-Hit-Tests in Screen-Pixeln
    pub handle_pick_radius_px: f64,
    /// Darstellungsgröße eines Handles in Ebenen-Einheiten
    pub handle_size_plane: f64,

    // ── Rendering ───────────────────────────────────────────────
    /// Deckkraft der Flächenfüllung unter einer Kurve
    #[serde(default = "default_curve_fill_opacity")]
    pub curve_fill_opacity: f32,
    /// Abtast-Auflösung beim Rendern
    #[serde(default = "default_sample_resolution")]
    pub sample_resolution: usize,

    // ── Zoom ────────────────────────────────────────────────────
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f64,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            handle_pick_radius_px: HANDLE_PICK_RADIUS_PX,
            handle_size_plane: HANDLE_SIZE_PLANE,
            curve_fill_opacity: CURVE_FILL_OPACITY,
            sample_resolution: SAMPLE_RESOLUTION,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

/// Serde-Default für `curve_fill_opacity` (Abwärtskompatibilität).
fn default_curve_fill_opacity() -> f32 {
    CURVE_FILL_OPACITY
}

/// Serde-Default für `sample_resolution` (Abwärtskompatibilität).
fn default_sample_resolution() -> usize {
    SAMPLE_RESOLUTION
}

impl EngineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve_composer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_composer.toml")
    }
}
