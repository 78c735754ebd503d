//! Zentrale Konfiguration für den Map-Inspektor.
//!
//! `InspectorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::ColorTheme;
use serde::{Deserialize, Serialize};

// ── Hervorhebung ────────────────────────────────────────────────────

/// Farbsatz für Cluster-artige Entitäten (warmes Pink, ≈59 % Deckkraft).
pub const CLUSTER_HIGHLIGHT: ColorTheme = ColorTheme {
    color: [1.0, 0.274_509_8, 0.392_156_87],
    opacity: 0.588_235_3,
};
/// Farbsatz für punktartige Entitäten (warmes Orange, ≈39 % Deckkraft).
pub const LOCATION_HIGHLIGHT: ColorTheme = ColorTheme {
    color: [1.0, 0.274_509_8, 0.0],
    opacity: 0.392_156_87,
};
/// Umrissbreite der Overlay-Shapes.
pub const OVERLAY_OUTLINE_WIDTH: f32 = 1.0;

// ── Objekt-Browser ──────────────────────────────────────────────────

/// Einrückung der Baumknoten als Vielfaches der Schriftgröße.
pub const TREE_INDENT_FACTOR: f32 = 3.0;

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.05;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 200.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Basiskarte ──────────────────────────────────────────────────────

/// Farbe der dezenten Regionsumrisse unter dem Overlay (RGBA: Grau).
pub const REGION_OUTLINE_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 0.35];

/// Schlüssel, über den eine Kategorie-Selektion ihre Einträge zuordnet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionKeying {
    /// Position in der Collection (Selektionsmaske)
    #[default]
    Position,
    /// Stabile Entitäts-ID (übersteht Umsortierung)
    Identity,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Inspektor-Optionen.
/// Wird als `map_inspector.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectorOptions {
    // ── Hervorhebung ────────────────────────────────────────────
    /// Farbsatz für Mega-Cluster, Staaten-Gruppierungen, Cluster und Flüsse
    pub cluster_highlight: ColorTheme,
    /// Farbsatz für Städte und Orte
    pub location_highlight: ColorTheme,
    /// Umrissbreite der Overlay-Shapes
    #[serde(default = "default_outline_width")]
    pub overlay_outline_width: f32,

    // ── Objekt-Browser ──────────────────────────────────────────
    /// Einrückung der Baumknoten (× Schriftgröße)
    #[serde(default = "default_tree_indent_factor")]
    pub tree_indent_factor: f32,
    /// Zuordnung der Selektion (Position oder Entitäts-ID)
    #[serde(default)]
    pub selection_keying: SelectionKeying,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,

    // ── Basiskarte ──────────────────────────────────────────────
    /// Regionsumrisse unter dem Overlay zeichnen
    #[serde(default = "default_true")]
    pub show_region_outlines: bool,
    /// Farbe der Regionsumrisse
    #[serde(default = "default_region_outline_color")]
    pub region_outline_color: [f32; 4],
}

impl Default for InspectorOptions {
    fn default() -> Self {
        Self {
            cluster_highlight: CLUSTER_HIGHLIGHT,
            location_highlight: LOCATION_HIGHLIGHT,
            overlay_outline_width: OVERLAY_OUTLINE_WIDTH,

            tree_indent_factor: TREE_INDENT_FACTOR,
            selection_keying: SelectionKeying::default(),

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            show_region_outlines: true,
            region_outline_color: REGION_OUTLINE_COLOR,
        }
    }
}

/// Serde-Default für `overlay_outline_width` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_outline_width() -> f32 {
    OVERLAY_OUTLINE_WIDTH
}

/// Serde-Default für `tree_indent_factor`.
fn default_tree_indent_factor() -> f32 {
    TREE_INDENT_FACTOR
}

fn default_true() -> bool {
    true
}

fn default_region_outline_color() -> [f32; 4] {
    REGION_OUTLINE_COLOR
}

impl InspectorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text und korrigiert ungültige Zahlenwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let mut opts: Self = toml::from_str(content)?;
        opts.sanitize();
        Ok(opts)
    }

    /// Korrigiert Werte, mit denen Kamera oder Overlay nicht arbeiten können.
    ///
    /// Vertauschte Zoom-Grenzen werden getauscht; nicht endliche oder nicht
    /// positive Werte fallen auf die Standardwerte zurück.
    pub fn sanitize(&mut self) {
        let limits_valid = self.camera_zoom_min.is_finite()
            && self.camera_zoom_max.is_finite()
            && self.camera_zoom_min > 0.0
            && self.camera_zoom_max > 0.0;
        if !limits_valid {
            log::warn!(
                "Ungültige Zoom-Grenzen [{}, {}], verwende Standardwerte",
                self.camera_zoom_min,
                self.camera_zoom_max
            );
            self.camera_zoom_min = CAMERA_ZOOM_MIN;
            self.camera_zoom_max = CAMERA_ZOOM_MAX;
        } else if self.camera_zoom_min > self.camera_zoom_max {
            log::warn!(
                "Zoom-Grenzen vertauscht ({} > {}), werden getauscht",
                self.camera_zoom_min,
                self.camera_zoom_max
            );
            std::mem::swap(&mut self.camera_zoom_min, &mut self.camera_zoom_max);
        }

        if !(self.camera_zoom_step.is_finite() && self.camera_zoom_step > 1.0) {
            log::warn!("Ungültiger Zoom-Schritt {}", self.camera_zoom_step);
            self.camera_zoom_step = CAMERA_ZOOM_STEP;
        }
        if !(self.camera_scroll_zoom_step.is_finite() && self.camera_scroll_zoom_step > 1.0) {
            log::warn!("Ungültiger Scroll-Zoom-Schritt {}", self.camera_scroll_zoom_step);
            self.camera_scroll_zoom_step = CAMERA_SCROLL_ZOOM_STEP;
        }
        if !(self.overlay_outline_width.is_finite() && self.overlay_outline_width >= 0.0) {
            log::warn!("Ungültige Umrissbreite {}", self.overlay_outline_width);
            self.overlay_outline_width = OVERLAY_OUTLINE_WIDTH;
        }
        if !(self.tree_indent_factor.is_finite() && self.tree_indent_factor >= 0.0) {
            log::warn!("Ungültiger Einrückungsfaktor {}", self.tree_indent_factor);
            self.tree_indent_factor = TREE_INDENT_FACTOR;
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
            .unwrap_or_else(|_| std::path::PathBuf::from("mapgen-inspector"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("map_inspector.toml")
    }
}
