//! Overlay-Shapes als Übergabevertrag zwischen Objekt-Browser und Renderer.
//!
//! Lebt im shared-Modul, da `app`/`ui` die Liste befüllen und `render` sie
//! konsumiert.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fester Farbsatz einer Hervorhebungs-Kategorie
///
/// Füllung und Umriss verwenden dieselbe Farbe mit derselben Deckkraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorTheme {
    /// RGB-Grundfarbe (0.0..=1.0)
    pub color: [f32; 3],
    /// Deckkraft (0.0 = transparent, 1.0 = opak)
    pub opacity: f32,
}

impl ColorTheme {
    /// Erstellt einen Farbsatz aus 8-Bit-Kanälen und 8-Bit-Alpha.
    pub fn from_rgb8_alpha8(r: u8, g: u8, b: u8, alpha: u8) -> Self {
        Self {
            color: [
                r as f32 / 255.0,
                g as f32 / 255.0,
                b as f32 / 255.0,
            ],
            opacity: alpha as f32 / 255.0,
        }
    }

    /// RGBA-Farbe inklusive Deckkraft
    pub fn rgba(&self) -> [f32; 4] {
        [self.color[0], self.color[1], self.color[2], self.opacity]
    }
}

/// Renderer-unabhängiges, transluzentes Polygon aus einer Regionsgrenze
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayShape {
    /// Eckpunkte 1:1 aus der Regionsgrenze (Welt-Koordinaten)
    pub points: Vec<Vec2>,
    /// Füllfarbe (RGBA)
    pub fill_color: [f32; 4],
    /// Umrissfarbe (RGBA)
    pub outline_color: [f32; 4],
    /// Umrissbreite in Welt-Einheiten (skaliert beim Zeichnen mit dem Zoom)
    pub outline_width: f32,
}

impl OverlayShape {
    /// Anzahl der Eckpunkte
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }
}

/// Pro Frame neu aufgebaute Liste aller Overlay-Shapes
///
/// Hat keine Identität über Frames hinweg: jeder Frame leert die Liste und
/// befüllt sie komplett neu.
#[derive(Debug, Clone, Default)]
pub struct OverlayList {
    shapes: Vec<OverlayShape>,
}

impl OverlayList {
    /// Erstellt eine leere Liste.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Leert die Liste zu Beginn eines Frames (Kapazität bleibt erhalten).
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Hängt ein Shape an.
    pub fn push(&mut self, shape: OverlayShape) {
        self.shapes.push(shape);
    }

    /// Anzahl der Shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Gibt `true` zurück, wenn keine Shapes vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Read-only Sicht für den Renderer
    pub fn shapes(&self) -> &[OverlayShape] {
        &self.shapes
    }

    /// Iterator über alle Shapes in Einfügereihenfolge
    pub fn iter(&self) -> std::slice::Iter<'_, OverlayShape> {
        self.shapes.iter()
    }
}

impl<'a> IntoIterator for &'a OverlayList {
    type Item = &'a OverlayShape;
    type IntoIter = std::slice::Iter<'a, OverlayShape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
