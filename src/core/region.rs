//! Region: atomare Polygonfläche der generierten Karte.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Polygonale Fläche mit geordneter Umrandung und Nachbarschaft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Stabile Region-ID aus dem Generator
    pub id: u64,
    /// Umrandung in Generator-Reihenfolge (Windungsrichtung bleibt erhalten)
    #[serde(default)]
    pub points: Vec<Vec2>,
    /// IDs der angrenzenden Regionen
    #[serde(default)]
    pub neighbors: Vec<u64>,
    /// Handelsaufkommen der Region
    #[serde(default)]
    pub traffic: i32,
}

impl Region {
    /// Erstellt eine Region ohne Nachbarn und ohne Verkehr.
    pub fn new(id: u64, points: Vec<Vec2>) -> Self {
        Self {
            id,
            points,
            neighbors: Vec::new(),
            traffic: 0,
        }
    }

    /// Setzt die Nachbar-IDs (Builder-Stil für Tests und Generator-Importe).
    pub fn with_neighbors(mut self, neighbors: Vec<u64>) -> Self {
        self.neighbors = neighbors;
        self
    }

    /// Gibt `true` zurück, wenn die Umrandung keine Punkte enthält.
    pub fn has_empty_boundary(&self) -> bool {
        self.points.is_empty()
    }
}
