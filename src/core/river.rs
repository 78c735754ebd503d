//! Fluss mit veränderbarem Verlauf.

use super::{MapEntity, RegionOwner};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fluss: durchquerte Regionen plus geordneter Verlauf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct River {
    /// Stabile Entitäts-ID
    pub id: u64,
    /// Anzeigename
    pub name: String,
    /// IDs der durchquerten Regionen
    #[serde(default)]
    pub regions: Vec<u64>,
    /// Verlaufspunkte (Quelle → Mündung)
    #[serde(default)]
    pub points: Vec<Vec2>,
}

impl River {
    /// Erstellt einen Fluss ohne Regionen.
    pub fn new(id: u64, name: impl Into<String>, points: Vec<Vec2>) -> Self {
        Self {
            id,
            name: name.into(),
            regions: Vec::new(),
            points,
        }
    }

    /// Anzahl der Verlaufspunkte
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Entfernt den Verlaufspunkt an `index`; nachfolgende Punkte rücken auf.
    ///
    /// Ein Index außerhalb des Verlaufs wird abgewiesen, der Verlauf bleibt unverändert.
    pub fn remove_point(&mut self, index: usize) -> Option<Vec2> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }
}

impl MapEntity for River {
    fn entity_id(&self) -> u64 {
        self.id
    }
}

impl RegionOwner for River {
    fn region_ids(&self) -> &[u64] {
        &self.regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn river_0_1_2() -> River {
        River::new(
            7,
            "Test",
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(2.0, 2.0),
            ],
        )
    }

    #[test]
    fn test_remove_point_shifts_followers() {
        let mut river = river_0_1_2();

        let removed = river.remove_point(1);

        assert_eq!(removed, Some(Vec2::new(1.0, 1.0)));
        assert_eq!(
            river.points,
            vec![Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0)]
        );
    }

    #[test]
    fn test_remove_point_out_of_range_leaves_course_unchanged() {
        let mut river = river_0_1_2();

        assert_eq!(river.remove_point(3), None);
        assert_eq!(river.point_count(), 3);
    }

    #[test]
    fn test_remove_last_point_empties_course() {
        let mut river = River::new(1, "Bach", vec![Vec2::new(4.0, 2.0)]);

        assert!(river.remove_point(0).is_some());
        assert!(river.points.is_empty());
        assert_eq!(river.remove_point(0), None);
    }
}
