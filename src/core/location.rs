//! Punktartige Entitäten: Städte und allgemeine Orte.
//!
//! Sie liegen in genau einer Region und werden über deren Nachbarschaft
//! hervorgehoben.

use super::MapEntity;
use serde::{Deserialize, Serialize};

/// Siedlung
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Stabile Entitäts-ID
    pub id: u64,
    /// Anzeigename
    pub name: String,
    /// Siedlungstyp (z.B. "capital", "port")
    #[serde(default)]
    pub type_name: String,
    /// ID der Region, in der die Siedlung liegt
    pub region: u64,
    /// Einwohnerzahl
    #[serde(default)]
    pub population: u32,
    /// Wohlstand
    #[serde(default)]
    pub wealth: f32,
}

/// Allgemeiner Ort (Point of Interest)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Stabile Entitäts-ID
    pub id: u64,
    /// Anzeigename
    pub name: String,
    /// Ortstyp (z.B. "cave", "lighthouse")
    #[serde(default)]
    pub type_name: String,
    /// ID der Region, in der der Ort liegt
    pub region: u64,
}

/// Entität mit genau einer zugeordneten Region.
pub trait Located {
    /// ID der eigenen Region
    fn region_id(&self) -> u64;
}

impl Located for City {
    fn region_id(&self) -> u64 {
        self.region
    }
}

impl Located for Location {
    fn region_id(&self) -> u64 {
        self.region
    }
}

impl MapEntity for City {
    fn entity_id(&self) -> u64 {
        self.id
    }
}

impl MapEntity for Location {
    fn entity_id(&self) -> u64 {
        self.id
    }
}
