//! Cluster-artige Entitäten: Mega-Cluster, Staaten-Gruppierungen und Cluster.
//!
//! Alle drei besitzen eine Menge von Regionen und werden über ihre eigene
//! Fläche hervorgehoben.

use super::{MapEntity, RegionOwner};
use serde::{Deserialize, Serialize};

/// Super-Cluster (zusammenhängende Land- oder Wassermasse)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MegaCluster {
    /// Stabile Entitäts-ID
    pub id: u64,
    /// Anzeigename
    pub name: String,
    /// IDs der zugehörigen Regionen
    #[serde(default)]
    pub regions: Vec<u64>,
    /// Namen der enthaltenen Staaten
    #[serde(default)]
    pub states: Vec<String>,
    /// Landmasse (true) oder Wasser (false)
    #[serde(default)]
    pub is_land: bool,
}

/// Staaten-Gruppierung
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateCluster {
    /// Stabile Entitäts-ID
    pub id: u64,
    /// IDs der zugehörigen Regionen
    #[serde(default)]
    pub regions: Vec<u64>,
    /// Namen der gruppierten Staaten (erster Eintrag = Anzeigename)
    #[serde(default)]
    pub states: Vec<String>,
}

impl StateCluster {
    /// Name des ersten Staates oder ein Platzhalter für leere Gruppierungen.
    pub fn display_name(&self) -> &str {
        self.states.first().map_or("<unnamed>", String::as_str)
    }
}

/// Cluster mit Biom-Zuordnung
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Stabile Entitäts-ID
    pub id: u64,
    /// Anzeigename
    pub name: String,
    /// Name des Bioms
    #[serde(default)]
    pub biome: String,
    /// IDs der zugehörigen Regionen
    #[serde(default)]
    pub regions: Vec<u64>,
    /// Namen der Staaten mit Anteil am Cluster
    #[serde(default)]
    pub states: Vec<String>,
    /// IDs benachbarter Cluster
    #[serde(default)]
    pub neighbors: Vec<u64>,
    /// Landfläche (true) oder Wasser (false)
    #[serde(default)]
    pub is_land: bool,
    /// Von einem Fluss durchquert
    #[serde(default)]
    pub has_river: bool,
    /// Rückverweis auf den übergeordneten Mega-Cluster
    #[serde(default)]
    pub mega_cluster: Option<u64>,
}

impl MapEntity for MegaCluster {
    fn entity_id(&self) -> u64 {
        self.id
    }
}

impl MapEntity for StateCluster {
    fn entity_id(&self) -> u64 {
        self.id
    }
}

impl MapEntity for Cluster {
    fn entity_id(&self) -> u64 {
        self.id
    }
}

impl RegionOwner for MegaCluster {
    fn region_ids(&self) -> &[u64] {
        &self.regions
    }
}

impl RegionOwner for StateCluster {
    fn region_ids(&self) -> &[u64] {
        &self.regions
    }
}

impl RegionOwner for Cluster {
    fn region_ids(&self) -> &[u64] {
        &self.regions
    }
}
