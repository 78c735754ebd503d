//! Das zentrale Kartenmodell mit allen generierten Entitäten.

use super::{City, Cluster, EntityCategory, Location, MegaCluster, Region, River, StateCluster};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fehler beim Aufbau des Kartenmodells
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapModelError {
    /// Zwei Regionen tragen dieselbe ID
    #[error("Region-ID {0} ist mehrfach vergeben")]
    DuplicateRegionId(u64),
}

/// Read-mostly Aggregat des Kartengenerators
///
/// Die Reihenfolge der Collections ist die Reihenfolge des Generators und
/// bestimmt die Position im Objekt-Browser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapModel {
    /// Alle Regionen (Zugriff per ID über den Region-Index)
    pub regions: Vec<Region>,
    /// Super-Cluster
    pub mega_clusters: Vec<MegaCluster>,
    /// Staaten-Gruppierungen
    pub state_clusters: Vec<StateCluster>,
    /// Cluster
    pub clusters: Vec<Cluster>,
    /// Flüsse
    pub rivers: Vec<River>,
    /// Siedlungen
    pub cities: Vec<City>,
    /// Allgemeine Orte
    pub locations: Vec<Location>,
    /// Region-ID → Position in `regions`
    #[serde(skip)]
    region_index: HashMap<u64, usize>,
}

impl MapModel {
    /// Erstellt ein leeres Modell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt eine Region hinzu und pflegt den Index.
    pub fn add_region(&mut self, region: Region) -> Result<(), MapModelError> {
        if self.region_index.contains_key(&region.id) {
            return Err(MapModelError::DuplicateRegionId(region.id));
        }
        self.region_index.insert(region.id, self.regions.len());
        self.regions.push(region);
        Ok(())
    }

    /// Baut den Region-Index nach Deserialisierung oder Direktzugriff neu auf.
    pub fn rebuild_region_index(&mut self) -> Result<(), MapModelError> {
        self.region_index.clear();
        for (position, region) in self.regions.iter().enumerate() {
            if self.region_index.insert(region.id, position).is_some() {
                return Err(MapModelError::DuplicateRegionId(region.id));
            }
        }
        Ok(())
    }

    /// Region per ID
    pub fn region(&self, id: u64) -> Option<&Region> {
        self.region_index
            .get(&id)
            .and_then(|&position| self.regions.get(position))
    }

    /// Löst eine ID-Liste in Regionen auf; unbekannte IDs werden übersprungen.
    ///
    /// Die Reihenfolge der Eingabe bleibt erhalten, Duplikate ebenfalls.
    pub fn regions_by_ids<'a>(&'a self, ids: &'a [u64]) -> impl Iterator<Item = &'a Region> + 'a {
        ids.iter().filter_map(move |&id| self.region(id))
    }

    /// Fluss per Entitäts-ID (mutable, einziger Schreibpfad während der Inspektion)
    pub fn river_mut(&mut self, river_id: u64) -> Option<&mut River> {
        self.rivers.iter_mut().find(|r| r.id == river_id)
    }

    /// Mega-Cluster per Entitäts-ID
    pub fn mega_cluster(&self, id: u64) -> Option<&MegaCluster> {
        self.mega_clusters.iter().find(|m| m.id == id)
    }

    /// Anzahl der Entitäten einer Kategorie
    pub fn entity_count(&self, category: EntityCategory) -> usize {
        match category {
            EntityCategory::MegaClusters => self.mega_clusters.len(),
            EntityCategory::StateClusters => self.state_clusters.len(),
            EntityCategory::Clusters => self.clusters.len(),
            EntityCategory::Rivers => self.rivers.len(),
            EntityCategory::Cities => self.cities.len(),
            EntityCategory::Locations => self.locations.len(),
        }
    }

    /// Anzahl der Regionen
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Zählt Region-Verweise, die im Modell nicht aufgelöst werden können.
    ///
    /// Geprüft werden Cluster-Regionen, Fluss-Regionen, Orts-Regionen und
    /// Region-Nachbarn.
    pub fn count_dangling_region_refs(&self) -> usize {
        let owned = self
            .mega_clusters
            .iter()
            .flat_map(|m| m.regions.iter())
            .chain(self.state_clusters.iter().flat_map(|s| s.regions.iter()))
            .chain(self.clusters.iter().flat_map(|c| c.regions.iter()))
            .chain(self.rivers.iter().flat_map(|r| r.regions.iter()))
            .chain(self.regions.iter().flat_map(|r| r.neighbors.iter()));
        let located = self
            .cities
            .iter()
            .map(|c| &c.region)
            .chain(self.locations.iter().map(|l| &l.region));

        owned
            .chain(located)
            .filter(|id| self.region(**id).is_none())
            .count()
    }

    /// Bounding Box aller Regionspunkte (min, max) oder `None` bei leerem Modell.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut points = self.regions.iter().flat_map(|r| r.points.iter());
        let first = *points.next()?;
        Some(points.fold((first, first), |(min, max), &p| (min.min(p), max.max(p))))
    }
}

#[cfg(test)]
mod tests;
