//! Core-Domänentypen: Kartenmodell, Regionen, Entitäten, Kamera.

pub mod camera;
mod category;
pub mod cluster;
pub mod location;
/// Kartenmodell des Generators
///
/// Dieses Modul definiert das Aggregat aller generierten Entitäten:
/// - MapModel: Container für Regionen und Entitäts-Collections
/// - Region: Polygonfläche mit Nachbarschaft
/// - Cluster/River/City/Location: browsbare Entitäten
pub mod map_model;
pub mod region;
pub mod river;

pub use camera::Camera2D;
pub use category::EntityCategory;
pub use cluster::{Cluster, MegaCluster, StateCluster};
pub use location::{City, Located, Location};
pub use map_model::{MapModel, MapModelError};
pub use region::Region;
pub use river::River;

/// Entität mit stabiler, vom Generator vergebener ID.
pub trait MapEntity {
    /// Stabile ID (eindeutig innerhalb der Kategorie, wird nie wiederverwendet)
    fn entity_id(&self) -> u64;
}

/// Entität, die eine eigene Menge von Regionen besitzt.
pub trait RegionOwner {
    /// IDs der eigenen Regionen in Generator-Reihenfolge
    fn region_ids(&self) -> &[u64];
}
