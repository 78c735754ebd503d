use crate::core::{MapModel, MapModelError};

/// Fehler beim Einlesen eines Karten-Snapshots
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Ungültiges JSON oder unpassende Struktur
    #[error("Snapshot ist kein gültiges Kartenmodell: {0}")]
    Json(#[from] serde_json::Error),
    /// Strukturell gültig, aber inkonsistent
    #[error(transparent)]
    Model(#[from] MapModelError),
}

/// Parst einen JSON-Snapshot und baut den Region-Index auf.
///
/// Nicht auflösbare Region-Verweise sind kein Fehler; sie werden gezählt
/// und als Warnung protokolliert.
pub fn parse_map_snapshot(json: &str) -> Result<MapModel, SnapshotError> {
    let mut map: MapModel = serde_json::from_str(json)?;
    map.rebuild_region_index()?;

    let dangling = map.count_dangling_region_refs();
    if dangling > 0 {
        log::warn!(
            "Snapshot enthält {} nicht auflösbare Region-Verweise (werden ignoriert)",
            dangling
        );
    }

    Ok(map)
}
