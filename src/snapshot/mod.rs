//! JSON-Snapshots des Kartengenerators.
//!
//! Der Generator selbst ist nicht Teil des Inspektors; er exportiert sein
//! Kartenmodell als JSON, das hier eingelesen wird.

mod parser;

pub use parser::{parse_map_snapshot, SnapshotError};
