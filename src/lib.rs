//! Map Object Inspector Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod snapshot;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CategorySelection, CategorySelections,
    KeyedSelection, SelectionMask, SelectionStore, UiState, ViewState,
};
pub use core::{
    Camera2D, City, Cluster, EntityCategory, Located, Location, MapEntity, MapModel,
    MapModelError, MegaCluster, Region, RegionOwner, River, StateCluster,
};
pub use shared::{ColorTheme, InspectorOptions, OverlayList, OverlayShape, SelectionKeying};
pub use snapshot::{parse_map_snapshot, SnapshotError};
