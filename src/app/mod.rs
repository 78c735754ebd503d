//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod selection;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (geladene Karte, View, Selektionen).
pub mod state;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use selection::{CategorySelection, CategorySelections, KeyedSelection, SelectionMask, SelectionStore};
pub use state::{AppState, ObjectsState, UiState, ViewState};
