//! Application State: zentrale Datenhaltung.

mod app_state;
mod objects;
mod ui;
mod view;

pub use app_state::AppState;
pub use objects::ObjectsState;
pub use ui::UiState;
pub use view::ViewState;
