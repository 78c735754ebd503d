//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `ui` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod overlay;

pub use options::{InspectorOptions, SelectionKeying};
pub use overlay::{ColorTheme, OverlayList, OverlayShape};
