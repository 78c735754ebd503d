//! UI-Komponenten: Menü, Objekt-Panel, Status-Bar, Input-Handling, Dialoge.

pub mod browser;
pub mod dialogs;
pub mod input;
/// UI-Layer mit egui
///
/// Der Objekt-Browser ist über [`widgets::WidgetHost`] vom konkreten
/// UI-Toolkit entkoppelt und damit ohne Fenster testbar.
pub mod menu;
pub mod objects_panel;
pub mod options_dialog;
pub mod status;
pub mod widgets;

pub use browser::{render_tree, BrowseOutcome, ObjectBrowse};
pub use dialogs::handle_file_dialogs;
pub use input::collect_viewport_events;
pub use menu::render_menu;
pub use objects_panel::{draw_objects, render_objects_panel, ObjectsView};
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use widgets::{HeadlessHost, NodeResponse, WidgetHost};
