//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::InspectorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
///
/// Eine geänderte Selektions-Schlüsselung verwirft alle bestehenden Selektionen.
pub fn apply_options(state: &mut AppState, options: InspectorOptions) -> anyhow::Result<()> {
    set_options(state, options);
    let path = InspectorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, InspectorOptions::default())
}

fn set_options(state: &mut AppState, mut options: InspectorOptions) {
    options.sanitize();
    if options.selection_keying != state.objects.selections.keying() {
        log::info!(
            "Selektions-Schlüsselung gewechselt: {:?} -> {:?}",
            state.objects.selections.keying(),
            options.selection_keying
        );
        state.objects.reset(options.selection_keying);
    }
    state.options = options;
}
