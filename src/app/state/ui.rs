/// UI-bezogener Anwendungszustand (Dialoge, Statusmeldung)
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog im nächsten Frame angezeigt werden soll
    pub show_file_dialog: bool,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Pfad des aktuell geladenen Snapshots
    pub current_file_path: Option<String>,
    /// Statusnachricht für die Status-Bar
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}
