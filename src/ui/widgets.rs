//! Widget-Vertrag des Objekt-Browsers.
//!
//! Der Browser kennt nur [`WidgetHost`]: aufklappbare Baumknoten, Klick-Erkennung,
//! Text, Buttons und ein mehrspaltiges Raster. Produktiv ist `egui::Ui` der Host,
//! in Tests [`HeadlessHost`] mit geskripteten Klicks und Aufklapp-Zuständen.

use std::collections::HashSet;

/// Antwort eines Baumknotens im aktuellen Frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeResponse {
    /// Knoten-Label wurde in diesem Frame angeklickt
    pub clicked: bool,
    /// Knoten ist aufgeklappt (Body wurde gerendert)
    pub open: bool,
}

/// Minimaler Widget-Vertrag für Baum-Browser.
pub trait WidgetHost {
    /// Rendert einen aufklappbaren Wurzelknoten.
    ///
    /// `body` läuft nur, wenn die Wurzel aufgeklappt ist. Kinder werden um
    /// `indent_factor` Schrifthöhen eingerückt.
    fn tree_root(
        &mut self,
        id_salt: &str,
        label: &str,
        indent_factor: f32,
        body: impl FnOnce(&mut Self),
    ) -> bool;

    /// Rendert einen Kindknoten mit Selektionsmarkierung.
    ///
    /// Aufklappen erfolgt über den Pfeil, ein Klick auf das Label wird als
    /// `clicked` gemeldet. `body` läuft nur bei aufgeklapptem Knoten.
    fn tree_node(
        &mut self,
        index: usize,
        label: &str,
        selected: bool,
        body: impl FnOnce(&mut Self),
    ) -> NodeResponse;

    /// Einzeiliger Text
    fn text(&mut self, text: &str);

    /// Button; gibt `true` zurück, wenn er in diesem Frame betätigt wurde.
    fn button(&mut self, label: &str) -> bool;

    /// Mehrspaltiges Raster; Zeilen werden mit [`WidgetHost::next_row`] abgeschlossen.
    fn grid(&mut self, id_salt: &str, columns: usize, body: impl FnOnce(&mut Self));

    /// Schließt die aktuelle Rasterzeile ab.
    fn next_row(&mut self);
}

// ── egui ────────────────────────────────────────────────────────────

impl WidgetHost for egui::Ui {
    fn tree_root(
        &mut self,
        id_salt: &str,
        label: &str,
        indent_factor: f32,
        body: impl FnOnce(&mut Self),
    ) -> bool {
        egui::CollapsingHeader::new(label)
            .id_salt(id_salt)
            .default_open(false)
            .show(self, |ui| {
                let indent = ui.text_style_height(&egui::TextStyle::Body) * indent_factor;
                ui.spacing_mut().indent = indent;
                body(ui);
            })
            .body_returned
            .is_some()
    }

    fn tree_node(
        &mut self,
        index: usize,
        label: &str,
        selected: bool,
        body: impl FnOnce(&mut Self),
    ) -> NodeResponse {
        let id = self.make_persistent_id(("object_node", index));
        let state =
            egui::collapsing_header::CollapsingState::load_with_default_open(self.ctx(), id, false);
        let (_toggle, header, body_response) = state
            .show_header(self, |ui| ui.selectable_label(selected, label))
            .body(|ui| body(ui));

        NodeResponse {
            clicked: header.inner.clicked(),
            open: body_response.is_some(),
        }
    }

    fn text(&mut self, text: &str) {
        self.label(text);
    }

    fn button(&mut self, label: &str) -> bool {
        self.small_button(label).clicked()
    }

    fn grid(&mut self, id_salt: &str, columns: usize, body: impl FnOnce(&mut Self)) {
        egui::Grid::new(id_salt)
            .num_columns(columns)
            .striped(true)
            .show(self, |ui| body(ui));
    }

    fn next_row(&mut self) {
        self.end_row();
    }
}

// ── Headless ────────────────────────────────────────────────────────

/// Widget-Host ohne Fenster für Tests und Benchmarks.
///
/// Wurzeln sind standardmäßig aufgeklappt, Knoten zugeklappt. Klicks und
/// Button-Betätigungen werden einmalig verbraucht, Aufklapp-Zustände bleiben
/// über Frames erhalten. Jede gerenderte Zeile landet im Transcript.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    collapsed_roots: HashSet<String>,
    open_nodes: HashSet<(String, usize)>,
    pending_clicks: Vec<(String, usize)>,
    pending_presses: Vec<(String, usize, usize)>,
    current_root: Option<String>,
    current_node: Option<usize>,
    button_ordinal: usize,
    transcript: Vec<String>,
}

impl HeadlessHost {
    /// Erstellt einen Host ohne Skript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Klappt eine Wurzel zu (`true`) oder auf (`false`).
    pub fn set_root_collapsed(&mut self, root: &str, collapsed: bool) {
        if collapsed {
            self.collapsed_roots.insert(root.to_string());
        } else {
            self.collapsed_roots.remove(root);
        }
    }

    /// Setzt den Aufklapp-Zustand eines Knotens.
    pub fn set_node_open(&mut self, root: &str, index: usize, open: bool) {
        let key = (root.to_string(), index);
        if open {
            self.open_nodes.insert(key);
        } else {
            self.open_nodes.remove(&key);
        }
    }

    /// Plant einen einmaligen Klick auf das Label eines Knotens.
    pub fn click_node(&mut self, root: &str, index: usize) {
        self.pending_clicks.push((root.to_string(), index));
    }

    /// Plant eine einmalige Betätigung des `ordinal`-ten Buttons im Body eines Knotens.
    pub fn press_button(&mut self, root: &str, index: usize, ordinal: usize) {
        self.pending_presses.push((root.to_string(), index, ordinal));
    }

    /// Alle seit dem letzten Leeren gerenderten Zeilen
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Leert das Transcript (z.B. zwischen zwei Frames).
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    /// Anzahl noch nicht verbrauchter Klicks und Button-Betätigungen
    pub fn pending_input_count(&self) -> usize {
        self.pending_clicks.len() + self.pending_presses.len()
    }

    fn take_click(&mut self, root: &str, index: usize) -> bool {
        let position = self
            .pending_clicks
            .iter()
            .position(|(r, i)| r == root && *i == index);
        match position {
            Some(pos) => {
                self.pending_clicks.remove(pos);
                true
            }
            None => false,
        }
    }

    fn take_press(&mut self, root: &str, index: usize, ordinal: usize) -> bool {
        let position = self
            .pending_presses
            .iter()
            .position(|(r, i, o)| r == root && *i == index && *o == ordinal);
        match position {
            Some(pos) => {
                self.pending_presses.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl WidgetHost for HeadlessHost {
    fn tree_root(
        &mut self,
        id_salt: &str,
        label: &str,
        _indent_factor: f32,
        body: impl FnOnce(&mut Self),
    ) -> bool {
        self.transcript.push(format!("root {}", label));
        if self.collapsed_roots.contains(id_salt) {
            return false;
        }

        let previous = self.current_root.replace(id_salt.to_string());
        body(self);
        self.current_root = previous;
        true
    }

    fn tree_node(
        &mut self,
        index: usize,
        label: &str,
        selected: bool,
        body: impl FnOnce(&mut Self),
    ) -> NodeResponse {
        let marker = if selected { "*" } else { " " };
        self.transcript
            .push(format!("node {}{} {}", marker, index, label));

        let root = self.current_root.clone().unwrap_or_default();
        let clicked = self.take_click(&root, index);
        let open = self.open_nodes.contains(&(root, index));

        if open {
            let previous = self.current_node.replace(index);
            let previous_ordinal = std::mem::replace(&mut self.button_ordinal, 0);
            body(self);
            self.current_node = previous;
            self.button_ordinal = previous_ordinal;
        }

        NodeResponse { clicked, open }
    }

    fn text(&mut self, text: &str) {
        self.transcript.push(format!("text {}", text));
    }

    fn button(&mut self, label: &str) -> bool {
        self.transcript.push(format!("button {}", label));
        let ordinal = self.button_ordinal;
        self.button_ordinal += 1;

        let root = self.current_root.clone().unwrap_or_default();
        match self.current_node {
            Some(index) => self.take_press(&root, index, ordinal),
            None => false,
        }
    }

    fn grid(&mut self, id_salt: &str, columns: usize, body: impl FnOnce(&mut Self)) {
        self.transcript
            .push(format!("grid {} ({} columns)", id_salt, columns));
        body(self);
    }

    fn next_row(&mut self) {
        self.transcript.push("row".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_click_is_consumed_once() {
        let mut host = HeadlessHost::new();
        host.click_node("r", 1);

        let mut first = NodeResponse::default();
        host.tree_root("r", "R (2)", 3.0, |h| {
            h.tree_node(0, "a", false, |_| {});
            first = h.tree_node(1, "b", false, |_| {});
        });
        let mut second = NodeResponse::default();
        host.tree_root("r", "R (2)", 3.0, |h| {
            second = h.tree_node(1, "b", false, |_| {});
        });

        assert!(first.clicked);
        assert!(!second.clicked);
        assert_eq!(host.pending_input_count(), 0);
    }

    #[test]
    fn test_headless_collapsed_root_renders_no_nodes() {
        let mut host = HeadlessHost::new();
        host.set_root_collapsed("r", true);

        let mut body_ran = false;
        let open = host.tree_root("r", "R (0)", 3.0, |_| body_ran = true);

        assert!(!open);
        assert!(!body_ran);
        assert_eq!(host.transcript(), &["root R (0)".to_string()]);
    }

    #[test]
    fn test_headless_button_ordinal_per_node() {
        let mut host = HeadlessHost::new();
        host.set_node_open("r", 0, true);
        host.press_button("r", 0, 1);

        let mut pressed = Vec::new();
        host.tree_root("r", "R (1)", 3.0, |h| {
            h.tree_node(0, "a", true, |h| {
                pressed.push(h.button("Del"));
                pressed.push(h.button("Del"));
            });
        });

        assert_eq!(pressed, vec![false, true]);
        assert!(host.transcript().contains(&"node *0 a".to_string()));
    }
}
