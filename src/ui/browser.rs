//! Generischer Objekt-Browser: eine Kategorie als aufklappbarer Baum.

use super::widgets::WidgetHost;
use crate::app::SelectionStore;
use crate::core::MapEntity;

/// Kategorie-spezifisches Verhalten des Browsers.
pub trait ObjectBrowse<T> {
    /// Einzeiliges Label des Baumknotens
    fn title_of(&self, entity: &T) -> String;

    /// Wird pro Frame für jede selektierte Entität aufgerufen.
    fn on_selected(&mut self, entity: &T);

    /// Rendert die Details einer aufgeklappten Entität.
    fn on_expanded<H: WidgetHost>(&mut self, host: &mut H, entity: &T);
}

/// Bericht eines Browser-Durchlaufs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowseOutcome {
    /// Index, dessen Selektion am Ende des Durchlaufs gekippt wurde
    pub toggled: Option<usize>,
}

/// Rendert eine Entitäts-Collection als Baum und wendet Selektions-Klicks an.
///
/// Ablauf pro Frame:
/// 1. Selektion auf `entities.len()` wachsen lassen.
/// 2. `on_selected` für jede selektierte Entität (auch bei zugeklappter Wurzel).
/// 3. Wurzel `title (n)` mit einem Knoten pro Entität; aufgeklappte Knoten
///    rendern ihre Details über `on_expanded`.
/// 4. Höchstens ein Toggle: der letzte Klick des Frames gewinnt.
pub fn render_tree<T, H, S, B>(
    host: &mut H,
    root_id: &str,
    title: &str,
    entities: &[T],
    selection: &mut S,
    behavior: &mut B,
    indent_factor: f32,
) -> BrowseOutcome
where
    T: MapEntity,
    H: WidgetHost,
    S: SelectionStore + ?Sized,
    B: ObjectBrowse<T>,
{
    selection.sync_len(entities.len());

    for (index, entity) in entities.iter().enumerate() {
        if selection.is_selected(index, entity.entity_id()) {
            behavior.on_selected(entity);
        }
    }

    let mut pending_toggle: Option<usize> = None;
    let root_label = format!("{} ({})", title, entities.len());

    host.tree_root(root_id, &root_label, indent_factor, |host| {
        for (index, entity) in entities.iter().enumerate() {
            let selected = selection.is_selected(index, entity.entity_id());
            let label = behavior.title_of(entity);
            let response = host.tree_node(index, &label, selected, |host| {
                behavior.on_expanded(host, entity);
            });
            if response.clicked {
                pending_toggle = Some(index);
            }
        }
    });

    if let Some(index) = pending_toggle {
        let id = entities[index].entity_id();
        selection.toggle(index, id);
        log::trace!("{}: Selektion von Index {} (ID {}) gekippt", title, index, id);
    }

    BrowseOutcome {
        toggled: pending_toggle,
    }
}
