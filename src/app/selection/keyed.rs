//! Selektion über stabile Entitäts-IDs.

use indexmap::IndexSet;

/// Menge der selektierten Entitäts-IDs einer Kategorie
///
/// Unabhängig von der Reihenfolge der Collection: wird eine Collection
/// umsortiert oder verändert, bleibt die Selektion an derselben Entität.
/// `IndexSet` hält die Einfügereihenfolge deterministisch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyedSelection {
    selected_ids: IndexSet<u64>,
}

impl KeyedSelection {
    /// Erstellt eine leere Selektion.
    pub fn new() -> Self {
        Self {
            selected_ids: IndexSet::new(),
        }
    }

    /// Kippt den Zustand der Entität `id`.
    pub fn toggle(&mut self, id: u64) {
        if !self.selected_ids.shift_remove(&id) {
            self.selected_ids.insert(id);
        }
    }

    /// Gibt zurück, ob die Entität selektiert ist.
    pub fn is_selected(&self, id: u64) -> bool {
        self.selected_ids.contains(&id)
    }

    /// Hebt alle Selektionen auf.
    pub fn clear(&mut self) {
        self.selected_ids.clear();
    }

    /// Anzahl der selektierten Entitäten
    pub fn selected_count(&self) -> usize {
        self.selected_ids.len()
    }

    /// Selektierte IDs in Selektionsreihenfolge
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.selected_ids.iter().copied()
    }
}
