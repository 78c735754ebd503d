//! Selektionszustand des Objekt-Browsers.
//!
//! Pro Entitäts-Kategorie existiert genau eine Selektion. Sie ist entweder
//! positional ([`SelectionMask`]) oder über Entitäts-IDs geschlüsselt
//! ([`KeyedSelection`]); der Browser spricht beide über [`SelectionStore`] an.

mod keyed;
mod mask;

pub use keyed::KeyedSelection;
pub use mask::SelectionMask;

use crate::core::EntityCategory;
use crate::shared::SelectionKeying;

/// Schnittstelle des Browsers zur Selektion einer Kategorie.
///
/// Jede Methode erhält Position und ID der Entität; die Implementierung
/// entscheidet, welcher Schlüssel zählt.
pub trait SelectionStore {
    /// Passt den Speicher an die aktuelle Collection-Länge an (vor jeder Iteration).
    fn sync_len(&mut self, len: usize);
    /// Gibt zurück, ob die Entität an `index` mit `id` selektiert ist.
    fn is_selected(&self, index: usize, id: u64) -> bool;
    /// Kippt die Selektion der Entität an `index` mit `id`.
    fn toggle(&mut self, index: usize, id: u64);
    /// Hebt alle Selektionen auf.
    fn clear(&mut self);
    /// Anzahl der selektierten Einträge
    fn selected_count(&self) -> usize;
}

impl SelectionStore for SelectionMask {
    fn sync_len(&mut self, len: usize) {
        self.ensure_capacity(len);
    }

    fn is_selected(&self, index: usize, _id: u64) -> bool {
        SelectionMask::is_selected(self, index)
    }

    fn toggle(&mut self, index: usize, _id: u64) {
        SelectionMask::toggle(self, index);
    }

    fn clear(&mut self) {
        SelectionMask::clear(self);
    }

    fn selected_count(&self) -> usize {
        SelectionMask::selected_count(self)
    }
}

impl SelectionStore for KeyedSelection {
    fn sync_len(&mut self, _len: usize) {}

    fn is_selected(&self, _index: usize, id: u64) -> bool {
        KeyedSelection::is_selected(self, id)
    }

    fn toggle(&mut self, _index: usize, id: u64) {
        KeyedSelection::toggle(self, id);
    }

    fn clear(&mut self) {
        KeyedSelection::clear(self);
    }

    fn selected_count(&self) -> usize {
        KeyedSelection::selected_count(self)
    }
}

/// Selektion einer Kategorie in der konfigurierten Schlüsselung
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelection {
    /// Positionale Maske
    Positional(SelectionMask),
    /// Über Entitäts-IDs geschlüsselt
    Keyed(KeyedSelection),
}

impl CategorySelection {
    /// Erstellt eine leere Selektion für die gewünschte Schlüsselung.
    pub fn new(keying: SelectionKeying) -> Self {
        match keying {
            SelectionKeying::Position => Self::Positional(SelectionMask::new()),
            SelectionKeying::Identity => Self::Keyed(KeyedSelection::new()),
        }
    }

    /// Aktuelle Schlüsselung
    pub fn keying(&self) -> SelectionKeying {
        match self {
            Self::Positional(_) => SelectionKeying::Position,
            Self::Keyed(_) => SelectionKeying::Identity,
        }
    }

    /// Positionale Maske, falls diese Schlüsselung aktiv ist
    pub fn as_mask(&self) -> Option<&SelectionMask> {
        match self {
            Self::Positional(mask) => Some(mask),
            Self::Keyed(_) => None,
        }
    }
}

impl SelectionStore for CategorySelection {
    fn sync_len(&mut self, len: usize) {
        match self {
            Self::Positional(mask) => mask.sync_len(len),
            Self::Keyed(keyed) => keyed.sync_len(len),
        }
    }

    fn is_selected(&self, index: usize, id: u64) -> bool {
        match self {
            Self::Positional(mask) => SelectionStore::is_selected(mask, index, id),
            Self::Keyed(keyed) => SelectionStore::is_selected(keyed, index, id),
        }
    }

    fn toggle(&mut self, index: usize, id: u64) {
        match self {
            Self::Positional(mask) => SelectionStore::toggle(mask, index, id),
            Self::Keyed(keyed) => SelectionStore::toggle(keyed, index, id),
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Positional(mask) => SelectionStore::clear(mask),
            Self::Keyed(keyed) => SelectionStore::clear(keyed),
        }
    }

    fn selected_count(&self) -> usize {
        match self {
            Self::Positional(mask) => SelectionStore::selected_count(mask),
            Self::Keyed(keyed) => SelectionStore::selected_count(keyed),
        }
    }
}

/// Eine eigene Selektion pro Entitäts-Kategorie
///
/// Lebt für die Dauer der Inspektions-Session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelections {
    mega_clusters: CategorySelection,
    state_clusters: CategorySelection,
    clusters: CategorySelection,
    rivers: CategorySelection,
    cities: CategorySelection,
    locations: CategorySelection,
}

impl CategorySelections {
    /// Erstellt leere Selektionen für alle Kategorien.
    pub fn new(keying: SelectionKeying) -> Self {
        Self {
            mega_clusters: CategorySelection::new(keying),
            state_clusters: CategorySelection::new(keying),
            clusters: CategorySelection::new(keying),
            rivers: CategorySelection::new(keying),
            cities: CategorySelection::new(keying),
            locations: CategorySelection::new(keying),
        }
    }

    /// Selektion einer Kategorie
    pub fn get(&self, category: EntityCategory) -> &CategorySelection {
        match category {
            EntityCategory::MegaClusters => &self.mega_clusters,
            EntityCategory::StateClusters => &self.state_clusters,
            EntityCategory::Clusters => &self.clusters,
            EntityCategory::Rivers => &self.rivers,
            EntityCategory::Cities => &self.cities,
            EntityCategory::Locations => &self.locations,
        }
    }

    /// Selektion einer Kategorie (mutable)
    pub fn get_mut(&mut self, category: EntityCategory) -> &mut CategorySelection {
        match category {
            EntityCategory::MegaClusters => &mut self.mega_clusters,
            EntityCategory::StateClusters => &mut self.state_clusters,
            EntityCategory::Clusters => &mut self.clusters,
            EntityCategory::Rivers => &mut self.rivers,
            EntityCategory::Cities => &mut self.cities,
            EntityCategory::Locations => &mut self.locations,
        }
    }

    /// Schlüsselung der Selektionen
    pub fn keying(&self) -> SelectionKeying {
        self.clusters.keying()
    }

    /// Hebt alle Selektionen aller Kategorien auf.
    pub fn clear_all(&mut self) {
        for category in EntityCategory::ALL {
            self.get_mut(category).clear();
        }
    }

    /// Anzahl aller selektierten Einträge über alle Kategorien
    pub fn total_selected(&self) -> usize {
        EntityCategory::ALL
            .iter()
            .map(|&c| self.get(c).selected_count())
            .sum()
    }
}

impl Default for CategorySelections {
    fn default() -> Self {
        Self::new(SelectionKeying::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_have_separate_selections() {
        let mut sels = CategorySelections::new(SelectionKeying::Position);
        sels.get_mut(EntityCategory::MegaClusters).sync_len(2);
        sels.get_mut(EntityCategory::StateClusters).sync_len(2);

        sels.get_mut(EntityCategory::MegaClusters).toggle(0, 100);

        assert!(sels.get(EntityCategory::MegaClusters).is_selected(0, 100));
        assert!(!sels.get(EntityCategory::StateClusters).is_selected(0, 100));
        assert_eq!(sels.total_selected(), 1);
    }

    #[test]
    fn test_positional_ignores_id_keyed_ignores_index() {
        let mut positional = CategorySelection::new(SelectionKeying::Position);
        positional.sync_len(3);
        positional.toggle(1, 500);
        assert!(positional.is_selected(1, 999));

        let mut keyed = CategorySelection::new(SelectionKeying::Identity);
        keyed.sync_len(3);
        keyed.toggle(1, 500);
        assert!(keyed.is_selected(2, 500));
        assert!(!keyed.is_selected(1, 501));
    }

    #[test]
    fn test_clear_all() {
        let mut sels = CategorySelections::new(SelectionKeying::Identity);
        sels.get_mut(EntityCategory::Rivers).toggle(0, 1);
        sels.get_mut(EntityCategory::Cities).toggle(0, 2);

        sels.clear_all();

        assert_eq!(sels.total_selected(), 0);
        assert_eq!(sels.keying(), SelectionKeying::Identity);
    }
}
