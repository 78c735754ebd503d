//! Positionale Selektionsmaske einer Entitäts-Kategorie.

/// Geordnete Bool-Folge: Eintrag `i` gehört zur Entität an Position `i`
///
/// Die Maske wächst monoton mit der Collection und schrumpft nie; beim
/// Wachsen bleiben bestehende Einträge unverändert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionMask {
    flags: Vec<bool>,
}

impl SelectionMask {
    /// Erstellt eine leere Maske.
    pub fn new() -> Self {
        Self { flags: Vec::new() }
    }

    /// Hängt `false` an, bis die Länge mindestens `required_len` beträgt.
    ///
    /// Kürzt nie und überschreibt keine bestehenden Einträge; ist die Maske
    /// bereits lang genug, passiert nichts.
    pub fn ensure_capacity(&mut self, required_len: usize) {
        if self.flags.len() < required_len {
            self.flags.resize(required_len, false);
        }
    }

    /// Kippt den Eintrag an `index`.
    ///
    /// # Panics
    ///
    /// Wenn `index` außerhalb der Maske liegt. Der Browser vergrößert die
    /// Maske vor jeder Iteration, ein solcher Index ist ein Programmierfehler.
    pub fn toggle(&mut self, index: usize) {
        assert!(
            index < self.flags.len(),
            "Selektionsmaske zu kurz: Index {} bei Länge {}",
            index,
            self.flags.len()
        );
        self.flags[index] = !self.flags[index];
    }

    /// Gibt zurück, ob der Eintrag gesetzt ist (außerhalb der Maske: `false`).
    pub fn is_selected(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Setzt alle Einträge auf `false`, ohne die Maske zu verkürzen.
    pub fn clear(&mut self) {
        self.flags.fill(false);
    }

    /// Anzahl der gesetzten Einträge
    pub fn selected_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Aktuelle Länge der Maske
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Gibt `true` zurück, wenn die Maske noch keine Einträge hat.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Read-only Sicht auf alle Einträge
    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }
}
