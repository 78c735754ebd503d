/// Feste Menge der Entitäts-Kategorien, die der Objekt-Browser auflistet.
///
/// Die Reihenfolge von [`EntityCategory::ALL`] ist die Anzeigereihenfolge im Panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityCategory {
    /// Super-Cluster
    MegaClusters,
    /// Staaten-Gruppierungen
    StateClusters,
    /// Cluster
    Clusters,
    /// Flüsse
    Rivers,
    /// Siedlungen
    Cities,
    /// Allgemeine Orte
    Locations,
}

impl EntityCategory {
    /// Alle Kategorien in Anzeigereihenfolge
    pub const ALL: [EntityCategory; 6] = [
        EntityCategory::MegaClusters,
        EntityCategory::StateClusters,
        EntityCategory::Clusters,
        EntityCategory::Rivers,
        EntityCategory::Cities,
        EntityCategory::Locations,
    ];

    /// Titel des Wurzelknotens im Baum
    pub fn title(self) -> &'static str {
        match self {
            EntityCategory::MegaClusters => "MegaClusters",
            EntityCategory::StateClusters => "StateClusters",
            EntityCategory::Clusters => "Clusters",
            EntityCategory::Rivers => "Rivers",
            EntityCategory::Cities => "Cities",
            EntityCategory::Locations => "Locations",
        }
    }

    /// Punktartige Kategorien werden über die Nachbarschaft ihrer Region hervorgehoben.
    pub fn is_location_like(self) -> bool {
        matches!(self, EntityCategory::Cities | EntityCategory::Locations)
    }
}
