//! Hervorhebungs-Overlay: Regionsgrenzen → transluzente Overlay-Shapes.
//!
//! Cluster-artige Entitäten werden über ihre eigene Fläche hervorgehoben,
//! punktartige über die Nachbarregionen ihrer Region.

use crate::core::{Located, MapModel, Region};
use crate::shared::{ColorTheme, OverlayList, OverlayShape};

/// Erzeugt pro Region ein gefülltes, umrandetes Shape und hängt es an.
///
/// Eckpunkte werden 1:1 übernommen (keine Vereinfachung, Windungsrichtung
/// bleibt erhalten). Regionen mit leerer Umrandung erzeugen kein Shape.
/// Gibt die Anzahl der angehängten Shapes zurück.
pub fn synthesize_from_regions<'a, I>(
    regions: I,
    theme: ColorTheme,
    outline_width: f32,
    overlay: &mut OverlayList,
) -> usize
where
    I: IntoIterator<Item = &'a Region>,
{
    let color = theme.rgba();
    let mut appended = 0;

    for region in regions {
        if region.has_empty_boundary() {
            continue;
        }
        overlay.push(OverlayShape {
            points: region.points.clone(),
            fill_color: color,
            outline_color: color,
            outline_width,
        });
        appended += 1;
    }

    appended
}

/// Hebt die Nachbarregionen der Region eines Ortes hervor.
///
/// Die eigene Region des Ortes wird nicht gezeichnet. Ist die Region des
/// Ortes unbekannt oder ohne Nachbarn, entsteht kein Shape.
pub fn synthesize_from_location<L: Located>(
    map: &MapModel,
    location: &L,
    theme: ColorTheme,
    outline_width: f32,
    overlay: &mut OverlayList,
) -> usize {
    let Some(region) = map.region(location.region_id()) else {
        return 0;
    };
    synthesize_from_regions(
        map.regions_by_ids(&region.neighbors),
        theme,
        outline_width,
        overlay,
    )
}
