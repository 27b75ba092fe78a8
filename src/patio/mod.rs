// Patio zone catalog
// Fixed zone layout for the yard map and the badge colors used in lists

use serde::Serialize;

use crate::fleet::Moto;

/// Fixed zone codes, laid out on the map top to bottom.
pub const ZONES: [&str; 8] = ["A1", "A2", "B1", "B2", "C1", "C2", "D1", "D2"];

/// Parking spots rendered per zone (a 2x2 grid on the map).
pub const SPOTS_PER_ZONE: usize = 4;

pub fn is_valid_zona(zona: &str) -> bool {
    ZONES.contains(&zona)
}

/// Badge color for a zone, keyed by its letter.
pub fn zone_color(zona: &str) -> &'static str {
    match zona.chars().next() {
        Some('A') => "#4287f5",
        Some('B') => "#f542a1",
        Some('C') => "#42f5b3",
        Some('D') => "#f5a442",
        _ => "#888888",
    }
}

/// One zone of the map view with its occupants, capped at the spot count.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneOccupancy {
    pub zona: String,
    pub color: String,
    pub motos: Vec<Moto>,
}

/// Build the map view: every zone in layout order, each holding up to
/// `SPOTS_PER_ZONE` motos in insertion order.
pub fn build_map(motos: &[Moto]) -> Vec<ZoneOccupancy> {
    ZONES
        .iter()
        .map(|&zona| ZoneOccupancy {
            zona: zona.to_string(),
            color: zone_color(zona).to_string(),
            motos: motos
                .iter()
                .filter(|m| m.zona == zona)
                .take(SPOTS_PER_ZONE)
                .cloned()
                .collect(),
        })
        .collect()
}
