use serde::{Deserialize, Serialize};

use super::archetype::Archetype;

/// An optional add-on and its additive surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Stable identifier, e.g. `glass_inlay`.
    pub id: String,
    /// Display name, e.g. `Glass Inlay`.
    pub name: String,
    pub surcharge: u64,
}

impl Feature {
    /// Returns `true` if `key` is this feature's id or display name.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.id == key || self.name == key
    }
}

type FeatureRow = (Archetype, &'static str, &'static str, u64);

const STANDARD_FEATURES: [FeatureRow; 20] = [
    (Archetype::Sofa, "premium_cushions", "Premium Down Cushions", 499),
    (Archetype::Sofa, "brass_feet", "Brass Feet", 299),
    (Archetype::Sofa, "contrast_piping", "Contrast Piping", 199),
    (Archetype::Sofa, "usb_charger", "USB Charging Port", 349),
    (Archetype::Sofa, "lumbar_pillows", "Lumbar Support Pillows", 249),
    (Archetype::Table, "storage_drawer", "Hidden Storage Drawer", 399),
    (Archetype::Table, "glass_inlay", "Glass Inlay", 499),
    (Archetype::Table, "brass_details", "Brass Detail Work", 299),
    (Archetype::Table, "matched_veining", "Book-Matched Veining", 599),
    (Archetype::Table, "felt_lining", "Felt-Lined Base", 149),
    (Archetype::Chair, "premium_cushion", "Premium Seat Cushion", 199),
    (Archetype::Chair, "brass_caps", "Brass Foot Caps", 149),
    (Archetype::Chair, "leather_back", "Leather Back Panel", 299),
    (Archetype::Chair, "arm_rests", "Custom Arm Rests", 249),
    (Archetype::Chair, "caning_detail", "Caning Detail", 349),
    (Archetype::Bookshelf, "integrated_lighting", "Integrated Lighting", 899),
    (Archetype::Bookshelf, "glass_doors", "Glass Cabinet Doors", 599),
    (Archetype::Bookshelf, "cable_management", "Cable Management System", 249),
    (Archetype::Bookshelf, "adjustable_shelves", "Adjustable Shelving", 349),
    (Archetype::Bookshelf, "metal_accents", "Metal Accent Details", 399),
];

/// The built-in feature table.
#[must_use]
pub fn standard_features() -> Vec<Feature> {
    STANDARD_FEATURES
        .iter()
        .map(|&(_, id, name, surcharge)| Feature {
            id: id.to_owned(),
            name: name.to_owned(),
            surcharge,
        })
        .collect()
}

/// Ids of the built-in features offered for `archetype`.
#[must_use]
pub fn standard_feature_ids(archetype: Archetype) -> Vec<String> {
    STANDARD_FEATURES
        .iter()
        .filter(|(owner, ..)| *owner == archetype)
        .map(|&(_, id, ..)| id.to_owned())
        .collect()
}
