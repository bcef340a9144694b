use serde::{Deserialize, Serialize};

/// Family a material belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialGroup {
    Wood,
    Stone,
    Metal,
    Upholstery,
    Glass,
}

impl MaterialGroup {
    /// All material groups.
    pub const ALL: [MaterialGroup; 5] = [
        MaterialGroup::Wood,
        MaterialGroup::Stone,
        MaterialGroup::Metal,
        MaterialGroup::Upholstery,
        MaterialGroup::Glass,
    ];
}

/// Render-neutral surface appearance of a material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finish {
    /// Hex color, e.g. `#5D4037`.
    pub color: String,
    pub roughness: f64,
    #[serde(default)]
    pub metalness: f64,
    #[serde(default = "Finish::opaque")]
    pub opacity: f64,
}

impl Finish {
    fn opaque() -> f64 {
        1.0
    }
}

/// A selectable material and its additive surcharge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub group: MaterialGroup,
    pub surcharge: u64,
    pub finish: Finish,
}

// (name, group, surcharge, color, roughness, metalness, opacity)
type MaterialRow = (&'static str, MaterialGroup, u64, &'static str, f64, f64, f64);

const STANDARD_MATERIALS: [MaterialRow; 30] = [
    ("Oak", MaterialGroup::Wood, 0, "#A1887F", 0.5, 0.0, 1.0),
    ("Walnut", MaterialGroup::Wood, 500, "#5D4037", 0.6, 0.0, 1.0),
    ("Maple", MaterialGroup::Wood, 300, "#D7CCC8", 0.4, 0.0, 1.0),
    ("Mahogany", MaterialGroup::Wood, 650, "#3E2723", 0.4, 0.0, 1.0),
    ("Ebony", MaterialGroup::Wood, 900, "#212121", 0.3, 0.0, 1.0),
    ("Cherry", MaterialGroup::Wood, 400, "#A1554D", 0.5, 0.0, 1.0),
    ("White Marble", MaterialGroup::Stone, 1200, "#ECEFF1", 0.2, 0.0, 1.0),
    ("Black Marble", MaterialGroup::Stone, 1400, "#263238", 0.2, 0.0, 1.0),
    ("Travertine", MaterialGroup::Stone, 900, "#E0E0E0", 0.4, 0.0, 1.0),
    ("Granite", MaterialGroup::Stone, 800, "#546E7A", 0.5, 0.0, 1.0),
    ("Terrazzo", MaterialGroup::Stone, 700, "#CFD8DC", 0.6, 0.0, 1.0),
    ("Onyx", MaterialGroup::Stone, 1800, "#4E342E", 0.1, 0.0, 1.0),
    ("Brass", MaterialGroup::Metal, 600, "#D4AC0D", 0.3, 0.7, 1.0),
    ("Chrome", MaterialGroup::Metal, 450, "#BDBDBD", 0.1, 0.9, 1.0),
    ("Copper", MaterialGroup::Metal, 550, "#CB6D51", 0.2, 0.8, 1.0),
    ("Brushed Steel", MaterialGroup::Metal, 350, "#9E9E9E", 0.4, 0.6, 1.0),
    ("Bronze", MaterialGroup::Metal, 650, "#CD7F32", 0.3, 0.7, 1.0),
    ("Platinum", MaterialGroup::Metal, 2200, "#E5E4E2", 0.1, 0.9, 1.0),
    ("Leather Black", MaterialGroup::Upholstery, 800, "#212121", 0.8, 0.0, 1.0),
    ("Leather Brown", MaterialGroup::Upholstery, 800, "#5D4037", 0.7, 0.0, 1.0),
    ("Linen", MaterialGroup::Upholstery, 250, "#EFEBE9", 0.9, 0.0, 1.0),
    ("Velvet Blue", MaterialGroup::Upholstery, 550, "#1A237E", 0.8, 0.0, 1.0),
    ("Velvet Green", MaterialGroup::Upholstery, 550, "#1B5E20", 0.8, 0.0, 1.0),
    ("Cotton White", MaterialGroup::Upholstery, 150, "#FFFFFF", 0.9, 0.0, 1.0),
    ("Clear Glass", MaterialGroup::Glass, 300, "#E0F7FA", 0.1, 0.0, 0.3),
    ("Frosted Glass", MaterialGroup::Glass, 350, "#E0F7FA", 0.6, 0.0, 0.7),
    ("Tinted Glass", MaterialGroup::Glass, 400, "#B2DFDB", 0.1, 0.0, 0.5),
    ("Smoked Glass", MaterialGroup::Glass, 400, "#424242", 0.1, 0.0, 0.6),
    ("Bronze Glass", MaterialGroup::Glass, 450, "#A1887F", 0.1, 0.0, 0.5),
    ("Mirror", MaterialGroup::Glass, 500, "#ECEFF1", 0.1, 0.9, 1.0),
];

/// The built-in material library.
#[must_use]
pub fn standard_materials() -> Vec<Material> {
    STANDARD_MATERIALS
        .iter()
        .map(
            |&(name, group, surcharge, color, roughness, metalness, opacity)| Material {
                name: name.to_owned(),
                group,
                surcharge,
                finish: Finish {
                    color: color.to_owned(),
                    roughness,
                    metalness,
                    opacity,
                },
            },
        )
        .collect()
}
