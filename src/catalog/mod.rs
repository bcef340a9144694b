mod archetype;
mod feature;
pub mod listing;
mod material;

pub use archetype::{Archetype, ArchetypeDefinition, DimensionLimits, DimensionRange, Dimensions};
pub use feature::Feature;
pub use material::{Finish, Material, MaterialGroup};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Immutable reference data shared by pricing and generation.
///
/// Built once (from [`Catalog::standard`] or [`Catalog::from_json`]) and
/// passed by reference. Archetype definitions are stored in
/// [`Archetype::index`] order so every lookup is a direct index.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    archetypes: Vec<ArchetypeDefinition>,
    materials: Vec<Material>,
    features: Vec<Feature>,
    #[serde(skip)]
    material_index: HashMap<String, usize>,
    #[serde(skip)]
    feature_index: HashMap<String, usize>,
}

/// Serialized shape of a catalog, before validation.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    archetypes: Vec<ArchetypeDefinition>,
    materials: Vec<Material>,
    features: Vec<Feature>,
}

impl Catalog {
    /// Builds a catalog from raw tables.
    ///
    /// # Errors
    ///
    /// Returns an error if an archetype is missing or defined twice, if a
    /// standard dimension is not positive, or if material names or feature
    /// keys (ids and display names together) collide.
    pub fn new(
        archetypes: Vec<ArchetypeDefinition>,
        materials: Vec<Material>,
        features: Vec<Feature>,
    ) -> Result<Self> {
        let mut slots: Vec<Option<ArchetypeDefinition>> = vec![None; Archetype::COUNT];
        for def in archetypes {
            validate_definition(&def)?;
            let slot = &mut slots[def.archetype.index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateArchetype(def.archetype.to_string()).into());
            }
            *slot = Some(def);
        }
        let archetypes = slots
            .into_iter()
            .zip(Archetype::ALL)
            .map(|(slot, archetype)| {
                slot.ok_or_else(|| CatalogError::MissingArchetype(archetype.to_string()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut material_index = HashMap::with_capacity(materials.len());
        for (i, material) in materials.iter().enumerate() {
            if material_index.insert(material.name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateMaterial(material.name.clone()).into());
            }
        }

        let mut feature_index = HashMap::with_capacity(features.len() * 2);
        for (i, feature) in features.iter().enumerate() {
            for key in [&feature.id, &feature.name] {
                match feature_index.insert(key.clone(), i) {
                    Some(prev) if prev != i => {
                        return Err(CatalogError::DuplicateFeature(key.clone()).into());
                    }
                    _ => {}
                }
            }
        }

        Ok(Self {
            archetypes,
            materials,
            features,
            material_index,
            feature_index,
        })
    }

    /// The built-in storefront catalog.
    #[must_use]
    pub fn standard() -> Self {
        let archetypes = Archetype::ALL.into_iter().map(standard_definition).collect();
        let materials = material::standard_materials();
        let features = feature::standard_features();
        let material_index = materials
            .iter()
            .enumerate()
            .map(|(i, m)| (m.name.clone(), i))
            .collect();
        let feature_index = features
            .iter()
            .enumerate()
            .flat_map(|(i, f)| [(f.id.clone(), i), (f.name.clone(), i)])
            .collect();
        Self {
            archetypes,
            materials,
            features,
            material_index,
            feature_index,
        }
    }

    /// Parses and validates a catalog from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::new(doc.archetypes, doc.materials, doc.features)
    }

    /// Serializes the catalog to a JSON document accepted by [`Catalog::from_json`].
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the definition of `archetype`.
    #[must_use]
    pub fn definition(&self, archetype: Archetype) -> &ArchetypeDefinition {
        &self.archetypes[archetype.index()]
    }

    /// Iterates over all archetype definitions in index order.
    pub fn definitions(&self) -> impl Iterator<Item = &ArchetypeDefinition> {
        self.archetypes.iter()
    }

    /// Base price of `archetype`.
    #[must_use]
    pub fn base_price(&self, archetype: Archetype) -> u64 {
        self.definition(archetype).base_price
    }

    /// Standard dimensions of `archetype`.
    #[must_use]
    pub fn standard_dimensions(&self, archetype: Archetype) -> Dimensions {
        self.definition(archetype).standard_dimensions
    }

    /// Size bounds offered for `archetype`.
    #[must_use]
    pub fn dimension_limits(&self, archetype: Archetype) -> DimensionLimits {
        self.definition(archetype).dimension_limits()
    }

    /// Finds the archetype whose display name is `name`.
    #[must_use]
    pub fn archetype_by_display_name(&self, name: &str) -> Option<Archetype> {
        self.archetypes
            .iter()
            .find(|def| def.display_name == name)
            .map(|def| def.archetype)
    }

    /// Looks up a material by name.
    #[must_use]
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.material_index.get(name).map(|&i| &self.materials[i])
    }

    /// Additive surcharge of a material; zero if unmapped.
    #[must_use]
    pub fn material_surcharge(&self, name: &str) -> u64 {
        self.material(name).map_or(0, |m| m.surcharge)
    }

    /// All materials in `group`.
    pub fn materials_in_group(&self, group: MaterialGroup) -> impl Iterator<Item = &Material> {
        self.materials.iter().filter(move |m| m.group == group)
    }

    /// Returns `true` if `material` exists and its group is offered for `archetype`.
    #[must_use]
    pub fn allows_material(&self, archetype: Archetype, material: &str) -> bool {
        self.material(material)
            .is_some_and(|m| self.definition(archetype).allows_group(m.group))
    }

    /// Looks up a feature by id or display name.
    #[must_use]
    pub fn feature(&self, key: &str) -> Option<&Feature> {
        self.feature_index.get(key).map(|&i| &self.features[i])
    }

    /// Additive surcharge of a feature; zero if unmapped.
    #[must_use]
    pub fn feature_surcharge(&self, key: &str) -> u64 {
        self.feature(key).map_or(0, |f| f.surcharge)
    }

    /// Returns `true` if `key` names a feature offered for `archetype`.
    #[must_use]
    pub fn allows_feature(&self, archetype: Archetype, key: &str) -> bool {
        self.feature(key)
            .is_some_and(|f| self.definition(archetype).features.contains(&f.id))
    }

    /// Features offered for `archetype`, in catalog order.
    pub fn features_for(&self, archetype: Archetype) -> impl Iterator<Item = &Feature> {
        let offered = &self.definition(archetype).features;
        self.features.iter().filter(move |f| offered.contains(&f.id))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_definition(def: &ArchetypeDefinition) -> Result<()> {
    let dims = def.standard_dimensions;
    for (dimension, value) in [
        ("width", dims.width),
        ("depth", dims.depth),
        ("height", dims.height),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(CatalogError::InvalidStandardDimension {
                archetype: def.archetype.to_string(),
                dimension,
                value,
            }
            .into());
        }
    }
    Ok(())
}

fn standard_definition(archetype: Archetype) -> ArchetypeDefinition {
    use MaterialGroup::{Glass, Metal, Stone, Upholstery, Wood};

    let (display_name, base_price, standard_dimensions, material_groups) = match archetype {
        Archetype::Sofa => (
            "Milano Sofa",
            8950,
            Dimensions::new(220.0, 95.0, 85.0),
            vec![Wood, Upholstery, Metal],
        ),
        Archetype::Table => (
            "Vienna Coffee Table",
            5650,
            Dimensions::new(120.0, 80.0, 45.0),
            vec![Wood, Stone, Metal, Glass],
        ),
        Archetype::Chair => (
            "Oslo Dining Chair",
            2450,
            Dimensions::new(50.0, 55.0, 80.0),
            vec![Wood, Upholstery, Metal],
        ),
        Archetype::Bookshelf => (
            "Manhattan Bookshelf",
            11200,
            Dimensions::new(180.0, 45.0, 240.0),
            vec![Wood, Metal, Glass],
        ),
        Archetype::Generic => (
            "Custom Piece",
            5000,
            Dimensions::new(100.0, 80.0, 45.0),
            MaterialGroup::ALL.to_vec(),
        ),
    };

    ArchetypeDefinition {
        archetype,
        display_name: display_name.to_owned(),
        base_price,
        standard_dimensions,
        material_groups,
        features: feature::standard_feature_ids(archetype),
    }
}
