use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Archetype, Catalog, Dimensions};
use crate::error::Result;
use crate::pricing::ComputePrice;

/// A customer's choices for one piece.
///
/// Features form a set: order is irrelevant and duplicates collapse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub archetype: Archetype,
    pub material: String,
    pub features: BTreeSet<String>,
    pub dimensions: Dimensions,
}

impl Configuration {
    /// Creates a configuration with no material, no features and the
    /// archetype's standard dimensions.
    #[must_use]
    pub fn standard(catalog: &Catalog, archetype: Archetype) -> Self {
        Self {
            archetype,
            material: String::new(),
            features: BTreeSet::new(),
            dimensions: catalog.standard_dimensions(archetype),
        }
    }

    /// Sets the material.
    #[must_use]
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = material.into();
        self
    }

    /// Adds a feature.
    #[must_use]
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.insert(feature.into());
        self
    }

    /// Sets the dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Prices this configuration against `catalog`.
    #[must_use]
    pub fn price(&self, catalog: &Catalog) -> u64 {
        ComputePrice::from_configuration(self).execute(catalog)
    }
}

/// A priced configuration as a storefront saves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRecord {
    pub model_id: Archetype,
    pub model_name: String,
    pub material: String,
    pub dimensions: Dimensions,
    /// Sorted feature display names; unknown keys are kept verbatim.
    pub features: Vec<String>,
    pub price: u64,
}

impl ConfigurationRecord {
    /// Prices `config` and captures it with catalog display names.
    ///
    /// Malformed dimension components are stored as the standard values
    /// they were priced with.
    #[must_use]
    pub fn capture(catalog: &Catalog, config: &Configuration) -> Self {
        let def = catalog.definition(config.archetype);
        let features: BTreeSet<String> = config
            .features
            .iter()
            .map(|key| catalog.feature(key).map_or_else(|| key.clone(), |f| f.name.clone()))
            .collect();
        Self {
            model_id: config.archetype,
            model_name: def.display_name.clone(),
            material: config.material.clone(),
            dimensions: config.dimensions.sanitized(&def.standard_dimensions),
            features: features.into_iter().collect(),
            price: config.price(catalog),
        }
    }

    /// Parses a record from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the record as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn standard_configuration_costs_base_price() {
        let catalog = Catalog::standard();
        let config = Configuration::standard(&catalog, Archetype::Chair);
        assert_eq!(config.price(&catalog), 2450);
    }

    #[test]
    fn builder_collapses_duplicate_features() {
        let catalog = Catalog::standard();
        let config = Configuration::standard(&catalog, Archetype::Table)
            .with_feature("Glass Inlay")
            .with_feature("Glass Inlay");
        assert_eq!(config.features.len(), 1);
    }

    #[test]
    fn record_uses_display_names() {
        let catalog = Catalog::standard();
        let config = Configuration::standard(&catalog, Archetype::Table)
            .with_material("Walnut")
            .with_feature("glass_inlay")
            .with_feature("Mystery Option");
        let record = ConfigurationRecord::capture(&catalog, &config);
        assert_eq!(record.model_name, "Vienna Coffee Table");
        assert_eq!(record.features, vec!["Glass Inlay", "Mystery Option"]);
        assert_eq!(record.price, 6649);
    }

    #[test]
    fn record_json_shape() {
        let catalog = Catalog::standard();
        let config = Configuration::standard(&catalog, Archetype::Sofa);
        let record = ConfigurationRecord::capture(&catalog, &config);
        let json = record.to_json().unwrap();
        assert!(json.contains("\"modelId\":\"sofa\""));
        assert!(json.contains("\"modelName\":\"Milano Sofa\""));
        assert_eq!(ConfigurationRecord::from_json(&json).unwrap(), record);
    }

    #[test]
    fn record_keeps_priced_dimensions() {
        let catalog = Catalog::standard();
        let config = Configuration::standard(&catalog, Archetype::Table)
            .with_dimensions(Dimensions::new(f64::NAN, 90.0, -1.0));
        let record = ConfigurationRecord::capture(&catalog, &config);
        assert_eq!(record.dimensions, Dimensions::new(120.0, 90.0, 45.0));
        assert_eq!(record.price, 5650 * 11 / 10);

        let json = record.to_json().unwrap();
        assert!(!json.contains("null"));
        assert_eq!(ConfigurationRecord::from_json(&json).unwrap(), record);
    }

    #[test]
    fn record_with_infinite_dimension_round_trips() {
        let catalog = Catalog::standard();
        let config = Configuration::standard(&catalog, Archetype::Chair)
            .with_dimensions(Dimensions::new(50.0, f64::INFINITY, 80.0));
        let record = ConfigurationRecord::capture(&catalog, &config);
        assert_eq!(record.dimensions, catalog.standard_dimensions(Archetype::Chair));
        assert_eq!(record.price, 2450);
        let back = ConfigurationRecord::from_json(&record.to_json().unwrap()).unwrap();
        assert_eq!(back, record);
    }
}
