//! Configuration pricing.
//!
//! `price = base + material + Σ features`, then a 10% premium (floored) when
//! any dimension departs from the archetype's standard size. Surcharges are
//! never negative, so the result is never below the base price.
//!
//! Features outside the archetype's offered set are still priced when the
//! global feature table knows them. Such lines are marked
//! `applicable = false` in the breakdown.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::catalog::{Archetype, Catalog, Dimensions};
use crate::configuration::Configuration;

/// Custom dimensions add `1 / PREMIUM_DIVISOR` of the subtotal.
const PREMIUM_DIVISOR: u64 = 10;

/// One feature's contribution to a price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCharge {
    pub id: String,
    pub name: String,
    pub amount: u64,
    /// `false` if the archetype does not offer this feature.
    pub applicable: bool,
}

/// An itemized price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub archetype: Archetype,
    pub base: u64,
    pub material: u64,
    /// Resolved features, sorted by id, each counted once.
    pub features: Vec<FeatureCharge>,
    /// Keys that matched no catalog feature.
    pub ignored_features: Vec<String>,
    pub subtotal: u64,
    /// `true` if any dimension differs from the standard size.
    pub custom_dimensions: bool,
    pub dimension_premium: u64,
    pub total: u64,
}

/// Computes the price of a configuration.
pub struct ComputePrice<'a> {
    archetype: Archetype,
    material: &'a str,
    features: Vec<&'a str>,
    dimensions: Dimensions,
}

impl<'a> ComputePrice<'a> {
    /// Creates a new `ComputePrice` operation.
    ///
    /// `features` may contain feature ids or display names in any order,
    /// with repeats.
    #[must_use]
    pub fn new(
        archetype: Archetype,
        material: &'a str,
        features: impl IntoIterator<Item = &'a str>,
        dimensions: Dimensions,
    ) -> Self {
        Self {
            archetype,
            material,
            features: features.into_iter().collect(),
            dimensions,
        }
    }

    /// Creates the operation for a [`Configuration`].
    #[must_use]
    pub fn from_configuration(config: &'a Configuration) -> Self {
        Self::new(
            config.archetype,
            &config.material,
            config.features.iter().map(String::as_str),
            config.dimensions,
        )
    }

    /// Executes the operation, returning the total price.
    #[must_use]
    pub fn execute(&self, catalog: &Catalog) -> u64 {
        self.breakdown(catalog).total
    }

    /// Executes the operation, returning the itemized price.
    #[must_use]
    #[instrument(level = "debug", skip(self, catalog), fields(archetype = %self.archetype))]
    pub fn breakdown(&self, catalog: &Catalog) -> PriceBreakdown {
        let def = catalog.definition(self.archetype);
        let base = def.base_price;
        let material = catalog.material_surcharge(self.material);
        if material == 0 && !self.material.is_empty() && catalog.material(self.material).is_none() {
            debug!(material = self.material, "unmapped material adds no surcharge");
        }

        let mut seen = BTreeSet::new();
        let mut features = Vec::new();
        let mut ignored_features = Vec::new();
        for &key in &self.features {
            match catalog.feature(key) {
                Some(feature) => {
                    if !seen.insert(feature.id.as_str()) {
                        continue;
                    }
                    let applicable = def.features.contains(&feature.id);
                    if !applicable {
                        debug!(feature = %feature.id, "pricing feature not offered for archetype");
                    }
                    features.push(FeatureCharge {
                        id: feature.id.clone(),
                        name: feature.name.clone(),
                        amount: feature.surcharge,
                        applicable,
                    });
                }
                None => {
                    debug!(feature = key, "unmapped feature adds no surcharge");
                    if !ignored_features.iter().any(|k| k == key) {
                        ignored_features.push(key.to_owned());
                    }
                }
            }
        }
        features.sort_by(|a, b| a.id.cmp(&b.id));
        ignored_features.sort();

        let subtotal = features
            .iter()
            .fold(base.saturating_add(material), |acc, f| acc.saturating_add(f.amount));

        let standard = def.standard_dimensions;
        let custom_dimensions = self.dimensions.sanitized(&standard).differs_from(&standard);
        // floor(subtotal * 1.1) == subtotal + floor(subtotal / 10) in integers.
        let dimension_premium = if custom_dimensions {
            subtotal / PREMIUM_DIVISOR
        } else {
            0
        };
        let total = subtotal.saturating_add(dimension_premium);
        debug!(subtotal, dimension_premium, total, "priced configuration");

        PriceBreakdown {
            archetype: self.archetype,
            base,
            material,
            features,
            ignored_features,
            subtotal,
            custom_dimensions,
            dimension_premium,
            total,
        }
    }
}

/// Computes the total price of `archetype` with the given choices.
#[must_use]
pub fn compute_price<'a>(
    catalog: &Catalog,
    archetype: Archetype,
    material: &'a str,
    features: impl IntoIterator<Item = &'a str>,
    dimensions: Dimensions,
) -> u64 {
    ComputePrice::new(archetype, material, features, dimensions).execute(catalog)
}
