//! Storefront listing data and its filter query.
//!
//! Listings are what the collection page browses; they are independent of
//! the configurator's archetype tables. Storage of the listing document is
//! the caller's concern: this module only defines its shape and queries it
//! in memory.

use serde::{Deserialize, Serialize};

use crate::configuration::ConfigurationRecord;
use crate::error::Result;

/// Filter value that disables a category or material filter.
pub const ALL: &str = "All";

/// One item in the storefront collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: u64,
    pub materials: Vec<String>,
}

/// Criteria for [`filter_listings`]. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    /// Exact category, or [`ALL`].
    pub category: Option<String>,
    /// Case-insensitive substring of any listed material, or [`ALL`].
    pub material: Option<String>,
    /// Inclusive `(min, max)` price bounds.
    pub price_range: Option<(u64, u64)>,
}

impl ListingFilter {
    /// Returns `true` if `item` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, item: &ListingItem) -> bool {
        let category_ok = active(self.category.as_deref()).is_none_or(|c| item.category == c);
        let material_ok = active(self.material.as_deref()).is_none_or(|m| {
            let needle = m.to_lowercase();
            item.materials
                .iter()
                .any(|material| material.to_lowercase().contains(&needle))
        });
        let price_ok = self
            .price_range
            .is_none_or(|(min, max)| (min..=max).contains(&item.price));
        category_ok && material_ok && price_ok
    }
}

fn active(value: Option<&str>) -> Option<&str> {
    value.filter(|v| *v != ALL)
}

/// Returns the items matching `filter`, in their original order.
#[must_use]
pub fn filter_listings<'a>(
    items: &'a [ListingItem],
    filter: &ListingFilter,
) -> Vec<&'a ListingItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Finds a listing by id.
#[must_use]
pub fn find_listing_by_id(items: &[ListingItem], id: u32) -> Option<&ListingItem> {
    items.iter().find(|item| item.id == id)
}

/// The JSON document a storefront keeps its listings and saved
/// configurations in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingDocument {
    #[serde(default)]
    pub furniture: Vec<ListingItem>,
    #[serde(default)]
    pub configurations: Vec<ConfigurationRecord>,
}

impl ListingDocument {
    /// Parses a listing document. Missing sections default to empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Appends a configuration and returns how many are now stored.
    pub fn push_configuration(&mut self, record: ConfigurationRecord) -> usize {
        self.configurations.push(record);
        self.configurations.len()
    }
}

fn item(
    id: u32,
    name: &str,
    category: &str,
    description: &str,
    price: u64,
    materials: &[&str],
) -> ListingItem {
    ListingItem {
        id,
        name: name.to_owned(),
        category: category.to_owned(),
        description: description.to_owned(),
        price,
        materials: materials.iter().map(|m| (*m).to_owned()).collect(),
    }
}

/// The sample storefront collection.
#[must_use]
pub fn sample_listings() -> Vec<ListingItem> {
    vec![
        item(
            1,
            "Milano Sofa",
            "Seating",
            "Handcrafted Italian leather sofa with walnut frame and brass accents.",
            8950,
            &["Leather", "Walnut", "Brass"],
        ),
        item(
            2,
            "Vienna Coffee Table",
            "Tables",
            "Marble top coffee table with sculpted bronze base.",
            5650,
            &["Marble", "Bronze"],
        ),
        item(
            3,
            "Oslo Dining Chair",
            "Seating",
            "Scandinavian-inspired dining chair with woven leather seat and oak frame.",
            2450,
            &["Oak", "Leather"],
        ),
        item(
            4,
            "Manhattan Bookshelf",
            "Storage",
            "Modular bookshelf system with adjustable shelves and integrated lighting.",
            11200,
            &["Walnut", "Glass", "Brass"],
        ),
        item(
            5,
            "Kyoto Side Table",
            "Tables",
            "Japanese-inspired side table with intricate woodwork and hidden compartment.",
            3950,
            &["Cherry Wood", "Maple"],
        ),
        item(
            6,
            "Paris Pendant Light",
            "Lighting",
            "Hand-blown glass pendant with brushed brass fittings.",
            4250,
            &["Glass", "Brass"],
        ),
    ]
}
