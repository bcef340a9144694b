use slotmap::SlotMap;

use crate::configuration::ConfigurationRecord;
use crate::error::{Result, StoreError};

slotmap::new_key_type! {
    /// Unique identifier for a saved configuration.
    pub struct ConfigurationId;
}

/// In-memory collection of saved configurations.
///
/// Ids are generational: a removed record's id never resolves again, even
/// after its slot is reused. Writing the [`ConfigurationStore::to_json`]
/// snapshot somewhere durable is the caller's concern.
#[derive(Debug, Default)]
pub struct ConfigurationStore {
    records: SlotMap<ConfigurationId, ConfigurationRecord>,
}

impl ConfigurationStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a record and returns its id.
    pub fn save(&mut self, record: ConfigurationRecord) -> ConfigurationId {
        self.records.insert(record)
    }

    /// Returns the record saved under `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no record has that id.
    pub fn get(
        &self,
        id: ConfigurationId,
    ) -> std::result::Result<&ConfigurationRecord, StoreError> {
        self.records.get(id).ok_or(StoreError::RecordNotFound)
    }

    /// Removes and returns the record saved under `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no record has that id.
    pub fn remove(
        &mut self,
        id: ConfigurationId,
    ) -> std::result::Result<ConfigurationRecord, StoreError> {
        self.records.remove(id).ok_or(StoreError::RecordNotFound)
    }

    /// Number of saved records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over saved records with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (ConfigurationId, &ConfigurationRecord)> {
        self.records.iter()
    }

    /// Serializes the store, ids included.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// Restores a store from a [`ConfigurationStore::to_json`] snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            records: serde_json::from_str(json)?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::{Archetype, Catalog, Dimensions};
    use crate::configuration::Configuration;

    fn record(archetype: Archetype) -> ConfigurationRecord {
        let catalog = Catalog::standard();
        ConfigurationRecord::capture(&catalog, &Configuration::standard(&catalog, archetype))
    }

    #[test]
    fn save_get_remove() {
        let mut store = ConfigurationStore::new();
        assert!(store.is_empty());
        let sofa = store.save(record(Archetype::Sofa));
        let chair = store.save(record(Archetype::Chair));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(sofa).unwrap().model_name, "Milano Sofa");

        let removed = store.remove(chair).unwrap();
        assert_eq!(removed.price, 2450);
        assert!(matches!(store.get(chair), Err(StoreError::RecordNotFound)));
        assert!(store.remove(chair).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn stale_id_does_not_resolve_after_reuse() {
        let mut store = ConfigurationStore::new();
        let old = store.save(record(Archetype::Table));
        store.remove(old).unwrap();
        let new = store.save(record(Archetype::Bookshelf));
        assert!(store.get(old).is_err());
        assert_eq!(store.get(new).unwrap().model_id, Archetype::Bookshelf);
    }

    #[test]
    fn snapshot_keeps_ids() {
        let mut store = ConfigurationStore::new();
        let id = store.save(record(Archetype::Table));
        let restored = ConfigurationStore::from_json(&store.to_json().unwrap()).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.get(id).unwrap(), store.get(id).unwrap());
        assert_eq!(restored.iter().count(), 1);
    }

    #[test]
    fn snapshot_survives_malformed_dimensions() {
        let catalog = Catalog::standard();
        let mut store = ConfigurationStore::new();
        let good = store.save(record(Archetype::Sofa));
        let config = Configuration::standard(&catalog, Archetype::Table)
            .with_dimensions(Dimensions::new(f64::NAN, 80.0, 45.0));
        let odd = store.save(ConfigurationRecord::capture(&catalog, &config));

        let restored = ConfigurationStore::from_json(&store.to_json().unwrap()).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.get(good).unwrap(), store.get(good).unwrap());
        let table = restored.get(odd).unwrap();
        assert_eq!(table.dimensions, Dimensions::new(120.0, 80.0, 45.0));
        assert_eq!(table.price, 5650);
    }
}
