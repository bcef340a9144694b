pub mod catalog;
pub mod configuration;
pub mod error;
pub mod generation;
pub mod geometry;
pub mod math;
pub mod mesh;
pub mod pricing;
pub mod store;

pub use catalog::{Archetype, Catalog, Dimensions};
pub use configuration::{Configuration, ConfigurationRecord};
pub use error::{AtelierError, Result};
pub use generation::{generate_mesh, GenerateMesh, GenerationParams};
pub use mesh::Mesh;
pub use pricing::{compute_price, ComputePrice, PriceBreakdown};
pub use store::{ConfigurationId, ConfigurationStore};
