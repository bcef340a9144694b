use thiserror::Error;

/// Top-level error type for the Atelier configurator engine.
///
/// Pricing and mesh generation never fail; errors only surface where
/// reference data or parameters are constructed or decoded.
#[derive(Debug, Error)]
pub enum AtelierError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while validating reference catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("archetype {0} is defined more than once")]
    DuplicateArchetype(String),

    #[error("archetype {0} has no definition")]
    MissingArchetype(String),

    #[error("standard {dimension} of {archetype} must be positive, got {value}")]
    InvalidStandardDimension {
        archetype: String,
        dimension: &'static str,
        value: f64,
    },

    #[error("material {0} is defined more than once")]
    DuplicateMaterial(String),

    #[error("feature {0} is defined more than once")]
    DuplicateFeature(String),
}

/// Errors related to geometric construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised by strict parsing of identifiers.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unknown archetype: {0:?}")]
    UnknownArchetype(String),
}

/// Errors related to mesh generation parameters.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("parameter {parameter} = {value} is below the minimum {min}")]
    ParameterTooSmall {
        parameter: &'static str,
        value: usize,
        min: usize,
    },
}

/// Errors raised by the in-memory configuration store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("configuration record not found")]
    RecordNotFound,
}

/// Convenience type alias for results using [`AtelierError`].
pub type Result<T> = std::result::Result<T, AtelierError>;
