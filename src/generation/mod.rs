//! Procedural furniture geometry.
//!
//! Coordinates are centimeters: x runs across the width and y across the
//! depth (both centered on the origin, the rear at `+y`), z points up from
//! the floor at `z = 0`.

mod bookshelf;
mod chair;
mod fallback;
mod sofa;
mod table;

use tracing::{debug, instrument};

use crate::catalog::{Archetype, Catalog, Dimensions};
use crate::error::{GenerationError, Result};
use crate::mesh::Mesh;

/// Parameters controlling generation quality and detail counts.
///
/// Always valid: every setter checks its minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    resolution: usize,
    cushion_count: usize,
    shelf_count: usize,
    leg_ring_count: usize,
    ring_segments: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            resolution: 20,
            cushion_count: 3,
            shelf_count: 5,
            leg_ring_count: 8,
            ring_segments: 12,
        }
    }
}

fn at_least(parameter: &'static str, value: usize, min: usize) -> Result<usize> {
    if value < min {
        return Err(GenerationError::ParameterTooSmall {
            parameter,
            value,
            min,
        }
        .into());
    }
    Ok(value)
}

impl GenerationParams {
    /// Sets the number of samples along each side of every surface grid.
    ///
    /// # Errors
    ///
    /// Returns an error if `resolution` is below 2.
    pub fn with_resolution(mut self, resolution: usize) -> Result<Self> {
        self.resolution = at_least("resolution", resolution, 2)?;
        Ok(self)
    }

    /// Sets the number of sofa seat cushions.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero.
    pub fn with_cushion_count(mut self, count: usize) -> Result<Self> {
        self.cushion_count = at_least("cushion_count", count, 1)?;
        Ok(self)
    }

    /// Sets the number of bookshelf shelves.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero.
    pub fn with_shelf_count(mut self, count: usize) -> Result<Self> {
        self.shelf_count = at_least("shelf_count", count, 1)?;
        Ok(self)
    }

    /// Sets the number of point rings stacked along each table leg.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is below 2.
    pub fn with_leg_ring_count(mut self, count: usize) -> Result<Self> {
        self.leg_ring_count = at_least("leg_ring_count", count, 2)?;
        Ok(self)
    }

    /// Sets the number of points on each table leg ring.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is below 3.
    pub fn with_ring_segments(mut self, segments: usize) -> Result<Self> {
        self.ring_segments = at_least("ring_segments", segments, 3)?;
        Ok(self)
    }

    #[must_use]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    #[must_use]
    pub fn cushion_count(&self) -> usize {
        self.cushion_count
    }

    #[must_use]
    pub fn shelf_count(&self) -> usize {
        self.shelf_count
    }

    #[must_use]
    pub fn leg_ring_count(&self) -> usize {
        self.leg_ring_count
    }

    #[must_use]
    pub fn ring_segments(&self) -> usize {
        self.ring_segments
    }
}

/// Generates the placeholder mesh of an archetype at given dimensions.
pub struct GenerateMesh {
    archetype: Archetype,
    dimensions: Dimensions,
    params: GenerationParams,
}

impl GenerateMesh {
    /// Creates a new `GenerateMesh` operation.
    #[must_use]
    pub fn new(archetype: Archetype, dimensions: Dimensions, params: GenerationParams) -> Self {
        Self {
            archetype,
            dimensions,
            params,
        }
    }

    /// Executes the generation.
    ///
    /// Malformed dimension components are replaced by the archetype's
    /// standard ones. The generic archetype ignores dimensions entirely and
    /// yields a unit sphere.
    #[must_use]
    #[instrument(level = "debug", skip(self, catalog), fields(archetype = %self.archetype))]
    pub fn execute(&self, catalog: &Catalog) -> Mesh {
        let def = catalog.definition(self.archetype);
        let dims = self.dimensions.sanitized(&def.standard_dimensions);
        let mut mesh = Mesh::new(def.display_name.clone(), self.archetype);
        match self.archetype {
            Archetype::Sofa => sofa::build(&mut mesh, &dims, &self.params),
            Archetype::Table => table::build(&mut mesh, &dims, &self.params),
            Archetype::Chair => chair::build(&mut mesh, &dims, &self.params),
            Archetype::Bookshelf => bookshelf::build(&mut mesh, &dims, &self.params),
            Archetype::Generic => fallback::build(&mut mesh, &self.params),
        }
        debug!(
            patches = mesh.patches.len(),
            primitives = mesh.primitives.len(),
            "generated mesh"
        );
        mesh
    }
}

/// Generates the mesh of `archetype` at `dimensions`.
#[must_use]
pub fn generate_mesh(
    catalog: &Catalog,
    archetype: Archetype,
    dimensions: Dimensions,
    params: &GenerationParams,
) -> Mesh {
    GenerateMesh::new(archetype, dimensions, *params).execute(catalog)
}
