use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ParseError;
use crate::math::approx_eq;

use super::material::MaterialGroup;

/// A furniture category with its own price entry and shape routine.
///
/// The set is closed: every table in the catalog is indexed by
/// [`Archetype::index`] and every dispatch over it is an exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Archetype {
    #[serde(rename = "sofa")]
    Sofa,
    #[serde(rename = "coffeeTable")]
    Table,
    #[serde(rename = "diningChair")]
    Chair,
    #[serde(rename = "bookshelf")]
    Bookshelf,
    #[serde(rename = "generic")]
    Generic,
}

impl Archetype {
    /// All archetypes, in index order.
    pub const ALL: [Archetype; 5] = [
        Archetype::Sofa,
        Archetype::Table,
        Archetype::Chair,
        Archetype::Bookshelf,
        Archetype::Generic,
    ];

    /// Number of archetypes.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this archetype in [`Archetype::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Archetype::Sofa => 0,
            Archetype::Table => 1,
            Archetype::Chair => 2,
            Archetype::Bookshelf => 3,
            Archetype::Generic => 4,
        }
    }

    /// Stable model identifier used in saved configurations.
    #[must_use]
    pub fn model_id(self) -> &'static str {
        match self {
            Archetype::Sofa => "sofa",
            Archetype::Table => "coffeeTable",
            Archetype::Chair => "diningChair",
            Archetype::Bookshelf => "bookshelf",
            Archetype::Generic => "generic",
        }
    }

    /// Short category label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Archetype::Sofa => "Sofa",
            Archetype::Table => "Table",
            Archetype::Chair => "Chair",
            Archetype::Bookshelf => "Bookshelf",
            Archetype::Generic => "Generic",
        }
    }

    /// Parses an identifier, falling back to [`Archetype::Generic`] when it
    /// is not recognized.
    #[must_use]
    pub fn from_id_lenient(id: &str) -> Self {
        id.parse().unwrap_or_else(|_| {
            debug!(id, "unrecognized archetype id, using generic fallback");
            Archetype::Generic
        })
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Archetype {
    type Err = ParseError;

    /// Accepts a model id or a category label, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Archetype::ALL
            .into_iter()
            .find(|a| s.eq_ignore_ascii_case(a.model_id()) || s.eq_ignore_ascii_case(a.label()))
            .ok_or_else(|| ParseError::UnknownArchetype(s.to_owned()))
    }
}

/// Overall size of a piece, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Dimensions {
    /// Creates a new set of dimensions.
    #[must_use]
    pub fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// Returns `true` if every component is finite and strictly positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.width, self.depth, self.height]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }

    /// Replaces every non-finite or non-positive component with the
    /// matching component of `standard`.
    #[must_use]
    pub fn sanitized(&self, standard: &Dimensions) -> Dimensions {
        let pick = |value: f64, fallback: f64| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        let sanitized = Dimensions {
            width: pick(self.width, standard.width),
            depth: pick(self.depth, standard.depth),
            height: pick(self.height, standard.height),
        };
        if sanitized != *self {
            debug!(requested = ?self, used = ?sanitized, "replaced malformed dimensions");
        }
        sanitized
    }

    /// Returns `true` if any component differs from `other` beyond tolerance.
    #[must_use]
    pub fn differs_from(&self, other: &Dimensions) -> bool {
        !approx_eq(self.width, other.width)
            || !approx_eq(self.depth, other.depth)
            || !approx_eq(self.height, other.height)
    }
}

/// Immutable reference record for one archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeDefinition {
    pub archetype: Archetype,
    pub display_name: String,
    pub base_price: u64,
    pub standard_dimensions: Dimensions,
    /// Material groups offered for this archetype.
    pub material_groups: Vec<MaterialGroup>,
    /// Ids of the optional features offered for this archetype.
    pub features: Vec<String>,
}

impl ArchetypeDefinition {
    /// Returns `true` if materials of `group` are offered.
    #[must_use]
    pub fn allows_group(&self, group: MaterialGroup) -> bool {
        self.material_groups.contains(&group)
    }

    /// Size bounds offered for custom dimensions.
    #[must_use]
    pub fn dimension_limits(&self) -> DimensionLimits {
        DimensionLimits::around(&self.standard_dimensions)
    }
}

/// Inclusive bounds for a single dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionRange {
    pub min: f64,
    pub max: f64,
}

impl DimensionRange {
    fn around(standard: f64, floor: f64) -> Self {
        Self {
            min: floor.max(standard * DimensionLimits::SHRINK),
            max: standard * DimensionLimits::GROW,
        }
    }

    /// Returns `true` if `value` lies within the range.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps `value` into the range.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Size bounds a configurator offers around the standard dimensions.
///
/// Each dimension may shrink to 70% and grow to 130% of its standard value,
/// never going below 50 cm wide, 40 cm deep or 30 cm high.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionLimits {
    pub width: DimensionRange,
    pub depth: DimensionRange,
    pub height: DimensionRange,
}

impl DimensionLimits {
    const SHRINK: f64 = 0.7;
    const GROW: f64 = 1.3;
    const MIN_WIDTH: f64 = 50.0;
    const MIN_DEPTH: f64 = 40.0;
    const MIN_HEIGHT: f64 = 30.0;

    /// Computes the limits around a set of standard dimensions.
    #[must_use]
    pub fn around(standard: &Dimensions) -> Self {
        Self {
            width: DimensionRange::around(standard.width, Self::MIN_WIDTH),
            depth: DimensionRange::around(standard.depth, Self::MIN_DEPTH),
            height: DimensionRange::around(standard.height, Self::MIN_HEIGHT),
        }
    }

    /// Returns `true` if every component lies within its range.
    #[must_use]
    pub fn contains(&self, dims: &Dimensions) -> bool {
        self.width.contains(dims.width)
            && self.depth.contains(dims.depth)
            && self.height.contains(dims.height)
    }

    /// Clamps every component into its range.
    #[must_use]
    pub fn clamp(&self, dims: &Dimensions) -> Dimensions {
        Dimensions {
            width: self.width.clamp(dims.width),
            depth: self.depth.clamp(dims.depth),
            height: self.height.clamp(dims.height),
        }
    }
}
