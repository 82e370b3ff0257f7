//! Bit layout shared by both lattice variants.
//!
//! The heading masks are pairwise disjoint and disjoint from the color mask;
//! the whole-array update rules in [`crate::plane`] and [`crate::line`]
//! depend on that disjointness. Call sites read packed bytes through the
//! [`PlaneCell`] / [`LineCell`] accessors rather than hand-rolling mask
//! arithmetic.

use serde::{Deserialize, Serialize};

/// Presence bit for a north-bound ant (two-dimensional layout).
pub const BIT_NORTH: u8 = 1 << 0;
/// Presence bit for an east-bound ant (two-dimensional layout).
pub const BIT_EAST: u8 = 1 << 1;
/// Presence bit for a south-bound ant (two-dimensional layout).
pub const BIT_SOUTH: u8 = 1 << 2;
/// Presence bit for a west-bound ant (two-dimensional layout).
pub const BIT_WEST: u8 = 1 << 3;
/// Color bit of the two-dimensional layout: 0 = white, 1 = black.
pub const BIT_PLANE_COLOR: u8 = 1 << 4;
/// All four heading bits of the two-dimensional layout.
pub const PLANE_HEADING_MASK: u8 = BIT_NORTH | BIT_EAST | BIT_SOUTH | BIT_WEST;
const PLANE_LAYOUT_MASK: u8 = PLANE_HEADING_MASK | BIT_PLANE_COLOR;

/// Presence bit for an east-bound ant (one-dimensional layout).
pub const BIT_LINE_EAST: u8 = 1 << 0;
/// Presence bit for a west-bound ant (one-dimensional layout).
pub const BIT_LINE_WEST: u8 = 1 << 1;
/// Color bit of the one-dimensional layout: 0 = white, 1 = black.
pub const BIT_LINE_COLOR: u8 = 1 << 2;
/// Both heading bits of the one-dimensional layout.
pub const LINE_HEADING_MASK: u8 = BIT_LINE_EAST | BIT_LINE_WEST;
const LINE_LAYOUT_MASK: u8 = LINE_HEADING_MASK | BIT_LINE_COLOR;

/// Heading of an ant on the two-dimensional lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaneHeading {
    North,
    East,
    South,
    West,
}

impl PlaneHeading {
    /// Every heading, in clockwise order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Presence mask for this heading.
    #[must_use]
    pub const fn mask(self) -> u8 {
        match self {
            Self::North => BIT_NORTH,
            Self::East => BIT_EAST,
            Self::South => BIT_SOUTH,
            Self::West => BIT_WEST,
        }
    }

    /// Heading a quarter turn clockwise.
    #[must_use]
    pub const fn clockwise(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Heading a quarter turn counter-clockwise.
    #[must_use]
    pub const fn counter_clockwise(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::East => Self::North,
            Self::South => Self::East,
            Self::West => Self::South,
        }
    }
}

/// Heading of an ant on the one-dimensional lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineHeading {
    East,
    West,
}

impl LineHeading {
    /// Both headings.
    pub const ALL: [Self; 2] = [Self::East, Self::West];

    /// Presence mask for this heading.
    #[must_use]
    pub const fn mask(self) -> u8 {
        match self {
            Self::East => BIT_LINE_EAST,
            Self::West => BIT_LINE_WEST,
        }
    }

    /// The opposite heading.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

/// A single packed cell of the two-dimensional lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlaneCell(u8);

impl PlaneCell {
    /// Empty white cell.
    pub const EMPTY: Self = Self(0);

    /// Wraps a raw cell byte. Bits outside the layout are preserved; check
    /// them with [`Self::is_valid`].
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// A white cell holding a single ant with the given heading.
    #[must_use]
    pub const fn with_ant(heading: PlaneHeading) -> Self {
        Self(heading.mask())
    }

    /// The raw packed byte.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether an ant with the given heading occupies this cell.
    #[must_use]
    pub const fn has(self, heading: PlaneHeading) -> bool {
        self.0 & heading.mask() != 0
    }

    /// Whether the cell is colored black.
    #[must_use]
    pub const fn is_black(self) -> bool {
        self.0 & BIT_PLANE_COLOR != 0
    }

    /// Whether any ant occupies this cell.
    #[must_use]
    pub const fn occupied(self) -> bool {
        self.0 & PLANE_HEADING_MASK != 0
    }

    /// Number of ants resident in this cell.
    #[must_use]
    pub const fn ant_count(self) -> u32 {
        (self.0 & PLANE_HEADING_MASK).count_ones()
    }

    /// Whether every set bit belongs to the layout.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 & !PLANE_LAYOUT_MASK == 0
    }
}

/// A single packed cell of the one-dimensional lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LineCell(u8);

impl LineCell {
    /// Empty white cell.
    pub const EMPTY: Self = Self(0);

    /// Wraps a raw cell byte. Bits outside the layout are preserved; check
    /// them with [`Self::is_valid`].
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// A white cell holding a single ant with the given heading.
    #[must_use]
    pub const fn with_ant(heading: LineHeading) -> Self {
        Self(heading.mask())
    }

    /// The raw packed byte.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether an ant with the given heading occupies this cell.
    #[must_use]
    pub const fn has(self, heading: LineHeading) -> bool {
        self.0 & heading.mask() != 0
    }

    /// Whether the cell is colored black.
    #[must_use]
    pub const fn is_black(self) -> bool {
        self.0 & BIT_LINE_COLOR != 0
    }

    /// Whether any ant occupies this cell.
    #[must_use]
    pub const fn occupied(self) -> bool {
        self.0 & LINE_HEADING_MASK != 0
    }

    /// Number of ants resident in this cell.
    #[must_use]
    pub const fn ant_count(self) -> u32 {
        (self.0 & LINE_HEADING_MASK).count_ones()
    }

    /// Whether every set bit belongs to the layout.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 & !LINE_LAYOUT_MASK == 0
    }
}
