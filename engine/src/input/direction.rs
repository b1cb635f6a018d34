//! Grid Direction Module
//!
//! Discrete move intents on the dungeon grid. A direction is a 2D integer
//! vector with both components in -1..=1; the zero vector means "no input".
//! Convention: +y is north, +x is east.

use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A discrete movement intent on the dungeon grid.
///
/// Wraps an [`IVec2`] whose components are always within -1..=1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridDirection {
    delta: IVec2,
}

impl GridDirection {
    /// No input.
    pub const ZERO: Self = Self { delta: IVec2::ZERO };
    /// One step north (+y).
    pub const NORTH: Self = Self { delta: IVec2::new(0, 1) };
    /// One step south (-y).
    pub const SOUTH: Self = Self { delta: IVec2::new(0, -1) };
    /// One step east (+x).
    pub const EAST: Self = Self { delta: IVec2::new(1, 0) };
    /// One step west (-x).
    pub const WEST: Self = Self { delta: IVec2::new(-1, 0) };
    /// Diagonal north-east.
    pub const NORTH_EAST: Self = Self { delta: IVec2::new(1, 1) };
    /// Diagonal north-west.
    pub const NORTH_WEST: Self = Self { delta: IVec2::new(-1, 1) };
    /// Diagonal south-east.
    pub const SOUTH_EAST: Self = Self { delta: IVec2::new(1, -1) };
    /// Diagonal south-west.
    pub const SOUTH_WEST: Self = Self { delta: IVec2::new(-1, -1) };

    /// Build a direction from raw axis sums, clamping each axis to -1..=1.
    ///
    /// Several keys can pull on the same axis at once (W and ArrowUp both
    /// point north), so axis sums outside the unit range are expected input.
    pub fn from_axes(x: i32, y: i32) -> Self {
        Self {
            delta: IVec2::new(x.clamp(-1, 1), y.clamp(-1, 1)),
        }
    }

    /// The grid delta this direction applies to an actor position.
    pub fn delta(self) -> IVec2 {
        self.delta
    }

    /// Horizontal component (-1, 0, or 1).
    pub fn x(self) -> i32 {
        self.delta.x
    }

    /// Vertical component (-1, 0, or 1).
    pub fn y(self) -> i32 {
        self.delta.y
    }

    /// True when no direction is active.
    pub fn is_zero(self) -> bool {
        self.delta == IVec2::ZERO
    }

    /// True when both axes are active.
    pub fn is_diagonal(self) -> bool {
        self.delta.x != 0 && self.delta.y != 0
    }

    /// Collapse a diagonal to its vertical component (vertical wins ties).
    ///
    /// Pure horizontal and pure vertical directions pass through unchanged.
    pub fn without_diagonal(self) -> Self {
        if self.is_diagonal() {
            Self {
                delta: IVec2::new(0, self.delta.y),
            }
        } else {
            self
        }
    }
}

impl fmt::Display for GridDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match (self.delta.x, self.delta.y) {
            (0, 1) => "north",
            (0, -1) => "south",
            (1, 0) => "east",
            (-1, 0) => "west",
            (1, 1) => "north-east",
            (-1, 1) => "north-west",
            (1, -1) => "south-east",
            (-1, -1) => "south-west",
            _ => "none",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let dir = GridDirection::default();
        assert!(dir.is_zero());
        assert_eq!(dir, GridDirection::ZERO);
    }

    #[test]
    fn test_from_axes_clamps() {
        // Two keys pulling north at once still yield a unit step
        let dir = GridDirection::from_axes(0, 2);
        assert_eq!(dir, GridDirection::NORTH);

        let dir = GridDirection::from_axes(-3, -2);
        assert_eq!(dir, GridDirection::SOUTH_WEST);
    }

    #[test]
    fn test_compass_deltas() {
        assert_eq!(GridDirection::NORTH.delta(), IVec2::new(0, 1));
        assert_eq!(GridDirection::SOUTH.delta(), IVec2::new(0, -1));
        assert_eq!(GridDirection::EAST.delta(), IVec2::new(1, 0));
        assert_eq!(GridDirection::WEST.delta(), IVec2::new(-1, 0));
    }

    #[test]
    fn test_axis_accessors() {
        assert_eq!(GridDirection::NORTH_EAST.x(), 1);
        assert_eq!(GridDirection::NORTH_EAST.y(), 1);
        assert_eq!(GridDirection::WEST.x(), -1);
        assert_eq!(GridDirection::WEST.y(), 0);
        assert_eq!(GridDirection::ZERO.x(), 0);
        assert_eq!(GridDirection::ZERO.y(), 0);
    }

    #[test]
    fn test_is_diagonal() {
        assert!(GridDirection::NORTH_EAST.is_diagonal());
        assert!(GridDirection::SOUTH_WEST.is_diagonal());
        assert!(!GridDirection::NORTH.is_diagonal());
        assert!(!GridDirection::ZERO.is_diagonal());
    }

    #[test]
    fn test_without_diagonal_vertical_wins() {
        assert_eq!(GridDirection::NORTH_EAST.without_diagonal(), GridDirection::NORTH);
        assert_eq!(GridDirection::SOUTH_WEST.without_diagonal(), GridDirection::SOUTH);

        // Non-diagonals pass through
        assert_eq!(GridDirection::EAST.without_diagonal(), GridDirection::EAST);
        assert_eq!(GridDirection::ZERO.without_diagonal(), GridDirection::ZERO);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(GridDirection::NORTH.to_string(), "north");
        assert_eq!(GridDirection::SOUTH_EAST.to_string(), "south-east");
        assert_eq!(GridDirection::ZERO.to_string(), "none");
    }
}
