//! Mapping between linear list positions and `(row, col)` board coordinates.
//!
//! Positions are assigned row-major: position `p` on an `n`-wide board sits at
//! row `p / n`, column `p % n`. Binding and tap handling both go through these
//! helpers so a tile never drifts away from the cell it displays.

use core::fmt;

use crate::common::GridError;

/// Row and column of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub row: usize,
    pub col: usize,
}

impl Coordinates {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Linear position of these coordinates on an `n`-wide board.
    pub fn to_position(self, n: usize) -> usize {
        self.row * n + self.col
    }
}

impl fmt::Display for Coordinates {
    /// One-based `row-col`, the way moves are reported in logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row + 1, self.col + 1)
    }
}

/// Number of tiles on an `n`×`n` board.
pub fn item_count(n: usize) -> usize {
    n * n
}

/// Coordinates of position `pos` on an `n`-wide board.
///
/// Total for `pos < n²`; the result is meaningless outside that range.
pub fn coordinates_from_position(pos: usize, n: usize) -> Coordinates {
    Coordinates {
        row: pos / n,
        col: pos % n,
    }
}

/// Checked variant of [`coordinates_from_position`].
pub fn try_coordinates_from_position(pos: usize, n: usize) -> Result<Coordinates, GridError> {
    if n == 0 {
        return Err(GridError::InvalidBoardSize(n));
    }
    let count = item_count(n);
    if pos >= count {
        return Err(GridError::PositionOutOfRange {
            position: pos,
            item_count: count,
        });
    }
    Ok(coordinates_from_position(pos, n))
}

/// Checked inverse of [`coordinates_from_position`].
pub fn position_from_coordinates(coords: Coordinates, n: usize) -> Result<usize, GridError> {
    if coords.row >= n || coords.col >= n {
        return Err(GridError::CoordinatesOutOfRange {
            row: coords.row,
            col: coords.col,
            size: n,
        });
    }
    Ok(coords.to_position(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_and_last_tile_on_3x3() {
        assert_eq!(coordinates_from_position(4, 3), Coordinates::new(1, 1));
        assert_eq!(coordinates_from_position(8, 3), Coordinates::new(2, 2));
        assert_eq!(coordinates_from_position(0, 3), Coordinates::new(0, 0));
        assert_eq!(coordinates_from_position(5, 3), Coordinates::new(1, 2));
    }

    #[test]
    fn item_counts() {
        assert_eq!(item_count(3), 9);
        assert_eq!(item_count(4), 16);
        assert_eq!(item_count(1), 1);
    }

    #[test]
    fn checked_mapping_rejects_out_of_range() {
        assert_eq!(
            try_coordinates_from_position(9, 3),
            Err(GridError::PositionOutOfRange {
                position: 9,
                item_count: 9
            })
        );
        assert_eq!(
            try_coordinates_from_position(0, 0),
            Err(GridError::InvalidBoardSize(0))
        );
        assert!(position_from_coordinates(Coordinates::new(0, 3), 3).is_err());
        assert_eq!(position_from_coordinates(Coordinates::new(2, 1), 3), Ok(7));
    }

    #[test]
    fn display_is_one_based() {
        let mut s = alloc::string::String::new();
        core::fmt::write(&mut s, format_args!("{}", Coordinates::new(0, 2))).unwrap();
        assert_eq!(s, "1-3");
    }
}
