//! various types that are useful for working with battlesnake boards
use serde::{Deserialize, Serialize};
use std::fmt;

/// Health a snake starts with, and is restored to when it eats
pub const SNAKE_MAX_HEALTH: i32 = 100;

/// Number of (stacked) body segments a snake starts with
pub const SNAKE_START_SIZE: usize = 3;

#[allow(missing_docs)]
pub const BOARD_SIZE_SMALL: u32 = 7;
#[allow(missing_docs)]
pub const BOARD_SIZE_MEDIUM: u32 = 11;
#[allow(missing_docs)]
pub const BOARD_SIZE_LARGE: u32 = 19;
#[allow(missing_docs)]
pub const BOARD_SIZE_XLARGE: u32 = 21;
#[allow(missing_docs)]
pub const BOARD_SIZE_XXLARGE: u32 = 25;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// x position
    pub x: i64,
    /// y position
    pub y: i64,
}

/// A cell on the board. (0, 0) is the bottom left corner.
///
/// The derived ordering compares `x` first and breaks ties on `y`, which is
/// the order maps use whenever they need to pick one point out of many
/// without consulting a random source.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
pub struct Point {
    #[allow(missing_docs)]
    pub x: i32,
    #[allow(missing_docs)]
    pub y: i32,
}

impl Point {
    /// shorthand constructor
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// move this point by the given vector
    pub fn add_vec(&self, v: Vector) -> Point {
        Point {
            x: (self.x as i64 + v.x) as i32,
            y: (self.y as i64 + v.y) as i32,
        }
    }

    /// the four points a snake with its head here could move to next
    pub fn neighbors(&self) -> impl Iterator<Item = Point> + '_ {
        Move::all().into_iter().map(move |mv| self.add_vec(mv.to_vector()))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Represents a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Right,
}

impl Move {
    /// convert this move to a vector
    pub fn to_vector(self) -> Vector {
        match self {
            Move::Left => Vector { x: -1, y: 0 },
            Move::Right => Vector { x: 1, y: 0 },
            Move::Up => Vector { x: 0, y: 1 },
            Move::Down => Vector { x: 0, y: -1 },
        }
    }

    /// returns a vec of all possible moves
    pub fn all() -> Vec<Move> {
        vec![Move::Up, Move::Down, Move::Left, Move::Right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_ordering_is_x_then_y() {
        let mut points = vec![Point::new(5, 2), Point::new(1, 4), Point::new(1, 3)];
        points.sort();
        assert_eq!(
            points,
            vec![Point::new(1, 3), Point::new(1, 4), Point::new(5, 2)]
        );
    }

    #[test]
    fn test_neighbors() {
        let p = Point::new(3, 3);
        let ns: Vec<_> = p.neighbors().collect();
        assert_eq!(
            ns,
            vec![
                Point::new(3, 4),
                Point::new(3, 2),
                Point::new(2, 3),
                Point::new(4, 3)
            ]
        );
    }

    #[test]
    fn test_point_wire_format() {
        let p: Point = serde_json::from_str(r#"{"x":4,"y":7}"#).unwrap();
        assert_eq!(p, Point::new(4, 7));
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"x":4,"y":7}"#);
    }
}
