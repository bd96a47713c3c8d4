//! The board state a map reads from and writes to
pub mod setup;

use crate::types::Point;
use fxhash::FxHashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A snake on the board
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    #[allow(missing_docs)]
    pub id: String,
    /// head first
    pub body: Vec<Point>,
    #[allow(missing_docs)]
    pub health: i32,
}

impl Snake {
    /// the first body segment, if the snake has been placed
    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }
}

/// A snapshot of one turn of a game
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    #[allow(missing_docs)]
    pub turn: u32,
    #[allow(missing_docs)]
    pub height: u32,
    #[allow(missing_docs)]
    pub width: u32,
    #[allow(missing_docs)]
    #[serde(default)]
    pub food: Vec<Point>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub snakes: Vec<Snake>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub hazards: Vec<Point>,
}

impl BoardState {
    /// an empty board of the given size at turn 0
    pub fn new(width: u32, height: u32) -> Self {
        BoardState {
            turn: 0,
            height,
            width,
            food: vec![],
            snakes: vec![],
            hazards: vec![],
        }
    }

    #[allow(missing_docs)]
    pub fn with_food(mut self, food: Vec<Point>) -> Self {
        self.food = food;
        self
    }

    #[allow(missing_docs)]
    pub fn with_snakes(mut self, snakes: Vec<Snake>) -> Self {
        self.snakes = snakes;
        self
    }

    #[allow(missing_docs)]
    pub fn with_hazards(mut self, hazards: Vec<Point>) -> Self {
        self.hazards = hazards;
        self
    }

    #[allow(missing_docs)]
    pub fn with_turn(mut self, turn: u32) -> Self {
        self.turn = turn;
        self
    }

    #[allow(missing_docs)]
    pub fn snake_ids(&self) -> Vec<String> {
        self.snakes.iter().map(|s| s.id.clone()).collect()
    }

    #[allow(missing_docs)]
    pub fn is_off_board(&self, p: Point) -> bool {
        p.x < 0 || p.x >= self.width as i32 || p.y < 0 || p.y >= self.height as i32
    }

    /// every on board cell, bottom row first, left to right within a row
    pub fn points(&self) -> impl Iterator<Item = Point> {
        (0..self.height as i32)
            .cartesian_product(0..self.width as i32)
            .map(|(y, x)| Point::new(x, y))
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for i in 0..self.height {
            let k = self.height - i - 1;
            for j in 0..self.width {
                let position = Point::new(j as i32, k as i32);
                if self.food.contains(&position) {
                    write!(f, "f")?;
                } else if self.snakes.iter().any(|s| s.head() == Some(position)) {
                    write!(f, "H")?;
                } else if self.snakes.iter().any(|s| s.body.contains(&position)) {
                    write!(f, "s")?;
                } else if self.hazards.contains(&position) {
                    write!(f, "x")?;
                } else {
                    write!(f, ".")?;
                }
                write!(f, " ")?;
            }
            writeln!(f)?;
        }
        for snake in self.snakes.iter() {
            write!(
                f,
                "({} health: {} head: {:?}) ",
                snake.id,
                snake.health,
                snake.head()
            )?;
        }
        Ok(())
    }
}

/// Cells that are free for placing something new.
///
/// Food and snake bodies always count as occupied. The cells a snake head
/// could move into next are occupied unless `include_possible_moves` is set,
/// and hazards are occupied only when `include_hazards` is set. The result is
/// in row order, bottom row first.
pub fn get_unoccupied_points(
    board: &BoardState,
    include_possible_moves: bool,
    include_hazards: bool,
) -> Vec<Point> {
    let mut occupied: FxHashSet<Point> = board.food.iter().copied().collect();

    for snake in board.snakes.iter() {
        occupied.extend(snake.body.iter().copied());
        if !include_possible_moves {
            if let Some(head) = snake.head() {
                occupied.extend(head.neighbors());
            }
        }
    }

    if include_hazards {
        occupied.extend(board.hazards.iter().copied());
    }

    board.points().filter(|p| !occupied.contains(p)).collect()
}

/// Unoccupied cells on the even checkerboard squares, `(x + y) % 2 == 0`.
/// Snakes started on these can never collide head on during the first turn.
pub fn get_even_unoccupied_points(board: &BoardState) -> Vec<Point> {
    get_unoccupied_points(board, true, false)
        .into_iter()
        .filter(|p| (p.x + p.y) % 2 == 0)
        .collect()
}
