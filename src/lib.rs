#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Board maps for [battlesnake](https://docs.battlesnake.com/).
//!
//! A map is a small, stateless policy that the game engine calls at three
//! points of a game: once to set up the board, then before and after every
//! turn. Maps only change the board through an [Editor](maps::Editor), and all
//! of their randomness comes from a source scoped to the turn, so replaying a
//! game with the same seed produces the same board every time.
//!
//! The interesting map here is [classic_snake](maps::ClassicSnakeMap), which
//! keeps exactly one food on the board:
//! ```
//! use battlesnake_maps::board::BoardState;
//! use battlesnake_maps::maps::{BoardStateEditor, ClassicSnakeMap, GameMap};
//! use battlesnake_maps::settings::Settings;
//! use battlesnake_maps::types::Point;
//!
//! let last = BoardState::new(7, 7)
//!     .with_food(vec![Point::new(5, 2), Point::new(1, 4), Point::new(1, 3)]);
//! let mut next = last.clone();
//! ClassicSnakeMap
//!     .post_update_board(&last, &Settings::default(), &mut BoardStateEditor::new(&mut next))
//!     .unwrap();
//! assert_eq!(next.food, vec![Point::new(1, 3)]);
//! ```

use board::BoardState;

pub mod board;
pub mod errors;
pub mod maps;
pub mod random;
pub mod settings;
pub mod types;

/// Loads a board fixture from a given string
pub fn board_fixture(board_fixture: &str) -> BoardState {
    let b: Result<BoardState, _> = serde_json::from_str(board_fixture);
    b.expect("the json literal is valid")
}
