//! Maps decide how a board is laid out at the start of a game and how it
//! changes every turn for one mechanic (food placement, hazards, ...).
//!
//! The host owns the board and the turn loop. For each game it calls
//! [GameMap::setup_board] once, then [GameMap::pre_update_board] and
//! [GameMap::post_update_board] every turn, passing the previous turn's board
//! and an [Editor] bound to the board being built. Maps hold no state between
//! calls, all randomness comes from [Settings::get_rand].
//!
//! ```
//! # use battlesnake_maps::board::BoardState;
//! # use battlesnake_maps::maps::{BoardStateEditor, GameMap, MapRegistry};
//! # use battlesnake_maps::settings::Settings;
//! let registry = MapRegistry::builtin();
//! let map = registry.get_map("classic_snake").unwrap();
//! let settings = Settings::default().with_seed(42);
//!
//! let initial = BoardState::new(11, 11);
//! let mut next = BoardState::new(11, 11);
//! map.setup_board(&initial, &settings, &mut BoardStateEditor::new(&mut next)).unwrap();
//! assert_eq!(next.food.len(), 1);
//! ```
mod classic_snake;
mod editor;
mod empty;
mod helpers;
mod registry;
mod standard;

use std::fmt;

use serde::Serialize;

use crate::board::BoardState;
use crate::errors::{Result, RulesError};
use crate::settings::Settings;

pub use classic_snake::{apply_classic_food_rules, select_deterministic_food, ClassicSnakeMap};
pub use editor::{BoardStateEditor, Editor};
pub use empty::EmptyMap;
pub use helpers::place_food_randomly_at_positions;
pub use registry::{MapConstructor, MapRegistry, BUILTIN_MAPS};
pub use standard::StandardMap;

/// Tag for maps that control where food is placed
pub const TAG_FOOD_PLACEMENT: &str = "food-placement";
/// Tag for maps that control where snakes start
pub const TAG_SNAKE_PLACEMENT: &str = "snake-placement";

/// A pluggable board policy
pub trait GameMap: Send + Sync + fmt::Debug {
    /// the stable id this map is registered under
    fn id(&self) -> &'static str;

    /// static description the host validates a game config against
    fn meta(&self) -> Metadata;

    /// lay out the initial board. `initial_board_state` carries the size and
    /// the snakes that joined the game
    fn setup_board(
        &self,
        initial_board_state: &BoardState,
        settings: &Settings,
        editor: &mut dyn Editor,
    ) -> Result<()>;

    /// called every turn before moves are applied
    fn pre_update_board(
        &self,
        last_board_state: &BoardState,
        settings: &Settings,
        editor: &mut dyn Editor,
    ) -> Result<()>;

    /// called every turn after moves, eating and eliminations are applied
    fn post_update_board(
        &self,
        last_board_state: &BoardState,
        settings: &Settings,
        editor: &mut dyn Editor,
    ) -> Result<()>;
}

/// Width and height of a board
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    #[allow(missing_docs)]
    pub width: u32,
    #[allow(missing_docs)]
    pub height: u32,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The board sizes a map can be played on
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum SizeList {
    /// no restriction
    Any,
    /// only these exact sizes
    Fixed(Vec<Dimensions>),
}

impl SizeList {
    /// any board size
    pub fn any_size() -> Self {
        SizeList::Any
    }

    /// square boards with an odd side length between `min` and `max`, inclusive
    pub fn odd_sizes(min: u32, max: u32) -> Self {
        let start = if min % 2 == 0 { min + 1 } else { min };
        SizeList::Fixed(
            (start..=max)
                .step_by(2)
                .map(|side| Dimensions {
                    width: side,
                    height: side,
                })
                .collect(),
        )
    }

    /// square boards with the given side lengths
    pub fn fixed_sizes(sides: &[u32]) -> Self {
        SizeList::Fixed(
            sides
                .iter()
                .map(|side| Dimensions {
                    width: *side,
                    height: *side,
                })
                .collect(),
        )
    }

    #[allow(missing_docs)]
    pub fn is_allowable(&self, width: u32, height: u32) -> bool {
        match self {
            SizeList::Any => true,
            SizeList::Fixed(sizes) => sizes
                .iter()
                .any(|d| d.width == width && d.height == height),
        }
    }
}

impl fmt::Display for SizeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeList::Any => write!(f, "any size"),
            SizeList::Fixed(sizes) => {
                let sizes: Vec<String> = sizes.iter().map(|d| d.to_string()).collect();
                write!(f, "{}", sizes.join(", "))
            }
        }
    }
}

/// Static information about a map
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[allow(missing_docs)]
    pub name: &'static str,
    #[allow(missing_docs)]
    pub description: &'static str,
    #[allow(missing_docs)]
    pub author: &'static str,
    #[allow(missing_docs)]
    pub version: u32,
    /// inclusive
    pub min_players: u32,
    /// inclusive
    pub max_players: u32,
    #[allow(missing_docs)]
    pub board_sizes: SizeList,
    /// see the `TAG_*` constants
    pub tags: Vec<&'static str>,
}

impl Metadata {
    /// Check a game config against this map before any lifecycle call
    pub fn validate(&self, width: u32, height: u32, snake_count: usize) -> Result<()> {
        if !self.board_sizes.is_allowable(width, height) {
            return Err(RulesError::InvalidBoardSize {
                width,
                height,
                allowed: self.board_sizes.to_string(),
            });
        }
        if snake_count < self.min_players as usize || snake_count > self.max_players as usize {
            return Err(RulesError::InvalidPlayerCount {
                count: snake_count,
                min: self.min_players,
                max: self.max_players,
            });
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_sizes() {
        let sizes = SizeList::odd_sizes(7, 12);
        assert_eq!(sizes, SizeList::fixed_sizes(&[7, 9, 11]));
        assert!(sizes.is_allowable(9, 9));
        assert!(!sizes.is_allowable(8, 8));
        assert!(!sizes.is_allowable(9, 11));
        assert!(!sizes.is_allowable(13, 13));
        assert_eq!(sizes.to_string(), "7x7, 9x9, 11x11");

        assert_eq!(SizeList::odd_sizes(6, 7), SizeList::fixed_sizes(&[7]));
        assert!(SizeList::any_size().is_allowable(4, 100));
    }

    fn meta() -> Metadata {
        Metadata {
            name: "Test",
            description: "",
            author: "",
            version: 1,
            min_players: 2,
            max_players: 4,
            board_sizes: SizeList::fixed_sizes(&[11]),
            tags: vec![],
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(meta().validate(11, 11, 2), Ok(()));
        assert_eq!(meta().validate(11, 11, 4), Ok(()));
        assert_eq!(
            meta().validate(11, 11, 5),
            Err(RulesError::InvalidPlayerCount {
                count: 5,
                min: 2,
                max: 4
            })
        );
        assert!(matches!(
            meta().validate(11, 11, 1),
            Err(RulesError::InvalidPlayerCount { .. })
        ));
        assert_eq!(
            meta().validate(7, 7, 2),
            Err(RulesError::InvalidBoardSize {
                width: 7,
                height: 7,
                allowed: "11x11".to_string()
            })
        );
    }

    #[test]
    fn test_metadata_serializes_for_hosts() {
        let json = serde_json::to_value(meta()).unwrap();
        assert_eq!(json["maxPlayers"], 4);
        assert_eq!(json["boardSizes"]["Fixed"][0]["width"], 11);
    }
}
