//! errors produced while setting up or updating a board
use thiserror::Error;

/// Everything that can go wrong while a map builds or validates a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    /// more snakes were requested than the map (or board) has room for
    #[error("too many snakes for the selected map")]
    TooManySnakes,

    /// there was no free cell left to start a snake on
    #[error("not enough space to place snake")]
    NoRoomForSnake,

    /// the default board layout could not fit its starting food
    #[error("not enough space to place food")]
    NoRoomForFood,

    /// no map has been registered under this id
    #[error("map {0:?} not found")]
    MapNotFound(String),

    /// a map with this id was already registered
    #[error("map {0:?} is already registered")]
    DuplicateMap(String),

    /// the board dimensions are not one of the sizes the map supports
    #[error("this map can only be played on {allowed} boards, not {width}x{height}")]
    InvalidBoardSize {
        #[allow(missing_docs)]
        width: u32,
        #[allow(missing_docs)]
        height: u32,
        /// human readable list of the supported sizes
        allowed: String,
    },

    /// the number of snakes is outside of the map's player bounds
    #[error("this map can only be played with {min}-{max} players, got {count}")]
    InvalidPlayerCount {
        #[allow(missing_docs)]
        count: usize,
        #[allow(missing_docs)]
        min: u32,
        #[allow(missing_docs)]
        max: u32,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, RulesError>;
