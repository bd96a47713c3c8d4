//! Game settings passed to every map lifecycle call
use serde::{Deserialize, Serialize};

use crate::random::{MaxRand, MinRand, Rand, SeedRand};

/// A fixed random source that overrides seeding, mostly useful in tests
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FixedRand {
    /// see [MinRand]
    Min,
    /// see [MaxRand]
    Max,
}

/// Settings for a single game.
///
/// These are usually loaded from the game config as json, every field is
/// optional:
/// ```
/// # use battlesnake_maps::settings::Settings;
/// let settings: Settings = serde_json::from_str(r#"{"seed": 1234, "minimumFood": 2}"#).unwrap();
/// assert_eq!(settings.minimum_food, 2);
/// assert_eq!(settings.food_spawn_chance, 15);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// root seed every turn's random source is derived from
    pub seed: i64,
    /// percent chance of spawning an extra food each turn, for maps that use it
    pub food_spawn_chance: u32,
    /// food count maps that use it will top the board up to
    pub minimum_food: u32,
    /// when set, every scope gets this source instead of a seeded one
    pub rand: Option<FixedRand>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            seed: 0,
            food_spawn_chance: 15,
            minimum_food: 1,
            rand: None,
        }
    }
}

impl Settings {
    #[allow(missing_docs)]
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }

    #[allow(missing_docs)]
    pub fn with_rand(mut self, rand: FixedRand) -> Self {
        self.rand = Some(rand);
        self
    }

    #[allow(missing_docs)]
    pub fn with_food_spawn_chance(mut self, chance: u32) -> Self {
        self.food_spawn_chance = chance;
        self
    }

    #[allow(missing_docs)]
    pub fn with_minimum_food(mut self, minimum_food: u32) -> Self {
        self.minimum_food = minimum_food;
        self
    }

    /// A random source for the given scope, 0 during setup and the turn number
    /// afterwards. The same seed and scope always produce the same stream.
    pub fn get_rand(&self, scope: u32) -> Box<dyn Rand> {
        match self.rand {
            Some(FixedRand::Min) => Box::new(MinRand),
            Some(FixedRand::Max) => Box::new(MaxRand),
            None => Box::new(SeedRand::new(
                self.seed.wrapping_add(i64::from(scope) + 1),
            )),
        }
    }
}
