use tracing::{debug, instrument, trace};

use super::{
    place_food_randomly_at_positions, Editor, GameMap, Metadata, SizeList, TAG_FOOD_PLACEMENT,
};
use crate::board::setup::create_default_board_state;
use crate::board::{get_unoccupied_points, BoardState};
use crate::errors::{Result, RulesError};
use crate::random::Rand;
use crate::settings::Settings;
use crate::types::{Point, BOARD_SIZE_SMALL, BOARD_SIZE_XXLARGE};

/// Classic snake: there is always exactly one food on the board.
///
/// When the food is eaten a new one appears on a random free cell. If the
/// board somehow ends up with several food, the smallest point (by x, then
/// y) is kept so the result does not depend on randomness. A board with no
/// free cell left simply has no food.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicSnakeMap;

impl GameMap for ClassicSnakeMap {
    fn id(&self) -> &'static str {
        "classic_snake"
    }

    fn meta(&self) -> Metadata {
        Metadata {
            name: "Classic Snake",
            description: "Classic Snake food behavior with exactly one food on the board",
            author: "Battlesnake",
            version: 1,
            min_players: 1,
            max_players: 16,
            board_sizes: SizeList::odd_sizes(BOARD_SIZE_SMALL, BOARD_SIZE_XXLARGE),
            tags: vec![TAG_FOOD_PLACEMENT],
        }
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(map = "classic_snake", snakes = initial_board_state.snakes.len())
    )]
    fn setup_board(
        &self,
        initial_board_state: &BoardState,
        settings: &Settings,
        editor: &mut dyn Editor,
    ) -> Result<()> {
        let mut rand = settings.get_rand(0);

        if initial_board_state.snakes.len() > self.meta().max_players as usize {
            return Err(RulesError::TooManySnakes);
        }

        let snake_ids = initial_board_state.snake_ids();
        let temp_board_state = create_default_board_state(
            rand.as_mut(),
            initial_board_state.width,
            initial_board_state.height,
            &snake_ids,
        )?;

        for snake in temp_board_state.snakes.iter() {
            editor.place_snake(&snake.id, snake.body.clone(), snake.health);
        }

        apply_classic_food_rules(rand.as_mut(), &temp_board_state, editor);
        Ok(())
    }

    fn pre_update_board(
        &self,
        _last_board_state: &BoardState,
        _settings: &Settings,
        _editor: &mut dyn Editor,
    ) -> Result<()> {
        Ok(())
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(map = "classic_snake", turn = last_board_state.turn)
    )]
    fn post_update_board(
        &self,
        last_board_state: &BoardState,
        settings: &Settings,
        editor: &mut dyn Editor,
    ) -> Result<()> {
        let mut rand = settings.get_rand(last_board_state.turn);

        if last_board_state.food.len() == 1 {
            trace!("single food already on the board");
            return Ok(());
        }

        apply_classic_food_rules(rand.as_mut(), last_board_state, editor);
        Ok(())
    }
}

/// Bring the board down (or up) to a single food.
///
/// Existing food wins over new food: if there is any, keep only the
/// [select_deterministic_food] pick. Otherwise place one food on a random
/// free cell, where free excludes snake bodies, the cells next to snake heads
/// and hazards. With no free cell the board is left without food.
pub fn apply_classic_food_rules(rand: &mut dyn Rand, board: &BoardState, editor: &mut dyn Editor) {
    if let Some(selected) = select_deterministic_food(&board.food) {
        if board.food.len() > 1 {
            debug!(count = board.food.len(), kept = %selected, "trimming extra food");
        }
        editor.clear_food();
        editor.add_food(selected);
        return;
    }

    let unoccupied = get_unoccupied_points(board, false, true);
    if unoccupied.is_empty() {
        debug!("no free cell left for food");
        return;
    }

    place_food_randomly_at_positions(rand, editor, 1, unoccupied);
}

/// The smallest food point, comparing x and then y. `None` when there is no food.
pub fn select_deterministic_food(food: &[Point]) -> Option<Point> {
    food.iter().min().copied()
}
