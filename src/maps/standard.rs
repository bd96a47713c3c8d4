use tracing::{debug, instrument};

use super::{place_food_randomly_at_positions, Editor, GameMap, Metadata, SizeList};
use crate::board::setup::create_default_board_state;
use crate::board::{get_unoccupied_points, BoardState};
use crate::errors::{Result, RulesError};
use crate::settings::Settings;

/// The default map: standard starting layout, then food is topped up to
/// `minimum_food` and has a `food_spawn_chance` percent chance of an extra
/// spawn every turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardMap;

impl GameMap for StandardMap {
    fn id(&self) -> &'static str {
        "standard"
    }

    fn meta(&self) -> Metadata {
        Metadata {
            name: "Standard",
            description: "Standard snake placement and food spawning",
            author: "Battlesnake",
            version: 2,
            min_players: 1,
            max_players: 16,
            board_sizes: SizeList::any_size(),
            tags: vec![],
        }
    }

    #[instrument(level = "debug", skip_all, fields(map = "standard"))]
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

        let temp_board_state = create_default_board_state(
            rand.as_mut(),
            initial_board_state.width,
            initial_board_state.height,
            &initial_board_state.snake_ids(),
        )?;

        for food in temp_board_state.food.iter() {
            editor.add_food(*food);
        }
        for snake in temp_board_state.snakes.iter() {
            editor.place_snake(&snake.id, snake.body.clone(), snake.health);
        }
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
        fields(map = "standard", turn = last_board_state.turn)
    )]
    fn post_update_board(
        &self,
        last_board_state: &BoardState,
        settings: &Settings,
        editor: &mut dyn Editor,
    ) -> Result<()> {
        let mut rand = settings.get_rand(last_board_state.turn);

        let min_food = settings.minimum_food as usize;
        let current_food = last_board_state.food.len();
        let food_to_place = if current_food < min_food {
            min_food - current_food
        } else if settings.food_spawn_chance > 0
            && 100 - rand.int_n(100) < settings.food_spawn_chance as usize
        {
            1
        } else {
            0
        };

        if food_to_place > 0 {
            debug!(food_to_place, "spawning food");
            let unoccupied = get_unoccupied_points(last_board_state, false, false);
            place_food_randomly_at_positions(rand.as_mut(), editor, food_to_place, unoccupied);
        }
        Ok(())
    }
}
