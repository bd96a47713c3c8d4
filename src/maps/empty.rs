use tracing::instrument;

use super::{Editor, GameMap, Metadata, SizeList, TAG_SNAKE_PLACEMENT};
use crate::board::setup::place_snakes_automatically;
use crate::board::BoardState;
use crate::errors::{Result, RulesError};
use crate::settings::Settings;

/// Default snake placement and nothing else, the board never gets food
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyMap;

impl GameMap for EmptyMap {
    fn id(&self) -> &'static str {
        "empty"
    }

    fn meta(&self) -> Metadata {
        Metadata {
            name: "Empty",
            description: "Default snake placement with no food",
            author: "Battlesnake",
            version: 1,
            min_players: 1,
            max_players: 16,
            board_sizes: SizeList::any_size(),
            tags: vec![TAG_SNAKE_PLACEMENT],
        }
    }

    #[instrument(level = "debug", skip_all, fields(map = "empty"))]
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

        let mut temp_board_state =
            BoardState::new(initial_board_state.width, initial_board_state.height);
        place_snakes_automatically(
            rand.as_mut(),
            &mut temp_board_state,
            &initial_board_state.snake_ids(),
        )?;

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

    fn post_update_board(
        &self,
        _last_board_state: &BoardState,
        _settings: &Settings,
        _editor: &mut dyn Editor,
    ) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Snake;
    use crate::maps::BoardStateEditor;

    #[test]
    fn test_meta() {
        let meta = EmptyMap.meta();
        assert_eq!(meta.tags, vec![TAG_SNAKE_PLACEMENT]);
        assert_eq!(meta.validate(4, 9, 16), Ok(()));
    }

    #[test]
    fn test_setup_places_snakes_without_food() {
        let initial = BoardState::new(11, 11).with_snakes(
            ["a", "b", "c"]
                .iter()
                .map(|id| Snake {
                    id: id.to_string(),
                    body: vec![],
                    health: 0,
                })
                .collect(),
        );
        let mut next = BoardState::new(11, 11);

        EmptyMap
            .setup_board(
                &initial,
                &Settings::default().with_seed(8),
                &mut BoardStateEditor::new(&mut next),
            )
            .unwrap();

        assert_eq!(next.snake_ids(), vec!["a", "b", "c"]);
        assert!(next.snakes.iter().all(|s| s.body.len() == 3));
        assert!(next.food.is_empty());

        let last = next.clone();
        EmptyMap
            .post_update_board(&last, &Settings::default(), &mut BoardStateEditor::new(&mut next))
            .unwrap();
        assert_eq!(next, last);
    }
}
