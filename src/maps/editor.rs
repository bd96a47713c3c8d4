use crate::board::{BoardState, Snake};
use crate::types::Point;

/// The only way a map may change the board it is building. Maps issue
/// commands and never read back through the editor.
pub trait Editor: std::fmt::Debug {
    #[allow(missing_docs)]
    fn add_food(&mut self, p: Point);

    #[allow(missing_docs)]
    fn clear_food(&mut self);

    /// set the body and health of the snake with this id, adding it if the
    /// board does not have it yet
    fn place_snake(&mut self, id: &str, body: Vec<Point>, health: i32);
}

/// An [Editor] that applies commands straight to a [BoardState]
#[derive(Debug)]
pub struct BoardStateEditor<'a> {
    board: &'a mut BoardState,
}

impl<'a> BoardStateEditor<'a> {
    #[allow(missing_docs)]
    pub fn new(board: &'a mut BoardState) -> Self {
        BoardStateEditor { board }
    }
}

impl Editor for BoardStateEditor<'_> {
    fn add_food(&mut self, p: Point) {
        self.board.food.push(p);
    }

    fn clear_food(&mut self) {
        self.board.food.clear();
    }

    fn place_snake(&mut self, id: &str, body: Vec<Point>, health: i32) {
        match self.board.snakes.iter_mut().find(|s| s.id == id) {
            Some(snake) => {
                snake.body = body;
                snake.health = health;
            }
            None => self.board.snakes.push(Snake {
                id: id.to_string(),
                body,
                health,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food() {
        let mut board = BoardState::new(5, 5).with_hazards(vec![Point::new(0, 0)]);
        let mut editor = BoardStateEditor::new(&mut board);
        editor.add_food(Point::new(1, 1));
        editor.add_food(Point::new(2, 2));
        assert_eq!(board.food, vec![Point::new(1, 1), Point::new(2, 2)]);

        let mut editor = BoardStateEditor::new(&mut board);
        editor.clear_food();
        editor.add_food(Point::new(3, 3));
        assert_eq!(board.food, vec![Point::new(3, 3)]);
        // food commands leave hazards alone
        assert_eq!(board.hazards, vec![Point::new(0, 0)]);
    }

    #[test]
    fn test_place_snake_replaces_or_appends() {
        let mut board = BoardState::new(5, 5);
        let mut editor = BoardStateEditor::new(&mut board);
        editor.place_snake("a", vec![Point::new(1, 1); 3], 100);
        editor.place_snake("b", vec![Point::new(3, 3); 3], 100);
        editor.place_snake("a", vec![Point::new(1, 2), Point::new(1, 1)], 75);

        assert_eq!(board.snake_ids(), vec!["a", "b"]);
        assert_eq!(board.snakes[0].body, vec![Point::new(1, 2), Point::new(1, 1)]);
        assert_eq!(board.snakes[0].health, 75);
    }
}
