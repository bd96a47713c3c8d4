//! Default starting layouts for a new game.
//!
//! The well known board sizes get a fixed, fair layout: snakes start on
//! corner and edge midpoints and each gets a piece of food nearby. Any other
//! size falls back to random placement.
use tracing::{debug, instrument};

use super::{get_even_unoccupied_points, get_unoccupied_points, BoardState, Snake};
use crate::errors::{Result, RulesError};
use crate::random::{shuffle_slice, Rand};
use crate::types::{
    Point, BOARD_SIZE_LARGE, BOARD_SIZE_MEDIUM, BOARD_SIZE_SMALL, SNAKE_MAX_HEALTH,
    SNAKE_START_SIZE,
};

/// Build a fresh board with the given snakes and their starting food
#[instrument(level = "debug", skip(rand))]
pub fn create_default_board_state(
    rand: &mut dyn Rand,
    width: u32,
    height: u32,
    snake_ids: &[String],
) -> Result<BoardState> {
    let mut board = BoardState::new(width, height);
    place_snakes_automatically(rand, &mut board, snake_ids)?;
    place_food_automatically(rand, &mut board)?;
    Ok(board)
}

/// whether this board gets the fixed starting layout
pub fn is_fixed_board(board: &BoardState) -> bool {
    board.width == board.height
        && [BOARD_SIZE_SMALL, BOARD_SIZE_MEDIUM, BOARD_SIZE_LARGE].contains(&board.width)
}

#[allow(missing_docs)]
pub fn place_snakes_automatically(
    rand: &mut dyn Rand,
    board: &mut BoardState,
    snake_ids: &[String],
) -> Result<()> {
    if is_fixed_board(board) {
        place_snakes_fixed(rand, board, snake_ids)
    } else {
        place_snakes_randomly(rand, board, snake_ids)
    }
}

fn unplaced_snakes(snake_ids: &[String]) -> Vec<Snake> {
    snake_ids
        .iter()
        .map(|id| Snake {
            id: id.clone(),
            body: vec![],
            health: SNAKE_MAX_HEALTH,
        })
        .collect()
}

/// Start snakes on the four corners and four edge midpoints, one inside
/// from the wall. Supports at most eight snakes.
pub fn place_snakes_fixed(
    rand: &mut dyn Rand,
    board: &mut BoardState,
    snake_ids: &[String],
) -> Result<()> {
    let (mn, md, mx) = (1, (board.width as i32 - 1) / 2, board.width as i32 - 2);
    let mut corners = vec![
        Point::new(mn, mn),
        Point::new(mn, mx),
        Point::new(mx, mn),
        Point::new(mx, mx),
    ];
    let mut cardinals = vec![
        Point::new(mn, md),
        Point::new(md, mn),
        Point::new(md, mx),
        Point::new(mx, md),
    ];

    if snake_ids.len() > corners.len() + cardinals.len() {
        return Err(RulesError::TooManySnakes);
    }

    shuffle_slice(rand, &mut corners);
    shuffle_slice(rand, &mut cardinals);

    let start_points = if rand.int_n(2) == 0 {
        corners.into_iter().chain(cardinals).collect::<Vec<_>>()
    } else {
        cardinals.into_iter().chain(corners).collect::<Vec<_>>()
    };

    let mut snakes = unplaced_snakes(snake_ids);
    for (snake, start) in snakes.iter_mut().zip(start_points) {
        snake.body = vec![start; SNAKE_START_SIZE];
    }
    board.snakes = snakes;
    Ok(())
}

/// Start each snake on a random even square
pub fn place_snakes_randomly(
    rand: &mut dyn Rand,
    board: &mut BoardState,
    snake_ids: &[String],
) -> Result<()> {
    board.snakes = unplaced_snakes(snake_ids);

    for i in 0..board.snakes.len() {
        let unoccupied = get_even_unoccupied_points(board);
        if unoccupied.is_empty() {
            return Err(RulesError::NoRoomForSnake);
        }
        let start = unoccupied[rand.int_n(unoccupied.len())];
        board.snakes[i].body = vec![start; SNAKE_START_SIZE];
    }
    Ok(())
}

#[allow(missing_docs)]
pub fn place_food_automatically(rand: &mut dyn Rand, board: &mut BoardState) -> Result<()> {
    if is_fixed_board(board) {
        place_food_fixed(rand, board)
    } else {
        let n = board.snakes.len();
        place_food_randomly(rand, board, n);
        Ok(())
    }
}

/// Place one food diagonally next to each snake (always pointing away from
/// the middle of the board, never in a corner) and one food in the center.
pub fn place_food_fixed(rand: &mut dyn Rand, board: &mut BoardState) -> Result<()> {
    let center = Point::new(
        (board.width as i32 - 1) / 2,
        (board.height as i32 - 1) / 2,
    );
    let is_small_board = board.width * board.height < BOARD_SIZE_MEDIUM * BOARD_SIZE_MEDIUM;

    // small boards only have room for food near the first four snakes
    if board.snakes.len() <= 4 || !is_small_board {
        for i in 0..board.snakes.len() {
            let head = match board.snakes[i].head() {
                Some(head) => head,
                None => continue,
            };
            let candidates = [
                Point::new(head.x - 1, head.y - 1),
                Point::new(head.x - 1, head.y + 1),
                Point::new(head.x + 1, head.y - 1),
                Point::new(head.x + 1, head.y + 1),
            ];

            let available: Vec<Point> = candidates
                .iter()
                .copied()
                .filter(|p| *p != center)
                .filter(|p| {
                    !board.food.contains(p) && !board.snakes.iter().any(|s| s.body.contains(p))
                })
                .filter(|p| is_away_from_center(*p, head, center))
                .filter(|p| !is_corner(board, *p))
                .collect();

            if available.is_empty() {
                return Err(RulesError::NoRoomForFood);
            }
            let food = available[rand.int_n(available.len())];
            board.food.push(food);
        }
    }

    if !get_unoccupied_points(board, true, false).contains(&center) {
        return Err(RulesError::NoRoomForFood);
    }
    board.food.push(center);
    debug!(food = ?board.food, "placed fixed starting food");
    Ok(())
}

// further than the head from the center on at least one axis
fn is_away_from_center(p: Point, head: Point, center: Point) -> bool {
    (p.x < head.x && head.x < center.x)
        || (center.x < head.x && head.x < p.x)
        || (p.y < head.y && head.y < center.y)
        || (center.y < head.y && head.y < p.y)
}

fn is_corner(board: &BoardState, p: Point) -> bool {
    (p.x == 0 || p.x == board.width as i32 - 1) && (p.y == 0 || p.y == board.height as i32 - 1)
}

/// Spawn `n` food on random free cells, fewer if the board runs out of room
pub fn place_food_randomly(rand: &mut dyn Rand, board: &mut BoardState, n: usize) {
    let mut unoccupied = get_unoccupied_points(board, false, false);
    shuffle_slice(rand, &mut unoccupied);
    board.food.extend(unoccupied.into_iter().take(n));
}
