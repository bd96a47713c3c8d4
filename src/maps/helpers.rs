use tracing::trace;

use super::Editor;
use crate::random::{shuffle_slice, Rand};
use crate::types::Point;

/// Add `n` food chosen uniformly from `positions`. Places fewer when there
/// are not enough positions.
pub fn place_food_randomly_at_positions(
    rand: &mut dyn Rand,
    editor: &mut dyn Editor,
    n: usize,
    mut positions: Vec<Point>,
) {
    shuffle_slice(rand, &mut positions);
    for p in positions.into_iter().take(n) {
        trace!(food = %p, "placing food");
        editor.add_food(p);
    }
}
