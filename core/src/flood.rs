use alloc::vec::Vec;

use crate::*;

/// Grows the captured region into every uncaptured cell whose original color matches the
/// selected color and that is reachable from the region under the board's adjacency mode.
///
/// The frontier starts from every captured cell on the board and a cell enters it only on the
/// pass that captures it, so each cell is visited at most once. Returns how many cells were
/// captured.
pub fn flood_fill(board: &mut Board) -> CellCount {
    let target = board.selected_color();
    let mut frontier: Vec<Coord2> = board.captured_coords().collect();
    let mut captured: CellCount = 0;

    while let Some(coords) = frontier.pop() {
        for neighbor in board.neighbors(coords) {
            if board.original_color_at(neighbor) != target {
                continue;
            }
            if board.capture(neighbor) {
                captured += 1;
                frontier.push(neighbor);
            }
        }
    }

    log::trace!(
        "Flood fill with color {} ({}) captured {} cells, {}/{} owned",
        target,
        board.adjacency(),
        captured,
        board.captured_count(),
        board.total_cells()
    );
    captured
}
