//! Single-element list move, independent of any drag event.

/// Moves the element at `from` so it ends up at `to`, shifting everything in
/// between by one position. A move, not a swap.
///
/// Both indices must be in bounds; `from == to` is a no-op.
pub fn reorder_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to.min(items.len()), item);
}
