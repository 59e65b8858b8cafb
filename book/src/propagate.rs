use engine::{PlayedMove, Position};
use log::warn;

use crate::book::Book;
use crate::error::BookError;
use crate::eval::Eval;
use crate::node::{BookNode, DUMMY_PRIORITY, LEAF_PRIORITY};
use crate::store::KvStore;

/// Number of legal moves whose resulting position has a stored node.
pub fn count_stored_children<S: KvStore, P: Position>(
    book: &Book<S>,
    position: &P,
) -> Result<usize, BookError> {
    let mut position = position.clone();
    let mut count = 0;

    for mv in position.legal_moves() {
        let mut played = PlayedMove::new(&mut position, mv);
        if book.get_node(played.position())?.is_some() {
            count += 1;
        }
    }

    Ok(count)
}

/// One-ply minimax backup: sets the node's value to the maximum over stored
/// children of the child value inverted to this node's perspective. Keeps
/// the current value when no child is stored, so heuristic and terminal
/// seeds survive.
pub fn update_value<S: KvStore, P: Position>(
    book: &Book<S>,
    node: &mut BookNode,
    position: &mut P,
) -> Result<(), BookError> {
    let mut best: Option<Eval> = None;

    for mv in position.legal_moves() {
        let mut played = PlayedMove::new(position, mv);
        if let Some(child) = book.get_node(played.position())? {
            let value = child.effective_value(played.get()).invert();
            if best.map_or(true, |best_value| value.as_f32() > best_value.as_f32()) {
                best = Some(value);
            }
        }
    }

    if let Some(best) = best {
        node.value = best;
    }

    Ok(())
}

/// Expansion priority of a child: how much regret-weighted work remains
/// below it. `alpha` trades value regret against depth; the added one
/// charges a unit of depth per level.
///
/// The child value is adjusted for the swap option, the parent's is not: the
/// parent already holds the minimax value over its children. A parent value
/// below the child's contribution means propagation has not run since the
/// child changed, which this surfaces as corrupt data.
pub fn compute_priority<P: Position>(
    position: &P,
    parent: &BookNode,
    child: &BookNode,
    alpha: f32,
) -> Result<f32, BookError> {
    let delta = parent.value.as_f32() - child.effective_value(position).invert().as_f32();

    if delta < 0.0 {
        warn!("negative expansion delta {}: parent value is stale", delta);
        return Err(BookError::Corrupt(format!(
            "negative expansion delta: {}",
            delta
        )));
    }

    if !(LEAF_PRIORITY..DUMMY_PRIORITY).contains(&child.priority) {
        warn!("child priority {} out of range", child.priority);
        return Err(BookError::Corrupt(format!(
            "child priority out of range: {}",
            child.priority
        )));
    }

    Ok(alpha * delta + child.priority + 1.0)
}

/// Sets the node's priority to the minimum over stored children: the
/// cheapest-to-improve descendant decides how urgent the node is. Returns
/// the move to that child, the recommended next step for best-first
/// expansion. `None` when no child is stored.
pub fn update_priority<S: KvStore, P: Position>(
    book: &Book<S>,
    node: &mut BookNode,
    position: &mut P,
    alpha: f32,
) -> Result<Option<P::Move>, BookError> {
    let mut best: Option<(P::Move, f32)> = None;

    for mv in position.legal_moves() {
        let mut played = PlayedMove::new(position, mv);
        if let Some(child) = book.get_node(played.position())? {
            let priority = compute_priority(played.get(), node, &child, alpha)?;
            if best.map_or(true, |(_, best_priority)| priority < best_priority) {
                best = Some((mv, priority));
            }
        }
    }

    if let Some((_, priority)) = best {
        node.priority = priority;
    }

    Ok(best.map(|(mv, _)| mv))
}
