use std::cmp::Ordering;

use engine::{PlayedMove, Position};
use log::warn;

use crate::book::Book;
use crate::error::BookError;
use crate::eval::Eval;
use crate::node::BookNode;
use crate::store::KvStore;

/// The stored child move with the best selection score, or `None` when the
/// book has no recommendation: the position is absent, its node has fewer
/// than `min_count` visits, or no child is stored.
///
/// A node at or above the visit threshold is expected to have stored
/// children; the book builder owes that invariant and it cannot be checked
/// here. When it is broken the miss is reported like any other absence.
pub fn best_move<S: KvStore, P: Position>(
    book: &Book<S>,
    position: &P,
    min_count: u32,
    count_weight: f32,
) -> Result<Option<P::Move>, BookError> {
    let node = match book.get_node(position)? {
        Some(node) => node,
        None => return Ok(None),
    };
    if node.count < min_count {
        return Ok(None);
    }

    let mut position = position.clone();
    let mut best: Option<(P::Move, f32)> = None;

    for mv in position.legal_moves() {
        let mut played = PlayedMove::new(&mut position, mv);
        if let Some(child) = book.get_node(played.position())? {
            let score = child.score(played.get(), count_weight);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }
    }

    if best.is_none() {
        warn!(
            "book node has {} visits but no stored children",
            node.count
        );
    }

    Ok(best.map(|(mv, _)| mv))
}

/// Overrides the evaluation stored for the position, creating a fresh node
/// seeded with it when the position is not in the book yet. The caller
/// decides when to flush.
pub fn set_value<S: KvStore, P: Position>(
    book: &mut Book<S>,
    position: &P,
    value: Eval,
) -> Result<(), BookError> {
    let node = match book.get_node(position)? {
        Some(mut node) => {
            node.value = value;
            node
        }
        None => BookNode::new(value),
    };

    book.write_node(position, &node)
}

/// Main-line depth behind every legal move, stored or not.
pub fn main_line_depths<S: KvStore, P: Position>(
    book: &Book<S>,
    position: &P,
) -> Result<Vec<(P::Move, usize)>, BookError> {
    let mut position = position.clone();
    let mut depths = Vec::new();

    for mv in position.legal_moves() {
        let mut played = PlayedMove::new(&mut position, mv);
        let depth = book.main_line_depth(played.position())?;
        depths.push((mv, depth));
    }

    Ok(depths)
}

/// Visit counts of the stored children.
pub fn child_counts<S: KvStore, P: Position>(
    book: &Book<S>,
    position: &P,
) -> Result<Vec<(P::Move, u32)>, BookError> {
    let mut position = position.clone();
    let mut counts = Vec::new();

    for mv in position.legal_moves() {
        let mut played = PlayedMove::new(&mut position, mv);
        if let Some(child) = book.get_node(played.position())? {
            counts.push((mv, child.count));
        }
    }

    Ok(counts)
}

/// Selection scores of the stored children, best first. The sort is stable,
/// so equally scored moves keep their enumeration order.
pub fn child_scores<S: KvStore, P: Position>(
    book: &Book<S>,
    position: &P,
    count_weight: f32,
) -> Result<Vec<(P::Move, f32)>, BookError> {
    let mut position = position.clone();
    let mut scores = Vec::new();

    for mv in position.legal_moves() {
        let mut played = PlayedMove::new(&mut position, mv);
        if let Some(child) = book.get_node(played.position())? {
            scores.push((mv, child.score(played.get(), count_weight)));
        }
    }

    scores.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(Ordering::Equal));

    Ok(scores)
}
