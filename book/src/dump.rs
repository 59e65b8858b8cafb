use std::collections::HashSet;
use std::io::Write;

use engine::{PlayedMove, Position};

use crate::book::{canonical_key, Book};
use crate::error::BookError;
use crate::store::KvStore;

/// Writes one `value depth` line per stored leaf under the position, for
/// book-coverage analysis. Descent stops at leaves and at positions outside
/// the book.
pub fn dump_visualization_data<S: KvStore, P: Position, W: Write>(
    book: &Book<S>,
    position: &mut P,
    depth: usize,
    out: &mut W,
) -> Result<(), BookError> {
    let node = match book.get_node(position)? {
        Some(node) => node,
        None => return Ok(()),
    };

    if node.is_leaf() {
        writeln!(out, "{} {}", node.effective_value(position).as_f32(), depth)?;
        return Ok(());
    }

    for mv in position.legal_moves() {
        let mut played = PlayedMove::new(position, mv);
        dump_visualization_data(book, played.position(), depth + 1, out)?;
    }

    Ok(())
}

/// Writes the move sequence of every book line ending in a non-terminal node
/// with exactly `target_stones` stones. Transposed and rotated subtrees are
/// visited once, tracked by canonical key. `moves` accumulates the line and
/// is restored around every recursive step.
pub fn dump_non_terminal_states<S: KvStore, P: Position, W: Write>(
    book: &Book<S>,
    position: &mut P,
    target_stones: usize,
    moves: &mut Vec<P::Move>,
    out: &mut W,
) -> Result<(), BookError> {
    let mut seen = HashSet::new();
    dump_non_terminal(book, position, target_stones, &mut seen, moves, out)
}

fn dump_non_terminal<S: KvStore, P: Position, W: Write>(
    book: &Book<S>,
    position: &mut P,
    target_stones: usize,
    seen: &mut HashSet<u64>,
    moves: &mut Vec<P::Move>,
    out: &mut W,
) -> Result<(), BookError> {
    let key = canonical_key(position);
    if seen.contains(&key) {
        return Ok(());
    }

    let node = match book.get_node(position)? {
        Some(node) => node,
        None => return Ok(()),
    };

    let stones = position.stones_played();
    if stones > target_stones {
        return Ok(());
    }

    if stones == target_stones {
        if !node.is_terminal() {
            writeln!(out, "{}", format_moves(moves))?;
            seen.insert(key);
        }
        return Ok(());
    }

    // Below the target: only a deeper frontier can still be reached.
    if node.is_leaf() || node.is_terminal() {
        return Ok(());
    }

    for mv in position.legal_moves() {
        let mut played = PlayedMove::new(position, mv);
        moves.push(mv);
        let result = dump_non_terminal(book, played.position(), target_stones, seen, moves, out);
        moves.pop();
        result?;
    }
    seen.insert(key);

    Ok(())
}

fn format_moves<M: std::fmt::Display>(moves: &[M]) -> String {
    let mut line = String::new();
    for (i, mv) in moves.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&mv.to_string());
    }
    line
}
