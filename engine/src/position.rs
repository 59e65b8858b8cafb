use std::fmt::{Debug, Display};

/// Board-side surface required by game-tree consumers.
///
/// A position is mutated in place: `play` places a stone for the side to
/// move, `undo` removes it again. Implementations must guarantee that a
/// `play` followed by an `undo` of the same move restores the position
/// exactly, including its hash.
pub trait Position: Clone + Debug {
    type Move: Copy + Eq + Debug + Display;

    /// All moves the side to move may play, in a stable enumeration order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    fn play(&mut self, mv: Self::Move);

    fn undo(&mut self, mv: Self::Move);

    fn player_to_move(&self) -> usize;

    fn stones_played(&self) -> usize;

    /// Stable hash of the placed stones.
    fn position_hash(&self) -> u64;

    /// The same physical position viewed after a half-turn of the board.
    fn rotate180(&self) -> Self;

    /// Whether the side to move may exercise the swap option.
    fn swap_allowed(&self) -> bool;
}
