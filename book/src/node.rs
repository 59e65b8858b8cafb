use std::fmt::{self, Display, Formatter};

use engine::Position;

use crate::error::BookError;
use crate::eval::Eval;

/// Priority of an unexpanded node; the reserved minimum of the valid range.
pub const LEAF_PRIORITY: f32 = 0.0;

/// Reserved maximum standing for "priority not yet computed". Never valid on
/// a stored node.
pub const DUMMY_PRIORITY: f32 = f32::MAX;

/// Bytes in one persisted node record: value, priority, heuristic value and
/// visit count, all little-endian.
pub const NODE_RECORD_LEN: usize = 16;

/// One evaluated position in the book.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BookNode {
    /// Evaluation for the player to move, kept in sync with the stored
    /// children by value propagation.
    pub value: Eval,
    /// Best-first expansion rank; lower means more urgent.
    pub priority: f32,
    /// Evaluation the node was created with. Propagation never touches it.
    pub heuristic: Eval,
    /// Times the node has been expanded. Zero marks a leaf.
    pub count: u32,
}

impl BookNode {
    pub fn new(heuristic: Eval) -> Self {
        Self {
            value: heuristic,
            priority: LEAF_PRIORITY,
            heuristic,
            count: 0,
        }
    }

    /// The stored value, taking the swap option into account: when the
    /// position permits a swap, the player to move keeps the better of
    /// playing on and swapping, so the inverted value is a floor.
    pub fn effective_value<P: Position>(&self, position: &P) -> Eval {
        if position.swap_allowed() {
            let inverted = self.value.invert();
            if inverted.as_f32() > self.value.as_f32() {
                return inverted;
            }
        }
        self.value
    }

    /// Move-selection score from the parent's perspective, with an
    /// exploration bonus for well-visited nodes. Proven nodes get no bonus;
    /// their value is certain.
    pub fn score<P: Position>(&self, position: &P, count_weight: f32) -> f32 {
        let mut score = self.effective_value(position).invert().as_f32();
        if !self.is_terminal() {
            score += ((self.count + 1) as f32).ln() * count_weight;
        }
        score
    }

    pub fn is_terminal(&self) -> bool {
        self.value.is_terminal()
    }

    pub fn is_leaf(&self) -> bool {
        self.count == 0
    }

    pub fn encode(&self) -> [u8; NODE_RECORD_LEN] {
        let mut bytes = [0u8; NODE_RECORD_LEN];
        bytes[0..4].copy_from_slice(&self.value.as_f32().to_le_bytes());
        bytes[4..8].copy_from_slice(&self.priority.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.heuristic.as_f32().to_le_bytes());
        bytes[12..16].copy_from_slice(&self.count.to_le_bytes());
        bytes
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, BookError> {
        if bytes.len() != NODE_RECORD_LEN {
            return Err(BookError::Corrupt(format!(
                "node record has {} bytes, expected {}",
                bytes.len(),
                NODE_RECORD_LEN
            )));
        }

        let value = Eval::from_f32(read_f32(bytes, 0))?;
        let priority = read_f32(bytes, 4);
        let heuristic = Eval::from_f32(read_f32(bytes, 8))?;
        let count = u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);

        if !(LEAF_PRIORITY..DUMMY_PRIORITY).contains(&priority) {
            return Err(BookError::Corrupt(format!(
                "node priority out of range: {}",
                priority
            )));
        }

        Ok(Self {
            value,
            priority,
            heuristic,
            count,
        })
    }
}

fn read_f32(bytes: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

impl Display for BookNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value={} priority={} heuristic={} count={}",
            self.value, self.priority, self.heuristic, self.count
        )
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn test_new_node_is_leaf_seeded_with_heuristic() {
        let node = BookNode::new(Eval::Estimate(0.4));

        assert!(node.is_leaf());
        assert!(!node.is_terminal());
        assert_eq!(node.value, Eval::Estimate(0.4));
        assert_eq!(node.heuristic, Eval::Estimate(0.4));
        assert_eq!(node.priority, LEAF_PRIORITY);
    }

    #[test]
    fn test_terminal_iff_proven() {
        assert!(BookNode::new(Eval::Win).is_terminal());
        assert!(BookNode::new(Eval::Loss).is_terminal());
        assert!(!BookNode::new(Eval::Estimate(0.99)).is_terminal());
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let node = BookNode {
            value: Eval::Estimate(0.37),
            priority: 12.5,
            heuristic: Eval::Estimate(0.61),
            count: 42,
        };

        let decoded = BookNode::decode(&node.encode()).unwrap();
        assert_eq!(decoded, node);
    }

    #[test]
    fn test_encode_decode_round_trip_proven() {
        let mut node = BookNode::new(Eval::Win);
        node.count = 3;

        let decoded = BookNode::decode(&node.encode()).unwrap();
        assert_eq!(decoded, node);
    }

    #[test]
    fn test_decode_rejects_short_record() {
        assert!(BookNode::decode(&[0u8; 8]).is_err());
    }

    #[test]
    fn test_decode_rejects_out_of_range_value() {
        let mut bytes = BookNode::new(Eval::Estimate(0.5)).encode();
        bytes[0..4].copy_from_slice(&2.5f32.to_le_bytes());
        assert!(BookNode::decode(&bytes).is_err());
    }

    #[test]
    fn test_decode_rejects_dummy_priority() {
        let mut bytes = BookNode::new(Eval::Estimate(0.5)).encode();
        bytes[4..8].copy_from_slice(&DUMMY_PRIORITY.to_le_bytes());
        assert!(BookNode::decode(&bytes).is_err());
    }

    #[test]
    fn test_effective_value_takes_swap_into_account() {
        let mut board = hex::Board::new(3, 3).unwrap();
        board.set_swap_rule(true);
        board.play_move(hex::Color::Black, hex::Cell::new(1, 1));

        let node = BookNode::new(Eval::Estimate(0.3));
        assert_eq!(node.effective_value(&board), Eval::Estimate(0.7));

        let kept = BookNode::new(Eval::Estimate(0.9));
        assert_eq!(kept.effective_value(&board), Eval::Estimate(0.9));
    }

    #[test]
    fn test_effective_value_without_swap_option() {
        let mut board = hex::Board::new(3, 3).unwrap();
        board.play_move(hex::Color::Black, hex::Cell::new(1, 1));

        let node = BookNode::new(Eval::Estimate(0.3));
        assert_eq!(node.effective_value(&board), Eval::Estimate(0.3));
    }

    #[test]
    fn test_effective_value_keeps_proven_win_under_swap() {
        let mut board = hex::Board::new(3, 3).unwrap();
        board.set_swap_rule(true);
        board.play_move(hex::Color::Black, hex::Cell::new(1, 1));

        let node = BookNode::new(Eval::Win);
        assert_eq!(node.effective_value(&board), Eval::Win);
    }

    #[test]
    fn test_score_adds_count_bonus() {
        let mut node = BookNode::new(Eval::Estimate(0.2));
        node.count = 7;

        let board = hex::Board::new(3, 3).unwrap();
        let expected = 0.8 + (8.0f32).ln() * 0.5;
        assert_approx_eq!(node.score(&board, 0.5), expected);
    }

    #[test]
    fn test_score_no_bonus_for_proven_nodes() {
        let mut node = BookNode::new(Eval::Loss);
        node.count = 7;

        let board = hex::Board::new(3, 3).unwrap();
        assert_approx_eq!(node.score(&board, 0.5), Eval::Win.as_f32());
    }
}
