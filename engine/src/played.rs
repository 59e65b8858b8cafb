use crate::position::Position;

/// Plays a move on construction and undoes it when dropped.
///
/// Recursive tree walks share one mutable position; the move must be taken
/// back on every exit path, including early returns and `?`-propagated
/// errors. Scoping the undo to `Drop` makes that unconditional.
pub struct PlayedMove<'a, P: Position> {
    position: &'a mut P,
    mv: P::Move,
}

impl<'a, P: Position> PlayedMove<'a, P> {
    pub fn new(position: &'a mut P, mv: P::Move) -> Self {
        position.play(mv);
        Self { position, mv }
    }

    pub fn position(&mut self) -> &mut P {
        self.position
    }

    pub fn get(&self) -> &P {
        self.position
    }

    pub fn mv(&self) -> P::Move {
        self.mv
    }
}

impl<'a, P: Position> Drop for PlayedMove<'a, P> {
    fn drop(&mut self) {
        self.position.undo(self.mv);
    }
}
