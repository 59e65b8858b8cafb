/// Largest supported board edge. Boards are addressed through a 128-bit
/// occupancy mask, so width * height must stay within 128 bits.
pub const MAX_DIM: usize = 11;

pub const MAX_AREA: usize = MAX_DIM * MAX_DIM;

pub const ASCII_LETTER_A: u8 = b'a';
