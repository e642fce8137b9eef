use crate::Error;

/// Number of vertically stacked pixels stored in one packed byte.
pub const BITS_PER_BYTE: usize = 8;

/// Packs a sequence of 8 pixels into one byte.
///
/// Bit `i` of the result (0 being the least significant bit) is set when `sequence[i]` is set.
/// Any sequence which does not hold exactly 8 pixels is rejected with [`Error::InvalidInput`].
pub fn pack(sequence: &[bool]) -> Result<u8, Error> {
    if sequence.len() != BITS_PER_BYTE {
        return Err(Error::InvalidInput(sequence.len()));
    }

    Ok(sequence
        .iter()
        .enumerate()
        .fold(0, |byte, (idx, &pixel)| byte | (pixel as u8) << idx))
}
