use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Failures reported by the checked operations.
///
/// The unchecked cursor operations never produce these; misusing them is a
/// caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("the number of combinations is too large to address")]
    SizeOverflow,

    #[error("position {index} is outside 0..={len}")]
    OutOfRange { index: isize, len: usize },
}
