use core::fmt;

/// Errors that list operations can surface.
///
/// Each variant shows an example of how it can be produced.
/// Producer exhaustion itself is never an error; operations resolve it
/// into either a shorter result or one of the variants below.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// `list.get(9)` on a producer that yields eight elements
    OutOfRange(isize),
    /// `list.index_of(&x, 0, None)` when no element equals `x`
    NotFound,
    /// `list.set_range(Some(0), None, 2, vs)` where `vs` has a different
    /// length than the selection (selection length, replacement length)
    SliceLen(usize, usize),
    /// `list.get_range(None, None, 0)`
    Step,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::OutOfRange(i) => write!(f, "index {i} is out of bounds"),
            Self::NotFound => write!(f, "value not found"),
            Self::SliceLen(sel, got) => {
                write!(f, "cannot assign {got} elements to a stride of length {sel}")
            }
            Self::Step => write!(f, "slice step cannot be zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
