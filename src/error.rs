use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

/// Errors reported by the checked constructors and the `try_*` mutators.
///
/// The unchecked mutators never produce these: they degrade to a truncated
/// write or a no-op instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LStringError {
    /// A buffer expected to hold a nul terminator did not contain one (or was empty).
    NotNulTerminated,
    /// The length given for a borrowed buffer leaves no room for the nul terminator.
    InvalidLength {
        /// The requested content length.
        len: usize,
        /// The capacity of the borrowed buffer.
        capacity: usize,
    },
    /// A write did not fit. The bytes that did fit were still written.
    Truncated {
        /// Number of bytes the write wanted to store.
        requested: usize,
        /// Number of bytes actually stored.
        written: usize,
    },
    /// The allocator refused to provide storage for an owned string.
    AllocFailed(TryReserveError),
}

impl LStringError {
    /// The number of bytes dropped by a truncated write, or 0 for other errors.
    pub fn dropped(&self) -> usize {
        match self {
            LStringError::Truncated { requested, written } => requested - written,
            _ => 0,
        }
    }
}

impl Error for LStringError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LStringError::AllocFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for LStringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LStringError::NotNulTerminated => write!(f, "buffer is not nul-terminated"),
            LStringError::InvalidLength { len, capacity } => write!(
                f,
                "length {} does not fit a buffer of capacity {} with its nul terminator",
                len, capacity
            ),
            LStringError::Truncated { requested, written } => write!(
                f,
                "write truncated: {} of {} bytes stored",
                written, requested
            ),
            LStringError::AllocFailed(_) => write!(f, "could not allocate string storage"),
        }
    }
}

impl From<TryReserveError> for LStringError {
    fn from(e: TryReserveError) -> Self {
        LStringError::AllocFailed(e)
    }
}

/// Turns a `(requested, written)` pair from the primitives into a result.
pub(crate) fn check_truncation(requested: usize, written: usize) -> Result<(), LStringError> {
    if written < requested {
        Err(LStringError::Truncated { requested, written })
    } else {
        Ok(())
    }
}
