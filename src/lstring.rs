use crate::error::LStringError;
use crate::lstr::LStr;
use crate::prims;

/// An owned, bounded byte string.
///
/// The buffer is obtained through an explicit allocation sized to its source
/// (`len + 1` bytes) and is released exactly once when the `LString` is
/// dropped. Its capacity never changes afterwards: the same truncating
/// mutators as [`LStrMut`](crate::LStrMut) apply.
///
/// ```
/// use lstring::{lstr, LString};
///
/// let src = lstr!("hey");
/// let mut s = LString::allocate_copy(src);
/// assert_eq!((s.len(), s.capacity()), (3, 4));
/// assert_ne!(s.as_bytes().as_ptr(), src.as_bytes().as_ptr());
///
/// s.drop_last();
/// assert_eq!(s, "he");
/// s.clear();
/// assert!(s.is_empty());
/// assert_eq!(s.capacity(), 4);
/// ```
#[derive(Clone, Default)]
pub struct LString {
    pub(crate) buf: Box<[u8]>,
    pub(crate) len: usize,
}

impl LString {
    prims::impl_lstr_meths!(read);
    prims::impl_lstr_meths!(view);
    prims::impl_lstr_meths!(write);
}

impl LString {
    /// A string with no buffer. Does not allocate.
    pub fn unset() -> LString {
        LString::default()
    }

    /// Allocates exactly `src.len() + 1` bytes and copies `src` into them.
    ///
    /// Returns an unset string (without allocating) when `src` is unset.
    ///
    /// # Errors
    /// [`LStringError::AllocFailed`] if the allocator cannot provide the buffer.
    pub fn try_allocate_copy(src: LStr<'_>) -> Result<LString, LStringError> {
        if !src.is_allocated() {
            return Ok(LString::unset());
        }

        let mut v = Vec::new();
        v.try_reserve_exact(src.len() + 1)?;
        v.extend_from_slice(src.as_bytes());
        v.push(prims::SENTINEL);

        Ok(LString {
            buf: v.into_boxed_slice(),
            len: src.len(),
        })
    }

    /// Allocates exactly `src.len() + 1` bytes and copies `src` into them.
    ///
    /// Allocation failure is not fatal: it is logged and an unset string is
    /// returned, so callers should check [`is_allocated`](Self::is_allocated).
    pub fn allocate_copy(src: LStr<'_>) -> LString {
        LString::try_allocate_copy(src).unwrap_or_else(|e| {
            log::warn!("allocate_copy of {} bytes failed: {}", src.len() + 1, e);
            LString::unset()
        })
    }

    /// Allocates a one byte buffer holding only the terminator.
    ///
    /// ```
    /// use lstring::LString;
    ///
    /// let s = LString::allocate_empty();
    /// assert!(s.is_allocated());
    /// assert!(s.is_empty());
    /// assert_eq!(s.capacity(), 1);
    /// ```
    pub fn allocate_empty() -> LString {
        LString::allocate_copy(crate::lstr!(""))
    }
}
