use crate::error::LStringError;
use crate::lstring::LString;
use crate::prims;

/// A read-only, bounded byte string borrowing its buffer.
///
/// `LStr` is to [`LStrMut`](crate::LStrMut) what `&[u8]` is to `&mut [u8]`:
/// it never writes to the buffer, so it is `Copy` and any number of views may
/// alias the same storage. Assigning one `LStr` to another simply rebinds it.
///
/// Like every type in this crate, the buffer always holds a nul terminator
/// right after the content (`buffer[len] == 0`), and `len < capacity`. A
/// capacity of 0 is the *unset* state.
///
/// # Examples
///
/// ```
/// use lstring::{lstr, LStr};
///
/// let s = lstr!("1a2s3d4f5g6h");
/// assert_eq!(s.capacity(), 13);
/// assert_eq!(s.len(), 12);
/// assert_eq!(s, "1a2s3d4f5g6h");
///
/// let unset = LStr::unset();
/// assert!(!unset.is_allocated());
/// assert!(unset.is_empty());
/// ```
#[derive(Clone, Copy)]
pub struct LStr<'a> {
    pub(crate) buf: &'a [u8],
    pub(crate) len: usize,
}

impl LStr<'_> {
    prims::impl_lstr_meths!(read);
}

impl<'a> LStr<'a> {
    /// A string with no buffer.
    pub const fn unset() -> LStr<'static> {
        LStr { buf: &[], len: 0 }
    }

    /// Wraps a string literal that already ends in a nul byte.
    ///
    /// Prefer the [`lstr!`](crate::lstr) macro, which appends the nul for you.
    ///
    /// # Panics
    /// Panics (at compile time, in const contexts) if `literal` does not end with `'\0'`.
    pub const fn from_literal(literal: &'static str) -> LStr<'static> {
        let bytes = literal.as_bytes();
        assert!(
            !bytes.is_empty() && bytes[bytes.len() - 1] == 0,
            "string literal is not nul-terminated"
        );
        LStr {
            buf: bytes,
            len: bytes.len() - 1,
        }
    }

    /// Borrows a byte sequence whose last byte is the nul terminator.
    ///
    /// The whole slice is the buffer: capacity is `bytes.len()` and the
    /// content is everything before the final nul. Interior nul bytes are
    /// kept as content.
    ///
    /// ```
    /// use lstring::{LStr, LStringError};
    ///
    /// let s = LStr::from_bytes_with_nul(b"abc\0").unwrap();
    /// assert_eq!((s.len(), s.capacity()), (3, 4));
    ///
    /// assert_eq!(LStr::from_bytes_with_nul(b"abc").unwrap_err(), LStringError::NotNulTerminated);
    /// ```
    pub fn from_bytes_with_nul(bytes: &'a [u8]) -> Result<LStr<'a>, LStringError> {
        match bytes.last() {
            Some(&prims::SENTINEL) => Ok(LStr {
                buf: bytes,
                len: bytes.len() - 1,
            }),
            _ => Err(LStringError::NotNulTerminated),
        }
    }

    /// Borrows `buf` as a string of `len` bytes.
    ///
    /// `buf[len]` is expected to already hold the nul terminator; it is not checked.
    pub fn with_len(buf: &'a [u8], len: usize) -> Result<LStr<'a>, LStringError> {
        prims::check_len(len, buf.len())?;
        Ok(LStr { buf, len })
    }

    /// Borrows `buf` as a string ending at its first nul byte.
    ///
    /// ```
    /// use lstring::LStr;
    ///
    /// let buf = *b"abc\0\0\0\0\0";
    /// let s = LStr::from_nul_terminated(&buf).unwrap();
    /// assert_eq!((s.len(), s.capacity()), (3, 8));
    /// ```
    pub fn from_nul_terminated(buf: &'a [u8]) -> Result<LStr<'a>, LStringError> {
        let len = buf
            .iter()
            .position(|&b| b == prims::SENTINEL)
            .ok_or(LStringError::NotNulTerminated)?;
        Ok(LStr { buf, len })
    }

    /// The content bytes, for the full lifetime of the borrowed buffer.
    pub fn into_bytes(self) -> &'a [u8] {
        &self.buf[..self.len]
    }

    /// Allocates an owned copy sized exactly to the content. See [`LString::allocate_copy`].
    pub fn to_lstring(self) -> LString {
        LString::allocate_copy(self)
    }
}

impl Default for LStr<'_> {
    fn default() -> Self {
        LStr::unset()
    }
}

/// Builds an [`LStr`] from a string literal, the way a C string literal carries its own terminator.
///
/// The result has `capacity == literal.len() + 1` and `len == literal.len()`.
///
/// ```
/// let s = lstring::lstr!("hey");
/// assert_eq!((s.len(), s.capacity()), (3, 4));
/// assert_eq!(s.as_bytes_with_nul(), b"hey\0");
/// ```
#[macro_export]
macro_rules! lstr {
    ($s:literal) => {
        $crate::LStr::from_literal(concat!($s, "\0"))
    };
}
