use crate::error::LStringError;
use crate::lstr::LStr;
use crate::prims;

/// A mutable, bounded byte string over a caller-supplied buffer.
///
/// The caller keeps ownership of the storage; the borrow checker makes sure
/// the buffer outlives the string. Every mutator keeps `len < capacity` and
/// rewrites the nul terminator, and writes that do not fit are truncated
/// instead of growing the buffer.
///
/// ```
/// use lstring::{lstr, LStrMut};
///
/// let mut buf = [0u8; 12];
/// let mut s = LStrMut::new(&mut buf);
/// s.cat_str("ab").cat(lstr!("CDEF")).cat_byte(b'!');
/// assert_eq!(s, "abCDEF!");
///
/// // only 11 content bytes fit in a 12 byte buffer
/// s.cat_str("0123456789");
/// assert_eq!(s, "abCDEF!0123");
/// ```
pub struct LStrMut<'a> {
    pub(crate) buf: &'a mut [u8],
    pub(crate) len: usize,
}

impl LStrMut<'_> {
    prims::impl_lstr_meths!(read);
    prims::impl_lstr_meths!(view);
    prims::impl_lstr_meths!(write);
}

impl<'a> LStrMut<'a> {
    /// A string with no buffer. Every mutator on it is a no-op.
    pub fn unset() -> LStrMut<'static> {
        LStrMut { buf: &mut [], len: 0 }
    }

    /// Borrows `buf` and clears it: the length becomes 0 and `buf[0]` the terminator.
    ///
    /// An empty `buf` gives an unset string.
    pub fn new(buf: &'a mut [u8]) -> LStrMut<'a> {
        let mut s = LStrMut { buf, len: 0 };
        prims::clear(s.buf, &mut s.len);
        s
    }

    /// Borrows `buf` as a string that already holds `len` bytes.
    ///
    /// `buf[len]` is expected to already hold the nul terminator; it is not rewritten.
    ///
    /// ```
    /// use lstring::{LStrMut, LStringError};
    ///
    /// let mut buf = *b"ab\0\0";
    /// assert_eq!(LStrMut::with_len(&mut buf, 2).unwrap(), "ab");
    /// assert_eq!(
    ///     LStrMut::with_len(&mut buf, 4).unwrap_err(),
    ///     LStringError::InvalidLength { len: 4, capacity: 4 },
    /// );
    /// ```
    pub fn with_len(buf: &'a mut [u8], len: usize) -> Result<LStrMut<'a>, LStringError> {
        prims::check_len(len, buf.len())?;
        Ok(LStrMut { buf, len })
    }

    /// Borrows `buf` as a string ending at its first nul byte.
    pub fn from_nul_terminated(buf: &'a mut [u8]) -> Result<LStrMut<'a>, LStringError> {
        let len = buf
            .iter()
            .position(|&b| b == prims::SENTINEL)
            .ok_or(LStringError::NotNulTerminated)?;
        Ok(LStrMut { buf, len })
    }

    /// Gives up mutable access, keeping a read-only view for the buffer's full lifetime.
    ///
    /// ```
    /// use lstring::LStrMut;
    ///
    /// let mut buf = [0u8; 16];
    /// let mut s = LStrMut::new(&mut buf);
    /// s.format(format_args!("{}-{}", 4, 2));
    /// let view = s.into_lstr();
    /// assert_eq!(view, "4-2");
    /// ```
    pub fn into_lstr(self) -> LStr<'a> {
        LStr {
            buf: self.buf,
            len: self.len,
        }
    }
}

impl Default for LStrMut<'_> {
    fn default() -> Self {
        LStrMut::unset()
    }
}

/// Replaces the content of an `LStrMut` or `LString` with formatted text, truncated to capacity.
///
/// ```
/// use lstring::{lformat, LStrMut};
///
/// let mut buf = [0u8; 8];
/// let mut s = LStrMut::new(&mut buf);
/// lformat!(s, "input {}", 12);
/// assert_eq!(s, "input 1");
/// ```
#[macro_export]
macro_rules! lformat {
    ($s:expr, $($arg:tt)*) => {
        $s.format(::std::format_args!($($arg)*))
    };
}
