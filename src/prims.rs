use std::fmt;

use crate::error::LStringError;

/// The nul terminator kept right after the last content byte.
pub(crate) const SENTINEL: u8 = 0;

/// ASCII `isspace`: space, `\t`, `\n`, `\x0b`, `\x0c` and `\r`.
///
/// Unlike [`u8::is_ascii_whitespace`], this includes the vertical tab.
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Checks that `len` content bytes plus the terminator fit in `capacity`.
pub(crate) fn check_len(len: usize, capacity: usize) -> Result<(), LStringError> {
    if len < capacity || (len == 0 && capacity == 0) {
        Ok(())
    } else {
        Err(LStringError::InvalidLength { len, capacity })
    }
}

/// Appends as much of `src` as fits after `buf[..*len]`. Returns the number of bytes written.
pub(crate) fn cat(buf: &mut [u8], len: &mut usize, src: &[u8]) -> usize {
    if buf.len() < *len + 1 {
        return 0;
    }

    let room = buf.len() - *len - 1;
    let n = src.len().min(room);
    buf[*len..*len + n].copy_from_slice(&src[..n]);
    *len += n;
    buf[*len] = SENTINEL;

    if n < src.len() {
        log::trace!("cat truncated: {} of {} bytes appended (capacity {})", n, src.len(), buf.len());
    }
    n
}

/// Appends one byte if there is room. Returns whether it was written.
pub(crate) fn cat_byte(buf: &mut [u8], len: &mut usize, b: u8) -> bool {
    if buf.is_empty() || *len >= buf.len() - 1 {
        log::trace!("cat_byte dropped {:#04x} (capacity {})", b, buf.len());
        return false;
    }

    buf[*len] = b;
    *len += 1;
    buf[*len] = SENTINEL;
    true
}

/// Replaces the content with as much of `src` as fits. Returns the number of bytes written.
pub(crate) fn cpy(buf: &mut [u8], len: &mut usize, src: &[u8]) -> usize {
    if buf.is_empty() {
        return 0;
    }

    let n = src.len().min(buf.len() - 1);
    buf[..n].copy_from_slice(&src[..n]);
    *len = n;
    buf[n] = SENTINEL;

    if n < src.len() {
        log::trace!("cpy truncated: {} of {} bytes copied (capacity {})", n, src.len(), buf.len());
    }
    n
}

pub(crate) fn drop_last(buf: &mut [u8], len: &mut usize) {
    if !buf.is_empty() && *len > 0 {
        *len -= 1;
        buf[*len] = SENTINEL;
    }
}

pub(crate) fn clear(buf: &mut [u8], len: &mut usize) {
    if !buf.is_empty() {
        *len = 0;
        buf[0] = SENTINEL;
    }
}

pub(crate) fn trim_left(buf: &mut [u8], len: &mut usize) {
    if buf.is_empty() || *len == 0 {
        return;
    }

    let spaces = buf[..*len].iter().take_while(|&&b| is_space(b)).count();
    buf.copy_within(spaces..*len, 0);
    *len -= spaces;
    buf[*len] = SENTINEL;
}

pub(crate) fn trim_right(buf: &mut [u8], len: &mut usize) {
    if buf.is_empty() {
        return;
    }

    while *len > 0 && is_space(buf[*len - 1]) {
        *len -= 1;
    }
    buf[*len] = SENTINEL;
}

/// `fmt::Write` sink that stores what fits in `buf[..len - 1]` and counts everything it was given.
struct BoundedWriter<'b> {
    buf: &'b mut [u8],
    pos: usize,
    needed: usize,
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        self.needed += bytes.len();

        let room = self.buf.len().saturating_sub(1) - self.pos;
        let n = bytes.len().min(room);
        self.buf[self.pos..self.pos + n].copy_from_slice(&bytes[..n]);
        self.pos += n;
        Ok(())
    }
}

/// Formats `args` over the whole buffer, like `snprintf(buf, capacity, ...)`.
///
/// Returns the number of bytes the full output needed. `*len` is set to the
/// number actually stored, which is never more than `capacity - 1`.
pub(crate) fn format_into(buf: &mut [u8], len: &mut usize, args: fmt::Arguments<'_>) -> usize {
    let mut writer = BoundedWriter { buf, pos: 0, needed: 0 };
    if fmt::write(&mut writer, args).is_err() {
        log::debug!("a formatting trait returned an error, keeping partial output");
    }

    let BoundedWriter { buf, pos, needed } = writer;
    if !buf.is_empty() {
        *len = pos;
        buf[pos] = SENTINEL;
    }

    if pos < needed {
        log::trace!("format truncated: {} of {} bytes stored (capacity {})", pos, needed, buf.len());
    }
    needed
}

/// Generates the methods shared by `LStr`, `LStrMut` and `LString`.
///
/// Every implementor has a `buf` field that derefs to `[u8]` (whose length is
/// the capacity) and a `len: usize` field.
macro_rules! impl_lstr_meths {
    (read) => {
        /// Number of content bytes, not counting the nul terminator.
        #[inline]
        pub fn len(&self) -> usize {
            self.len
        }

        /// Total size of the buffer, nul terminator included. Zero when unset.
        #[inline]
        pub fn capacity(&self) -> usize {
            self.buf.len()
        }

        /// Whether this string has a buffer at all.
        #[inline]
        pub fn is_allocated(&self) -> bool {
            !self.buf.is_empty()
        }

        /// Whether this string is unset or holds no content.
        #[inline]
        pub fn is_empty(&self) -> bool {
            self.buf.is_empty() || self.len == 0
        }

        /// The content bytes, without the nul terminator.
        #[inline]
        pub fn as_bytes(&self) -> &[u8] {
            &self.buf[..self.len]
        }

        /// The content bytes followed by the nul terminator. Empty when unset.
        pub fn as_bytes_with_nul(&self) -> &[u8] {
            if self.buf.is_empty() {
                &[]
            } else {
                &self.buf[..=self.len]
            }
        }

        /// The content as a `&str`, if it is valid UTF-8.
        pub fn to_str(&self) -> Result<&str, ::std::str::Utf8Error> {
            ::std::str::from_utf8(self.as_bytes())
        }

        /// The content as text, with invalid UTF-8 replaced.
        pub fn to_string_lossy(&self) -> ::std::borrow::Cow<'_, str> {
            ::std::string::String::from_utf8_lossy(self.as_bytes())
        }

        /// Whether the content begins with `prefix`.
        pub fn starts_with<P: AsRef<[u8]>>(&self, prefix: P) -> bool {
            self.as_bytes().starts_with(prefix.as_ref())
        }

        /// Scans a leading decimal integer, the way `sscanf("%d")` does.
        ///
        /// Leading whitespace is skipped and anything after the digits is
        /// ignored. Returns 0 when unset, empty, or when no digits are found.
        /// Values outside the `i32` range saturate.
        pub fn to_int(&self) -> i32 {
            $crate::convert::scan_int(self.as_bytes())
        }

        /// Scans a leading floating point number, the way `sscanf("%lf")` does.
        ///
        /// Returns 0.0 when unset, empty, or when nothing parses.
        pub fn to_double(&self) -> f64 {
            $crate::convert::scan_double(self.as_bytes())
        }
    };
    (view) => {
        /// A read-only view of this string, sharing its buffer.
        #[inline]
        pub fn as_lstr(&self) -> $crate::LStr<'_> {
            $crate::LStr {
                buf: &self.buf[..],
                len: self.len,
            }
        }
    };
    (write) => {
        /// Appends `other`, truncating to the room left. No-op if `other` is unset.
        pub fn cat(&mut self, other: $crate::LStr<'_>) -> &mut Self {
            if other.is_allocated() {
                $crate::prims::cat(&mut self.buf[..], &mut self.len, other.as_bytes());
            }
            self
        }

        /// Appends raw bytes, truncating to the room left.
        pub fn cat_bytes(&mut self, src: &[u8]) -> &mut Self {
            $crate::prims::cat(&mut self.buf[..], &mut self.len, src);
            self
        }

        /// Appends the bytes of `src`, truncating to the room left.
        pub fn cat_str(&mut self, src: &str) -> &mut Self {
            self.cat_bytes(src.as_bytes())
        }

        /// Appends a single byte, if there is room for it.
        pub fn cat_byte(&mut self, b: u8) -> &mut Self {
            $crate::prims::cat_byte(&mut self.buf[..], &mut self.len, b);
            self
        }

        /// Like [`cat`](Self::cat), but reports truncation.
        ///
        /// The bytes that fit are written either way.
        pub fn try_cat(&mut self, other: $crate::LStr<'_>) -> Result<&mut Self, $crate::LStringError> {
            let written = if other.is_allocated() {
                $crate::prims::cat(&mut self.buf[..], &mut self.len, other.as_bytes())
            } else {
                0
            };
            $crate::error::check_truncation(other.len(), written)?;
            Ok(self)
        }

        /// Like [`cat_bytes`](Self::cat_bytes), but reports truncation.
        pub fn try_cat_bytes(&mut self, src: &[u8]) -> Result<&mut Self, $crate::LStringError> {
            let written = $crate::prims::cat(&mut self.buf[..], &mut self.len, src);
            $crate::error::check_truncation(src.len(), written)?;
            Ok(self)
        }

        /// Like [`cat_str`](Self::cat_str), but reports truncation.
        pub fn try_cat_str(&mut self, src: &str) -> Result<&mut Self, $crate::LStringError> {
            self.try_cat_bytes(src.as_bytes())
        }

        /// Like [`cat_byte`](Self::cat_byte), but reports a dropped byte.
        pub fn try_cat_byte(&mut self, b: u8) -> Result<&mut Self, $crate::LStringError> {
            let written = $crate::prims::cat_byte(&mut self.buf[..], &mut self.len, b) as usize;
            $crate::error::check_truncation(1, written)?;
            Ok(self)
        }

        /// Replaces the content with `other`, truncating to capacity. No-op if `other` is unset.
        pub fn cpy(&mut self, other: $crate::LStr<'_>) -> &mut Self {
            if other.is_allocated() {
                $crate::prims::cpy(&mut self.buf[..], &mut self.len, other.as_bytes());
            }
            self
        }

        /// Replaces the content with `src`, truncating to capacity.
        pub fn cpy_bytes(&mut self, src: &[u8]) -> &mut Self {
            $crate::prims::cpy(&mut self.buf[..], &mut self.len, src);
            self
        }

        /// Like [`cpy`](Self::cpy), but reports truncation.
        pub fn try_cpy(&mut self, other: $crate::LStr<'_>) -> Result<&mut Self, $crate::LStringError> {
            let written = if other.is_allocated() {
                $crate::prims::cpy(&mut self.buf[..], &mut self.len, other.as_bytes())
            } else {
                0
            };
            $crate::error::check_truncation(other.len(), written)?;
            Ok(self)
        }

        /// Like [`cpy_bytes`](Self::cpy_bytes), but reports truncation.
        pub fn try_cpy_bytes(&mut self, src: &[u8]) -> Result<&mut Self, $crate::LStringError> {
            let written = $crate::prims::cpy(&mut self.buf[..], &mut self.len, src);
            $crate::error::check_truncation(src.len(), written)?;
            Ok(self)
        }

        /// Removes the last byte, if any.
        pub fn drop_last(&mut self) -> &mut Self {
            $crate::prims::drop_last(&mut self.buf[..], &mut self.len);
            self
        }

        /// Empties the string, keeping its buffer.
        pub fn clear(&mut self) -> &mut Self {
            $crate::prims::clear(&mut self.buf[..], &mut self.len);
            self
        }

        /// Removes leading ASCII whitespace, shifting the rest of the content left.
        pub fn trim_left(&mut self) -> &mut Self {
            $crate::prims::trim_left(&mut self.buf[..], &mut self.len);
            self
        }

        /// Removes trailing ASCII whitespace.
        pub fn trim_right(&mut self) -> &mut Self {
            $crate::prims::trim_right(&mut self.buf[..], &mut self.len);
            self
        }

        /// Removes leading and trailing ASCII whitespace.
        pub fn trim(&mut self) -> &mut Self {
            self.trim_right().trim_left()
        }

        /// Replaces the content with formatted output, truncated to capacity.
        ///
        /// See also the [`lformat!`](crate::lformat) macro.
        pub fn format(&mut self, args: ::std::fmt::Arguments<'_>) -> &mut Self {
            $crate::prims::format_into(&mut self.buf[..], &mut self.len, args);
            self
        }

        /// Like [`format`](Self::format), but reports truncation.
        pub fn try_format(&mut self, args: ::std::fmt::Arguments<'_>) -> Result<&mut Self, $crate::LStringError> {
            let needed = $crate::prims::format_into(&mut self.buf[..], &mut self.len, args);
            $crate::error::check_truncation(needed, self.len)?;
            Ok(self)
        }
    };
}
pub(crate) use impl_lstr_meths;
