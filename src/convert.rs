use crate::lstr::LStr;
use crate::lstr_mut::LStrMut;
use crate::prims::is_space;

/// Size of the scratch buffer taken by [`ToLStr::to_lstr`]: 15 content bytes and the terminator.
pub const SCRATCH_LEN: usize = 16;

/// Formats a primitive value into a caller-provided scratch buffer.
///
/// The returned [`LStr`] borrows `scratch` (or a static literal, for `bool`),
/// so it cannot outlive the buffer or survive its reuse. Output longer than
/// `SCRATCH_LEN - 1` bytes is truncated.
///
/// ```
/// use lstring::{ToLStr, SCRATCH_LEN};
///
/// let mut scratch = [0u8; SCRATCH_LEN];
/// assert_eq!(12345i32.to_lstr(&mut scratch), "12345");
/// assert_eq!(3.14159f32.to_lstr(&mut scratch), "3.14");
/// assert_eq!(true.to_lstr(&mut scratch), "true");
/// ```
pub trait ToLStr {
    /// Writes `self` into `scratch` and returns a view of the result.
    fn to_lstr(self, scratch: &mut [u8; SCRATCH_LEN]) -> LStr<'_>;
}

impl ToLStr for bool {
    fn to_lstr(self, _scratch: &mut [u8; SCRATCH_LEN]) -> LStr<'_> {
        if self {
            crate::lstr!("true")
        } else {
            crate::lstr!("false")
        }
    }
}

macro_rules! impl_to_lstr_int {
    ($($t:ty),*) => {
        $(
            impl ToLStr for $t {
                fn to_lstr(self, scratch: &mut [u8; SCRATCH_LEN]) -> LStr<'_> {
                    let mut s = LStrMut::new(&mut scratch[..]);
                    s.format(format_args!("{}", self));
                    s.into_lstr()
                }
            }
        )*
    };
}
impl_to_lstr_int!(i8, i16, i32, u8, u16, u32);

macro_rules! impl_to_lstr_float {
    ($($t:ty),*) => {
        $(
            impl ToLStr for $t {
                fn to_lstr(self, scratch: &mut [u8; SCRATCH_LEN]) -> LStr<'_> {
                    let mut s = LStrMut::new(&mut scratch[..]);
                    if self.is_nan() {
                        s.cpy_bytes(b"nan");
                    } else {
                        // infinities print as "inf" / "-inf", tiny negatives keep their sign
                        s.format(format_args!("{:.2}", self));
                    }
                    s.into_lstr()
                }
            }
        )*
    };
}
impl_to_lstr_float!(f32, f64);

/// `sscanf("%d")`-style scan of a leading decimal integer, saturating to the `i32` range.
pub(crate) fn scan_int(bytes: &[u8]) -> i32 {
    const LIMIT: i64 = i32::MAX as i64 + 1;

    let mut i = bytes.iter().take_while(|&&b| is_space(b)).count();
    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    for &b in bytes[i..].iter().take_while(|b| b.is_ascii_digit()) {
        value = (value * 10 + i64::from(b - b'0')).min(LIMIT);
    }

    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn starts_with_ignore_case(bytes: &[u8], word: &[u8]) -> bool {
    bytes.len() >= word.len() && bytes[..word.len()].eq_ignore_ascii_case(word)
}

/// `sscanf("%lf")`-style scan of the longest leading floating point number.
///
/// Accepts `[ws][sign](digits[.digits] | .digits)[(e|E)[sign]digits]` and the
/// words `inf`, `infinity` and `nan` in any case. Hexadecimal floats are not
/// recognized.
pub(crate) fn scan_double(bytes: &[u8]) -> f64 {
    let start = bytes.iter().take_while(|&&b| is_space(b)).count();
    let rest = &bytes[start..];

    let negative = rest.first() == Some(&b'-');
    let mut i = usize::from(matches!(rest.first(), Some(b'+' | b'-')));

    if starts_with_ignore_case(&rest[i..], b"inf") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }
    if starts_with_ignore_case(&rest[i..], b"nan") {
        return if negative { -f64::NAN } else { f64::NAN };
    }

    let int_digits = count_digits(&rest[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if rest.get(i) == Some(&b'.') {
        frac_digits = count_digits(&rest[i + 1..]);
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0.0;
    }

    if matches!(rest.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(rest.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&rest[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    // the scanned prefix is ASCII and matches the grammar `f64::from_str` accepts
    std::str::from_utf8(&rest[..i])
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0)
}
