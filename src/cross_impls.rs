use std::fmt;
use std::hash::{Hash, Hasher};

use crate::lstr::LStr;
use crate::lstr_mut::LStrMut;
use crate::lstring::LString;

// content equality: same length, same bytes. capacity and ownership don't matter,
// so an unset string equals an allocated empty one.
macro_rules! impl_expr_peq {
    ($other:ty, $host:ty) => {
        impl PartialEq<$other> for $host {
            fn eq(&self, other: &$other) -> bool {
                let other: &[u8] = other.as_ref();
                self.len() == other.len() && self.as_bytes() == other
            }
        }
    };
    (symmetric $other:ty, $host:ty) => {
        impl_expr_peq!($other, $host);
        impl PartialEq<$host> for $other {
            fn eq(&self, host: &$host) -> bool {
                host == self
            }
        }
    };
}

macro_rules! impl_lstr_common {
    ($host:ty, $name:literal) => {
        impl_expr_peq!(LStr<'_>, $host);
        impl_expr_peq!(LStrMut<'_>, $host);
        impl_expr_peq!(LString, $host);
        impl_expr_peq!(symmetric str, $host);
        impl_expr_peq!(symmetric &str, $host);
        impl_expr_peq!(symmetric [u8], $host);
        impl_expr_peq!(symmetric &[u8], $host);

        impl Eq for $host {}

        impl Hash for $host {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_bytes().hash(state)
            }
        }

        impl AsRef<[u8]> for $host {
            fn as_ref(&self) -> &[u8] {
                self.as_bytes()
            }
        }

        impl fmt::Display for $host {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_string_lossy())
            }
        }

        impl fmt::Debug for $host {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct($name)
                    .field("content", &self.to_string_lossy())
                    .field("len", &self.len())
                    .field("capacity", &self.capacity())
                    .finish()
            }
        }
    };
}

impl_lstr_common!(LStr<'_>, "LStr");
impl_lstr_common!(LStrMut<'_>, "LStrMut");
impl_lstr_common!(LString, "LString");

// appending through `write!` follows the same truncation policy as `cat`
impl fmt::Write for LStrMut<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.cat_str(s);
        Ok(())
    }
}

impl fmt::Write for LString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.cat_str(s);
        Ok(())
    }
}

impl<'a> From<&'a LString> for LStr<'a> {
    fn from(s: &'a LString) -> LStr<'a> {
        s.as_lstr()
    }
}

impl<'a> From<&'a LStrMut<'_>> for LStr<'a> {
    fn from(s: &'a LStrMut<'_>) -> LStr<'a> {
        s.as_lstr()
    }
}

impl<'a> From<LStrMut<'a>> for LStr<'a> {
    fn from(s: LStrMut<'a>) -> LStr<'a> {
        s.into_lstr()
    }
}

impl From<LStr<'_>> for LString {
    fn from(s: LStr<'_>) -> LString {
        LString::allocate_copy(s)
    }
}
