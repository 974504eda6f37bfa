#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may not be copied, modified,
// or distributed except according to those terms.

//! Bounded-capacity byte strings for code where heap allocation must be
//! avoidable or explicit.
//!
//! Every string wraps a fixed-size byte buffer together with its capacity and
//! current length. One byte is always reserved for a nul terminator kept right
//! after the content, so the buffer can be handed to anything expecting a C
//! string. Mutators copy, append, trim and format in place and **never write
//! past the capacity**: a write that does not fit is silently truncated, and
//! an operation on an unset string is a no-op.
//!
//! ```
//! use lstring::{lstr, LStrMut};
//!
//! let mut buf = [0u8; 80];
//! let mut second = [0u8; 40];
//!
//! let mut first = LStrMut::new(&mut second);
//! first.format(format_args!("the {}", "first"));
//!
//! let mut s = LStrMut::new(&mut buf);
//! s.format(format_args!("input {}", 12))
//!     .cat(lstr!(" is "))
//!     .cat(first.as_lstr())
//!     .cat_str(" one.");
//! assert_eq!(s, "input 12 is the first one.");
//! ```
//!
//! ### Ownership
//!
//! The storage is either borrowed or owned, and the type says which:
//!
//! * [`LStr`] is a read-only view (string literals via [`lstr!`], or any
//!   nul-terminated byte slice). It is `Copy`; assigning one simply rebinds it.
//! * [`LStrMut`] mutates a buffer supplied by the caller, who keeps ownership.
//! * [`LString`] owns a buffer obtained through an explicit allocation sized to
//!   its source, and frees it when dropped.
//!
//! Nothing grows. An `LString` has exactly the capacity it was allocated with.
//!
//! ### Failure is quiet, unless you ask
//!
//! Mutators return `&mut Self` so they chain, and never fail. The `try_*`
//! variants perform the same write but report a [`LStringError::Truncated`]
//! when bytes were dropped; [`LString::try_allocate_copy`] reports allocation
//! failure instead of returning an unset string. Truncations are also logged
//! at `trace` level through the [`log`] facade.
//!
//! ### Not Unicode-aware
//!
//! Content is bytes. Truncation may split a multi-byte UTF-8 sequence; use
//! [`LStr::to_str`] or [`LStr::to_string_lossy`] when text is needed.

mod convert;
mod cross_impls;
mod error;
mod lstr;
mod lstr_mut;
mod lstring;
mod prims;


pub use crate::convert::{ToLStr, SCRATCH_LEN};
pub use crate::error::LStringError;
pub use crate::lstr::LStr;
pub use crate::lstr_mut::LStrMut;
pub use crate::lstring::LString;
pub use crate::prims::is_space;
