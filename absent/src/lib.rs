//! Combinators over nullable types: values that hold either nothing or exactly one value.
//!
//! ```rust
//! use absent::Nullable;
//!
//! fn parse(s: &str) -> Option<i32> {
//!     s.parse().ok()
//! }
//!
//! let out = Some("41").bind(parse).fmap(|x| x + 1).eval(|| 0);
//! assert_eq!(out, 42);
//! ```
//!
//! Support for a new nullable type is added by implementing [`NullableFamily`] for its
//! partially applied marker token, see the docs there.

mod attempt;
mod combinators;
mod family;
mod member;
mod nullable;
mod support;

pub use attempt::{attempt, Catch, Failure, Payload};
pub use combinators::{bind, eval, fmap, for_each};
pub use family::{FromCondition, NullableFamily, Owned, PartiallyApplied};
pub use member::member;
pub use nullable::Nullable;
pub use support::{from_variant, sink, ExecutionStatus, FAILURE, SUCCESS};
