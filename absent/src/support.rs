//! Small helpers for chaining code that was not written with nullable values in mind.

use crate::family::FromCondition;

/// Outcome of a computation that produces nothing but may fail.
pub type ExecutionStatus = Option<()>;

pub const SUCCESS: ExecutionStatus = Some(());
pub const FAILURE: ExecutionStatus = None;

/// Wrap a nullary function into one that takes, and ignores, a single argument.
///
/// Lets side-effecting steps returning an [`ExecutionStatus`] be chained with `bind`:
///
/// ```rust
/// use absent::{sink, ExecutionStatus, Nullable, FAILURE, SUCCESS};
///
/// let mut flushed = false;
/// let status = SUCCESS.bind(sink(|| {
///     flushed = true;
///     SUCCESS
/// }));
/// assert_eq!(status, SUCCESS);
/// assert!(flushed);
///
/// let status: ExecutionStatus = FAILURE.bind(sink(|| -> ExecutionStatus { unreachable!() }));
/// assert_eq!(status, FAILURE);
/// ```
#[inline(always)]
pub fn sink<A, B>(f: impl FnOnce() -> B) -> impl FnOnce(A) -> B {
    move |_| f()
}

/// Pick a value of type `A` out of a sum type `V`.
///
/// Present when `v` converts into `A`, absent otherwise. Families with a payload slot
/// keep the conversion error.
///
/// ```rust
/// use absent::{from_variant, PartiallyApplied};
///
/// enum Reply {
///     Code(u16),
///     Text(String),
/// }
///
/// impl TryFrom<Reply> for u16 {
///     type Error = String;
///
///     fn try_from(reply: Reply) -> Result<u16, String> {
///         match reply {
///             Reply::Code(code) => Ok(code),
///             Reply::Text(text) => Err(text),
///         }
///     }
/// }
///
/// let code = from_variant::<Option<PartiallyApplied>, u16, _>(Reply::Code(200));
/// assert_eq!(code, Some(200));
///
/// let text = from_variant::<Result<PartiallyApplied, String>, u16, _>(Reply::Text("404".into()));
/// assert_eq!(text, Err("404".to_string()));
/// ```
pub fn from_variant<F, A, V>(v: V) -> F::Nullable<A>
where
    V: TryInto<A>,
    F: FromCondition<V::Error>,
{
    match v.try_into() {
        Ok(a) => F::make(a),
        Err(e) => F::make_empty_from(e),
    }
}
