/// Turn a read-only, argument-free method into a unary function over owned values, so it
/// can be handed to any combinator expecting `A -> B`.
///
/// ```rust
/// use absent::{member, Nullable};
///
/// let len = Some(String::from("four")).fmap(member(String::len));
/// assert_eq!(len, Some(4));
///
/// let empty = None::<String>.fmap(member(String::is_empty));
/// assert_eq!(empty, None);
/// ```
#[inline(always)]
pub fn member<A, B>(method: impl Fn(&A) -> B) -> impl Fn(A) -> B {
    move |receiver| method(&receiver)
}
