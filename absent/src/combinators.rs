use crate::family::NullableFamily;

/// Feed the value held by `input` into `f`, which produces another nullable of the same family.
///
/// If `input` is absent, `f` is never called and the absence is re-typed via
/// [`NullableFamily::make_empty`], keeping any payload it carries. Otherwise the result of
/// `f` is returned as is.
///
/// ```rust
/// use absent::{bind, PartiallyApplied};
///
/// let two = bind::<Option<PartiallyApplied>, _, _>(Some(1), |x| Some(x + 1));
/// assert_eq!(two, Some(2));
///
/// let err = bind::<Result<PartiallyApplied, &str>, i32, i32>(Err("missing"), |x| Ok(x + 1));
/// assert_eq!(err, Err("missing"));
/// ```
#[inline(always)]
pub fn bind<F: NullableFamily, A, B>(
    input: F::Nullable<A>,
    f: impl FnOnce(A) -> F::Nullable<B>,
) -> F::Nullable<B> {
    if F::is_absent(&input) {
        return F::make_empty(input);
    }
    f(F::value(input))
}

/// Apply a plain function `f` to the value held by `input`, if any.
///
/// This is [`bind`] with `f`'s output wrapped back up via [`NullableFamily::make`].
#[inline(always)]
pub fn fmap<F: NullableFamily, A, B>(
    input: F::Nullable<A>,
    f: impl FnOnce(A) -> B,
) -> F::Nullable<B> {
    bind::<F, A, B>(input, |a| F::make(f(a)))
}

/// Return the value held by `input`, or the result of `fallback` if it is absent.
///
/// `fallback` only runs when `input` is absent.
#[inline(always)]
pub fn eval<F: NullableFamily, A>(input: F::Nullable<A>, fallback: impl FnOnce() -> A) -> A {
    if F::is_absent(&input) {
        fallback()
    } else {
        F::value(input)
    }
}

/// Run `action` on the value held by `input` for its side effect. Does nothing if absent.
#[inline(always)]
pub fn for_each<F: NullableFamily, A>(input: F::Nullable<A>, action: impl FnOnce(A)) {
    if !F::is_absent(&input) {
        action(F::value(input))
    }
}
