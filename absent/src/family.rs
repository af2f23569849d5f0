/// A family of 'nullable' types: types that hold either nothing or exactly one value.
///
/// # Motivation
///
/// Every combinator in this crate ([`crate::bind`], [`crate::fmap`], [`crate::eval`],
/// [`crate::for_each`], [`crate::attempt()`]) is written once against this trait and works
/// for any type that implements it. These four functions are the only thing a type needs
/// to provide to take part.
///
/// # Implementing this trait
///
/// The combinators change the held type (`Option<A>` in, `Option<B>` out), so the
/// implementor has to stand for the whole family rather than for one instantiation of it.
/// A type constructor like `Option` on its own is not a type, so the family is named by
/// filling its value slot with the uninhabited [`PartiallyApplied`] marker:
/// `Option<PartiallyApplied>` stands for every `Option<X>`. Any other type parameters
/// (the `E` of `Result<A, E>`) stay in the token as they are. For example
///
/// ```rust
/// # use absent::{NullableFamily, PartiallyApplied};
/// # #[derive(Debug, PartialEq, Eq)]
/// enum Maybe<A> {
///     Just(A),
///     Nothing,
/// }
///
/// impl NullableFamily for Maybe<PartiallyApplied> {
///     type Nullable<X> = Maybe<X>;
///
///     fn is_absent<A>(input: &Maybe<A>) -> bool {
///         matches!(input, Maybe::Nothing)
///     }
///
///     fn value<A>(input: Maybe<A>) -> A {
///         match input {
///             Maybe::Just(a) => a,
///             Maybe::Nothing => unreachable!("value taken from Maybe::Nothing"),
///         }
///     }
///
///     fn make<A>(value: A) -> Maybe<A> {
///         Maybe::Just(value)
///     }
///
///     fn make_empty<A, B>(_input: Maybe<A>) -> Maybe<B> {
///         Maybe::Nothing
///     }
/// }
/// ```
///
/// # Use
///
/// ```rust
/// # use absent::{NullableFamily, PartiallyApplied};
/// # #[derive(Debug, PartialEq, Eq)]
/// # enum Maybe<A> {
/// #     Just(A),
/// #     Nothing,
/// # }
/// #
/// # impl NullableFamily for Maybe<PartiallyApplied> {
/// #     type Nullable<X> = Maybe<X>;
/// #     fn is_absent<A>(input: &Maybe<A>) -> bool { matches!(input, Maybe::Nothing) }
/// #     fn value<A>(input: Maybe<A>) -> A {
/// #         match input {
/// #             Maybe::Just(a) => a,
/// #             Maybe::Nothing => unreachable!(),
/// #         }
/// #     }
/// #     fn make<A>(value: A) -> Maybe<A> { Maybe::Just(value) }
/// #     fn make_empty<A, B>(_input: Maybe<A>) -> Maybe<B> { Maybe::Nothing }
/// # }
/// let parsed = absent::fmap::<Maybe<PartiallyApplied>, _, _>(Maybe::Just("7"), |s| s.len());
/// assert_eq!(parsed, Maybe::Just(1));
///
/// let nothing = absent::fmap::<Maybe<PartiallyApplied>, &str, _>(Maybe::Nothing, |s| s.len());
/// assert_eq!(nothing, Maybe::Nothing);
/// ```
pub trait NullableFamily {
    /// the nullable type, parameterized over the type of the value it may hold
    type Nullable<X>;

    /// Is this instance absent? Must not consume or modify `input`.
    fn is_absent<A>(input: &Self::Nullable<A>) -> bool;

    /// Move the held value out of `input`.
    ///
    /// `input` must be present. Calling this on an absent instance is a logic error,
    /// and implementations are expected to panic.
    fn value<A>(input: Self::Nullable<A>) -> A;

    /// Build a present instance holding `value`
    fn make<A>(value: A) -> Self::Nullable<A>;

    /// Re-type an absent instance, carrying over whatever payload the absent state holds
    /// (eg. the error of a `Result`) unchanged.
    ///
    /// `input` must be absent.
    fn make_empty<A, B>(input: Self::Nullable<A>) -> Self::Nullable<B>;
}

/// Build an absent instance out of some condition `C` that caused the absence, with no
/// existing instance to carry a payload over from.
///
/// Families without a payload slot drop the condition; families with one store it.
pub trait FromCondition<C>: NullableFamily {
    fn make_empty_from<A>(condition: C) -> Self::Nullable<A>;
}

/// Placeholder for the value slot of a family token, eg. `Result<PartiallyApplied, E>`
/// names every `Result<X, E>`. Uninhabited, so a token is never a value.
#[derive(Clone, Debug)]
pub enum PartiallyApplied {}

/// Token for the owning-pointer family `Option<Box<A>>`. Extracting a value moves it
/// out of its box and consumes the pointer.
pub type Owned = Option<Box<PartiallyApplied>>;

impl NullableFamily for Option<PartiallyApplied> {
    type Nullable<X> = Option<X>;

    #[inline(always)]
    fn is_absent<A>(input: &Option<A>) -> bool {
        input.is_none()
    }

    #[inline(always)]
    fn value<A>(input: Option<A>) -> A {
        match input {
            Some(a) => a,
            None => unreachable!("value taken from an absent Option"),
        }
    }

    #[inline(always)]
    fn make<A>(value: A) -> Option<A> {
        Some(value)
    }

    #[inline(always)]
    fn make_empty<A, B>(_input: Option<A>) -> Option<B> {
        None
    }
}

impl<C> FromCondition<C> for Option<PartiallyApplied> {
    fn make_empty_from<A>(_condition: C) -> Option<A> {
        None
    }
}

// the error is the payload of the absent state
impl<E> NullableFamily for Result<PartiallyApplied, E> {
    type Nullable<X> = Result<X, E>;

    #[inline(always)]
    fn is_absent<A>(input: &Result<A, E>) -> bool {
        input.is_err()
    }

    #[inline(always)]
    fn value<A>(input: Result<A, E>) -> A {
        match input {
            Ok(a) => a,
            Err(_) => unreachable!("value taken from an Err"),
        }
    }

    #[inline(always)]
    fn make<A>(value: A) -> Result<A, E> {
        Ok(value)
    }

    #[inline(always)]
    fn make_empty<A, B>(input: Result<A, E>) -> Result<B, E> {
        match input {
            Err(e) => Err(e),
            Ok(_) => unreachable!("make_empty called on an Ok"),
        }
    }
}

impl<E, C: Into<E>> FromCondition<C> for Result<PartiallyApplied, E> {
    fn make_empty_from<A>(condition: C) -> Result<A, E> {
        Err(condition.into())
    }
}

impl NullableFamily for Owned {
    type Nullable<X> = Option<Box<X>>;

    #[inline(always)]
    fn is_absent<A>(input: &Option<Box<A>>) -> bool {
        input.is_none()
    }

    #[inline(always)]
    fn value<A>(input: Option<Box<A>>) -> A {
        match input {
            Some(boxed) => *boxed,
            None => unreachable!("value taken from a null pointer"),
        }
    }

    #[inline(always)]
    fn make<A>(value: A) -> Option<Box<A>> {
        Some(Box::new(value))
    }

    #[inline(always)]
    fn make_empty<A, B>(_input: Option<Box<A>>) -> Option<Box<B>> {
        None
    }
}

impl<C> FromCondition<C> for Owned {
    fn make_empty_from<A>(_condition: C) -> Option<Box<A>> {
        None
    }
}
