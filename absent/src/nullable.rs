use crate::combinators;
use crate::family::{NullableFamily, PartiallyApplied};

/// A concrete nullable value with a canonical [`NullableFamily`], so that the combinators
/// can be called as methods without naming the family token.
///
/// ```rust
/// use absent::Nullable;
///
/// let three = Some(1)
///     .bind(|x| Some(x + 1))
///     .bind(|x| Some(x + 1));
/// assert_eq!(three, Some(3));
///
/// let len: Result<usize, String> = Ok::<_, String>("abc").fmap(str::len);
/// assert_eq!(len, Ok(3));
/// ```
///
/// `Option<Box<A>>` is treated here as a plain `Option` holding a box. Use the
/// free functions with the [`crate::Owned`] token to unbox.
pub trait Nullable
where
    Self: Sized,
{
    type FamilyToken: NullableFamily;
    type Value;

    /// Given an instance of this type, view it as a member of its family
    fn into_nullable(self) -> <Self::FamilyToken as NullableFamily>::Nullable<Self::Value>;

    /// See [`crate::bind`]
    fn bind<B>(
        self,
        f: impl FnOnce(Self::Value) -> <Self::FamilyToken as NullableFamily>::Nullable<B>,
    ) -> <Self::FamilyToken as NullableFamily>::Nullable<B> {
        combinators::bind::<Self::FamilyToken, Self::Value, B>(self.into_nullable(), f)
    }

    /// See [`crate::fmap`]
    fn fmap<B>(
        self,
        f: impl FnOnce(Self::Value) -> B,
    ) -> <Self::FamilyToken as NullableFamily>::Nullable<B> {
        combinators::fmap::<Self::FamilyToken, Self::Value, B>(self.into_nullable(), f)
    }

    /// See [`crate::eval`]
    fn eval(self, fallback: impl FnOnce() -> Self::Value) -> Self::Value {
        combinators::eval::<Self::FamilyToken, Self::Value>(self.into_nullable(), fallback)
    }

    /// See [`crate::for_each`]
    fn for_each(self, action: impl FnOnce(Self::Value)) {
        combinators::for_each::<Self::FamilyToken, Self::Value>(self.into_nullable(), action)
    }
}

impl<A> Nullable for Option<A> {
    type FamilyToken = Option<PartiallyApplied>;
    type Value = A;

    #[inline(always)]
    fn into_nullable(self) -> Option<A> {
        self
    }
}

impl<A, E> Nullable for Result<A, E> {
    type FamilyToken = Result<PartiallyApplied, E>;
    type Value = A;

    #[inline(always)]
    fn into_nullable(self) -> Result<A, E> {
        self
    }
}
