use absent::{FromCondition, NullableFamily, PartiallyApplied};
use proptest::prelude::*;

/// A nullable type defined outside of `absent`, plugged in only through [`NullableFamily`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Maybe<A> {
    Just(A),
    Nothing,
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        match value {
            Some(a) => Maybe::Just(a),
            None => Maybe::Nothing,
        }
    }
}

impl NullableFamily for Maybe<PartiallyApplied> {
    type Nullable<X> = Maybe<X>;

    fn is_absent<A>(input: &Self::Nullable<A>) -> bool {
        matches!(input, Maybe::Nothing)
    }

    fn value<A>(input: Self::Nullable<A>) -> A {
        match input {
            Maybe::Just(a) => a,
            Maybe::Nothing => unreachable!("value taken from Maybe::Nothing"),
        }
    }

    fn make<A>(value: A) -> Self::Nullable<A> {
        Maybe::Just(value)
    }

    fn make_empty<A, B>(_input: Self::Nullable<A>) -> Self::Nullable<B> {
        Maybe::Nothing
    }
}

impl<C> FromCondition<C> for Maybe<PartiallyApplied> {
    fn make_empty_from<A>(_condition: C) -> Self::Nullable<A> {
        Maybe::Nothing
    }
}

pub fn arb_maybe() -> impl Strategy<Value = Maybe<i32>> {
    proptest::option::of(any::<i32>()).prop_map(Maybe::from)
}
