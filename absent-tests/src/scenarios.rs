use absent::{
    attempt, bind, fmap, for_each, member, Catch, Failure, Nullable, NullableFamily, Owned,
    PartiallyApplied,
};
use proptest::prelude::*;
use std::cell::Cell;
use std::panic;

use crate::maybe::Maybe;

#[derive(Debug, Clone, PartialEq)]
struct Person;

#[derive(Debug, Clone, PartialEq)]
struct Address {
    zip: String,
}

impl Address {
    fn zip_code(&self) -> String {
        self.zip.clone()
    }
}

#[derive(Debug, PartialEq)]
struct NotFound(u32);
impl Catch for NotFound {}

#[derive(Debug, PartialEq)]
struct Denied(u32);
impl Catch for Denied {}

/// Either of the two lookup conditions above
#[derive(Debug, PartialEq)]
enum LookupFailure {
    NotFound(u32),
    Denied(u32),
}

impl Catch for LookupFailure {
    fn catch(payload: absent::Payload) -> Result<Self, absent::Payload> {
        let payload = match payload.downcast::<NotFound>() {
            Ok(nf) => return Ok(LookupFailure::NotFound(nf.0)),
            Err(payload) => payload,
        };
        payload
            .downcast::<Denied>()
            .map(|denied| LookupFailure::Denied(denied.0))
    }
}

#[test]
fn present_chain() {
    let inc = |x: i32| Some(x + 1);
    assert_eq!(Some(1).bind(inc).bind(inc), Some(3));
}

#[test]
fn early_absence() {
    let called = Cell::new(false);
    let out = None::<i32>.bind(|x| {
        called.set(true);
        Some(x + 1)
    });
    assert_eq!(out, None);
    assert!(!called.get());
}

#[test]
fn type_changing_map() {
    let out = Some("0".to_string()).fmap(|s| s.parse::<i32>().unwrap_or(-1));
    assert_eq!(out, Some(0));
}

#[test]
fn eval_with_fallback() {
    assert_eq!(None::<i32>.eval(|| -1), -1);
    let err: Result<i32, String> = Err("unset".into());
    assert_eq!(err.eval(|| -1), -1);
}

#[test]
fn attempt_catching_keeps_condition() {
    let out = attempt::<Result<PartiallyApplied, NotFound>, NotFound, Person>(|| {
        panic::panic_any(NotFound(17))
    });
    assert_eq!(out, Err(NotFound(17)));

    let out = attempt::<Maybe<PartiallyApplied>, NotFound, Person>(|| {
        panic::panic_any(NotFound(17))
    });
    assert_eq!(out, Maybe::Nothing);
}

#[test]
fn attempt_non_catching_propagates() {
    let outer = panic::catch_unwind(|| {
        attempt::<Option<PartiallyApplied>, NotFound, i32>(|| panic::panic_any(Denied(3)))
    });
    let payload = outer.expect_err("Denied must not be caught as NotFound");
    assert_eq!(payload.downcast_ref::<Denied>(), Some(&Denied(3)));
}

#[test]
fn wide_category_catches_each_member() {
    let out = attempt::<Result<PartiallyApplied, LookupFailure>, LookupFailure, i32>(|| {
        panic::panic_any(Denied(5))
    });
    assert_eq!(out, Err(LookupFailure::Denied(5)));

    let out = attempt::<Result<PartiallyApplied, LookupFailure>, LookupFailure, i32>(|| {
        panic::panic_any(NotFound(6))
    });
    assert_eq!(out, Err(LookupFailure::NotFound(6)));
}

#[test]
fn failure_message_is_captured() {
    let out = attempt::<Result<PartiallyApplied, Failure>, Failure, i32>(|| {
        let v: Vec<i32> = Vec::new();
        if v.is_empty() {
            panic!("empty input");
        }
        v[0]
    });
    assert_eq!(out.map_err(|f| f.to_string()), Err("empty input".to_string()));
}

#[test]
fn failure_value_is_its_own_category() {
    let out = attempt::<Result<PartiallyApplied, Failure>, Failure, i32>(|| {
        panic::panic_any(Failure::new("disk full"))
    });
    assert_eq!(out, Err(Failure::new("disk full")));

    let out = attempt::<Option<PartiallyApplied>, Failure, i32>(|| {
        panic::panic_any(Failure::new("disk full"))
    });
    assert_eq!(out, None);
}

// custom nullable type chained through person -> address -> zip code
#[test]
fn custom_family_lookup_chain() {
    type M = Maybe<PartiallyApplied>;

    let find_person = || Maybe::Just(Person);
    let find_address = |_: Person| Maybe::Just(Address { zip: "123".into() });

    let zip = fmap::<M, _, _>(
        bind::<M, _, _>(find_person(), find_address),
        member(Address::zip_code),
    );
    assert_eq!(zip, Maybe::Just("123".to_string()));

    let zip = fmap::<M, _, _>(
        bind::<M, Person, _>(Maybe::Nothing, find_address),
        member(Address::zip_code),
    );
    assert_eq!(zip, Maybe::Nothing);
}

#[test]
fn owned_pointer_moves_out_of_slot() {
    let mut slot = Owned::make(0);
    let one = fmap::<Owned, _, _>(slot.take(), |x| x + 1);
    assert!(slot.is_none());
    assert_eq!(one, Some(Box::new(1)));

    let mut counter = 0;
    let mut slot = Owned::make(1);
    for_each::<Owned, _>(slot.take(), |x| counter += x);
    assert!(slot.is_none());
    assert_eq!(counter, 1);
}

#[test]
fn owned_pointer_absent_chain() {
    let find_person = || -> Option<Box<Person>> { None };
    let find_address = |_: Person| Owned::make(Address { zip: "123".into() });

    let zip = fmap::<Owned, _, _>(
        bind::<Owned, _, _>(find_person(), find_address),
        member(Address::zip_code),
    );
    assert_eq!(zip, None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn attempt_is_selective(value in any::<i32>(), raise in any::<bool>()) {
        let caught = attempt::<Option<PartiallyApplied>, NotFound, i32>(|| {
            if raise {
                panic::panic_any(NotFound(value as u32))
            }
            value
        });
        prop_assert_eq!(caught, if raise { None } else { Some(value) });

        let escaped = panic::catch_unwind(|| {
            attempt::<Option<PartiallyApplied>, Denied, i32>(|| {
                if raise {
                    panic::panic_any(NotFound(value as u32))
                }
                value
            })
        });
        prop_assert_eq!(escaped.is_err(), raise);
    }
}
