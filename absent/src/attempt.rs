use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::family::FromCondition;

/// The raw payload of a panic, as handed back by [`std::panic::catch_unwind`]
pub type Payload = Box<dyn Any + Send + 'static>;

/// A category of panics that [`attempt()`] is allowed to turn into absence.
///
/// The provided `catch` matches payloads of exactly this type, as raised by
/// [`std::panic::panic_any`]. A category opts in with an empty impl:
///
/// ```rust
/// #[derive(Debug)]
/// struct Timeout;
///
/// impl absent::Catch for Timeout {}
/// ```
///
/// A wider category, one that covers several condition types, overrides `catch` and
/// tries each of them in turn, handing the payload back if none match.
pub trait Catch: Any + Send + Sized {
    /// Claim `payload` as this category, or hand it back untouched.
    fn catch(payload: Payload) -> Result<Self, Payload> {
        payload.downcast::<Self>().map(|caught| *caught)
    }
}

/// The generic failure category: panics raised with a message, that is `panic!("...")`
/// with either a literal or a formatted message, and panics raised with a `Failure`
/// value itself via [`std::panic::panic_any`].
///
/// Payloads of any other type are not failures and keep unwinding.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Failure {
    /// the panic message
    pub message: String,
}

impl Failure {
    /// A failure carrying `message`
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Catch for Failure {
    fn catch(payload: Payload) -> Result<Self, Payload> {
        let payload = match payload.downcast::<Failure>() {
            Ok(failure) => return Ok(*failure),
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<&'static str>() {
            Ok(message) => return Ok(Failure::new(*message)),
            Err(payload) => payload,
        };
        payload.downcast::<String>().map(|message| Failure::new(*message))
    }
}

/// Run `unsafe_fn` and wrap whatever it returns in a present instance of family `F`.
///
/// If it panics with a condition of category `C`, the panic is stopped and turned into
/// an absent instance built by [`FromCondition::make_empty_from`]: families with a payload
/// slot (eg. `Result<_, C>`) keep the condition, others drop it. Any other panic is
/// resumed unchanged.
///
/// The category has no default and must be named at every call site.
///
/// The panic still runs the process-wide panic hook before it is caught, so the default
/// hook prints its "panicked at" message to stderr even for conditions that end up as
/// absence. Callers that need silence can install their own hook with
/// [`std::panic::set_hook`]. Under `panic = "abort"` nothing is caught: the process
/// aborts on the first panic.
///
/// ```rust
/// use absent::{attempt, Failure, PartiallyApplied};
///
/// let parsed = attempt::<Option<PartiallyApplied>, Failure, _>(|| "12".parse::<u8>().unwrap());
/// assert_eq!(parsed, Some(12));
///
/// let failed = attempt::<Result<PartiallyApplied, Failure>, Failure, u8>(|| panic!("no digits"));
/// assert_eq!(failed, Err(Failure::new("no digits")));
/// ```
pub fn attempt<F, C, A>(unsafe_fn: impl FnOnce() -> A) -> F::Nullable<A>
where
    F: FromCondition<C>,
    C: Catch,
{
    match panic::catch_unwind(AssertUnwindSafe(unsafe_fn)) {
        Ok(value) => F::make(value),
        Err(payload) => match C::catch(payload) {
            Ok(condition) => {
                #[cfg(feature = "trace")]
                tracing::trace!(
                    category = std::any::type_name::<C>(),
                    "caught panic converted into absence"
                );
                F::make_empty_from(condition)
            }
            Err(payload) => {
                #[cfg(feature = "trace")]
                tracing::debug!(
                    category = std::any::type_name::<C>(),
                    "panic outside of category, resuming"
                );
                panic::resume_unwind(payload)
            }
        },
    }
}
