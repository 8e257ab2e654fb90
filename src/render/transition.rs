//! Awaitable completion of an animation.
//!
//! Every operation that moves cards returns a `Transition`. It stands in for
//! a transition-end event: awaiting it resolves once the animation's duration
//! has elapsed. Dropping it is fine when the caller doesn't need to wait.
//!
//! ```
//! use std::time::Duration;
//! use card_table::render::Transition;
//!
//! let a = Transition::after(Duration::from_millis(200));
//! let b = Transition::after(Duration::from_millis(500));
//! assert_eq!(a.join(b).duration(), Duration::from_millis(500));
//! assert!(Transition::immediate().is_immediate());
//! ```

use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::time::Sleep;

/// Completion signal of an animation, parameterized by its duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Transition {
    duration: Duration,
}

impl Transition {
    /// Completes after `duration`.
    #[must_use]
    pub const fn after(duration: Duration) -> Self {
        Self { duration }
    }

    /// Already complete.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            duration: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_immediate(&self) -> bool {
        self.duration.is_zero()
    }

    /// Completes when both `self` and `other` have.
    #[must_use]
    pub fn join(self, other: Transition) -> Self {
        self.max(other)
    }
}

impl IntoFuture for Transition {
    type Output = ();
    type IntoFuture = Finished;

    fn into_future(self) -> Finished {
        let sleep = (!self.is_immediate()).then(|| Box::pin(tokio::time::sleep(self.duration)));
        Finished { sleep }
    }
}

/// Future returned by awaiting a [`Transition`].
///
/// Must be polled inside a Tokio runtime with the time driver enabled,
/// unless the transition is immediate.
#[derive(Debug)]
pub struct Finished {
    sleep: Option<Pin<Box<Sleep>>>,
}

impl Future for Finished {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        match self.sleep.as_mut() {
            None => Poll::Ready(()),
            Some(sleep) => sleep.as_mut().poll(cx),
        }
    }
}
