//! Delay Abstraction
//!
//! Simulated loading states wait on a `Delay` instead of raw timers,
//! so tests can complete them immediately.

use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;

/// Single-shot delayed completion, no cancellation
pub trait Delay {
    fn wait(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Browser timer (`setTimeout`)
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    fn wait(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).boxed_local()
    }
}

/// Completes on first poll
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

#[cfg(test)]
impl Delay for Immediate {
    fn wait(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
        futures::future::ready(()).boxed_local()
    }
}
