//! Source of the current time.
//!
//! The library never reads the clock on its own; callers ask for it through
//! [`current_time`], [`HttpDate::now`](crate::HttpDate::now) or a [`Clock`]
//! they pass around, which lets tests pin the time with [`FixedClock`].

use crate::Error;
use crate::types::EpochSeconds;

/// Anything that can report the current time in whole seconds.
pub trait Clock {
    /// Returns the current time.
    ///
    /// # Errors
    /// Returns `Error::Unsupported` if no time source is available.
    fn now(&self) -> Result<EpochSeconds, Error>;
}

/// The operating system's wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

#[cfg(not(all(
    target_arch = "wasm32",
    not(any(target_os = "wasi", target_os = "emscripten"))
)))]
impl Clock for SystemClock {
    fn now(&self) -> Result<EpochSeconds, Error> {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| EpochSeconds::new(elapsed.as_secs()))
            .map_err(|err| {
                log::debug!("system clock is before the Unix epoch: {err}");
                Error::Unsupported
            })
    }
}

// Bare wasm has no clock; `SystemTime::now` would panic there.
#[cfg(all(
    target_arch = "wasm32",
    not(any(target_os = "wasi", target_os = "emscripten"))
))]
impl Clock for SystemClock {
    fn now(&self) -> Result<EpochSeconds, Error> {
        log::debug!("no system clock on this target");
        Err(Error::Unsupported)
    }
}

/// A clock stopped at a given instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedClock(pub EpochSeconds);

impl Clock for FixedClock {
    fn now(&self) -> Result<EpochSeconds, Error> {
        Ok(self.0)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Result<EpochSeconds, Error> {
        (**self).now()
    }
}

/// Seconds since the epoch according to [`SystemClock`].
///
/// # Errors
/// Returns `Error::Unsupported` when the platform has no usable clock.
pub fn current_time() -> Result<EpochSeconds, Error> {
    SystemClock.now()
}
