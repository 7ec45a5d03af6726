use std::time::{Duration, Instant};

use crate::error::TimingError;

/// Invokes `f` once and returns how long the call took. Whatever `f`
/// returns is dropped; panics from `f` propagate to the caller
/// untouched, with no duration produced.
pub fn time_fn<F: FnOnce() -> T, T>(f: F) -> Duration {
  let start = Instant::now();
  let _ = f();
  start.elapsed()
}

/// Turns `f` into a callable that forwards its argument to `f`
/// unchanged, drops `f`'s return value, and yields the elapsed
/// wall-clock seconds of the call.
///
/// Functions of other arities are timed through the closure form:
/// `time_fn(|| f(a, b))`.
pub fn wrap<F, A, T>(mut f: F) -> impl FnMut(A) -> f64
where
  F: FnMut(A) -> T,
{
  move |arg| time_fn(|| f(arg)).as_secs_f64()
}

/// Checked conversion from fractional seconds to a `Duration`. Rejects
/// NaN, negative, and larger-than-`Duration::MAX` values.
pub fn duration_from_secs(secs: f64) -> Result<Duration, TimingError> {
  Duration::try_from_secs_f64(secs).map_err(|_| TimingError::InvalidDuration(secs))
}
