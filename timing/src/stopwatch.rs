use std::time::{Duration, Instant};

/// Labelled timer that reports how long it was alive when dropped.
pub struct Stopwatch {
  label: String,
  start: Instant,
}

impl Stopwatch {
  pub fn new(label: &str) -> Self {
    Self {
      label: label.to_owned(),
      start: Instant::now(),
    }
  }

  pub fn elapsed(&self) -> Duration {
    self.start.elapsed()
  }

  pub fn elapsed_seconds(&self) -> f64 {
    self.elapsed().as_secs_f64()
  }
}

impl Drop for Stopwatch {
  fn drop(&mut self) {
    println!("{} took {:.3?}", self.label, self.elapsed());
  }
}
