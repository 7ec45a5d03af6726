use core::fmt;
use std::{
  error::Error,
  fmt::{Display, Formatter},
};

#[derive(Debug)]
pub enum TimingError {
  InvalidDuration(f64),
}

impl Display for TimingError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TimingError::InvalidDuration(secs) => {
        write!(f, "Invalid sleep duration: {secs}s")
      }
    }
  }
}

impl Error for TimingError {}

pub type TimingResult<T = ()> = Result<T, Box<dyn Error>>;
