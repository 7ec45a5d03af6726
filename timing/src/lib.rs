pub mod error;
pub mod stopwatch;
pub mod time;
