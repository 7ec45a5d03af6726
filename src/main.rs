#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;

use std::thread;

use args::{Args, RunMode};
use clap::Parser;
use timing::{
  error::TimingResult,
  time::{duration_from_secs, time_fn, wrap},
};

fn greet(name: &str) {
  println!("Hello Class! {name}");
}

fn main() -> TimingResult {
  let args = Args::parse();

  match args.mode {
    RunMode::Greet => {
      let mut timed_greet = wrap(greet);
      let secs = timed_greet(args.name.as_str());
      println!("function execution time is, {secs}");
    }
    RunMode::Sleep => {
      let duration = duration_from_secs(args.secs)?;
      let time = time_fn(|| thread::sleep(duration));
      println!("Took {}s", time.as_secs_f32());
    }
  }

  Ok(())
}
