use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Clone, Debug)]
pub enum RunMode {
  Greet,
  Sleep,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  #[arg(long, default_value = "greet")]
  pub mode: RunMode,

  #[arg(long, default_value = "34-502")]
  pub name: String,

  #[arg(long, default_value_t = 0.1)]
  pub secs: f64,
}
