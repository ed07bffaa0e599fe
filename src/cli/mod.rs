//! CLI layer for the label-merge binary

mod run;
mod style;

pub use run::{CliArgs, run};
