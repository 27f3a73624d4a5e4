// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod progress;
pub mod questions;
pub mod roster;
pub mod runner;

pub use runner::{run_all, RunSummary};
