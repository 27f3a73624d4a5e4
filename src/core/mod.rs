// src/core/mod.rs

pub mod net;
pub mod verify;

pub use net::{ProbeClient, ProbeError, ProbeOutcome, ProbeResponse, Target};
