//! Invocation orchestration.

pub mod run;

pub use run::run_once;
