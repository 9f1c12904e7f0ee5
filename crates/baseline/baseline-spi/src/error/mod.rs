//! Error types for baseline analysis.
//!
//! This module contains the error type and the Result alias.

mod baseline_error;

pub use baseline_error::{BaselineError, Result};
