//! # Walkthrough Sample
//!
//! Lifts ordinary functions into several monads with kleisli:
//!
//! - squaring and summing over [`Maybe`](kleisli::control::Maybe);
//! - the same functions over `Vec`, where binding is a cartesian product;
//! - a logged addition whose [`Writer`](kleisli::effect::Writer) log is an
//!   audit trail;
//! - a counting Writer whose log is a [`Sum`](kleisli::typeclass::Sum).
//!
//! ## Module Structure
//!
//! - `config`: environment-driven settings
//! - `lessons`: the computations, each returning its result for inspection

#![forbid(unsafe_code)]

pub mod config;
pub mod lessons;

pub use config::{ConfigError, WalkthroughConfig};
pub use lessons::WalkthroughError;
