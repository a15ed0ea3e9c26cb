//! Core types and state machines for the Equilibrar client portal.
//!
//! This crate is deliberately free of terminal and HTTP dependencies. Every
//! state transition the portal performs lives here as a pure function over
//! plain values; the `equilibrar-cli` crate only renders and dispatches.

pub mod assessment;
pub mod dataset;
pub mod error;
pub mod identity;
pub mod insight;
pub mod navigation;
pub mod portal;
pub mod router;
pub mod session;

pub use error::{Error, Result};
