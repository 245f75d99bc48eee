//! Core types and error handling for genmod.
//!
//! This module hosts the crate-wide error type and the user-facing error
//! presentation layer:
//!
//! - [`GenmodError`] - enumerated error types for all hard failure cases
//! - [`ErrorContext`] - wrapper adding user-friendly details and suggestions
//! - [`user_friendly_error`] - conversion from any [`anyhow::Error`] into a
//!   displayable [`ErrorContext`]
//!
//! Invalid user input (a malformed attribute token, a missing model name) is
//! deliberately NOT an error: it flows through
//! [`crate::scaffold::Preparation::Invalid`] as plain messages. The types
//! here cover the faults a correct invocation can still hit - unreadable
//! files, broken templates, an already existing target.

pub mod error;

pub use error::{ErrorContext, GenmodError, user_friendly_error};
