//! Error types for wrapmark.
//!
//! Registration-input validation is the only user-facing failure; every
//! per-evaluation condition (empty container, detached element, style
//! races) is handled locally and silently.
//!
//! All errors use the `thiserror` crate for minimal boilerplate and
//! proper error trait implementations.

use thiserror::Error;

/// Result type alias for wrapmark operations
///
/// # Examples
///
/// ```
/// use wrapmark::Result;
///
/// fn resolve_targets() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for wrapmark
///
/// # Examples
///
/// ```
/// use wrapmark::{Error, RegistrationError};
///
/// let err = Error::Registration(RegistrationError::BlankSelector);
/// assert!(err.to_string().contains("selector"));
/// ```
#[derive(Error, Debug)]
pub enum Error {
  /// Registration input failed validation before any observation began
  #[error("Registration error: {0}")]
  Registration(#[from] RegistrationError),
}

/// Errors raised while validating and resolving a registration target
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
  /// Selector string was empty or all whitespace
  #[error("selector is blank")]
  BlankSelector,

  /// An explicit container list contained no elements
  #[error("container list is empty")]
  NoContainers,
}
