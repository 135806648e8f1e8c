//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the [`SeqTools`] methods and the error type.
//!
//! # Example
//!
//! ```
//! use better_itertools::prelude::*;
//! ```

pub use crate::traits::*;
pub use crate::{Error, Input};
