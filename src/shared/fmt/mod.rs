//! Display formatting helpers for view collaborators.

pub mod num;

pub use num::{currency, decimal, display, display_with_decimals, signed_percent};
