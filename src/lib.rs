#![doc = include_str!("../readme.md")]
#![allow(clippy::uninlined_format_args)]
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod candidate;
pub mod filter;
pub mod numeric;
pub mod numeric_input;

pub use pure_rust_locales::Locale;

pub mod event {
    //!
    //! Event-handler traits and Keybindings.
    //!
    //! See [rat-event](https://docs.rs/rat-event/latest/rat_event/)
    //!
    pub use rat_event::*;
    pub use rat_text::event::{ReadOnly, TextOutcome};

    pub use crate::filter::FilterOutcome;
}

/// Errors when reading the value of a numeric input.
///
/// The filter itself never fails, it just rejects edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// No text at all.
    Empty,
    /// Only a sign, the digits are still missing.
    Incomplete,
    /// Text is not a number.
    InvalidNumber(String),
    /// Number doesn't fit the requested type.
    OutOfRange(String),
}

impl Display for NumericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for NumericError {}

mod _private {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
