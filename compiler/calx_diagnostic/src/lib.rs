//! Diagnostics for the calx expression language.
//!
//! - [`ErrorCode`]: stable, searchable code for every failure
//! - [`ParseError`]: lexical and grammatical failures, with the offending
//!   span and text
//! - [`snippet`]: caret-annotated rendering of a span inside its source
//!
//! Evaluation errors live next to the value model in `calx_value`; they
//! reuse the codes and the snippet renderer from here.

mod error_code;
mod parse_error;
pub mod snippet;

pub use error_code::ErrorCode;
pub use parse_error::{ParseError, ParseErrorKind};
