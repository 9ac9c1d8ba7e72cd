//! Directive parsing core.
//!
//! Every operation here is a pure function of its input text:
//!
//! - [`normalize`]: loose object body → extended-JSON text
//! - [`parse_structured`]: object body → [`ParseOutcome`]
//! - [`parse_name_value_list`]: `name[:value]` tokens → [`DirectiveMap`]
//! - [`parse_flag_list`]: comma-separated names → [`FlagSet`]
//! - [`DirectiveText::parse`]: comment body → label, value, justification
//!
//! Locating comments in source files and merging the results into a larger
//! configuration are left to the caller.

pub mod directive;
pub mod flags;
pub mod name_value;
pub mod normalize;
pub mod structured;
pub mod types;

pub use directive::DirectiveText;
pub use flags::{FlagSet, parse_flag_list};
pub use name_value::{DirectiveEntry, DirectiveMap, parse_name_value_list};
pub use normalize::normalize;
pub use structured::parse_structured;
pub use types::{Diagnostic, Location, ParseOutcome, Position, SEVERITY_ERROR};
