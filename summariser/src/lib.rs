//! Parsing and aggregation for benchmark captures.
//!
//! The benchmark binaries print semi-structured text: one or more application blocks, each
//! carrying a required running-time line, optional counter-initialization lines and any number
//! of per-round lines. [parse_capture] turns one captured stdout into measurement records and
//! [aggregate] reduces the records from repeated runs of the same graph to a single row.

mod aggregate;
mod grammar;
mod parse;

pub use aggregate::{aggregate, AggregateError};
pub use parse::parse_capture;
