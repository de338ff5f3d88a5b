//! Reading load files and printing routes.
//!
//! - [`read_loads`] / [`parse_loads`] — Line-oriented load file into a [`LoadRegistry`](crate::registry::LoadRegistry)
//! - [`format_routes`] — One `[id1,id2,...]` line per route
//! - [`format_routes_json`] — Routes and violations as JSON
//! - [`format_violations`] — One line per route over the round-trip limit

mod format;
mod parser;

pub use format::{format_routes, format_routes_json, format_violations};
pub use parser::{parse_line, parse_loads, read_loads, LoadRecord, HEADER_TOKEN};
