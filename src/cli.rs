//! CLI domain: parse, route, help, output, and presentation only.
//! Namespace logic lives in [`crate::namespace`]; the route table only dispatches.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, is_mutating};
pub use output::map_error;
pub use parse::{Cli, Commands, LabelCommands, RecentKind, RecentTarget, TrackingState};
pub use presentation::{format_listing, format_names, format_location};
pub use route::RunContext;
