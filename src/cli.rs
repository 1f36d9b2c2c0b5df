//! CLI domain: parse, route, and output only.
//! Generation itself lives in the orchestrator; routes only call into it.

mod output;
mod parse;
mod route;

pub use output::{format_generation_output, format_status_text, map_error};
pub use parse::{Cli, Commands};
pub use route::RunContext;
