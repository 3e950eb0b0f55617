//! CLI domain: parse, route, output, and presentation only.
//! No domain logic; the route table reads a loaded registry and formats results.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_service_list_json, format_service_list_text, format_service_show_json,
    format_service_show_text, format_validate_result, ServiceSummary,
};
pub use route::RunContext;
