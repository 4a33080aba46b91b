//! CLI domain: parse, route, and output only.
//! No digest logic lives here; the route hands off to the engine.

mod output;
mod parse;
mod route;

pub use output::{format_algorithms, format_config, format_digest, map_error, OutputMode};
pub use parse::Cli;
pub use route::RunContext;
