//! Command handlers for the bridgec CLI.

mod explain;
mod generate;

pub use explain::explain_error;
pub use generate::{
    generate_file, parse_generate_options, run_generate, GenerateOptions, GenerateReport,
};
