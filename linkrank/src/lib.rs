pub mod handlers;

// Re-export the helpers behind each subcommand
pub use handlers::{
    expand_path, parse_report_format, render_aggregation, run_aggregate, run_rank, run_search,
};
