//! Terminal presentation

mod cli;

pub use cli::print_error;
