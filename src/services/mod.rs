//! Service layer - program loading

pub mod program;

pub use program::{load_default_program, load_program_file};
