//! # Open-ICT competency queries
//!
//! Read-only query tools for the Open-ICT competency framework:
//! - `hboi`: HBO-I professional tasks, nested `layer -> activity -> level`
//! - `vaardigheden`: student skills, nested `skill -> level`
//!
//! ## Query Flow
//! 1. Validate filter values against the fixed vocabularies
//! 2. Load the JSON data file for the engine
//! 3. Narrow the tree one dimension at a time, pruning empty branches
//! 4. Print the remaining tree as indented JSON
//!
//! ## Modules
//! - `engine`: the two engine definitions and the query pipeline
//! - `filter`: generic hierarchical exact-match filtering
//! - `vocabulary`: accepted values per dimension
//! - `dataset`: data file loading
//! - `cli`: shared binary plumbing (logging, rendering, exit codes)

pub mod cli;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod filter;
pub mod vocabulary;

pub use config::Config;
pub use engine::{QueryEngine, SKILLS, TASKS};
pub use error::QueryError;
pub use filter::{FilterCriteria, Tree};
