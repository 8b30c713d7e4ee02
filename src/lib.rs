pub mod config;
pub mod error;
pub mod models;
pub mod templating;
pub mod utils;
