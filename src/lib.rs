pub mod config;
pub mod descriptor;
pub mod error;
pub mod rewrite;
pub mod ui;
pub mod version;

pub use error::{BumpVersionError, Result};
