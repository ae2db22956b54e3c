pub mod config;
pub mod envfile;
pub mod error;

pub use config::CheckTarget;
pub use envfile::{EnvFile, EnvMap};
pub use error::*;
