pub mod config;
pub mod error;
pub mod source;
pub mod types;

pub use config::{SiteConfig, parse_config_toml};
pub use error::{Error, Result};
pub use source::SlugSource;
pub use types::*;
