pub mod config;
pub mod error;
pub mod github;
pub mod http;
pub mod logger;

pub use error::{Error, Result};
pub use github::{fetch_latest_release, fetch_latest_tarball_url, parse, ArchiveFormat, Release};
