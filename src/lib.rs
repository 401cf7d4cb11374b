pub mod config;
pub mod environment;
pub mod error;
pub mod gbif;
pub mod logging;
pub mod pipeline;
pub mod seed;
pub mod taxonomy;
pub mod writer;

pub const TARGET_WEB_REQUEST: &str = "web_request";
pub const TARGET_PIPELINE: &str = "pipeline";
