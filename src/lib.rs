pub mod api;
pub mod client;
pub mod config;
pub mod load;
pub mod logging;
pub mod mcp;
pub mod output;
pub mod target;
