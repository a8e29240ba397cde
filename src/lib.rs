#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod render;
pub mod search;
