pub mod cli;
pub mod config;
pub mod correlate;
pub mod generate;
pub mod model;
pub mod navigate;
pub mod parse;
pub mod provider;
pub mod resolver;
pub mod util;
