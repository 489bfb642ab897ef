pub mod cli;
pub mod config;
pub mod constants;
pub mod control;
pub mod models;
pub mod radar;
pub mod safety;
pub mod utils;
pub mod worldgen;
