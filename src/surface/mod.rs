pub mod config;
pub mod export;
pub mod generator;
pub mod grid;
pub mod request;
pub mod types;
