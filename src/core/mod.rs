pub mod add;
pub mod aggregate;
pub mod config;
pub mod del;
pub mod edit;
pub mod log;
