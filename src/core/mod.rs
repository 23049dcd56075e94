pub mod backup;
pub mod calculator;
pub mod config;
pub mod log;
pub mod logic;
