pub mod config;
pub mod errors;
pub mod runtime;
pub mod storage;
pub mod textarea;
