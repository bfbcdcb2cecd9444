pub mod config;
pub mod error;
pub mod parse;
pub mod report;
pub mod scan;
pub mod validate;
