//! Product name and price crawler for the Suncheon local food catalog
//! (sclocal.kr).

pub mod archiver;
pub mod collector;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod parser;
