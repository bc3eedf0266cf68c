//! Configuration and catalog data types

pub mod config;
pub mod models;
