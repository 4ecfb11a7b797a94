//! Domain - solver configuration and the enumerations shared by passes

pub mod boundary;
pub mod config;
pub mod fields;
