//!
//! Module with all dtos that are passed between server and clients
//!

pub mod input;
pub mod output;
