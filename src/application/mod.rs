// src/application/mod.rs
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod resolution;
pub mod services;

pub use error::ApplicationResult;
