// src/domain/mod.rs
pub mod catalog;
pub mod errors;
pub mod media;
