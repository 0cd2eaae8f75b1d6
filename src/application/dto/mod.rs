// src/application/dto/mod.rs
pub mod catalog;

pub use catalog::{ResolvedEntityDto, SlugDto};
