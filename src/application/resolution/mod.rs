// src/application/resolution/mod.rs
mod outcome;
mod resolvers;
mod service;

pub use outcome::Resolution;
pub use resolvers::{EntityResolver, ProgramResolver, SportResolver, TrainerResolver};
pub use service::SlugResolutionService;
