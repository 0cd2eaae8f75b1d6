// src/presentation/http/controllers/mod.rs
pub mod catalog;
pub mod pages;
