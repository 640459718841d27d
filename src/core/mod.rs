// src/core/mod.rs

pub mod dsu;
pub mod engine;
pub mod normalize;
pub mod report;
pub mod scoring;
pub mod types;
pub mod vocab;
