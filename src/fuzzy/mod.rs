// src/fuzzy/mod.rs

pub mod masking;
