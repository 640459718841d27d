// src/lib.rs

pub mod core;
pub mod fuzzy;
pub use crate::core::engine::ClusterEngine;
pub use crate::core::types::GroupResult;
