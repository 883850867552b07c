// src/core/mod.rs

pub mod href;
pub mod net;
pub mod sanitize;
