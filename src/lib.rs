// src/lib.rs

pub mod config;
pub mod error;
pub mod llm;
pub mod persona;
pub mod prompt;
pub mod server;
pub mod session;

pub use error::{ReflectError, Result};
