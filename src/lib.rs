//! Library crate for alias-back, exposing modules for binaries and integration tests.

pub mod config;
pub mod dto;
mod error;
pub mod routes;
pub mod services;
pub mod state;
pub mod words;
