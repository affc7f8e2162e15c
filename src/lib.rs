//! Terminal image search
//!
//! Library half of the `imgsearch` binary: the API client, configuration,
//! the pure model with its transitions, pure logic helpers, and the
//! background API service. Everything that touches the terminal lives in
//! the binary.

pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod services;
