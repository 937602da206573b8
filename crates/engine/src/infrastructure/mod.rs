//! Infrastructure implementations.
//!
//! Contains the character store port and its HTTP adapter.

pub mod config;
pub mod http_store;
pub mod ports;
