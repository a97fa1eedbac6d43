//! Doorman - Single-Connection Static Page Server
//!
//! Core library for HTTP parsing, resource resolution and response framing.

pub mod config;
pub mod http;
pub mod server;
pub mod site;
