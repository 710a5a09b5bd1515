//! API client for communicating with Cloudbet.
//!
//! - [`rest`] - HTTP client for the REST endpoints

pub mod rest;

pub use rest::RestClient;
