//! Remote content API boundary.
//!
//! Defines the [`ContentApi`] capability trait the chat pipelines consume,
//! and an HTTP implementation backed by reqwest. The chat core never talks
//! to the wire directly; it only sees this trait.

pub mod client;
pub mod error;
pub mod http;

pub use client::ContentApi;
pub use error::ApiError;
pub use http::HttpContentApi;
