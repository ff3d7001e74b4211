//! texport-http: export-to-API HTTP client
//!
//! A small client for pushing exported assets (image data) to a remote REST
//! API and answering with a uniform status vocabulary. Callers never handle
//! transport errors: every outcome of [`ApiClient::do_request`] is a
//! [`ApiResponse`] whose [`ResponseStatus`] carries either the real HTTP code
//! or a synthetic code (>= 1000) naming the transport failure.
//!
//! # Architecture
//!
//! - [`Credential`]: caller identity plus the opaque authorization value
//!   injected into every outgoing request
//! - [`ApiRequest`] / [`ApiResponse`]: immutable value objects describing one
//!   call and its classified outcome
//! - [`ResponseStatus`]: the `(code, message)` pair looked up from a frozen
//!   table
//! - [`ApiClient`]: owns the base address and credential, dispatches by verb,
//!   enforces per-verb timeouts

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod request;
pub mod response;
pub mod status;

pub use client::ApiClient;
pub use config::{ClientConfig, PayloadEncoding};
pub use credential::Credential;
pub use error::{ClientError, Result};
pub use request::{ApiRequest, Payload};
pub use response::ApiResponse;
pub use status::{
    ResponseStatus, CODE_CONNECTION_REFUSED, CODE_READ_TIMEOUT, CODE_UNKNOWN,
    CONNECTED_STATUS_CEILING,
};

// Re-export shared HTTP types from texport-common
pub use texport_common::http::{HttpMethod, HttpResponseLike, HttpStatus, UnknownMethodError};
