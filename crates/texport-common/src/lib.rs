//! Common vocabulary for texport
//!
//! Shared HTTP types used by the texport client crates: the closed verb set,
//! status-code helpers, and the response-shape trait.

pub mod http;

pub use http::{HttpMethod, HttpResponseLike, HttpStatus, UnknownMethodError};
