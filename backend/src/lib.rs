//! User directory service library.
//!
//! - [`domain`]: typed results, business errors and the "show user" use case
//! - [`inbound`]: the proxy handler state machine and its HTTP adapter
//! - [`outbound`]: directory clients implementing the lookup port
//! - [`settings`]: OrthoConfig-backed service configuration

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
