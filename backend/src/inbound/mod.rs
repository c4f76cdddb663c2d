//! Inbound adapters that translate external requests into use case calls
//! while keeping framework details at the edge.
//!
//! [`proxy`] holds the transport-neutral handler; [`http`] exposes it through
//! Actix Web.

pub mod http;
pub mod proxy;
