//! HTTP inbound adapter exposing REST endpoints.
//!
//! Endpoints translate Actix requests into [`ProxyEvent`]s and hand them to
//! prebuilt proxy handlers held in [`state::HttpState`].
//!
//! [`ProxyEvent`]: crate::inbound::proxy::ProxyEvent

pub mod event;
pub mod response;
pub mod schemas;
pub mod show_user;
pub mod state;
pub mod users;
