//! Key/value directory adapters backing the [`UserOfId`] port.
//!
//! A [`DirectoryClient`] reads JSON items addressed by `(table, key)`; the
//! [`UserOfIdRepository`] decodes those items into users. Two clients are
//! provided: Redis (pooled with `bb8`) for deployments and an in-memory map
//! for local runs and tests.
//!
//! [`UserOfId`]: crate::domain::ports::UserOfId

mod client;
mod memory;
mod redis;
mod user_of_id_repository;

#[cfg(test)]
pub use client::MockDirectoryClient;
pub use client::{DirectoryClient, DirectoryClientError, DirectoryItem};
pub use memory::InMemoryDirectoryClient;
pub use redis::{RedisDirectoryClient, RedisPoolConfig, item_key};
pub use user_of_id_repository::UserOfIdRepository;
