//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **mail**: transactional email over an HTTP API, or a logging stand-in
//! - **security**: Argon2id credential hashing
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod mail;
pub mod persistence;
pub mod security;
