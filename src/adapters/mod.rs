//! Infrastructure adapters. Implement outbound ports.
//!
//! Teamup, Discord, the liveness route. Map errors to DomainError.

pub mod discord;
pub mod http;
pub mod teamup;
