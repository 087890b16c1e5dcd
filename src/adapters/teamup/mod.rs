//! Teamup calendar provider.

pub mod client;

pub use client::TeamupAdapter;
