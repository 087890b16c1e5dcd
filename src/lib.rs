//! week-schedule-bot: Teamup calendar weeks as navigable Discord pages, Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
