//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod page;

pub use entities::{Category, CategoryMap, ProviderId, RawEvent, UNKNOWN_CATEGORY, WeekRange};
pub use errors::DomainError;
pub use page::{DaySection, EventBlock, NavAction, NavControl, Page};
