//! Application use cases. Orchestrate domain logic via ports.

pub mod formatter;
pub mod grouper;
pub mod pagination;
pub mod schedule_service;
pub mod week_range;

#[cfg(test)]
pub(crate) mod testing;

pub use pagination::{PaginationController, PaginationSession};
pub use schedule_service::ScheduleService;
pub use week_range::compute_week_range;
