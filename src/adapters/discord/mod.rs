//! Discord chat surface over HTTP interactions.

pub mod model;
pub mod render;
pub mod rest;
pub mod server;
pub mod surface;
pub mod verify;

pub use rest::DiscordRest;
pub use server::BotState;
