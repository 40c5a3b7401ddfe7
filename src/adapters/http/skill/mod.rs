//! Skill endpoint - the hosting wrapper around the dialog core.
//!
//! Translates the voice platform's turn envelope into application
//! commands and back. Intent classification (launch, help, stop,
//! conversion) happens here; the dialog core only sees conversion
//! turns.

pub mod dto;
mod handlers;
mod routes;

pub use dto::{SkillRequest, SkillResponse};
pub use handlers::{handle_skill_request, health, SkillAppState};
pub use routes::skill_router;
