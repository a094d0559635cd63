//! Core types and traits for the Zoidberg workflow plugin.
//!
//! Request/response DTOs match the JSON bodies of the Zoidberg server's `/submit` and `/status`
//! endpoints.

mod dto;
mod status;
mod traits;

pub use dto::*;
pub use status::*;
pub use traits::*;
