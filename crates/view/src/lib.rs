//! Search view for mealsearch
//!
//! State machine over the query, busy flag, result set and detail selection,
//! plus plain-text rendering used by the CLI.

pub mod render;
mod state;

pub use render::{render_details, render_results};
pub use state::{Completion, Key, SearchPhase, SearchTicket, SearchView, TicketId};
