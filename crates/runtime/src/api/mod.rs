//! Public runtime API surface.
//!
//! This module gathers the types the presentation layer and story drivers
//! interact with: the callback contract, its channel-backed implementation and
//! the runtime error taxonomy.

pub mod callback;
pub mod channel;
pub mod errors;

pub use callback::EventCallback;
pub use channel::{ChannelCallback, PresentationPort, PresentationRequest, Responder};
pub use errors::{CancelReason, RequestKind, Result, RuntimeError};
