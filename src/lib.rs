//! guestbook-relay - Guestbook entries from Netlify Forms
//!
//! Locates the form named "guestbook" on a Netlify account, fetches its
//! submissions, drops spam, and returns rows in a stable shape for a
//! frontend widget. The [`handler`] module wraps this in a serverless
//! function contract.

pub mod config;
pub mod error;
pub mod forms;
pub mod handler;
pub mod normalize;
pub mod pipeline;
pub mod resolve;
pub mod types;

pub use error::{Error, Result};
