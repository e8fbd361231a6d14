//! Data models for the descry pattern service.
//!
//! This module contains the request and response shapes exchanged with the
//! pattern and tester services.

// Export submodules
pub mod check;
pub mod listing;
pub mod message;
pub mod parse;
pub mod samples;
