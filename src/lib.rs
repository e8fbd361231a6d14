//! # descry-client
//!
//! A Rust client library for the descry pattern service.
//!
//! The service stores XML extraction patterns, checks them against sample
//! pages, and applies them to HTML documents. This crate provides a typed,
//! async interface to that service plus the UI actions of its pattern
//! editor, rendering into view regions the caller supplies.
//!
//! ## Features
//!
//! - 📄 Pattern management (list, read, write, delete, reload)
//! - ✅ Live pattern validation with stale responses discarded
//! - 🧪 Sample store and parse endpoints of the tester service
//! - 🔄 Async API with Tokio runtime support
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use descry_client::ui::{MemoryAlert, MemoryList, MemoryRegion, Page};
//! use descry_client::DescryClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DescryClient::builder().base_url("http://localhost:5000").build()?;
//!
//!     let alert = Arc::new(MemoryAlert::new());
//!     let result = Arc::new(MemoryRegion::new());
//!     let patterns = Arc::new(MemoryList::new());
//!     let page = Page::builder(client)
//!         .pattern_checking(alert.clone(), result.clone())
//!         .pattern_list(patterns.clone())
//!         .build();
//!
//!     if let Some(list) = page.list_patterns() {
//!         list.load().await?;
//!     }
//!     println!("{}", patterns.to_html());
//!
//!     if let Some(validator) = page.live_validator() {
//!         validator.on_input("<Map mime=\"html\"></Map>").await;
//!     }
//!     println!("alert: {:?}\n{}", alert.state(), result.content());
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
pub mod models;
pub mod ui;

pub use api::check::CheckBuilder;
pub use api::parse::ParseBuilder;
pub use api::patterns::{PatternHandler, PutPatternBuilder};
pub use api::projects::ProjectHandler;
pub use api::samples::SampleHandler;
#[cfg(feature = "default-client")]
pub use client::{initialize, instance};
pub use client::{DescryClient, DescryClientBuilder, RawResponse};
pub use error::{DescryError, DescryResult, UrlParseError};
pub use models::check::CheckResponse;
pub use models::message::ResponseMessage;
pub use models::parse::ParseRequest;
pub use models::samples::SampleList;
