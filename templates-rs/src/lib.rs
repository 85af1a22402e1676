//! templates-rs: Static outreach content fixtures
//!
//! The fixed text used by the email-outreach pipeline: the outreach email
//! template with its placeholder contract, plus the drafting and extraction
//! prompts shipped alongside it.
//!
//! Everything exported here is an immutable constant. Substituting the
//! placeholder tokens and delivering the result is the consumer's job; this
//! crate defines no rendering, validation, or delivery logic.
//!
//! # Example
//!
//! ```
//! use templates_rs::outreach::OUTREACH_EMAIL;
//!
//! let body = OUTREACH_EMAIL.body.replace("{name_field}", "Alex");
//! assert!(body.starts_with("Hi Alex,"));
//! ```
//!
//! # Modules
//!
//! - [`types`]: Template and placeholder contract types
//! - [`outreach`]: The outreach email template constant
//! - [`prompts`]: Drafting and extraction prompt constants

pub mod outreach;
pub mod prompts;
pub mod types;

pub use outreach::{EMAIL_TEMPLATE, OUTREACH_EMAIL};
pub use types::{EmailTemplate, Placeholder};
