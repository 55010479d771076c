//! Version resolution over candidate version lists
//!
//! A [`Filter`](filter::Filter) picks one version among candidates supplied by
//! a registry, a git remote, or a package index, and derives patterns
//! matching anything newer than a known version.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Config    │────▶│   Filter    │────▶│   Matcher   │
//! │ (raw kind)  │     │ (dispatch)  │     │ (per kind)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   │
//!                            ▼                   ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │   Pattern   │     │ Constraint  │
//!                     │ (newer than)│     │  / Layout   │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`filter`]: Filter normalization, validation and search dispatch
//! - [`kind`]: Closed set of version kinds
//! - [`matcher`]: Version matching trait
//! - [`matchers`]: Latest, regex, semver, time and capture matchers
//! - [`constraint`]: Semantic version range expressions
//! - [`layout`]: Date layouts for the time matchers
//! - [`pattern`]: Patterns matching versions newer than a baseline
//! - [`infer`]: Filter guessed from an existing version value
//! - [`semver`]: Loose and strict semantic version parsing
//! - [`error`]: Error types
//! - [`types`]: Common types like `Version`

pub mod constraint;
pub mod error;
pub mod filter;
pub mod infer;
pub mod kind;
pub mod layout;
pub mod matcher;
pub mod matchers;
pub mod pattern;
pub mod semver;
pub mod types;
