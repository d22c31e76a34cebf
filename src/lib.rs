//! # Lexis
//!
//! Upload a PDF together with an email address, pull the nouns and verbs out of the
//! document's text, and keep them under that email.
//!
//! The pieces, from the bottom up:
//! - [`extraction`] turns PDF bytes into page text,
//! - [`tagging`] assigns a part of speech to every token of that text,
//! - [`analysis`] combines the two into a shared service,
//! - [`db`] stores one record per email,
//! - [`server`] exposes the upload and lookup endpoints.

// =========================================================================
//                  Crate-wide lints
// =========================================================================
// Everything is a warning locally; CI turns warnings into errors.
// Lint reference: https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(
    clippy::all,
    missing_docs,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(
    clippy::blanket_clippy_restriction_lints,
    reason = "Restriction lints are opted into wholesale and opted out of one by one below"
)]
#![warn(clippy::restriction)]
//
// =========================================================================
//   Restriction lints that do not fit this crate
// =========================================================================
#![allow(clippy::implicit_return, reason = "This is idiomatic Rust")]
#![allow(
    clippy::multiple_crate_versions,
    reason = "actix, sqlx and lopdf pull in overlapping transitive versions"
)]
#![allow(
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    reason = "Not a no-std crate"
)]
#![allow(clippy::mod_module_files, reason = "mod.rs is the convention across the crate")]
#![allow(
    clippy::missing_inline_in_public_items,
    reason = "The compiler inlines well enough; hot paths can opt in once profiled"
)]
#![allow(
    clippy::exhaustive_structs,
    clippy::exhaustive_enums,
    reason = "This is an application crate, not a library with downstream users"
)]
#![allow(clippy::question_mark_used, reason = "Errors are propagated with `?`")]
#![allow(
    clippy::semicolon_outside_block,
    reason = "Semicolons go outside blocks across the codebase"
)]
#![allow(
    clippy::single_call_fn,
    reason = "Long functions are split into single-use helpers"
)]
#![allow(
    clippy::arithmetic_side_effects,
    reason = "Arithmetic is limited to lengths and counters"
)]
#![allow(
    clippy::renamed_function_params,
    reason = "Collides with `min_ident_chars` for single-char trait params"
)]
#![allow(
    clippy::arbitrary_source_item_ordering,
    reason = "Items are ordered by reading flow, not alphabetically"
)]
#![allow(
    clippy::pub_use,
    reason = "Each module re-exports its production implementation"
)]

pub mod analysis;
pub mod config;
pub mod db;
pub mod extraction;
pub mod server;
pub mod tagging;
pub mod utils;
