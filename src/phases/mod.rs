//! Implementation of the six phases of a site build.
//!
//! ## Overview
//!
//! A build follows 6 phases, each consuming only the results of the phases
//! before it:
//! 1. Loading - Decode note records and apply defaults
//! 2. Ordering - Sort notes by slug and reject duplicates
//! 3. Output Preparation - Clear and recreate the output directory
//! 4. Rendering - Write the index page and both copies of every note page
//! 5. Static Assets - Copy top-level asset files verbatim
//! 6. Sitemap - Write `sitemap.xml` for the home page and every note
//!
//! [`orchestrator::generate`] runs them in order. Validation of note records
//! is not a phase; it lives in [`crate::validate`] and is run separately.

pub mod assets;
pub mod load;
pub mod orchestrator;
pub mod ordering;
pub mod prepare;
pub mod render;
pub mod sitemap;

pub use orchestrator::{generate, BuildSummary};
