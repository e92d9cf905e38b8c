//! Cinelog: Personal Movie Catalog
//!
//! A menu-driven catalog over a flat-file record store (JSON or CSV), with
//! substring and approximate title search, rating statistics, and optional
//! OMDb metadata lookup.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod store;
pub mod tooling;
pub mod types;
