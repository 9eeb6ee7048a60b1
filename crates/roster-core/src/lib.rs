//! roster-core — Record store, classifier, and statistics.
//!
//! This crate holds the in-memory roster, the score classifier, aggregate
//! statistics, and the session controller that drives a presentation
//! surface after every operation.

pub mod classifier;
pub mod config;
pub mod error;
pub mod model;
pub mod notice;
pub mod session;
pub mod statistics;
pub mod store;
pub mod view;
