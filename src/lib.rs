#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! A terminal customer feedback widget.
//!
//! The user rates an experience. Positive ratings open a review page; negative
//! ones lead to a short survey (reason plus optional comments) that is posted
//! as JSON to a collection endpoint, followed by a thank-you screen.

pub mod config;
pub mod logging;
pub mod model;
pub mod session;
pub mod transport;
pub mod tui;
