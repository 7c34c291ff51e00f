//! Contribution room engine for the CELI (Canadian TFSA) savings account.
//!
//! This crate computes when a holder becomes eligible for the account and
//! how much contribution room has accumulated by a reference year, using
//! the published annual limits, and renders the result for display.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
