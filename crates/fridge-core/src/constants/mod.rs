// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Groups upstream API constants and filter vocabularies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one large file.

/// Spoonacular endpoints, limits and timing defaults
pub mod spoonacular;
/// Dietary restriction and meal type vocabularies
pub mod vocabulary;

/// Service names used in structured logs and error messages
pub mod service_names {
    /// Name of this service in log output
    pub const FRIDGE_TO_TABLE: &str = "fridge-to-table";
    /// Upstream recipe API label used in error messages
    pub const SPOONACULAR_API: &str = "Spoonacular API";
}
