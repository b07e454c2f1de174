// ABOUTME: Core types and constants for the Fridge-to-Table recipe finder
// ABOUTME: Foundation crate with error handling and upstream API constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

#![deny(unsafe_code)]

//! # Fridge Core
//!
//! Foundation crate shared by the recipe pipeline and its binaries. It changes
//! rarely, which keeps incremental builds of the main crate cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Upstream endpoints, request limits and filter vocabularies

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;
