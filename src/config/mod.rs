// ABOUTME: Configuration management module for the recipe pipeline
// ABOUTME: Loads upstream API, search and autocomplete settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

//! Configuration module
//!
//! Configuration is environment-only:
//!
//! - **Environment**: top-level [`AppConfig`] assembled from the sections below
//! - **API providers**: Spoonacular client, search and autocomplete settings

/// Upstream API and pipeline tuning loaded from environment variables
pub mod api_providers;
/// Top-level application configuration
pub mod environment;

pub use environment::AppConfig;
