// ABOUTME: Re-exports application constants from fridge-core
// ABOUTME: Upstream endpoints, limits, service names and filter vocabularies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

pub use fridge_core::constants::{service_names, spoonacular, vocabulary};
