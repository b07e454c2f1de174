// ABOUTME: Re-exports the unified error type from fridge-core
// ABOUTME: Keeps `crate::errors::AppError` paths stable for the rest of the crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

pub use fridge_core::errors::{AppError, AppResult, ErrorCode, ErrorContext};
