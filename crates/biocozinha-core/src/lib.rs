// ABOUTME: Core types for the BioCozinha recipe catalog engine
// ABOUTME: Foundation crate with error handling and the catalog data model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

#![deny(unsafe_code)]

//! # BioCozinha Core
//!
//! Foundation crate shared by the catalog engine. It changes rarely, which
//! keeps incremental builds of the main crate fast.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the generation error type
//! - **models**: `Recipe`, `SubCategory`, `Pillar` and the `Catalog` aggregate

/// Unified error handling with standard error codes
pub mod errors;

/// Catalog data model
pub mod models;
