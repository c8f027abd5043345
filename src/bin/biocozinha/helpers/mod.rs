// ABOUTME: Helper modules for the biocozinha CLI
// ABOUTME: Provides text rendering of catalog views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

pub mod display;
