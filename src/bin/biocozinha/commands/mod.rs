// ABOUTME: Command modules for the biocozinha CLI
// ABOUTME: Browsing views and AI recipe generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

pub mod browse;
pub mod generate;
