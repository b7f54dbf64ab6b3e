// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block windows for the pair statistics.
//!
//! This module provides:
//! - [`BlockCount`], a strongly typed span of blocks
//! - [`LookbackWindow`], the inclusive range ending at the chain tip that the
//!   volume and transaction-count queries scan

pub mod window;

pub use window::{BlockCount, LookbackWindow};
