// SPDX-License-Identifier: MPL-2.0
//! `evercraft_boost` is the boot-time companion of the Evercraft Idle
//! desktop mirror.
//!
//! It provides two independent bootstrap components: a fail-safe
//! localization bootstrap that brings up the Russian translation overlay
//! ahead of the game bundle, and a global time-acceleration patch that
//! virtualizes the clocks and timers the game observes while leaving the
//! wall clock untouched.

#![doc(html_root_url = "https://docs.rs/evercraft_boost/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod localization;
pub mod paths;
pub mod speed;
pub mod test_utils;
