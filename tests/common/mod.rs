//! Common test utilities for tframp.
//!
//! This module provides shared helpers for inspecting lookup tables and
//! rendered images.
#![allow(dead_code)]

pub mod assertions;
pub mod image_utils;
