//! Common test utilities for ghpages end-to-end tests.
//!
//! This module provides:
//! - `TestEnv`: workspace, home and bare remote in temp directories
//! - Fixtures: site content constants

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
