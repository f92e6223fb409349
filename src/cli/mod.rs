//! CLI infrastructure for the `ttt` solver
//!
//! This module provides the command-line interface for querying the best
//! move, scoring every move of a position, and statically evaluating boards.

pub mod commands;
pub mod config;
pub mod output;
