//! # linux_triage
//!
//! A best-effort forensic triage collector for live Linux hosts.
//!
//! ## Overview
//!
//! linux_triage identifies the running distribution family, executes a
//! family-aware set of diagnostic commands, copies relevant filesystem paths
//! (configs, logs, shell history, credential stores), and packages everything
//! into a single timestamped ZIP archive for offline analysis.
//!
//! Collection is tolerant: individual command or copy failures never
//! abort the run. Failures are appended to a run-scoped error log inside the
//! staging tree, and every attempted item is reported as an [`models::Outcome`]
//! so callers can inspect the full result set.
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`models`]: Core data models (distribution info, plan specs, outcomes)
//! - [`distro`]: OS identity parsing and family classification
//! - [`plan`]: Collection plan construction per distribution family
//! - [`collectors`]: Plan execution (command capture, path copy)
//! - [`run_log`]: Append-only run-scoped error log
//! - [`utils`]: Archive packaging and collection summary
//! - [`privileges`]: Root privilege check
//! - [`constants`]: Application-wide constants

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Core data models and structures used throughout the application
pub mod models;

/// OS identity parsing and distribution family classification
pub mod distro;

/// Collection plan construction
pub mod plan;

/// Plan execution: diagnostic command capture and tolerant path copy
pub mod collectors;

/// Append-only run-scoped error log
pub mod run_log;

/// Utility functions for archive packaging and run summaries
pub mod utils;

/// Privilege checks
pub mod privileges;

/// Application constants and fixed paths
pub mod constants;
