//! # kubenet common
//!
//! Shared building blocks of the cluster network configuration:
//!
//! * **[`network`]**: the configuration model and everything derived from it
//!   (service addresses, CIDR arguments).
//! * **[`field`]**: structured, path-addressed validation errors.
//! * **[`config`]**: runtime options of the command line front end.

pub mod config;
pub mod field;
pub mod network;
