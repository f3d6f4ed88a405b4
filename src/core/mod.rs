//! Core library components.
//!
//! This module contains the reusable business logic for stack naming,
//! pipeline execution, parameter storage, and configuration handling.

pub mod config;
pub mod constants;
pub mod naming;
pub mod pipeline;
pub mod store;
pub mod validation;
pub mod workflow;
