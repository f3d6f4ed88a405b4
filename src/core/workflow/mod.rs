//! Deployment workflows.
//!
//! A workflow is an ordered list of steps run through a
//! [`Pipeline`](crate::core::pipeline::Pipeline). Each operation builds
//! a fresh pipeline, runs it to completion or first error, and drops
//! it; pipelines are never reused or mutated after construction.
//!
//! Steps resolve shared state through a context struct owned by the
//! operation. Earlier steps fill fields that later steps read, so a
//! failed step leaves the remaining steps unrun and the backing store
//! untouched.

pub mod database;
