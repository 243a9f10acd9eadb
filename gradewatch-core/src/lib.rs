//! Gradewatch Core
//!
//! Core types and abstractions for the gradewatch homework-status watcher.
//!
//! This crate contains:
//! - Domain types: the review-status vocabulary and homework record
//! - Codec: shape validation of raw API responses, pure and I/O-free

pub mod codec;
pub mod domain;
