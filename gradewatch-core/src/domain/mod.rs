//! Core domain types
//!
//! This module contains the domain structures shared between the client
//! and the bot: the closed review-status vocabulary and the homework record.

pub mod homework;
