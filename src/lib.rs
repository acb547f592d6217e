//! Play & Learn - Adaptive quiz backend for young learners
//!
//! Serves a fixed catalog of learning modules, grades answers with time-based
//! scoring, adapts question difficulty to answer streaks and tracks progress
//! and points per learner.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
