//! # calc-be
//!
//! Startup configuration for the calculator backend.
//!
//! Resolves the bind address, port, environment tag, and Gemini API key from
//! the process environment (optionally seeded from a `.env` file), and sets up
//! `tracing` with optional OTLP export.

pub mod config;
pub mod error;
pub mod telemetry;
