//! Explainable decision engine for consumer loan applications.
//!
//! The crate evaluates validated application attributes against an ordered,
//! first-match rule base and a parallel weighted risk score, producing an
//! auditable outcome (decision, explanation, confidence, fired rule). The
//! embedding service owns HTTP, sessions, and persistence; it hands
//! submissions to [`underwriting::IntakeGuard`], runs
//! [`underwriting::EvaluationEngine`], and stores the
//! [`underwriting::EvaluationRecord`] the engine supplies.

pub mod config;
pub mod telemetry;
pub mod underwriting;
