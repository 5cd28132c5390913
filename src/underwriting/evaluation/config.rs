use serde::{Deserialize, Serialize};

use super::risk::RiskWeights;

/// Immutable policy tables for one engine instance. Built once at startup
/// (defaults, optionally adjusted by [`crate::config::AppConfig::load`]) and
/// injected by reference; never mutated while serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub weights: RiskWeights,
    /// Loan-to-income ceiling below which a high-credit, good-DTI applicant
    /// is approved outright instead of conditionally.
    pub high_credit_lti_limit: f64,
    /// Same ceiling for medium-credit applicants, held tighter.
    pub medium_credit_lti_limit: f64,
    /// Ratio above which leverage alone rejects the application.
    pub leverage_rejection_lti: f64,
    /// Stricter catch-all ceiling folded in from the harsher rule-set variant.
    pub strict_leverage_lti: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            weights: RiskWeights::default(),
            high_credit_lti_limit: 30.0,
            medium_credit_lti_limit: 25.0,
            leverage_rejection_lti: 40.0,
            strict_leverage_lti: 45.0,
        }
    }
}
