use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{ApplicationId, LoanApplication, LoanDecision, RuleId};
use super::evaluation::EvaluationOutcome;

/// Row the persistence layer appends to the evaluation-history ledger. The
/// engine supplies exactly these fields; anything caller-specific stays with
/// the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRecord {
    pub application_id: ApplicationId,
    pub credit_score: u16,
    pub dti_ratio: f64,
    pub result: LoanDecision,
    pub rule_fired: RuleId,
    pub explanation: String,
    pub confidence: u8,
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationRecord {
    /// Package an outcome for the ledger. The caller supplies the timestamp
    /// so replays of the same evaluation stay deterministic.
    pub fn new(
        application_id: ApplicationId,
        application: &LoanApplication,
        outcome: &EvaluationOutcome,
        evaluated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            application_id,
            credit_score: application.credit_score,
            dti_ratio: outcome.metrics.dti_ratio,
            result: outcome.decision,
            rule_fired: outcome.rule_fired,
            explanation: outcome.explanation.clone(),
            confidence: outcome.confidence,
            evaluated_at,
        }
    }
}
