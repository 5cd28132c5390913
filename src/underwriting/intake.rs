use tracing::warn;

use super::domain::{LoanApplication, LoanSubmission};

const CREDIT_SCORE_FLOOR: u16 = 300;
const CREDIT_SCORE_CEILING: u16 = 850;

/// Bounds applied by the intake guard before a submission reaches the engine.
#[derive(Debug, Clone)]
pub struct IntakeLimits {
    pub credit_score_floor: u16,
    pub credit_score_ceiling: u16,
}

impl Default for IntakeLimits {
    fn default() -> Self {
        Self {
            credit_score_floor: CREDIT_SCORE_FLOOR,
            credit_score_ceiling: CREDIT_SCORE_CEILING,
        }
    }
}

/// Rejection carrying every violation found in a submission, in the order
/// the checks run, so the applicant sees the full list at once.
#[derive(Debug, Clone, thiserror::Error)]
#[error("submission rejected: {}", .errors.join("; "))]
pub struct IntakeRejection {
    pub errors: Vec<String>,
}

/// Guard responsible for producing `LoanApplication` values.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    limits: IntakeLimits,
}

impl IntakeGuard {
    pub fn with_limits(limits: IntakeLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &IntakeLimits {
        &self.limits
    }

    /// Validate a raw submission. Every check runs independently; nothing
    /// short-circuits, so a submission with several problems reports all of
    /// them. Type coercion from untyped input is the caller's job.
    pub fn admit(&self, submission: LoanSubmission) -> Result<LoanApplication, IntakeRejection> {
        let mut errors = Vec::new();

        if submission.loan_amount <= 0.0 {
            errors.push("Loan amount must be greater than 0.".to_string());
        }
        if submission.annual_income <= 0.0 {
            errors.push("Annual income must be greater than 0.".to_string());
        }
        if submission.credit_score < i32::from(self.limits.credit_score_floor)
            || submission.credit_score > i32::from(self.limits.credit_score_ceiling)
        {
            errors.push(format!(
                "Credit score must be between {} and {}.",
                self.limits.credit_score_floor, self.limits.credit_score_ceiling
            ));
        }
        if submission.employment_years < 0 {
            errors.push("Employment years cannot be negative.".to_string());
        }
        let loan_purpose = submission.loan_purpose.trim();
        if loan_purpose.is_empty() {
            errors.push("Please specify the loan purpose.".to_string());
        }

        if !errors.is_empty() {
            warn!(violations = errors.len(), "loan submission failed intake");
            return Err(IntakeRejection { errors });
        }

        Ok(LoanApplication {
            credit_score: submission.credit_score as u16,
            annual_income: submission.annual_income,
            debt_amount: submission.debt_amount,
            employment_years: submission.employment_years as u32,
            loan_amount: submission.loan_amount,
            loan_purpose: loan_purpose.to_string(),
            employment_type: submission.employment_type,
        })
    }
}
