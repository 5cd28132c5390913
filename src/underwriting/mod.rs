//! Loan application intake, evaluation, and audit-record scaffolding.
//!
//! Flow: a raw [`LoanSubmission`] passes the [`IntakeGuard`], the
//! [`EvaluationEngine`] derives ratios and categories and walks the ordered
//! rule base, and the committed outcome is packaged as an
//! [`EvaluationRecord`] for the caller's history ledger.

pub mod domain;
pub(crate) mod evaluation;
pub mod history;
pub mod intake;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationId, DerivedMetrics, EmploymentType, LoanApplication, LoanDecision, LoanSubmission,
    RuleId,
};
pub use evaluation::{
    dti_ratio, loan_to_income, risk_score, CreditCategory, DomainGuardViolation, DtiCategory,
    EmploymentStability, EvaluationConfig, EvaluationDetails, EvaluationEngine, EvaluationOutcome,
    LeverageCategory, RiskBand, RiskWeights,
};
pub use history::EvaluationRecord;
pub use intake::{IntakeGuard, IntakeLimits, IntakeRejection};
