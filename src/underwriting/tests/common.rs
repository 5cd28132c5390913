use crate::underwriting::{
    EmploymentType, EvaluationConfig, EvaluationEngine, IntakeGuard, LoanApplication,
    LoanSubmission, RiskWeights,
};

pub(super) fn submission() -> LoanSubmission {
    LoanSubmission {
        credit_score: 780,
        annual_income: 100_000.0,
        debt_amount: 5_000.0,
        employment_years: 5,
        loan_amount: 20_000.0,
        loan_purpose: "home_improvement".to_string(),
        employment_type: EmploymentType::FullTime,
    }
}

pub(super) fn application(
    credit_score: u16,
    debt_amount: f64,
    annual_income: f64,
    employment_years: u32,
    loan_amount: f64,
) -> LoanApplication {
    LoanApplication {
        credit_score,
        annual_income,
        debt_amount,
        employment_years,
        loan_amount,
        loan_purpose: "debt_consolidation".to_string(),
        employment_type: EmploymentType::FullTime,
    }
}

pub(super) fn engine() -> EvaluationEngine {
    EvaluationEngine::new(EvaluationConfig::default())
}

pub(super) fn guard() -> IntakeGuard {
    IntakeGuard::default()
}

/// Weight table low enough that the composite score can reach the low band,
/// which the shipped table cannot.
pub(super) fn relaxed_weights() -> RiskWeights {
    RiskWeights {
        credit_high: 5,
        credit_medium: 5,
        credit_low: 5,
        dti_excellent: 5,
        dti_good: 5,
        dti_moderate: 5,
        dti_poor: 5,
        employment_stable: 5,
        employment_moderate: 5,
        employment_unstable: 5,
        lti_acceptable: 5,
        lti_elevated: 5,
        lti_excessive: 5,
    }
}
