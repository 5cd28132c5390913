use crate::underwriting::domain::{DerivedMetrics, LoanApplication};

/// Internal contract breach: a ratio that requires positive income was
/// requested without it. The intake guard is supposed to make this path
/// unreachable, so hitting it aborts the evaluation instead of defaulting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainGuardViolation {
    #[error("loan-to-income ratio requested with non-positive annual income {income}")]
    NonPositiveIncome { income: f64 },
}

/// Debt-to-income ratio as a percentage of annual income.
///
/// A non-positive income yields 0 rather than an error. The ratio is
/// genuinely undefined there; the zero stands in for it until product signs
/// off on a distinct undefined-metric state.
pub fn dti_ratio(debt_amount: f64, annual_income: f64) -> f64 {
    if annual_income > 0.0 {
        (debt_amount / annual_income) * 100.0
    } else {
        0.0
    }
}

/// Loan-to-income ratio as a percentage of annual income. Positive income is
/// a precondition, unlike the DTI zero fallback.
pub fn loan_to_income(loan_amount: f64, annual_income: f64) -> Result<f64, DomainGuardViolation> {
    if annual_income > 0.0 {
        Ok((loan_amount / annual_income) * 100.0)
    } else {
        Err(DomainGuardViolation::NonPositiveIncome {
            income: annual_income,
        })
    }
}

/// Compute both ratios once for an evaluation pass.
pub fn derive(application: &LoanApplication) -> Result<DerivedMetrics, DomainGuardViolation> {
    let dti = dti_ratio(application.debt_amount, application.annual_income);
    let lti = loan_to_income(application.loan_amount, application.annual_income)?;
    Ok(DerivedMetrics {
        dti_ratio: dti,
        loan_to_income: lti,
    })
}
