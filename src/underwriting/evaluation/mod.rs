mod category;
mod config;
mod metrics;
mod risk;
mod rules;

pub use category::{CreditCategory, DtiCategory, EmploymentStability, LeverageCategory};
pub use config::EvaluationConfig;
pub use metrics::{dti_ratio, loan_to_income, DomainGuardViolation};
pub use risk::{score as risk_score, RiskBand, RiskWeights};

use serde::Serialize;
use tracing::{debug, error};

use super::domain::{DerivedMetrics, LoanApplication, LoanDecision, RuleId};
use rules::RuleFacts;

/// Stateless evaluator applying the configured rule base to an application.
/// Reads only its input and the injected tables, so it is freely shared
/// across threads.
pub struct EvaluationEngine {
    config: EvaluationConfig,
}

impl EvaluationEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Evaluate a validated application. Identical inputs always yield
    /// identical outcomes, and every well-formed application reaches one.
    pub fn evaluate(
        &self,
        application: &LoanApplication,
    ) -> Result<EvaluationOutcome, DomainGuardViolation> {
        let metrics = self.derive_metrics(application)?;
        let facts = RuleFacts {
            credit: CreditCategory::from_score(application.credit_score),
            dti: DtiCategory::from_ratio(metrics.dti_ratio),
            employment: EmploymentStability::from_years(application.employment_years),
            leverage: LeverageCategory::from_ratio(metrics.loan_to_income),
            employment_years: application.employment_years,
            loan_to_income: metrics.loan_to_income,
        };

        let matched = rules::match_rules(&facts, &self.config);
        debug!(
            rule = matched.id.0,
            decision = matched.decision.label(),
            confidence = matched.confidence,
            "rule committed"
        );

        Ok(EvaluationOutcome {
            decision: matched.decision,
            explanation: matched.explanation.to_string(),
            confidence: matched.confidence,
            rule_fired: matched.id,
            metrics,
        })
    }

    /// Categorized view of a single application, for display next to the
    /// stored outcome.
    pub fn explain(
        &self,
        application: &LoanApplication,
    ) -> Result<EvaluationDetails, DomainGuardViolation> {
        let metrics = self.derive_metrics(application)?;

        Ok(EvaluationDetails {
            credit_score: application.credit_score,
            credit_category: CreditCategory::from_score(application.credit_score),
            debt_amount: application.debt_amount,
            annual_income: application.annual_income,
            dti_ratio: metrics.dti_ratio,
            dti_category: DtiCategory::from_ratio(metrics.dti_ratio),
            loan_amount: application.loan_amount,
            loan_to_income: metrics.loan_to_income,
            leverage_category: LeverageCategory::from_ratio(metrics.loan_to_income),
            employment_years: application.employment_years,
            employment_stability: EmploymentStability::from_years(application.employment_years),
        })
    }

    fn derive_metrics(
        &self,
        application: &LoanApplication,
    ) -> Result<DerivedMetrics, DomainGuardViolation> {
        metrics::derive(application).map_err(|violation| {
            error!(%violation, "domain guard violation aborted evaluation");
            violation
        })
    }
}

/// Result record produced once per evaluation; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationOutcome {
    pub decision: LoanDecision,
    pub explanation: String,
    pub confidence: u8,
    pub rule_fired: RuleId,
    pub metrics: DerivedMetrics,
}

/// Auxiliary display payload answering "how was this application read".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationDetails {
    pub credit_score: u16,
    pub credit_category: CreditCategory,
    pub debt_amount: f64,
    pub annual_income: f64,
    pub dti_ratio: f64,
    pub dti_category: DtiCategory,
    pub loan_amount: f64,
    pub loan_to_income: f64,
    pub leverage_category: LeverageCategory,
    pub employment_years: u32,
    pub employment_stability: EmploymentStability,
}
