use serde::{Deserialize, Serialize};

/// Identifier wrapper keying applications and their evaluation-history rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Employment arrangement declared by the applicant. Carried on the
/// application file for the record; no decision rule consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    SelfEmployed,
}

impl EmploymentType {
    pub const fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full_time",
            EmploymentType::PartTime => "part_time",
            EmploymentType::SelfEmployed => "self_employed",
        }
    }
}

/// Raw, caller-supplied application attributes prior to validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSubmission {
    pub credit_score: i32,
    pub annual_income: f64,
    pub debt_amount: f64,
    pub employment_years: i32,
    pub loan_amount: f64,
    pub loan_purpose: String,
    pub employment_type: EmploymentType,
}

/// Validated application attributes. Only the intake guard builds these, and
/// nothing mutates one afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub credit_score: u16,
    pub annual_income: f64,
    pub debt_amount: f64,
    pub employment_years: u32,
    pub loan_amount: f64,
    pub loan_purpose: String,
    pub employment_type: EmploymentType,
}

/// Ratios computed once per evaluation, expressed as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub dti_ratio: f64,
    pub loan_to_income: f64,
}

/// Final outcome for an evaluated application. Closed set; the persistence
/// layer stores the `label()` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanDecision {
    Approved,
    Conditional,
    Rejected,
}

impl LoanDecision {
    pub const fn label(self) -> &'static str {
        match self {
            LoanDecision::Approved => "approved",
            LoanDecision::Conditional => "conditional",
            LoanDecision::Rejected => "rejected",
        }
    }
}

/// Names the rule or decision path that committed, for audit trails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleId(pub &'static str);
