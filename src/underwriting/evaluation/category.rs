use serde::{Deserialize, Serialize};

const CREDIT_HIGH_MIN: u16 = 750;
const CREDIT_MEDIUM_MIN: u16 = 650;

const DTI_GOOD_MIN: f64 = 15.0;
const DTI_MODERATE_MIN: f64 = 30.0;
const DTI_POOR_MIN: f64 = 43.0;

const EMPLOYMENT_STABLE_MIN: u32 = 3;
const EMPLOYMENT_MODERATE_MIN: u32 = 1;

const LTI_ELEVATED_MIN: f64 = 30.0;
const LTI_EXCESSIVE_MIN: f64 = 40.0;

/// Credit-score band. Bands are half-open: the lower bound belongs to the
/// band, so a score of exactly 750 is `High` and 650 is `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditCategory {
    High,
    Medium,
    Low,
}

impl CreditCategory {
    pub fn from_score(score: u16) -> Self {
        if score >= CREDIT_HIGH_MIN {
            CreditCategory::High
        } else if score >= CREDIT_MEDIUM_MIN {
            CreditCategory::Medium
        } else {
            CreditCategory::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CreditCategory::High => "high",
            CreditCategory::Medium => "medium",
            CreditCategory::Low => "low",
        }
    }
}

/// Debt-to-income band. A ratio of exactly 15 is `Good` and exactly 30 is
/// `Moderate`; a non-finite ratio lands in `Poor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DtiCategory {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl DtiCategory {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < DTI_GOOD_MIN {
            DtiCategory::Excellent
        } else if ratio < DTI_MODERATE_MIN {
            DtiCategory::Good
        } else if ratio < DTI_POOR_MIN {
            DtiCategory::Moderate
        } else {
            DtiCategory::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DtiCategory::Excellent => "excellent",
            DtiCategory::Good => "good",
            DtiCategory::Moderate => "moderate",
            DtiCategory::Poor => "poor",
        }
    }
}

/// Employment-tenure band measured in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStability {
    Stable,
    Moderate,
    Unstable,
}

impl EmploymentStability {
    pub fn from_years(years: u32) -> Self {
        if years >= EMPLOYMENT_STABLE_MIN {
            EmploymentStability::Stable
        } else if years >= EMPLOYMENT_MODERATE_MIN {
            EmploymentStability::Moderate
        } else {
            EmploymentStability::Unstable
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EmploymentStability::Stable => "stable",
            EmploymentStability::Moderate => "moderate",
            EmploymentStability::Unstable => "unstable",
        }
    }
}

/// Loan-to-income band. Exactly 30 is `Elevated`, exactly 40 is `Excessive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeverageCategory {
    Acceptable,
    Elevated,
    Excessive,
}

impl LeverageCategory {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < LTI_ELEVATED_MIN {
            LeverageCategory::Acceptable
        } else if ratio < LTI_EXCESSIVE_MIN {
            LeverageCategory::Elevated
        } else {
            LeverageCategory::Excessive
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LeverageCategory::Acceptable => "acceptable",
            LeverageCategory::Elevated => "elevated",
            LeverageCategory::Excessive => "excessive",
        }
    }
}
