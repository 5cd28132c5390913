use serde::{Deserialize, Serialize};

use super::category::{CreditCategory, DtiCategory, EmploymentStability, LeverageCategory};

/// Fixed table mapping each categorized dimension to its risk contribution.
/// With the shipped values the composite score spans 25 through 140.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskWeights {
    pub credit_high: u16,
    pub credit_medium: u16,
    pub credit_low: u16,
    pub dti_excellent: u16,
    pub dti_good: u16,
    pub dti_moderate: u16,
    pub dti_poor: u16,
    pub employment_stable: u16,
    pub employment_moderate: u16,
    pub employment_unstable: u16,
    pub lti_acceptable: u16,
    pub lti_elevated: u16,
    pub lti_excessive: u16,
}

impl RiskWeights {
    pub fn credit(&self, category: CreditCategory) -> u16 {
        match category {
            CreditCategory::High => self.credit_high,
            CreditCategory::Medium => self.credit_medium,
            CreditCategory::Low => self.credit_low,
        }
    }

    pub fn dti(&self, category: DtiCategory) -> u16 {
        match category {
            DtiCategory::Excellent => self.dti_excellent,
            DtiCategory::Good => self.dti_good,
            DtiCategory::Moderate => self.dti_moderate,
            DtiCategory::Poor => self.dti_poor,
        }
    }

    pub fn employment(&self, category: EmploymentStability) -> u16 {
        match category {
            EmploymentStability::Stable => self.employment_stable,
            EmploymentStability::Moderate => self.employment_moderate,
            EmploymentStability::Unstable => self.employment_unstable,
        }
    }

    pub fn leverage(&self, category: LeverageCategory) -> u16 {
        match category {
            LeverageCategory::Acceptable => self.lti_acceptable,
            LeverageCategory::Elevated => self.lti_elevated,
            LeverageCategory::Excessive => self.lti_excessive,
        }
    }
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            credit_high: 10,
            credit_medium: 20,
            credit_low: 40,
            dti_excellent: 5,
            dti_good: 15,
            dti_moderate: 30,
            dti_poor: 50,
            employment_stable: 5,
            employment_moderate: 15,
            employment_unstable: 25,
            lti_acceptable: 5,
            lti_elevated: 20,
            lti_excessive: 35,
        }
    }
}

/// Sum the four weighted dimensions into the composite risk score.
pub fn score(
    weights: &RiskWeights,
    credit: CreditCategory,
    dti: DtiCategory,
    employment: EmploymentStability,
    leverage: LeverageCategory,
) -> u16 {
    weights.credit(credit)
        + weights.dti(dti)
        + weights.employment(employment)
        + weights.leverage(leverage)
}

/// Coarse banding of the composite score. Upper bounds are inclusive: a score
/// of exactly 20 is `Low` and exactly 50 is `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskBand {
    pub fn from_score(score: u16) -> Self {
        if score <= 20 {
            RiskBand::Low
        } else if score <= 50 {
            RiskBand::Medium
        } else if score <= 80 {
            RiskBand::High
        } else {
            RiskBand::VeryHigh
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Medium => "medium",
            RiskBand::High => "high",
            RiskBand::VeryHigh => "very_high",
        }
    }
}
