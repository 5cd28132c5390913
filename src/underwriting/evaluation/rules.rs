use crate::underwriting::domain::{LoanDecision, RuleId};

use super::category::{CreditCategory, DtiCategory, EmploymentStability, LeverageCategory};
use super::config::EvaluationConfig;
use super::risk::{self, RiskBand};

/// Facts a rule guard may consult, categorized once before matching starts.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RuleFacts {
    pub credit: CreditCategory,
    pub dti: DtiCategory,
    pub employment: EmploymentStability,
    pub leverage: LeverageCategory,
    pub employment_years: u32,
    pub loan_to_income: f64,
}

/// Outcome committed by the first satisfied rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RuleMatch {
    pub id: RuleId,
    pub decision: LoanDecision,
    pub confidence: u8,
    pub explanation: &'static str,
}

const fn rule(
    id: &'static str,
    decision: LoanDecision,
    confidence: u8,
    explanation: &'static str,
) -> RuleMatch {
    RuleMatch {
        id: RuleId(id),
        decision,
        confidence,
        explanation,
    }
}

/// Walk the rule base top-down and commit to the first satisfied guard.
///
/// Order is part of the committed policy: the credit/DTI ladder runs first,
/// then the cross-cutting disqualifiers it does not cover, then the
/// risk-score path, and finally the unconditional reject that makes the
/// matcher total. Once a guard holds, no later rule is consulted.
pub(crate) fn match_rules(facts: &RuleFacts, config: &EvaluationConfig) -> RuleMatch {
    if let Some(matched) = credit_ladder(facts, config) {
        return matched;
    }
    if let Some(matched) = disqualifiers(facts, config) {
        return matched;
    }
    if let Some(matched) = risk_fallback(facts, config) {
        return matched;
    }

    rule(
        "minimum_requirements_not_met",
        LoanDecision::Rejected,
        50,
        "Application does not meet minimum requirements for loan approval.",
    )
}

/// Primary ladder over credit standing and debt load.
fn credit_ladder(facts: &RuleFacts, config: &EvaluationConfig) -> Option<RuleMatch> {
    use CreditCategory::{High, Low, Medium};
    use DtiCategory::{Excellent, Good, Moderate, Poor};

    if facts.credit == High && facts.dti == Excellent && facts.employment == EmploymentStability::Stable
    {
        return Some(rule(
            "high_credit_excellent_dti_stable",
            LoanDecision::Approved,
            95,
            "Excellent credit score combined with low debt-to-income ratio and stable employment indicates very low risk. Loan is approved.",
        ));
    }
    if facts.credit == High && facts.dti == Good && facts.loan_to_income < config.high_credit_lti_limit
    {
        return Some(rule(
            "high_credit_good_dti_low_lti",
            LoanDecision::Approved,
            90,
            "Strong credit history and manageable debt levels. The loan amount is reasonable relative to income. Approved.",
        ));
    }
    if facts.credit == High && facts.dti == Good && facts.loan_to_income >= config.high_credit_lti_limit
    {
        return Some(rule(
            "high_credit_good_dti_high_lti",
            LoanDecision::Conditional,
            75,
            "Good credit score but loan amount is high relative to income. Approved with conditions.",
        ));
    }
    if facts.credit == High && facts.dti == Moderate {
        return Some(rule(
            "high_credit_moderate_dti",
            LoanDecision::Conditional,
            75,
            "Good credit score but debt-to-income ratio is slightly elevated. Loan approved with conditions such as additional documentation or a co-signer.",
        ));
    }
    if facts.credit == Medium
        && facts.dti == Excellent
        && facts.employment == EmploymentStability::Stable
    {
        return Some(rule(
            "medium_credit_excellent_dti_stable",
            LoanDecision::Approved,
            85,
            "Good credit history with excellent debt management. Stable employment supports the loan approval.",
        ));
    }
    if facts.credit == Medium
        && facts.dti == Good
        && facts.loan_to_income < config.medium_credit_lti_limit
    {
        return Some(rule(
            "medium_credit_good_dti_low_lti",
            LoanDecision::Approved,
            80,
            "Acceptable credit score with manageable debt levels. Loan approved.",
        ));
    }
    if facts.credit == Medium
        && facts.dti == Good
        && facts.loan_to_income >= config.medium_credit_lti_limit
    {
        return Some(rule(
            "medium_credit_good_dti_high_lti",
            LoanDecision::Conditional,
            70,
            "Average credit score with reasonable debt levels. Additional documentation may be required.",
        ));
    }
    if facts.credit == Medium && facts.dti == Moderate {
        return Some(rule(
            "medium_credit_moderate_dti",
            LoanDecision::Conditional,
            65,
            "Average credit score combined with elevated debt levels requires additional review. Consider reducing the loan amount or improving the debt situation.",
        ));
    }
    if facts.credit == Medium && facts.dti == Poor {
        return Some(rule(
            "medium_credit_poor_dti",
            LoanDecision::Rejected,
            80,
            "Debt-to-income ratio is too high relative to credit history. Recommend improving debt management before reapplying.",
        ));
    }
    if facts.credit == Low && facts.dti == Excellent && facts.employment == EmploymentStability::Stable
    {
        return Some(rule(
            "low_credit_excellent_dti_stable",
            LoanDecision::Conditional,
            55,
            "Despite low credit score, excellent debt management and stable employment may compensate. Additional documentation required.",
        ));
    }
    if facts.credit == Low && facts.dti == Good {
        return Some(rule(
            "low_credit_good_dti",
            LoanDecision::Rejected,
            75,
            "Credit history concerns outweigh positive debt levels. Recommend improving credit score before applying.",
        ));
    }
    if facts.credit == Low && matches!(facts.dti, Moderate | Poor) {
        let confidence = if facts.dti == Poor { 90 } else { 85 };
        return Some(RuleMatch {
            id: RuleId("low_credit_heavy_debt"),
            decision: LoanDecision::Rejected,
            confidence,
            explanation: "Low credit score combined with high debt levels presents unacceptable risk. Application rejected.",
        });
    }

    None
}

/// Hard disqualifiers the ladder does not cover, in committed order: missing
/// income history first, then excessive leverage.
fn disqualifiers(facts: &RuleFacts, config: &EvaluationConfig) -> Option<RuleMatch> {
    if facts.employment_years == 0 {
        return Some(rule(
            "no_employment_history",
            LoanDecision::Rejected,
            95,
            "No verifiable employment history. Declared income cannot support repayment, so the application is rejected.",
        ));
    }
    if facts.loan_to_income > config.leverage_rejection_lti {
        return Some(rule(
            "excessive_leverage",
            LoanDecision::Rejected,
            85,
            "Loan amount exceeds reasonable limits relative to income. Consider applying for a smaller loan amount.",
        ));
    }
    // Tenure is measured in whole years, so the unemployment check above
    // already consumed every tenure below one; the leverage catch-all sits
    // behind the broader rejection on the previous guard. Both stay in the
    // committed order of the unified rule base.
    if facts.employment_years < 1 && facts.credit != CreditCategory::High {
        return Some(rule(
            "short_employment_history",
            LoanDecision::Conditional,
            60,
            "Limited employment history requires additional verification. A co-signer may be required.",
        ));
    }
    if facts.employment_years < 1 && facts.credit == CreditCategory::Low {
        return Some(rule(
            "short_employment_low_credit",
            LoanDecision::Rejected,
            80,
            "Limited employment history combined with a low credit score presents too much risk. Application rejected.",
        ));
    }
    if facts.loan_to_income >= config.strict_leverage_lti {
        return Some(rule(
            "strict_leverage_cap",
            LoanDecision::Rejected,
            95,
            "Requested amount is far beyond what the declared income can support. Application rejected.",
        ));
    }

    None
}

/// Secondary, score-driven path consulted only after every categorical guard
/// has failed. Only the extreme bands commit; the middle bands fall through
/// to the unconditional reject so the score never softens a categorical rule.
fn risk_fallback(facts: &RuleFacts, config: &EvaluationConfig) -> Option<RuleMatch> {
    let score = risk::score(
        &config.weights,
        facts.credit,
        facts.dti,
        facts.employment,
        facts.leverage,
    );

    match RiskBand::from_score(score) {
        RiskBand::VeryHigh => Some(rule(
            "risk_band_very_high",
            LoanDecision::Rejected,
            90,
            "Combined risk factors place this application in the highest risk band. Application rejected.",
        )),
        // The shipped weight table bottoms out at 25, so this arm only fires
        // under a relaxed table.
        RiskBand::Low => Some(rule(
            "risk_band_low",
            LoanDecision::Approved,
            70,
            "Combined risk factors indicate low overall risk. Loan is approved.",
        )),
        RiskBand::Medium | RiskBand::High => None,
    }
}
