use crate::underwriting::{CreditCategory, DtiCategory, EmploymentStability, LeverageCategory};

#[test]
fn credit_bands_are_half_open() {
    assert_eq!(CreditCategory::from_score(850), CreditCategory::High);
    assert_eq!(CreditCategory::from_score(750), CreditCategory::High);
    assert_eq!(CreditCategory::from_score(749), CreditCategory::Medium);
    assert_eq!(CreditCategory::from_score(650), CreditCategory::Medium);
    assert_eq!(CreditCategory::from_score(649), CreditCategory::Low);
    assert_eq!(CreditCategory::from_score(300), CreditCategory::Low);
}

#[test]
fn dti_bands_are_half_open() {
    assert_eq!(DtiCategory::from_ratio(0.0), DtiCategory::Excellent);
    assert_eq!(DtiCategory::from_ratio(14.999), DtiCategory::Excellent);
    assert_eq!(DtiCategory::from_ratio(15.0), DtiCategory::Good);
    assert_eq!(DtiCategory::from_ratio(29.999), DtiCategory::Good);
    assert_eq!(DtiCategory::from_ratio(30.0), DtiCategory::Moderate);
    assert_eq!(DtiCategory::from_ratio(42.999), DtiCategory::Moderate);
    assert_eq!(DtiCategory::from_ratio(43.0), DtiCategory::Poor);
}

#[test]
fn non_finite_dti_lands_in_poor() {
    assert_eq!(DtiCategory::from_ratio(f64::NAN), DtiCategory::Poor);
    assert_eq!(DtiCategory::from_ratio(f64::INFINITY), DtiCategory::Poor);
}

#[test]
fn employment_bands_count_whole_years() {
    assert_eq!(
        EmploymentStability::from_years(0),
        EmploymentStability::Unstable
    );
    assert_eq!(
        EmploymentStability::from_years(1),
        EmploymentStability::Moderate
    );
    assert_eq!(
        EmploymentStability::from_years(2),
        EmploymentStability::Moderate
    );
    assert_eq!(
        EmploymentStability::from_years(3),
        EmploymentStability::Stable
    );
    assert_eq!(
        EmploymentStability::from_years(40),
        EmploymentStability::Stable
    );
}

#[test]
fn leverage_bands_are_half_open() {
    assert_eq!(
        LeverageCategory::from_ratio(29.999),
        LeverageCategory::Acceptable
    );
    assert_eq!(
        LeverageCategory::from_ratio(30.0),
        LeverageCategory::Elevated
    );
    assert_eq!(
        LeverageCategory::from_ratio(39.999),
        LeverageCategory::Elevated
    );
    assert_eq!(
        LeverageCategory::from_ratio(40.0),
        LeverageCategory::Excessive
    );
}

#[test]
fn labels_match_stored_values() {
    assert_eq!(CreditCategory::High.label(), "high");
    assert_eq!(DtiCategory::Excellent.label(), "excellent");
    assert_eq!(EmploymentStability::Unstable.label(), "unstable");
    assert_eq!(LeverageCategory::Excessive.label(), "excessive");
}
