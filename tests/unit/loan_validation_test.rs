// Input validation for loan creation: every rejection is a validation
// error raised before anything is written.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use loan_ledger::core::AppError;
use loan_ledger::loans::CreateLoanRequest;
use rust_decimal_macros::dec;

fn assert_validation(result: loan_ledger::core::Result<loan_ledger::loans::Loan>) {
    match result {
        Err(AppError::Validation(_)) => {}
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_customer_id_persists_nothing() {
    let state = create_test_state().await;
    let request = CreateLoanRequest {
        customer_id: None,
        ..TestDataFactory::reference_request()
    };

    assert_validation(state.loans.create_loan(request).await);
    assert_eq!(count_loans(&state).await, 0);
}

#[tokio::test]
async fn test_blank_customer_id_rejected() {
    let state = create_test_state().await;
    let request = TestDataFactory::request("  ", dec!(1000), 1, dec!(5));

    assert_validation(state.loans.create_loan(request).await);
    assert_eq!(count_loans(&state).await, 0);
}

#[tokio::test]
async fn test_zero_period_persists_nothing() {
    let state = create_test_state().await;
    let request = TestDataFactory::request("C1", dec!(100000), 0, dec!(10));

    assert_validation(state.loans.create_loan(request).await);
    assert_eq!(count_loans(&state).await, 0);
}

#[tokio::test]
async fn test_each_missing_numeric_field_rejected() {
    let state = create_test_state().await;
    let reference = TestDataFactory::reference_request();

    let cases = [
        CreateLoanRequest {
            loan_amount: None,
            ..reference.clone()
        },
        CreateLoanRequest {
            loan_period_years: None,
            ..reference.clone()
        },
        CreateLoanRequest {
            interest_rate_yearly: None,
            ..reference.clone()
        },
    ];

    for request in cases {
        assert_validation(state.loans.create_loan(request).await);
    }
    assert_eq!(count_loans(&state).await, 0);
}

#[tokio::test]
async fn test_non_positive_amount_rejected() {
    let state = create_test_state().await;

    for amount in [dec!(0), dec!(-250.00)] {
        let request = TestDataFactory::request("C1", amount, 3, dec!(5));
        assert_validation(state.loans.create_loan(request).await);
    }
    assert_eq!(count_loans(&state).await, 0);
}

#[tokio::test]
async fn test_zero_rate_is_allowed() {
    let state = create_test_state().await;
    let loan = state
        .loans
        .create_loan(TestDataFactory::request("C2", dec!(1200), 1, dec!(0)))
        .await
        .expect("interest-free loans are valid");

    assert_eq!(loan.total_amount_payable, dec!(1200));
    assert_eq!(loan.monthly_emi, dec!(100));
}

#[tokio::test]
async fn test_customer_id_is_trimmed() {
    let state = create_test_state().await;
    let loan = state
        .loans
        .create_loan(TestDataFactory::request("  C9 ", dec!(1200), 1, dec!(0)))
        .await
        .unwrap();

    assert_eq!(loan.customer_id, "C9");
}
