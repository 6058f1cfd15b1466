//! Behavior tests for the settlement engine, driven through the library
//! API with one input snapshot per test.

use split_engine::{parse_amount, InputRow, Payment, SplitEngine, Splits};

fn rows(entries: &[(&str, &str)]) -> Vec<InputRow> {
    entries
        .iter()
        .map(|(name, amount)| InputRow::new(*name, *amount))
        .collect()
}

fn calculate(entries: &[(&str, &str)]) -> Option<Splits> {
    SplitEngine::new().calculate(&rows(entries))
}

/// Sum of every payment amount across all settlements.
fn payment_total(splits: &Splits) -> f64 {
    splits
        .settlements
        .iter()
        .flat_map(|s| s.payments.iter().map(|p| p.amount))
        .sum()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 0.01,
        "expected {} to be within a cent of {}",
        actual,
        expected
    );
}

// ==================== THRESHOLD GATE ====================

#[test]
fn test_no_rows_shows_nothing() {
    assert!(calculate(&[]).is_none());
}

#[test]
fn test_two_rows_show_nothing_regardless_of_amounts() {
    assert!(calculate(&[("alice", "1000"), ("bob", "0")]).is_none());
}

#[test]
fn test_three_rows_with_one_name_show_nothing() {
    assert!(calculate(&[("alice", "30"), ("", "20"), ("", "10")]).is_none());
}

#[test]
fn test_three_rows_with_two_names_compute() {
    assert!(calculate(&[("alice", "30"), ("bob", "10"), ("", "")]).is_some());
}

// ==================== NORMALIZATION ====================

#[test]
fn test_amount_coercion_table() {
    assert_eq!(parse_amount("abc"), 0.0);
    assert_eq!(parse_amount("$12.50"), 12.5);
    assert_eq!(parse_amount("-5"), -5.0);
}

#[test]
fn test_unnamed_amounts_are_excluded_from_the_total() {
    let splits = calculate(&[("alice", "30"), ("bob", "10"), ("", "999")]).unwrap();

    assert_eq!(splits.total, 40.0);
    assert_eq!(splits.average, 20.0);
}

#[test]
fn test_garbage_amounts_count_as_zero_contributions() {
    let splits = calculate(&[("alice", "30"), ("bob", "oops"), ("carol", "30")]).unwrap();

    assert_eq!(splits.total, 60.0);
    assert_eq!(splits.average, 20.0);
    assert_eq!(splits.settlements.len(), 1);
    assert_eq!(splits.settlements[0].debtor, "bob");
    assert_close(payment_total(&splits), 20.0);
}

#[test]
fn test_negative_contributions_are_allowed() {
    // A negative amount models someone who took money out of the pot.
    let splits = calculate(&[("alice", "10"), ("bob", "-5"), ("carol", "10")]).unwrap();

    assert_eq!(splits.total, 15.0);
    assert_eq!(splits.average, 5.0);
    assert_eq!(splits.settlements[0].debtor, "bob");
    assert_close(payment_total(&splits), 10.0);
}

// ==================== EPSILON BOUNDARY ====================

#[test]
fn test_one_cent_from_average_is_at_average() {
    // 10.00, 10.01, 9.99 all sit within a cent of the 10.00 average.
    let splits = calculate(&[("alice", "10.00"), ("bob", "10.01"), ("carol", "9.99")]).unwrap();

    assert!(splits.settlements.is_empty());
}

#[test]
fn test_just_over_a_cent_from_average_settles() {
    let splits = calculate(&[
        ("alice", "10.011"),
        ("bob", "10.011"),
        ("carol", "9.978"),
    ])
    .unwrap();

    // carol sits 0.022 below the 10.0 average, past the tolerance.
    assert_eq!(splits.settlements.len(), 1);
    assert_eq!(splits.settlements[0].debtor, "carol");
}

// ==================== SCENARIOS ====================

#[test]
fn test_scenario_one_debtor_two_creditors() {
    let splits = calculate(&[("alice", "30"), ("bob", "30"), ("carol", "0")]).unwrap();

    assert_eq!(splits.total, 60.0);
    assert_eq!(splits.average, 20.0);
    assert_eq!(splits.settlements.len(), 1);

    let settlement = &splits.settlements[0];
    assert_eq!(settlement.debtor, "carol");
    assert_eq!(
        settlement.payments,
        vec![
            Payment {
                creditor: "alice".to_string(),
                amount: 10.0,
            },
            Payment {
                creditor: "bob".to_string(),
                amount: 10.0,
            },
        ]
    );
}

#[test]
fn test_scenario_one_creditor_two_debtors() {
    let splits = calculate(&[("alice", "100"), ("bob", "0"), ("carol", "0")]).unwrap();

    assert_close(splits.average, 33.33);
    assert_eq!(splits.settlements.len(), 2);

    // Both debtors owe the same, so input order holds; each pays alice
    // their full share.
    for settlement in &splits.settlements {
        assert_eq!(settlement.payments.len(), 1);
        assert_eq!(settlement.payments[0].creditor, "alice");
        assert_close(settlement.payments[0].amount, 33.33);
    }
    assert_close(payment_total(&splits), 66.67);
}

#[test]
fn test_scenario_everyone_even() {
    let splits = calculate(&[("alice", "12.50"), ("bob", "12.50"), ("carol", "12.50")]).unwrap();

    assert_eq!(splits.total, 37.5);
    assert_eq!(splits.average, 12.5);
    assert!(splits.settlements.is_empty());
}

#[test]
fn test_chain_of_partial_payments() {
    let splits = calculate(&[
        ("alice", "10"),
        ("bob", "25.75"),
        ("carol", "3.10"),
        ("dave", "41"),
        ("erin", "0.15"),
    ])
    .unwrap();

    assert_close(splits.total, 80.0);
    assert_close(splits.average, 16.0);

    // erin's payment knocks dave (owed 25.00) below bob (owed 9.75), so
    // the re-scan sends carol to bob first and back to dave for the rest.
    let erin = &splits.settlements[0];
    assert_eq!(erin.debtor, "erin");
    assert_eq!(erin.payments.len(), 1);
    assert_eq!(erin.payments[0].creditor, "dave");
    assert_close(erin.payments[0].amount, 15.85);

    let carol = &splits.settlements[1];
    assert_eq!(carol.debtor, "carol");
    let carol_creditors: Vec<&str> = carol
        .payments
        .iter()
        .map(|p| p.creditor.as_str())
        .collect();
    assert_eq!(carol_creditors, vec!["bob", "dave"]);
    assert_close(carol.payments[0].amount, 9.75);
    assert_close(carol.payments[1].amount, 3.15);

    let alice = &splits.settlements[2];
    assert_eq!(alice.debtor, "alice");
    assert_eq!(alice.payments.len(), 1);
    assert_eq!(alice.payments[0].creditor, "dave");
    assert_close(alice.payments[0].amount, 6.0);
}

// ==================== PROPERTIES ====================

#[test]
fn test_payments_conserve_the_imbalance() {
    let entries = [
        ("alice", "10"),
        ("bob", "25.75"),
        ("carol", "3.10"),
        ("dave", "41"),
        ("erin", "0.15"),
    ];
    let splits = calculate(&entries).unwrap();

    // Creditors are collectively owed 34.75; every cent of it is paid.
    assert_close(payment_total(&splits), 34.75);
}

#[test]
fn test_each_debtor_pays_their_full_debt() {
    let entries = [
        ("alice", "7"),
        ("bob", "52.40"),
        ("carol", "0"),
        ("dave", "20.60"),
    ];
    let splits = calculate(&entries).unwrap();
    let average = splits.average;

    for settlement in &splits.settlements {
        let contributed = entries
            .iter()
            .find(|(name, _)| *name == settlement.debtor)
            .map(|(_, amount)| parse_amount(amount))
            .unwrap();
        let paid: f64 = settlement.payments.iter().map(|p| p.amount).sum();

        assert_close(paid, average - contributed);
    }
}

#[test]
fn test_recomputing_the_same_snapshot_is_identical() {
    let entries = [
        ("alice", "10"),
        ("bob", "$25.75"),
        ("carol", "junk"),
        ("dave", "41"),
    ];

    assert_eq!(calculate(&entries), calculate(&entries));
}

#[test]
fn test_result_serializes_for_the_host() {
    let splits = calculate(&[("alice", "30"), ("bob", "30"), ("carol", "0")]).unwrap();
    let value = serde_json::to_value(&splits).unwrap();

    assert_eq!(value["total"], 60.0);
    assert_eq!(value["average"], 20.0);
    assert_eq!(value["settlements"][0]["debtor"], "carol");
    assert_eq!(value["settlements"][0]["payments"][0]["creditor"], "alice");
    assert_eq!(value["settlements"][0]["payments"][0]["amount"], 10.0);
}

// ==================== STUCK ANOMALY ====================

#[test]
fn test_creditor_exhaustion_is_non_fatal() {
    // The three above-average contributions all sit within the tolerance,
    // leaving nobody to collect dave's very real 0.027 debt.
    let splits = calculate(&[
        ("alice", "1.009"),
        ("bob", "1.009"),
        ("carol", "1.009"),
        ("dave", "0.973"),
    ])
    .unwrap();

    assert_eq!(splits.settlements.len(), 1);
    assert_eq!(splits.settlements[0].debtor, "dave");
    assert!(splits.settlements[0].payments.is_empty());
}
