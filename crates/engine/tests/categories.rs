use engine::{Category, DEPOSIT_DESCRIPTION, EngineError, MoneyCents};

fn cents(value: &str) -> MoneyCents {
    value.parse().unwrap()
}

fn food() -> Category {
    let mut food = Category::new("Food");
    food.deposit(cents("1000"), DEPOSIT_DESCRIPTION).unwrap();
    food.withdraw(cents("100.15"), "groceries").unwrap();
    food.withdraw(cents("15.89"), "restaurant and more food for dessert")
        .unwrap();
    food
}

#[test]
fn withdrawals_keep_exact_cents() {
    let food = food();
    assert_eq!(food.balance(), cents("883.96"));
    assert_eq!(food.balance().to_string(), "883.96");
}

#[test]
fn balance_is_sum_of_ledger_at_every_step() {
    let mut category = Category::new("Misc");

    fn check(category: &Category) {
        let sum: MoneyCents = category.ledger().iter().map(|tx| tx.amount()).sum();
        assert_eq!(category.balance(), sum);
        assert!(!category.balance().is_negative());
    }

    category.deposit(cents("10.10"), "in").unwrap();
    check(&category);
    category.withdraw(cents("3.05"), "out").unwrap();
    check(&category);
    category.deposit(cents("0"), "in").unwrap();
    check(&category);
    category.withdraw(cents("7.05"), "out").unwrap();
    check(&category);
    assert_eq!(category.balance(), MoneyCents::ZERO);

    let err = category.withdraw(cents("0.01"), "out").unwrap_err();
    assert!(matches!(err, EngineError::InsufficientFunds(_)));
    assert_eq!(category.ledger().len(), 4);
    check(&category);

    category.deposit(cents("99.99"), "in").unwrap();
    check(&category);
    assert_eq!(category.ledger().len(), 5);
    assert_eq!(category.balance(), cents("99.99"));
}

#[test]
fn deposit_that_would_overflow_the_balance_is_refused() {
    let max = cents("92233720368547758.07");
    let mut category = Category::new("Vault");
    category.deposit(max, "a").unwrap();

    let err = category.deposit(max, "b").unwrap_err();

    assert!(matches!(err, EngineError::InvalidAmount(_)));
    assert_eq!(category.ledger().len(), 1);
    assert_eq!(category.balance(), max);
    assert!(category.check_funds(max));
}

#[test]
fn transfer_that_would_overflow_the_target_changes_nothing() {
    let max = cents("92233720368547758.07");
    let mut source = Category::new("Source");
    let mut target = Category::new("Target");
    source.deposit(cents("1"), "deposit").unwrap();
    target.deposit(max, "deposit").unwrap();
    let (source_before, target_before) = (source.clone(), target.clone());

    let err = source.transfer(cents("1"), &mut target).unwrap_err();

    assert!(matches!(err, EngineError::InvalidAmount(_)));
    assert_eq!(source, source_before);
    assert_eq!(target, target_before);
}

#[test]
fn withdraw_over_balance_fails_without_mutation() {
    let mut food = food();
    let before = food.clone();

    let err = food.withdraw(cents("883.97"), "too much").unwrap_err();

    assert!(matches!(err, EngineError::InsufficientFunds(_)));
    assert_eq!(food, before);
}

#[test]
fn withdraw_decreases_balance_by_amount() {
    let mut food = food();
    let before = food.balance();
    food.withdraw(cents("83.96"), "").unwrap();
    assert_eq!(food.balance(), before - cents("83.96"));
    assert_eq!(food.balance(), cents("800"));
}

#[test]
fn check_funds_is_exact() {
    let food = food();
    assert!(food.check_funds(cents("883.96")));
    assert!(!food.check_funds(cents("883.97")));
}

#[test]
fn transfer_moves_amount_with_one_entry_each() {
    let mut food = food();
    let mut clothing = Category::new("Clothing");
    let (food_len, clothing_len) = (food.ledger().len(), clothing.ledger().len());

    food.transfer(cents("50"), &mut clothing).unwrap();

    assert_eq!(food.balance(), cents("833.96"));
    assert_eq!(clothing.balance(), cents("50"));
    assert_eq!(food.ledger().len(), food_len + 1);
    assert_eq!(clothing.ledger().len(), clothing_len + 1);

    let out = food.ledger().last().unwrap();
    assert_eq!(out.amount(), cents("-50"));
    assert_eq!(out.description(), "Transfer to Clothing");
    let into = clothing.ledger().last().unwrap();
    assert_eq!(into.amount(), cents("50"));
    assert_eq!(into.description(), "Transfer from Food");
}

#[test]
fn transfer_without_funds_changes_nothing() {
    let mut food = food();
    let mut clothing = Category::new("Clothing");
    let (food_before, clothing_before) = (food.clone(), clothing.clone());

    let err = food.transfer(cents("1000"), &mut clothing).unwrap_err();

    assert!(matches!(err, EngineError::InsufficientFunds(_)));
    assert_eq!(food, food_before);
    assert_eq!(clothing, clothing_before);
}

#[test]
fn report_matches_fixed_layout() {
    let mut food = food();
    let mut clothing = Category::new("Clothing");
    let mut auto = Category::new("Auto");
    food.transfer(cents("50"), &mut clothing).unwrap();
    food.transfer(cents("100"), &mut auto).unwrap();

    let expected = "\
*************Food*************
deposit                1000.00
groceries              -100.15
restaurant and more foo -15.89
Transfer to Clothing    -50.00
Transfer to Auto       -100.00
Total: 733.96";
    assert_eq!(food.report(), expected);
    assert_eq!(food.to_string(), expected);
}

#[test]
fn report_title_is_thirty_chars() {
    let report = food().report();
    let title = report.lines().next().unwrap();
    assert_eq!(title, "*************Food*************");
    assert_eq!(title.chars().count(), 30);
}

#[test]
fn report_truncates_descriptions_to_twenty_three_chars() {
    let mut category = Category::new("Long");
    category
        .deposit(cents("1.5"), "a description that is much longer than the column")
        .unwrap();
    category.deposit(cents("2"), "àèìòù àèìòù àèìòù àèìòù àèìòù").unwrap();

    let report = category.report();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[1], "a description that is m   1.50");
    assert_eq!(lines[2], "àèìòù àèìòù àèìòù àèìòù   2.00");
    for line in &lines[1..lines.len() - 1] {
        assert_eq!(line.chars().count(), 30);
    }
    assert!(!report.ends_with('\n'));
}

#[test]
fn empty_category_report_has_title_and_total() {
    let category = Category::new("Empty");
    assert_eq!(
        category.report(),
        "************Empty*************\nTotal: 0.00"
    );
}
