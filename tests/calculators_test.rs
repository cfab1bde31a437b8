use coursework_kit::core::currency::{convert_currency, render_currency};
use coursework_kit::core::dedup::{remove_dups, render_dedup, split_tokens};
use coursework_kit::core::planet::{planet_weight, render_weight, INVALID_WEIGHT_MESSAGE, PLANETS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

#[test]
fn test_dedup_properties_on_random_sequences() {
    let mut rng = StdRng::seed_from_u64(2024);
    let vocabulary = ["a", "b", "c", "A", "dd", "", "e f"];

    for _ in 0..200 {
        let len = rng.gen_range(0..30);
        let input: Vec<&str> = (0..len)
            .map(|_| vocabulary[rng.gen_range(0..vocabulary.len())])
            .collect();

        let output = remove_dups(&input);

        let unique: HashSet<&String> = output.iter().collect();
        assert_eq!(unique.len(), output.len(), "repeated element in {:?}", output);

        let expected_order: Vec<&str> = input
            .iter()
            .enumerate()
            .filter(|(i, item)| !input[..*i].contains(*item))
            .map(|(_, item)| *item)
            .collect();
        assert_eq!(output, expected_order);

        assert_eq!(remove_dups(&output), output);
    }
}

#[test]
fn test_dedup_screen_flow() {
    assert_eq!(split_tokens("red , green,red"), vec!["red", "green", "red"]);
    assert_eq!(render_dedup("red , green,red"), "Result: red, green");
    assert_eq!(render_dedup(""), "Result: ");
}

#[test]
fn test_currency_total_matches_for_all_cent_values() {
    for cents in 0..=10_000u64 {
        let amount = cents as f64 / 100.0;
        let breakdown = convert_currency(amount).unwrap();
        assert_eq!(breakdown.total_cents(), (amount * 100.0).round() as u64);
        assert_eq!(breakdown.total_cents(), cents);
    }
}

#[test]
fn test_currency_example_and_errors() {
    let breakdown = convert_currency(11.56).unwrap();
    assert_eq!(
        (
            breakdown.dollars,
            breakdown.quarters,
            breakdown.dimes,
            breakdown.nickels,
            breakdown.pennies
        ),
        (11, 2, 0, 1, 1)
    );
    assert_eq!(render_currency("12,50"), "Invalid input");
    assert_eq!(render_currency("-3"), "Invalid input");
    assert!(render_currency("0.41").contains("1 quarters\n1 dimes\n1 nickels\n1 pennies"));
    assert!(render_currency("5").starts_with("Your amount 5.0 consists of:"));
}

#[test]
fn test_planet_weights() {
    assert_eq!(planet_weight(100.0, 2).unwrap().formatted(), "39.00");
    assert_eq!(PLANETS.len(), 6);
    assert!(planet_weight(100.0, 0).is_err());
    assert!(planet_weight(100.0, 7).is_err());

    assert_eq!(render_weight("200", 6), "Your weight on Neptune is 246.00 pounds");
    assert_eq!(render_weight("", 1), INVALID_WEIGHT_MESSAGE);
    assert_eq!(render_weight("0.5", 3), "Your weight on Jupiter is 1.33 pounds");
}
