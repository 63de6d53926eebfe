//! Domain value-object tests exercised through the public crate API.

use std::str::FromStr;

use streetbites_api::domain::{
    interaction::{rating::RatingScore, summary::RatingSummary},
    recipe::entity::{Difficulty, parse_ingredient_list},
    shared::errors::DomainError,
};

#[test]
fn rating_score_accepts_the_whole_star_scale() {
    for value in RatingScore::MIN..=RatingScore::MAX {
        let score = RatingScore::new(value).unwrap();
        assert_eq!(score.value(), value);
    }
}

#[test]
fn rating_score_rejects_values_outside_the_scale() {
    for value in [i32::MIN, -1, 0, 6, 100] {
        let err = RatingScore::new(value).unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }
}

#[test]
fn rating_mean_keeps_fractional_precision() {
    let summary = RatingSummary::from_values(&[4, 5]);
    assert_eq!(summary.average, 4.5);
    assert_eq!(summary.count, 2);
}

#[test]
fn difficulty_defaults_to_easy() {
    assert_eq!(Difficulty::default(), Difficulty::Easy);
}

#[test]
fn difficulty_round_trips_through_text() {
    for (raw, expected) in [
        ("Easy", Difficulty::Easy),
        ("medium", Difficulty::Medium),
        ("HARD", Difficulty::Hard),
    ] {
        assert_eq!(Difficulty::from_str(raw).unwrap(), expected);
    }
}

#[test]
fn ingredient_list_handles_whitespace_only_input() {
    assert!(parse_ingredient_list("  ,  , ").is_empty());
    assert!(parse_ingredient_list("").is_empty());
}
