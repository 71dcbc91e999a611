use super::*;

#[test]
fn score_line_formats_score_max_and_percent() {
    assert_eq!(score_line(7.5, 10.0, 75.0), "7.5 / 10.0 (75%)");
}

#[test]
fn score_line_rounds_the_percent() {
    assert_eq!(score_line(2.0, 3.0, 66.666), "2.0 / 3.0 (67%)");
}
