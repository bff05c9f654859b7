//! Integration tests exercising month anchors and window arithmetic together.

use chrono::NaiveDate;
use sirocco_calendar::{DateInterval, MonthRange, window_bounds};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn twenty_year_range_has_240_anchors() {
    let range = MonthRange::new(date(2005, 1, 1), date(2024, 12, 31)).unwrap();
    assert_eq!(range.n_months(), 240);
    assert_eq!(range.anchors()[0], date(2005, 1, 1));
    assert_eq!(range.anchors()[239], date(2024, 12, 1));
}

#[test]
fn first_two_windows_reach_before_the_range() {
    // With an archive that starts at the range start, the first two anchors
    // have windows reaching back before any available data. The windows are
    // still well formed; coverage is a concern of the aggregation stage.
    let range = MonthRange::new(date(2005, 1, 1), date(2005, 12, 31)).unwrap();

    let w0 = window_bounds(range.anchors()[0], 3).unwrap();
    let w1 = window_bounds(range.anchors()[1], 3).unwrap();
    let w2 = window_bounds(range.anchors()[2], 3).unwrap();

    assert!(w0.start() < range.start());
    assert!(w1.start() < range.start());
    assert_eq!(w2.start(), range.start());

    // Every window still covers its own anchor day.
    for (anchor, w) in range.anchors().iter().zip([w0, w1, w2]) {
        assert!(w.contains(*anchor));
    }
}

#[test]
fn window_covers_two_full_months_plus_anchor_day() {
    let w = window_bounds(date(2020, 3, 1), 3).unwrap();
    assert!(w.contains(date(2020, 1, 1)));
    assert!(w.contains(date(2020, 2, 29)));
    assert!(w.contains(date(2020, 3, 1)));
    assert!(!w.contains(date(2020, 3, 2)));
    assert!(!w.contains(date(2019, 12, 31)));
}

#[test]
fn interval_filters_anchors_half_open() {
    let range = MonthRange::new(date(2010, 1, 1), date(2012, 12, 31)).unwrap();
    let period = DateInterval::new(date(2010, 6, 1), date(2011, 12, 31)).unwrap();

    let n_inside = range
        .anchors()
        .iter()
        .filter(|a| period.contains(**a))
        .count();

    // 2010-06 .. 2011-12 inclusive of both month starts.
    assert_eq!(n_inside, 19);
}
