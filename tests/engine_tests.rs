use chrono::{NaiveDate, NaiveTime};
use shiftpivot::core::filter::CategoryFilter;
use shiftpivot::core::pivot::{Accumulator, PivotOptions, merge_all};
use shiftpivot::core::status::shift_ranges;
use shiftpivot::core::workday::{Attribution, bucket_date};
use shiftpivot::models::aggregate::AggregateMode;
use shiftpivot::models::event::Event;
use shiftpivot::models::shift::{Shift, ShiftFilter};
use shiftpivot::utils::date::parse_timestamp;
use shiftpivot::utils::time::minutes_between_wrapped;

fn t(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_shift_classification_boundaries() {
    assert_eq!(Shift::of(t(5, 59, 59)), Shift::Night);
    assert_eq!(Shift::of(t(6, 0, 0)), Shift::Day);
    assert_eq!(Shift::of(t(13, 59, 59)), Shift::Day);
    assert_eq!(Shift::of(t(14, 0, 0)), Shift::Swing);
    assert_eq!(Shift::of(t(21, 59, 59)), Shift::Swing);
    assert_eq!(Shift::of(t(22, 0, 0)), Shift::Night);
    assert_eq!(Shift::of(t(0, 0, 0)), Shift::Night);
}

#[test]
fn test_every_minute_belongs_to_exactly_one_shift() {
    for h in 0..24 {
        for m in 0..60 {
            let time = t(h, m, 0);
            let hits = [Shift::Day, Shift::Swing, Shift::Night]
                .iter()
                .filter(|s| s.contains(time))
                .count();
            assert_eq!(hits, 1, "time {time} covered by {hits} shifts");
        }
    }
}

#[test]
fn test_shift_filter_all_off_equals_all_on() {
    let none = ShiftFilter::new(false, false, false);
    let all = ShiftFilter::new(true, true, true);

    for time in [t(8, 0, 0), t(16, 0, 0), t(23, 0, 0), t(3, 0, 0)] {
        assert_eq!(none.includes(time), all.includes(time));
        assert!(none.includes(time));
    }
}

#[test]
fn test_workday_attribution_boundaries() {
    let ts = d(2024, 5, 10).and_time(t(5, 59, 59));
    assert_eq!(bucket_date(ts, Attribution::Workday), d(2024, 5, 9));
    assert_eq!(bucket_date(ts, Attribution::Plain), d(2024, 5, 10));

    let ts = d(2024, 5, 10).and_time(t(6, 0, 0));
    assert_eq!(bucket_date(ts, Attribution::Workday), d(2024, 5, 10));
}

#[test]
fn test_table_is_dense_and_row_sums_hold() {
    let events = vec![
        Event::new("A", d(2024, 1, 1).and_time(t(10, 0, 0))),
        Event::new("A", d(2024, 1, 4).and_time(t(10, 0, 0))),
        Event::new("B", d(2024, 1, 2).and_time(t(15, 0, 0))),
    ];

    let acc = Accumulator::fold(
        &events,
        &CategoryFilter::pass_all(),
        &PivotOptions::default(),
    );
    let table = acc.into_table(AggregateMode::Count);

    // Gap days appear as columns, every row covers every column and each
    // row total equals the sum of its cells.
    assert_eq!(table.columns.len(), 4);
    for row in &table.rows {
        assert_eq!(row.cells.len(), table.columns.len());
        let sum: u64 = row.cells.iter().map(|c| c.count).sum();
        assert_eq!(sum, row.total.count);
    }
}

#[test]
fn test_merge_is_commutative() {
    let mut a = Accumulator::new();
    a.record("X", d(2024, 1, 1), 0.0);
    a.record("Y", d(2024, 1, 2), 0.0);

    let mut b = Accumulator::new();
    b.record("X", d(2024, 1, 3), 0.0);
    b.record("x", d(2024, 1, 1), 0.0);

    let ab = merge_all([a.clone(), b.clone()]).into_table(AggregateMode::Count);
    let ba = merge_all([b, a]).into_table(AggregateMode::Count);

    assert_eq!(ab.columns, ba.columns);
    let cells =
        |t: &shiftpivot::models::pivot_table::PivotTable| -> Vec<(String, Vec<u64>)> {
            t.rows
                .iter()
                .map(|r| {
                    (
                        r.category.to_lowercase(),
                        r.cells.iter().map(|c| c.count).collect(),
                    )
                })
                .collect()
        };
    assert_eq!(cells(&ab), cells(&ba));
}

#[test]
fn test_duration_mode_drops_events_without_minutes() {
    let events = vec![
        Event::with_minutes("A", d(2024, 1, 1).and_time(t(10, 0, 0)), 12.5),
        Event::new("A", d(2024, 1, 1).and_time(t(11, 0, 0))),
        Event::with_minutes("A", d(2024, 1, 1).and_time(t(12, 0, 0)), 0.0),
    ];

    let opts = PivotOptions {
        mode: AggregateMode::Duration,
        ..Default::default()
    };
    let table = Accumulator::fold(&events, &CategoryFilter::pass_all(), &opts)
        .into_table(AggregateMode::Duration);

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].total.count, 1);
    assert!((table.rows[0].total.minutes - 12.5).abs() < 1e-9);
}

#[test]
fn test_category_filter_trims_and_lowercases() {
    let f = CategoryFilter::from_names(["  ALARM_X  ".to_string(), String::new()]);
    assert!(!f.is_pass_all());
    assert!(f.allows("alarm_x"));
    assert!(f.allows("Alarm_X "));
    assert!(!f.allows("other"));

    let empty = CategoryFilter::from_names(Vec::<String>::new());
    assert!(empty.is_pass_all());
    assert!(empty.allows("anything"));
}

#[test]
fn test_wrapped_minutes_cross_midnight() {
    let m = minutes_between_wrapped(t(22, 10, 0), t(0, 5, 0));
    assert!((m - 115.0).abs() < 1e-9);

    let m = minutes_between_wrapped(t(9, 0, 0), t(9, 30, 0));
    assert!((m - 30.0).abs() < 1e-9);
}

#[test]
fn test_timestamp_parser_accepts_serial_dates() {
    // Serial day 2 with a half-day fraction lands on 1900-01-01 noon.
    let ts = parse_timestamp("2.5").unwrap();
    assert_eq!(ts, d(1900, 1, 1).and_time(t(12, 0, 0)));

    let ts = parse_timestamp("2024-07-15 08:30:00").unwrap();
    assert_eq!(ts, d(2024, 7, 15).and_time(t(8, 30, 0)));

    let ts = parse_timestamp("2024-07-15").unwrap();
    assert_eq!(ts, d(2024, 7, 15).and_time(t(0, 0, 0)));

    assert!(parse_timestamp("not a date").is_none());
}

#[test]
fn test_night_shift_range_spans_midnight_as_one_window() {
    let ranges = shift_ranges(d(2024, 1, 1), ShiftFilter::new(false, false, true));

    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].0, d(2024, 1, 1).and_time(t(22, 0, 0)));
    assert_eq!(ranges[0].1, d(2024, 1, 2).and_time(t(5, 59, 59)));
}

#[test]
fn test_disjoint_shift_ranges_stay_separate() {
    let ranges = shift_ranges(d(2024, 1, 1), ShiftFilter::new(true, false, true));

    assert_eq!(ranges.len(), 2);
    assert_eq!(ranges[0].1, d(2024, 1, 1).and_time(t(13, 59, 59)));
    assert_eq!(ranges[1].0, d(2024, 1, 1).and_time(t(22, 0, 0)));
}
