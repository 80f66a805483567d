use almanac_calendar::{CalendarDate, Weekday, date_sequence};

#[test]
fn month_boundaries_in_leap_year() {
    let dates = date_sequence(CalendarDate::from_parts(2024, 1, 1), 366);
    assert_eq!(dates.len(), 366);

    // Index 30: Jan 31
    assert_eq!(dates[30], CalendarDate::from_parts(2024, 1, 31));
    // Index 31: Feb 1
    assert_eq!(dates[31], CalendarDate::from_parts(2024, 2, 1));
    // Index 59: Feb 29
    assert_eq!(dates[59], CalendarDate::from_parts(2024, 2, 29));
    // Index 60: Mar 1
    assert_eq!(dates[60], CalendarDate::from_parts(2024, 3, 1));
    // Index 365: Dec 31
    assert_eq!(dates[365], CalendarDate::from_parts(2024, 12, 31));
}

#[test]
fn length_always_matches() {
    let start = CalendarDate::from_parts(2000, 1, 1);
    for n_days in [0, 1, 100, 366, 731, 1000] {
        let dates = date_sequence(start, n_days);
        assert_eq!(
            dates.len(),
            n_days,
            "expected length {n_days}, got {}",
            dates.len()
        );
    }
}

#[test]
fn strictly_increasing() {
    let dates = date_sequence(CalendarDate::from_parts(1999, 11, 1), 800);
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn weeks_repeat_every_seven_days() {
    let dates = date_sequence(CalendarDate::from_parts(2024, 1, 1), 28);
    for week in dates.chunks(7) {
        assert_eq!(week[0].weekday(), Weekday::Monday, "week starting {}", week[0]);
        assert_eq!(week[6].weekday(), Weekday::Sunday);
    }
}
