#[cfg(test)]
mod tests {
    use chrono::{Datelike, Days, NaiveDate, TimeZone, Utc, Weekday};
    use chrono_tz::Tz;
    use shiftlog::libs::error::TimeError;
    use shiftlog::libs::shift::{Shift, ShiftSpan};
    use shiftlog::libs::shift_window::{
        filter, start_of_month, start_of_week, start_of_year, sum_totals, window, window_on, Direction, Granularity,
        LogNavigator, TimeWindow,
    };
    use shiftlog::libs::time_math::ClockDuration;

    const WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn shift(day: NaiveDate, total: &str) -> Shift {
        let span: ShiftSpan = "9:00 AM - 5:00 PM".parse().unwrap();
        Shift::new(day, span, ClockDuration::ZERO, total.parse().unwrap())
    }

    #[test]
    fn test_week_navigation_from_sunday() {
        let now = Utc.with_ymd_and_hms(2023, 9, 10, 12, 0, 0).unwrap();
        let mut navigator = LogNavigator::new(&now, Weekday::Sun).unwrap();

        assert_eq!(navigator.granularity(), Granularity::Week);
        assert_eq!(navigator.window(), TimeWindow::new(date(2023, 9, 10), date(2023, 9, 17)));

        navigator.navigate(Direction::Back).unwrap();
        assert_eq!(navigator.window(), TimeWindow::new(date(2023, 9, 3), date(2023, 9, 10)));

        navigator.navigate(Direction::Forward).unwrap();
        navigator.navigate(Direction::Forward).unwrap();
        assert_eq!(navigator.window(), TimeWindow::new(date(2023, 9, 17), date(2023, 9, 24)));
        assert_eq!(navigator.offset(), 1);
    }

    #[test]
    fn test_start_of_week_honours_configured_day() {
        let sunday = Utc.with_ymd_and_hms(2023, 9, 10, 12, 0, 0).unwrap();

        assert_eq!(start_of_week(&sunday, Weekday::Sun), date(2023, 9, 10));
        assert_eq!(start_of_week(&sunday, Weekday::Mon), date(2023, 9, 4));
        assert_eq!(start_of_week(&sunday, Weekday::Sat), date(2023, 9, 9));
    }

    #[test]
    fn test_start_of_week_uses_viewer_zone() {
        // 03:00 UTC on Monday is still Sunday evening in Chicago.
        let instant = Utc.with_ymd_and_hms(2023, 9, 11, 3, 0, 0).unwrap();
        let chicago: Tz = "America/Chicago".parse().unwrap();

        assert_eq!(start_of_week(&instant, Weekday::Mon), date(2023, 9, 11));
        assert_eq!(start_of_week(&instant.with_timezone(&chicago), Weekday::Mon), date(2023, 9, 4));
    }

    #[test]
    fn test_start_of_month_and_year() {
        let now = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 0).unwrap();
        assert_eq!(start_of_month(&now), date(2024, 2, 1));
        assert_eq!(start_of_year(&now), date(2024, 1, 1));
    }

    #[test]
    fn test_week_window_contains_today_for_every_start_day() {
        for offset in 0..14 {
            let today = date(2023, 9, 1) + Days::new(offset);
            for week_start in WEEKDAYS {
                let week = window_on(Granularity::Week, today, week_start).unwrap();
                assert!(week.contains(today), "{} not in {:?}", today, week);
                assert_eq!(week.start.weekday(), week_start);
                assert_eq!(week.end - week.start, chrono::TimeDelta::days(7));

                let there_and_back = week
                    .shift(Granularity::Week, Direction::Forward)
                    .and_then(|w| w.shift(Granularity::Week, Direction::Back))
                    .unwrap();
                assert_eq!(there_and_back, week);
            }
        }
    }

    #[test]
    fn test_month_and_year_windows() {
        let now = Utc.with_ymd_and_hms(2023, 1, 31, 8, 0, 0).unwrap();

        let month = window(Granularity::Month, &now, Weekday::Sun).unwrap();
        assert_eq!(month, TimeWindow::new(date(2023, 1, 1), date(2023, 2, 1)));
        let next = month.shift(Granularity::Month, Direction::Forward).unwrap();
        assert_eq!(next, TimeWindow::new(date(2023, 2, 1), date(2023, 3, 1)));
        let previous = month.shift(Granularity::Month, Direction::Back).unwrap();
        assert_eq!(previous, TimeWindow::new(date(2022, 12, 1), date(2023, 1, 1)));

        let year = window(Granularity::Year, &now, Weekday::Sun).unwrap();
        assert_eq!(year, TimeWindow::new(date(2023, 1, 1), date(2024, 1, 1)));
        let previous = year.shift(Granularity::Year, Direction::Back).unwrap();
        assert_eq!(previous, TimeWindow::new(date(2022, 1, 1), date(2023, 1, 1)));
    }

    #[test]
    fn test_all_window_cannot_be_shifted() {
        let now = Utc.with_ymd_and_hms(2023, 9, 10, 12, 0, 0).unwrap();
        let all = window(Granularity::All, &now, Weekday::Sun).unwrap();

        assert_eq!(all, TimeWindow::ALL);
        assert!(all.contains(date(1970, 1, 1)));
        assert_eq!(
            all.shift(Granularity::All, Direction::Back),
            Err(TimeError::UnsupportedNavigation(Granularity::All))
        );
    }

    #[test]
    fn test_navigator_ignores_navigation_on_all() {
        let now = Utc.with_ymd_and_hms(2023, 9, 10, 12, 0, 0).unwrap();
        let mut navigator = LogNavigator::new(&now, Weekday::Sun).unwrap();

        navigator.select_tab(Granularity::All).unwrap();
        navigator.navigate(Direction::Forward).unwrap();
        assert_eq!(navigator.window(), TimeWindow::ALL);
        assert_eq!(navigator.offset(), 0);
    }

    #[test]
    fn test_select_tab_resets_offset() {
        let now = Utc.with_ymd_and_hms(2023, 9, 10, 12, 0, 0).unwrap();
        let mut navigator = LogNavigator::new(&now, Weekday::Sun).unwrap();

        navigator.navigate_by(-3).unwrap();
        assert_eq!(navigator.offset(), -3);
        assert_eq!(navigator.window().start, date(2023, 8, 20));

        navigator.select_tab(Granularity::Month).unwrap();
        assert_eq!(navigator.offset(), 0);
        assert_eq!(navigator.window(), TimeWindow::new(date(2023, 9, 1), date(2023, 10, 1)));

        navigator.navigate_by(2).unwrap();
        assert_eq!(navigator.window(), TimeWindow::new(date(2023, 11, 1), date(2023, 12, 1)));
    }

    #[test]
    fn test_filter_keeps_half_open_range_in_order() {
        let week = TimeWindow::new(date(2023, 9, 10), date(2023, 9, 17));
        let shifts = vec![
            shift(date(2023, 9, 9), "8:00"),
            shift(date(2023, 9, 10), "7:30"),
            shift(date(2023, 9, 12), "6:00"),
            shift(date(2023, 9, 11), "5:00"),
            shift(date(2023, 9, 17), "4:00"),
        ];

        let visible = filter(&shifts, week);
        let dates: Vec<NaiveDate> = visible.iter().map(|s| s.date).collect();
        assert_eq!(dates, vec![date(2023, 9, 10), date(2023, 9, 12), date(2023, 9, 11)]);

        assert_eq!(filter(&visible, week), visible);
        assert_eq!(sum_totals(&visible).unwrap().to_string(), "18:30");
    }

    #[test]
    fn test_sum_totals() {
        assert_eq!(sum_totals(&[]).unwrap().to_string(), "0:00");

        let shifts = vec![shift(date(2023, 9, 10), "7:45"), shift(date(2023, 9, 11), "-0:30")];
        assert_eq!(sum_totals(&shifts).unwrap().to_string(), "7:15");

        let shifts = vec![shift(date(2023, 9, 10), "-1:15"), shift(date(2023, 9, 11), "2:00")];
        assert_eq!(sum_totals(&shifts).unwrap().to_string(), "0:45");
    }

    #[test]
    fn test_sum_totals_overflow_is_an_error() {
        let span: ShiftSpan = "9:00 AM - 5:00 PM".parse().unwrap();
        let huge = Shift::new(date(2023, 9, 10), span, ClockDuration::ZERO, ClockDuration::from_minutes(i64::MAX));

        assert_eq!(sum_totals(&[huge.clone(), huge]), Err(TimeError::OutOfRange));
    }

    #[test]
    fn test_visible_in_filters_by_display_date() {
        let chicago: Tz = "America/Chicago".parse().unwrap();
        let now = chicago.with_ymd_and_hms(2023, 1, 20, 12, 0, 0).unwrap();
        let mut navigator = LogNavigator::new(&now, Weekday::Sun).unwrap();
        navigator.select_tab(Granularity::Month).unwrap();

        // 2 AM UTC on Feb 1 is 8 PM on Jan 31 in Chicago.
        let stored = vec![
            Shift::from_stored(1, "2023.02.01", "2:00 AM - 6:00 AM", "0:00", "4:00").unwrap(),
            Shift::from_stored(2, "2023.02.01", "3:00 PM - 11:00 PM", "0:00", "8:00").unwrap(),
        ];

        assert!(navigator.visible(&stored).is_empty());

        let visible = navigator.visible_in(&stored, chicago).unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, Some(1));
        assert_eq!(visible[0].date, date(2023, 1, 31));
        assert_eq!(visible[0].span.to_string(), "8:00 PM - 12:00 AM");

        assert_eq!(navigator.visible_in(&stored, Tz::UTC).unwrap(), Vec::<Shift>::new());
    }

    #[test]
    fn test_navigator_visible_shifts() {
        let now = Utc.with_ymd_and_hms(2023, 9, 10, 12, 0, 0).unwrap();
        let mut navigator = LogNavigator::new(&now, Weekday::Sun).unwrap();
        let shifts = vec![shift(date(2023, 9, 5), "8:00"), shift(date(2023, 9, 11), "6:00")];

        assert_eq!(navigator.visible(&shifts).len(), 1);
        navigator.select_tab(Granularity::All).unwrap();
        assert_eq!(navigator.visible(&shifts), shifts);
    }
}
