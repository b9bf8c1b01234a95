#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime, TimeZone};
    use chrono_tz::Tz;
    use shiftlog::libs::draft::{DraftChanges, ShiftDraft};
    use shiftlog::libs::error::TimeError;
    use shiftlog::libs::shift::{Shift, ShiftSpan};
    use shiftlog::libs::time_math::{BreakEntry, ClockDuration};

    fn chicago() -> Tz {
        "America/Chicago".parse().unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn wednesday_draft() -> ShiftDraft {
        let now = chicago().with_ymd_and_hms(2023, 1, 25, 13, 18, 42).unwrap();
        ShiftDraft::new_at(&now)
    }

    #[test]
    fn test_create_draft_starts_empty() {
        let draft = wednesday_draft();

        assert_eq!(draft.id(), None);
        assert_eq!(draft.start(), draft.end());
        assert_eq!(draft.start().time(), time(13, 18));
        assert_eq!(draft.break_entry(), BreakEntry::Unset);
        assert_eq!(draft.total().to_string(), "0:00");
        assert_eq!(draft.start_date_label(), "Wed, Jan 25");
    }

    #[test]
    fn test_every_edit_recomputes_total() {
        let mut draft = wednesday_draft();

        draft.set_end_date(NaiveDate::from_ymd_opt(2023, 1, 26).unwrap());
        assert_eq!(draft.end_date_label(), "Thu, Jan 26");
        assert_eq!(draft.total().to_string(), "24:00");

        draft.set_end_date(NaiveDate::from_ymd_opt(2023, 1, 25).unwrap());
        draft.set_end_time(time(17, 48));
        assert_eq!(draft.total().to_string(), "4:30");

        draft.set_start_time(time(9, 0));
        assert_eq!(draft.total().to_string(), "8:48");

        draft.set_break_input("48").unwrap();
        assert_eq!(draft.total().to_string(), "8:00");

        draft.set_start_date(NaiveDate::from_ymd_opt(2023, 1, 24).unwrap());
        assert_eq!(draft.total().to_string(), "32:00");
    }

    #[test]
    fn test_end_before_start_is_negative() {
        let mut draft = wednesday_draft();
        draft.set_end_time(time(12, 18));
        assert_eq!(draft.total().to_string(), "-1:00");
    }

    #[test]
    fn test_invalid_break_keeps_previous_value() {
        let mut draft = wednesday_draft();
        draft.set_end_time(time(15, 18));
        draft.set_break_input("30").unwrap();
        assert_eq!(draft.total().to_string(), "1:30");

        assert_eq!(
            draft.set_break_input("half an hour"),
            Err(TimeError::InvalidBreakInput("half an hour".to_string()))
        );
        assert_eq!(draft.break_entry(), BreakEntry::Minutes(30));
        assert_eq!(draft.total().to_string(), "1:30");

        draft.set_break_input("---").unwrap();
        assert_eq!(draft.break_entry(), BreakEntry::Unset);
        assert_eq!(draft.total().to_string(), "2:00");

        draft.set_break_input("").unwrap();
        assert_eq!(draft.break_entry(), BreakEntry::Unset);
    }

    #[test]
    fn test_into_shift_is_canonical() {
        let mut draft = wednesday_draft();
        draft.set_start_time(time(9, 0));
        draft.set_end_time(time(17, 30));

        let shift = draft.into_shift(chicago()).unwrap();
        assert_eq!(shift.id, None);
        assert_eq!(shift.date_label(), "2023.01.25");
        assert_eq!(shift.span.to_string(), "3:00 PM - 11:30 PM");
        assert_eq!(shift.break_total.to_string(), "0:00");
        assert_eq!(shift.shift_total.to_string(), "8:30");
    }

    #[test]
    fn test_edit_draft_round_trip() {
        let stored = Shift::from_stored(7, "2023.01.25", "3:00 PM - 11:30 PM", "0:30", "8:00").unwrap();

        let draft = ShiftDraft::from_shift(&stored, chicago()).unwrap();
        assert_eq!(draft.id(), Some(7));
        assert_eq!(draft.start(), NaiveDate::from_ymd_opt(2023, 1, 25).unwrap().and_time(time(9, 0)));
        assert_eq!(draft.end(), NaiveDate::from_ymd_opt(2023, 1, 25).unwrap().and_time(time(17, 30)));
        assert_eq!(draft.break_entry(), BreakEntry::Minutes(30));
        assert_eq!(draft.total().to_string(), "8:00");

        assert_eq!(draft.into_shift(chicago()).unwrap(), stored);
    }

    #[test]
    fn test_edit_draft_of_overnight_shift_ends_next_day() {
        let stored = Shift::from_stored(3, "2023.01.25", "10:00 PM - 6:15 AM", "0:15", "8:00").unwrap();

        let draft = ShiftDraft::from_shift(&stored, Tz::UTC).unwrap();
        assert_eq!(draft.end(), NaiveDate::from_ymd_opt(2023, 1, 26).unwrap().and_time(time(6, 15)));
        assert_eq!(draft.end_date_label(), "Thu, Jan 26");
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn overnight_draft() -> ShiftDraft {
        let stored = Shift::from_stored(1, "2023.01.25", "10:00 PM - 6:15 AM", "0:15", "8:00").unwrap();
        ShiftDraft::from_shift(&stored, Tz::UTC).unwrap()
    }

    #[test]
    fn test_edit_draft_with_total_beyond_range_is_an_error() {
        let span: ShiftSpan = "9:00 AM - 5:00 PM".parse().unwrap();
        let huge = Shift::new(date(2023, 1, 25), span, ClockDuration::ZERO, ClockDuration::from_minutes(i64::MAX));
        assert_eq!(ShiftDraft::from_shift(&huge, Tz::UTC), Err(TimeError::OutOfRange));

        let overflowing = Shift::new(
            date(2023, 1, 25),
            span,
            ClockDuration::from_minutes(1),
            ClockDuration::from_minutes(i64::MAX),
        );
        assert_eq!(ShiftDraft::from_shift(&overflowing, Tz::UTC), Err(TimeError::OutOfRange));
    }

    #[test]
    fn test_moving_start_date_carries_the_end() {
        let mut draft = overnight_draft();

        draft.apply(&DraftChanges {
            start_date: Some(date(2023, 1, 27)),
            ..DraftChanges::default()
        })
        .unwrap();

        assert_eq!(draft.start(), date(2023, 1, 27).and_time(time(22, 0)));
        assert_eq!(draft.end(), date(2023, 1, 28).and_time(time(6, 15)));
        assert_eq!(draft.total().to_string(), "8:00");

        let shift = draft.into_shift(Tz::UTC).unwrap();
        assert_eq!(shift.date_label(), "2023.01.27");
        assert_eq!(shift.span.to_string(), "10:00 PM - 6:15 AM");
        assert_eq!(shift.shift_total.to_string(), "8:00");
    }

    #[test]
    fn test_explicit_end_date_is_kept() {
        let mut draft = overnight_draft();

        draft.apply(&DraftChanges {
            start_date: Some(date(2023, 1, 26)),
            end_date: Some(date(2023, 1, 26)),
            end_time: Some(time(23, 15)),
            ..DraftChanges::default()
        })
        .unwrap();

        assert_eq!(draft.end(), date(2023, 1, 26).and_time(time(23, 15)));
        assert_eq!(draft.total().to_string(), "1:00");
    }

    #[test]
    fn test_new_shift_with_start_date_ends_same_day() {
        let mut draft = wednesday_draft();

        draft.apply(&DraftChanges {
            start_date: Some(date(2023, 2, 3)),
            start_time: Some(time(9, 0)),
            end_time: Some(time(17, 0)),
            break_input: Some("30".to_string()),
            ..DraftChanges::default()
        })
        .unwrap();

        assert_eq!(draft.start(), date(2023, 2, 3).and_time(time(9, 0)));
        assert_eq!(draft.end(), date(2023, 2, 3).and_time(time(17, 0)));
        assert_eq!(draft.total().to_string(), "7:30");
    }

    #[test]
    fn test_rejected_break_stops_apply() {
        let mut draft = overnight_draft();

        let result = draft.apply(&DraftChanges {
            end_time: Some(time(7, 15)),
            break_input: Some("soon".to_string()),
            ..DraftChanges::default()
        });

        assert_eq!(result, Err(TimeError::InvalidBreakInput("soon".to_string())));
        assert_eq!(draft.break_entry(), BreakEntry::Minutes(15));
        assert_eq!(draft.total().to_string(), "9:00");
    }
}
