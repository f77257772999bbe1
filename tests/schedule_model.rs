#![forbid(unsafe_code)]
use chrono::{NaiveDate, Weekday};
use roulement::{
    time::{format_12h, parse_date, parse_weekday, week_dates, week_start, weekday_of},
    DaySchedule, Person, Roster, RotationError, ShiftTime, WeeklySchedule,
};

#[test]
fn parses_well_formed_times() {
    assert_eq!(ShiftTime::parse("07:00").unwrap().minutes(), 420);
    assert_eq!(ShiftTime::parse("7:30").unwrap().minutes(), 450);
    assert_eq!(ShiftTime::parse("23:59").unwrap().minutes(), 1439);
    assert_eq!(ShiftTime::parse("24:00").unwrap(), ShiftTime::END_OF_DAY);
    assert_eq!(ShiftTime::parse("9:05").unwrap().to_string(), "09:05");
}

#[test]
fn rejects_malformed_times() {
    for raw in ["", "7", "07h00", "24:01", "25:00", "12:60", "12:5", "-1:00", "ab:cd", "123:00"] {
        let err = ShiftTime::parse(raw).unwrap_err();
        assert!(matches!(err, RotationError::InvalidTime(_)), "{raw}");
    }
}

#[test]
fn malformed_schedule_is_rejected_at_load() {
    let good = r#"{"shift_start":"08:00","shift_end":"16:00","is_present":true}"#;
    let day: DaySchedule = serde_json::from_str(good).unwrap();
    assert!(!day.is_off);
    assert_eq!(day.shift_end.hour(), 16);

    let bad = r#"{"shift_start":"8h","shift_end":"16:00","is_present":true}"#;
    assert!(serde_json::from_str::<DaySchedule>(bad).is_err());
}

#[test]
fn shift_time_serializes_as_text() {
    let json = serde_json::to_string(&ShiftTime::from_hour(9)).unwrap();
    assert_eq!(json, "\"09:00\"");
}

#[test]
fn twelve_hour_display() {
    assert_eq!(format_12h(ShiftTime::from_hour(7)), "7:00 AM");
    assert_eq!(format_12h(ShiftTime::from_hour(12)), "12:00 PM");
    assert_eq!(format_12h(ShiftTime::from_hour(22)), "10:00 PM");
    assert_eq!(format_12h(ShiftTime::from_hour(0)), "12:00 AM");
    assert_eq!(format_12h(ShiftTime::parse("13:45").unwrap()), "1:45 PM");
}

#[test]
fn dates_and_weeks() {
    let date = parse_date("2025-03-06").unwrap();
    assert_eq!(weekday_of(date), Weekday::Thu);
    let monday = week_start(date);
    assert_eq!(monday, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
    assert_eq!(week_start(monday), monday);

    let days = week_dates(monday);
    assert_eq!(days[0], monday);
    assert_eq!(weekday_of(days[6]), Weekday::Sun);
    assert_eq!(days[6], NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());

    assert!(matches!(parse_date("03/06/2025"), Err(RotationError::InvalidDate(_))));
}

#[test]
fn weekday_names() {
    assert_eq!(parse_weekday("Monday"), Some(Weekday::Mon));
    assert_eq!(parse_weekday("sat"), Some(Weekday::Sat));
    assert_eq!(parse_weekday("dimanche"), Some(Weekday::Sun));
    assert_eq!(parse_weekday("someday"), None);
}

#[test]
fn default_week_is_weekdays_seven_to_three() {
    let week = WeeklySchedule::default();
    assert!(week.day(Weekday::Fri).is_available());
    assert_eq!(week.day(Weekday::Mon).shift_start.to_string(), "07:00");
    assert_eq!(week.day(Weekday::Mon).shift_end.to_string(), "15:00");
    assert!(week.saturday.is_off && !week.saturday.is_present);
    assert!(!week.day(Weekday::Sun).is_available());
}

#[test]
fn copy_day_to_whole_week() {
    let mut week = WeeklySchedule::default();
    week.day_mut(Weekday::Wed).shift_start = ShiftTime::from_hour(10);
    week.copy_day_to_week(Weekday::Wed);
    for day in [Weekday::Mon, Weekday::Sat, Weekday::Sun] {
        assert_eq!(week.day(day), &week.wednesday);
    }
    assert_eq!(week.sunday.shift_start.hour(), 10);
    assert!(week.sunday.is_available());
}

#[test]
fn roster_lookup_and_removal() {
    let mut roster = Roster::default();
    let ana = roster.add(Person::new("Ana"));
    roster.add(Person::new("Bo"));

    assert_eq!(roster.find_by_name("ana").map(|p| &p.id), Some(&ana));
    assert!(roster.find_by_id(&ana).is_some());
    assert_eq!(roster.remove(&ana).map(|p| p.name), Some("Ana".to_string()));
    assert!(roster.remove(&ana).is_none());
    assert_eq!(roster.people.len(), 1);
}

#[test]
fn insert_refuses_taken_names() {
    let mut roster = Roster::default();
    roster.insert(Person::new("Ana")).unwrap();

    let err = roster.insert(Person::new("  ana ")).unwrap_err();
    assert!(matches!(err, RotationError::DuplicatePerson(ref n) if n == "ana"));
    assert_eq!(roster.people.len(), 1);

    roster.insert(Person::new(" Bo ")).unwrap();
    assert_eq!(roster.people[1].name, "Bo");
}

#[test]
fn insert_all_is_all_or_nothing() {
    let mut roster = Roster::default();
    roster.insert(Person::new("Ana")).unwrap();

    let err = roster
        .insert_all(vec![Person::new("Cy"), Person::new("Ana")])
        .unwrap_err();
    assert!(matches!(err, RotationError::DuplicatePerson(_)));
    assert_eq!(roster.people.len(), 1);

    assert!(roster
        .insert_all(vec![Person::new("Di"), Person::new("di")])
        .is_err());
    assert_eq!(roster.people.len(), 1);

    roster
        .insert_all(vec![Person::new("Cy"), Person::new("Di")])
        .unwrap();
    assert_eq!(roster.people.len(), 3);
}

#[test]
fn lookup_by_name_reports_unknown_person() {
    let mut roster = Roster::default();
    roster.insert(Person::new("Ana")).unwrap();
    assert_eq!(roster.person("ANA").unwrap().name, "Ana");

    let err = roster.person_mut("Bo").unwrap_err();
    assert!(matches!(err, RotationError::UnknownPerson(ref n) if n == "Bo"));
    assert_eq!(err.to_string(), "unknown person: Bo");
}
