#![forbid(unsafe_code)]
use chrono::{Duration, NaiveDate, Weekday};
use roulement::{
    generate_hourly_rotation,
    io::{export_week_csv, export_week_json, import_people_csv},
    Assignee, HourSlot, JsonStorage, Person, PersonId, Roster, RotationRenderer, Rotator,
    Storage, TextTable, WeekRotation, WeekStore,
};
use std::fs;
use tempfile::tempdir;

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
}

fn assignee(name: &str) -> Assignee {
    Assignee {
        person_id: PersonId::new(name.to_lowercase()),
        name: name.to_string(),
    }
}

#[test]
fn roster_json_roundtrip() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("roster.json")).unwrap();
    assert!(storage.load_or_default().unwrap().people.is_empty());

    let mut roster = Roster::default();
    roster.add(Person::new("Ana"));
    storage.save(&roster).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.people, roster.people);
}

#[test]
fn corrupt_roster_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(&path, "{ not json").unwrap();
    let storage = JsonStorage::open(&path).unwrap();
    assert!(storage.load_or_default().is_err());
}

#[test]
fn week_store_upsert_list_delete() {
    let dir = tempdir().unwrap();
    let store = WeekStore::new(dir.path().join("rotations"));
    assert!(store.list().unwrap().is_empty());

    let people = vec![Person::new("Ana"), Person::new("Bo"), Person::new("Cy")];
    let week = Rotator::default().week(&people, monday());
    store.save(&week).unwrap();
    let first = store.load(monday()).unwrap();
    assert_eq!(first.days, week.days);

    let mut again = WeekRotation::new(monday());
    again.days.insert(monday(), generate_hourly_rotation(&people, monday()));
    store.save(&again).unwrap();
    let second = store.load(monday()).unwrap();
    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at >= first.updated_at);
    assert_eq!(second.days.len(), 1);

    let next = WeekRotation::new(monday() + Duration::days(7));
    store.save(&next).unwrap();
    fs::write(dir.path().join("rotations").join("junk.json"), "nope").unwrap();
    let listed: Vec<NaiveDate> = store.list().unwrap().iter().map(|i| i.week_start).collect();
    assert_eq!(listed, vec![monday(), monday() + Duration::days(7)]);

    assert!(store.delete(monday()).unwrap());
    assert!(!store.delete(monday()).unwrap());
    assert!(!store.exists(monday()));
}

#[test]
fn unreadable_previous_week_is_replaced() {
    let dir = tempdir().unwrap();
    let store = WeekStore::new(dir.path());
    fs::write(dir.path().join("2025-03-03.json"), "{ broken").unwrap();

    let week = WeekRotation::new(monday());
    store.save(&week).unwrap();
    let saved = store.load(monday()).unwrap();
    assert_eq!(saved.created_at, week.created_at);
    assert_eq!(saved.week_start, monday());
}

#[test]
fn import_people_from_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("people.csv");
    fs::write(
        &path,
        "name,day,shift_start,shift_end,is_present,is_off\n\
         Ana,*,09:00,17:00,,\n\
         Ana,sunday,,,no,yes\n\
         Bo,saturday,10:00,14:00\n",
    )
    .unwrap();

    let people = import_people_csv(&path).unwrap();
    assert_eq!(people.len(), 2);

    let ana = &people[0].weekly_schedule;
    assert_eq!(ana.day(Weekday::Sat).shift_start.to_string(), "09:00");
    assert!(ana.day(Weekday::Sat).is_available());
    assert!(ana.sunday.is_off);
    assert_eq!(ana.sunday.shift_end.to_string(), "17:00");

    let bo = &people[1].weekly_schedule;
    assert!(bo.saturday.is_available());
    assert_eq!(bo.saturday.shift_end.to_string(), "14:00");
    assert_eq!(bo.monday.shift_start.to_string(), "07:00");
    assert!(bo.sunday.is_off);
}

#[test]
fn import_rejects_malformed_time() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("people.csv");
    fs::write(&path, "name,day,shift_start,shift_end\nAna,monday,9h,17:00\n").unwrap();
    let err = import_people_csv(&path).unwrap_err();
    assert!(format!("{err:#}").contains("invalid time of day"));
    assert!(format!("{err:#}").contains("row 2 (Ana)"));
}

fn sample_day() -> Vec<HourSlot> {
    let mut seven = HourSlot::empty(monday(), 7);
    seven.outside = vec![assignee("Ana"), assignee("Bo")];
    seven.inside = vec![assignee("Cy")];
    vec![seven, HourSlot::empty(monday(), 8)]
}

#[test]
fn text_table_without_floater_column() {
    let out = TextTable.render(monday(), &sample_day());
    insta::assert_snapshot!(out.trim_end(), @r"
    Monday, March 3, 2025
    Time | Outside | Inside
    7:00 AM | Ana, Bo | Cy
    8:00 AM | — | —
    ");
}

#[test]
fn text_table_shows_floater_when_present() {
    let mut slots = sample_day();
    slots[1].floater = vec![assignee("Di")];
    let out = TextTable.render(monday(), &slots);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[1], "Time | Outside | Inside | Floater");
    assert_eq!(lines[2], "7:00 AM | Ana, Bo | Cy | —");
    assert_eq!(lines[3], "8:00 AM | — | — | Di");
}

#[test]
fn export_week_as_csv_and_json() {
    let dir = tempdir().unwrap();
    let mut week = WeekRotation::new(monday());
    week.days.insert(monday(), sample_day());

    let csv_path = dir.path().join("week.csv");
    export_week_csv(&csv_path, &week).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "date,day,time,outside,inside,floater");
    assert_eq!(lines[1], "2025-03-03,Monday,7:00 AM,\"Ana, Bo\",Cy,—");
    assert_eq!(lines[2], "2025-03-03,Monday,8:00 AM,—,—,—");

    let json_path = dir.path().join("week.json");
    export_week_json(&json_path, &week).unwrap();
    let back: WeekRotation = serde_json::from_slice(&fs::read(&json_path).unwrap()).unwrap();
    assert_eq!(back, week);
}
