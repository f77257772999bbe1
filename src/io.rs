use crate::model::{DaySchedule, Person, WeekRotation};
use crate::render::cell;
use crate::time::{format_12h, parse_weekday, weekday_name, weekday_of, ShiftTime};
use anyhow::{bail, Context};
use chrono::Weekday;
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::fs;
use std::path::Path;

const ALL_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Import de personnes depuis CSV: header `name,day,shift_start,shift_end[,is_present][,is_off]`
///
/// Une ligne par (personne, jour) ; `day = *` vise les 7 jours. Chaque personne part de la
/// semaine par défaut. Une ligne redéfinit le jour : heures vides = heures conservées,
/// `is_present` vaut `true` et `is_off` vaut `false` s'ils sont omis.
pub fn import_people_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Person>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;
    let mut out: Vec<Person> = Vec::new();
    for (idx, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let row = idx + 2;
        let name = rec.get(0).context("missing name")?;
        if name.is_empty() {
            bail!("row {row}: empty name");
        }
        let day_raw = rec
            .get(1)
            .with_context(|| format!("row {row}: missing day"))?;
        let days: Vec<Weekday> = if day_raw == "*" {
            ALL_DAYS.to_vec()
        } else {
            vec![parse_weekday(day_raw)
                .with_context(|| format!("row {row}: invalid day {day_raw:?}"))?]
        };

        let pos = match out.iter().position(|p| p.name == name) {
            Some(pos) => pos,
            None => {
                out.push(Person::new(name));
                out.len() - 1
            }
        };
        for day in days {
            let schedule = out[pos].weekly_schedule.day_mut(day);
            apply_row(schedule, &rec).with_context(|| format!("row {row} ({name})"))?;
        }
    }
    Ok(out)
}

fn apply_row(schedule: &mut DaySchedule, rec: &StringRecord) -> anyhow::Result<()> {
    if let Some(raw) = field(rec, 2) {
        schedule.shift_start = ShiftTime::parse(raw)?;
    }
    if let Some(raw) = field(rec, 3) {
        schedule.shift_end = ShiftTime::parse(raw)?;
    }
    schedule.is_present = field(rec, 4).map(parse_bool).transpose()?.unwrap_or(true);
    schedule.is_off = field(rec, 5).map(parse_bool).transpose()?.unwrap_or(false);
    Ok(())
}

fn field(rec: &StringRecord, idx: usize) -> Option<&str> {
    rec.get(idx).filter(|s| !s.is_empty())
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "oui" => Ok(true),
        "false" | "0" | "no" | "n" | "non" => Ok(false),
        _ => bail!("expected boolean, got {s:?}"),
    }
}

/// Export JSON de la semaine (jolie mise en forme)
pub fn export_week_json<P: AsRef<Path>>(path: P, week: &WeekRotation) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(week)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV (tableur): header `date,day,time,outside,inside,floater`
pub fn export_week_csv<P: AsRef<Path>>(path: P, week: &WeekRotation) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "day", "time", "outside", "inside", "floater"])?;
    for (date, slots) in &week.days {
        let date_str = date.to_string();
        let day = weekday_name(weekday_of(*date));
        for slot in slots {
            let time = format_12h(slot.start);
            let outside = cell(&slot.outside);
            let inside = cell(&slot.inside);
            let floater = cell(&slot.floater);
            w.write_record([
                date_str.as_str(),
                day,
                time.as_str(),
                outside.as_str(),
                inside.as_str(),
                floater.as_str(),
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}
