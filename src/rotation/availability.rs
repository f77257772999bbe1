use crate::model::Person;
use chrono::NaiveDate;

/// Vrai si l'heure `[hour:00, hour+1:00)` est entièrement couverte par le service du jour.
///
/// Un service qui commence ou finit en cours d'heure exclut cette heure.
pub fn is_working(person: &Person, hour: u8, date: NaiveDate) -> bool {
    let day = person.schedule_for(date);
    if !day.is_available() {
        return false;
    }
    let hour_start = u16::from(hour) * 60;
    let hour_end = hour_start + 60;
    hour_start >= day.shift_start.minutes() && hour_end <= day.shift_end.minutes()
}

/// Candidats du jour : présents et pas en repos à `date`, dans l'ordre du roster.
pub(super) fn day_candidates(people: &[Person], date: NaiveDate) -> Vec<&Person> {
    people
        .iter()
        .filter(|p| p.schedule_for(date).is_available())
        .collect()
}
