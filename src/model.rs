use crate::rotation::RotationError;
use crate::time::ShiftTime;
use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Identifiant fort pour Person
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonId(String);

impl PersonId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Horaire d'une journée. `is_off` l'emporte sur tout le reste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub shift_start: ShiftTime,
    pub shift_end: ShiftTime,
    pub is_present: bool,
    #[serde(default)]
    pub is_off: bool,
}

impl DaySchedule {
    pub fn new(shift_start: ShiftTime, shift_end: ShiftTime) -> Self {
        Self {
            shift_start,
            shift_end,
            is_present: true,
            is_off: false,
        }
    }

    /// Jour de repos.
    pub fn off() -> Self {
        Self {
            is_present: false,
            is_off: true,
            ..Self::default()
        }
    }

    /// Présent et pas en repos ce jour-là (filtre journalier).
    pub fn is_available(&self) -> bool {
        self.is_present && !self.is_off
    }
}

impl Default for DaySchedule {
    /// 07:00 → 15:00, présent.
    fn default() -> Self {
        Self::new(ShiftTime::from_hour(7), ShiftTime::from_hour(15))
    }
}

/// Planning hebdomadaire (une entrée par jour).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
    pub sunday: DaySchedule,
}

impl WeeklySchedule {
    /// Même horaire les 7 jours.
    pub fn uniform(day: DaySchedule) -> Self {
        Self {
            monday: day.clone(),
            tuesday: day.clone(),
            wednesday: day.clone(),
            thursday: day.clone(),
            friday: day.clone(),
            saturday: day.clone(),
            sunday: day,
        }
    }

    pub fn day(&self, weekday: Weekday) -> &DaySchedule {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, weekday: Weekday) -> &mut DaySchedule {
        match weekday {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    /// Recopie l'horaire de `source` sur toute la semaine.
    pub fn copy_day_to_week(&mut self, source: Weekday) {
        *self = Self::uniform(self.day(source).clone());
    }
}

impl Default for WeeklySchedule {
    /// Lundi → vendredi par défaut, week-end en repos.
    fn default() -> Self {
        let day = DaySchedule::default();
        Self {
            monday: day.clone(),
            tuesday: day.clone(),
            wednesday: day.clone(),
            thursday: day.clone(),
            friday: day,
            saturday: DaySchedule::off(),
            sunday: DaySchedule::off(),
        }
    }
}

/// Membre de l'équipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub weekly_schedule: WeeklySchedule,
    pub created_at: DateTime<Utc>,
}

impl Person {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            id: PersonId::random(),
            name: name.into(),
            weekly_schedule: WeeklySchedule::default(),
            created_at: Utc::now(),
        }
    }

    pub fn with_schedule(mut self, schedule: WeeklySchedule) -> Self {
        self.weekly_schedule = schedule;
        self
    }

    pub fn schedule_for(&self, date: NaiveDate) -> &DaySchedule {
        self.weekly_schedule.day(crate::time::weekday_of(date))
    }
}

/// Poste tenu pendant une heure. L'ordre de déclaration est l'ordre de remplissage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Outside,
    Inside,
    Floater,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Outside, Position::Inside, Position::Floater];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Outside => "outside",
            Position::Inside => "inside",
            Position::Floater => "floater",
        }
    }

    /// Étiquette stable utilisée pour dériver les graines.
    pub(crate) fn tag(self) -> u64 {
        match self {
            Position::Outside => 1,
            Position::Inside => 2,
            Position::Floater => 3,
        }
    }
}

/// Personne affectée à un poste (id pour l'identité, nom pour l'affichage).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub person_id: PersonId,
    pub name: String,
}

impl From<&Person> for Assignee {
    fn from(p: &Person) -> Self {
        Self {
            person_id: p.id.clone(),
            name: p.name.clone(),
        }
    }
}

/// Une heure de la journée et ses affectations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSlot {
    pub id: String,
    pub date: NaiveDate,
    pub hour: u8,
    pub start: ShiftTime,
    pub end: ShiftTime,
    pub outside: Vec<Assignee>,
    pub inside: Vec<Assignee>,
    pub floater: Vec<Assignee>,
}

impl HourSlot {
    pub fn empty(date: NaiveDate, hour: u8) -> Self {
        Self {
            id: format!("{date}-{hour}"),
            date,
            hour,
            start: ShiftTime::from_hour(hour),
            end: ShiftTime::from_hour(hour + 1),
            outside: Vec::new(),
            inside: Vec::new(),
            floater: Vec::new(),
        }
    }

    pub fn assigned(&self, position: Position) -> &[Assignee] {
        match position {
            Position::Outside => &self.outside,
            Position::Inside => &self.inside,
            Position::Floater => &self.floater,
        }
    }

    pub(crate) fn assigned_mut(&mut self, position: Position) -> &mut Vec<Assignee> {
        match position {
            Position::Outside => &mut self.outside,
            Position::Inside => &mut self.inside,
            Position::Floater => &mut self.floater,
        }
    }

    pub fn assigned_count(&self) -> usize {
        self.outside.len() + self.inside.len() + self.floater.len()
    }

    /// Poste tenu par `id` pendant cette heure.
    pub fn position_of(&self, id: &PersonId) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| self.assigned(*pos).iter().any(|a| &a.person_id == id))
    }

    pub fn contains(&self, id: &PersonId) -> bool {
        self.position_of(id).is_some()
    }
}

/// Rotation générée pour une semaine (clé : date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekRotation {
    pub week_start: NaiveDate,
    pub days: BTreeMap<NaiveDate, Vec<HourSlot>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WeekRotation {
    pub fn new(week_start: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            week_start,
            days: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Équipe complète
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Roster {
    pub people: Vec<Person>,
}

impl Roster {
    pub fn add(&mut self, person: Person) -> PersonId {
        let id = person.id.clone();
        self.people.push(person);
        id
    }
    /// Ajoute une personne dont le nom (sans espaces autour) n'existe pas encore.
    pub fn insert(&mut self, mut person: Person) -> Result<PersonId, RotationError> {
        person.name = person.name.trim().to_string();
        if self.find_by_name(&person.name).is_some() {
            return Err(RotationError::DuplicatePerson(person.name));
        }
        Ok(self.add(person))
    }
    /// Tout ou rien : aucun ajout si un seul nom est déjà pris (ou répété dans `people`).
    pub fn insert_all(&mut self, people: Vec<Person>) -> Result<(), RotationError> {
        let mut staged = Roster {
            people: self.people.clone(),
        };
        for person in people {
            staged.insert(person)?;
        }
        *self = staged;
        Ok(())
    }
    /// Retire une personne ; renvoie `None` si l'id est inconnu.
    pub fn remove(&mut self, id: &PersonId) -> Option<Person> {
        let pos = self.people.iter().position(|p| &p.id == id)?;
        Some(self.people.remove(pos))
    }
    pub fn find_by_name<'a>(&'a self, name: &str) -> Option<&'a Person> {
        self.people.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
    pub fn find_mut_by_name(&mut self, name: &str) -> Option<&mut Person> {
        self.people.iter_mut().find(|p| p.name.eq_ignore_ascii_case(name))
    }
    pub fn person<'a>(&'a self, name: &str) -> Result<&'a Person, RotationError> {
        self.find_by_name(name)
            .ok_or_else(|| RotationError::UnknownPerson(name.to_string()))
    }
    pub fn person_mut(&mut self, name: &str) -> Result<&mut Person, RotationError> {
        self.find_mut_by_name(name)
            .ok_or_else(|| RotationError::UnknownPerson(name.to_string()))
    }
    pub fn find_by_id<'a>(&'a self, id: &PersonId) -> Option<&'a Person> {
        self.people.iter().find(|p| &p.id == id)
    }
}
