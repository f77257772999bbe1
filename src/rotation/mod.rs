mod assignment;
mod availability;
mod planner;
mod types;
mod variety;

pub use assignment::{FairnessState, Tally};
pub use availability::is_working;
pub use planner::{plan, PositionPlan};
pub use types::{RotationError, RotationOptions};
pub use variety::{pseudo_random, seed_for};

use crate::model::{HourSlot, Person, WeekRotation};
use crate::time;
use chrono::NaiveDate;
use tracing::info;

/// Génère la rotation horaire d'une journée (07:00 → 23:00).
///
/// Fonction pure : le roster n'est lu qu'en lecture et aucun état ne survit à l'appel.
pub fn generate_hourly_rotation(people: &[Person], date: NaiveDate) -> Vec<HourSlot> {
    assignment::generate(people, date, RotationOptions::default().hours())
}

/// Rotator : options validées + génération jour/semaine
#[derive(Debug, Clone, Copy, Default)]
pub struct Rotator {
    opts: RotationOptions,
}

impl Rotator {
    pub fn new(opts: RotationOptions) -> Result<Self, RotationError> {
        opts.validate()?;
        Ok(Self { opts })
    }

    pub fn options(&self) -> RotationOptions {
        self.opts
    }

    pub fn day(&self, people: &[Person], date: NaiveDate) -> Vec<HourSlot> {
        assignment::generate(people, date, self.opts.hours())
    }

    /// Semaine (lundi → dimanche) contenant `date` ; chaque jour est généré indépendamment.
    pub fn week(&self, people: &[Person], date: NaiveDate) -> WeekRotation {
        let monday = time::week_start(date);
        let mut week = WeekRotation::new(monday);
        for day in time::week_dates(monday) {
            week.days.insert(day, self.day(people, day));
        }
        info!(week_start = %monday, people = people.len(), "week rotation generated");
        week
    }
}
