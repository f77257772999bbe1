use super::{availability, planner, variety};
use crate::model::{Assignee, HourSlot, Person, PersonId, Position};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::ops::RangeInclusive;
use tracing::{debug, info, warn};

/// Compteurs d'une personne pour la génération en cours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub outside: u32,
    pub inside: u32,
    pub floater: u32,
    pub last: Option<Position>,
}

impl Tally {
    pub fn count(&self, position: Position) -> u32 {
        match position {
            Position::Outside => self.outside,
            Position::Inside => self.inside,
            Position::Floater => self.floater,
        }
    }

    pub fn total(&self) -> u32 {
        self.outside + self.inside + self.floater
    }

    fn record(&mut self, position: Position) {
        match position {
            Position::Outside => self.outside += 1,
            Position::Inside => self.inside += 1,
            Position::Floater => self.floater += 1,
        }
        self.last = Some(position);
    }
}

/// État d'équité d'une seule génération journalière : créé au début, jeté à la fin.
#[derive(Debug, Clone, Default)]
pub struct FairnessState {
    tallies: HashMap<PersonId, Tally>,
}

impl FairnessState {
    pub fn new<'a, I: IntoIterator<Item = &'a Person>>(candidates: I) -> Self {
        Self {
            tallies: candidates
                .into_iter()
                .map(|p| (p.id.clone(), Tally::default()))
                .collect(),
        }
    }

    pub fn tally(&self, id: &PersonId) -> Tally {
        self.tallies.get(id).copied().unwrap_or_default()
    }

    pub fn record(&mut self, id: &PersonId, position: Position) {
        self.tallies.entry(id.clone()).or_default().record(position);
    }

    /// Clé de sélection pour un poste : (a tenu ce poste l'heure précédente, nb de fois à ce poste).
    fn selection_key(&self, id: &PersonId, position: Position) -> (bool, u32) {
        let t = self.tally(id);
        (t.last == Some(position), t.count(position))
    }
}

pub(super) fn generate(
    people: &[Person],
    date: NaiveDate,
    hours: RangeInclusive<u8>,
) -> Vec<HourSlot> {
    let candidates = availability::day_candidates(people, date);
    let mut state = FairnessState::new(candidates.iter().copied());

    let slots: Vec<HourSlot> = hours
        .map(|hour| assign_hour(&candidates, &mut state, date, hour))
        .collect();

    info!(
        %date,
        candidates = candidates.len(),
        hours = slots.len(),
        "rotation generated"
    );
    slots
}

fn assign_hour(
    candidates: &[&Person],
    state: &mut FairnessState,
    date: NaiveDate,
    hour: u8,
) -> HourSlot {
    let mut slot = HourSlot::empty(date, hour);
    let mut pool: Vec<&Person> = candidates
        .iter()
        .copied()
        .filter(|p| availability::is_working(p, hour, date))
        .collect();
    let plan = planner::plan(pool.len());
    debug!(%date, hour, available = pool.len(), ?plan, "planning hour");

    if pool.is_empty() {
        return slot;
    }

    // ordre de base : moins d'affectations d'abord
    pool.sort_by(|a, b| {
        state
            .tally(&a.id)
            .total()
            .cmp(&state.tally(&b.id).total())
            .then_with(|| {
                let ra = variety::tie_break(date, hour, None, &a.id);
                let rb = variety::tie_break(date, hour, None, &b.id);
                ra.total_cmp(&rb)
            })
    });

    for position in Position::ALL {
        for _ in 0..plan.count(position) {
            let Some(idx) = best_candidate(&pool, state, date, hour, position) else {
                break;
            };
            let person = pool.remove(idx);
            state.record(&person.id, position);
            slot.assigned_mut(position).push(Assignee::from(person));
        }
    }

    if !pool.is_empty() {
        warn!(%date, hour, left = pool.len(), "candidates left without a position");
    }
    slot
}

/// Premier minimum : à égalité parfaite, l'ordre de base l'emporte.
fn best_candidate(
    pool: &[&Person],
    state: &FairnessState,
    date: NaiveDate,
    hour: u8,
    position: Position,
) -> Option<usize> {
    pool.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| compare_for(state, date, hour, position, a, b))
        .map(|(idx, _)| idx)
}

fn compare_for(
    state: &FairnessState,
    date: NaiveDate,
    hour: u8,
    position: Position,
    a: &Person,
    b: &Person,
) -> Ordering {
    state
        .selection_key(&a.id, position)
        .cmp(&state.selection_key(&b.id, position))
        .then_with(|| {
            let ra = variety::tie_break(date, hour, Some(position), &a.id);
            let rb = variety::tie_break(date, hour, Some(position), &b.id);
            ra.total_cmp(&rb)
        })
}
