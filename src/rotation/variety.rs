//! Générateur de variété déterministe, utilisé uniquement pour départager les égalités.
//!
//! La graine est dérivée de `(date, heure, poste, personne)` : mêmes entrées, même valeur ;
//! une autre date ou une autre heure donne un autre ordre.

use crate::model::{PersonId, Position};
use chrono::{Datelike, NaiveDate};
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::hash::Hasher;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a 64 bits, sortie stable entre versions de Rust.
struct Fnv1a(u64);

impl Default for Fnv1a {
    fn default() -> Self {
        Self(FNV_OFFSET)
    }
}

impl Hasher for Fnv1a {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for b in bytes {
            self.0 ^= u64::from(*b);
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
    }
}

/// Compose la graine. `position == None` sert à l'ordre de base de l'heure.
pub fn seed_for(
    date: NaiveDate,
    hour: u8,
    position: Option<Position>,
    person: &PersonId,
) -> u64 {
    let mut h = Fnv1a::default();
    h.write(&date.num_days_from_ce().to_le_bytes());
    h.write(&[hour]);
    h.write(&position.map_or(0, Position::tag).to_le_bytes());
    h.write(person.as_str().as_bytes());
    h.finish()
}

/// Valeur pseudo-aléatoire reproductible dans `[0, 1)`.
pub fn pseudo_random(seed: u64) -> f64 {
    let bits = Pcg64Mcg::seed_from_u64(seed).next_u64();
    (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

pub(super) fn tie_break(
    date: NaiveDate,
    hour: u8,
    position: Option<Position>,
    person: &PersonId,
) -> f64 {
    pseudo_random(seed_for(date, hour, position, person))
}
