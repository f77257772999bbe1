#![forbid(unsafe_code)]
//! Roulement — génération de rotations horaires équitables (dehors / dedans / volant).
//!
//! - Cœur pur : roster + date → 16 créneaux horaires, sans I/O.
//! - Équité : moins d'heures d'abord, pas deux fois le même poste d'affilée si évitable.
//! - Départage déterministe : même entrée, même sortie ; autre date, autre ordre.
//! - Stockage fichiers (JSON/CSV) et rendu texte en périphérie.

pub mod io;
pub mod model;
pub mod render;
pub mod rotation;
pub mod storage;
pub mod time;

pub use model::{
    Assignee, DaySchedule, HourSlot, Person, PersonId, Position, Roster, WeekRotation,
    WeeklySchedule,
};
pub use render::{RotationRenderer, TextTable};
pub use rotation::{
    generate_hourly_rotation, is_working, plan, PositionPlan, RotationError, RotationOptions,
    Rotator,
};
pub use storage::{JsonStorage, Storage, WeekInfo, WeekStore};
pub use time::ShiftTime;
