use crate::model::{Assignee, HourSlot, Position, WeekRotation};
use crate::time::format_12h;
use chrono::NaiveDate;

/// Marqueur d'un poste vide.
pub const EMPTY_CELL: &str = "—";

/// Permet de customiser le rendu d'une journée (terminal, fichier texte, etc.).
pub trait RotationRenderer {
    fn render(&self, date: NaiveDate, slots: &[HourSlot]) -> String;

    /// Enchaîne les jours de la semaine, séparés par une ligne vide.
    fn render_week(&self, week: &WeekRotation) -> String {
        week.days
            .iter()
            .map(|(date, slots)| self.render(*date, slots))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Tableau texte simple : `Time | Outside | Inside [| Floater]`.
///
/// La colonne volant n'apparaît que si au moins une heure du jour en a un.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextTable;

impl RotationRenderer for TextTable {
    fn render(&self, date: NaiveDate, slots: &[HourSlot]) -> String {
        let with_floater = slots.iter().any(|s| !s.floater.is_empty());
        let columns: &[Position] = if with_floater {
            &Position::ALL
        } else {
            &[Position::Outside, Position::Inside]
        };

        let mut out = format!("{}\n", date.format("%A, %B %-d, %Y"));
        let mut header = vec!["Time".to_string()];
        header.extend(columns.iter().map(|p| capitalize(p.as_str())));
        out.push_str(&header.join(" | "));
        out.push('\n');

        for slot in slots {
            let mut row = vec![format_12h(slot.start)];
            row.extend(columns.iter().map(|p| cell(slot.assigned(*p))));
            out.push_str(&row.join(" | "));
            out.push('\n');
        }
        out
    }
}

/// Noms séparés par `, ` ou [`EMPTY_CELL`].
pub fn cell(assigned: &[Assignee]) -> String {
    if assigned.is_empty() {
        return EMPTY_CELL.to_string();
    }
    assigned
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
