use crate::model::Position;

/// Nombre de postes à pourvoir pour une heure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionPlan {
    pub outside: usize,
    pub inside: usize,
    pub floater: usize,
}

impl PositionPlan {
    pub fn count(&self, position: Position) -> usize {
        match position {
            Position::Outside => self.outside,
            Position::Inside => self.inside,
            Position::Floater => self.floater,
        }
    }

    pub fn total(&self) -> usize {
        self.outside + self.inside + self.floater
    }
}

/// Moitié dehors, moitié dedans ; le surplus impair devient volant.
pub fn plan(available: usize) -> PositionPlan {
    let half = available / 2;
    PositionPlan {
        outside: half,
        inside: half,
        floater: available % 2,
    }
}
