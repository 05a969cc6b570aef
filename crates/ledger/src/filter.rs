use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::movement::{Direction, StockMove};

/// Filter over the movement ledger. Bounds are inclusive on both ends;
/// `None` means unbounded / any direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub direction: Option<Direction>,
}

impl MoveFilter {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            direction: None,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn matches(&self, m: &StockMove) -> bool {
        if let Some(from) = self.from {
            if m.recorded_at < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if m.recorded_at > to {
                return false;
            }
        }
        if let Some(direction) = self.direction {
            if m.direction != direction {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cantina_core::{MoveId, ProductId};
    use chrono::TimeZone;

    fn move_at(ts: DateTime<Utc>, direction: Direction) -> StockMove {
        StockMove {
            id: MoveId::new(1),
            product_id: ProductId::new(1),
            direction,
            quantity: 5.0,
            recorded_at: ts,
            actor: None,
            supplier: None,
        }
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn bounds_are_inclusive() {
        let f = MoveFilter::between(day(10), day(20));
        assert!(f.matches(&move_at(day(10), Direction::Entrance)));
        assert!(f.matches(&move_at(day(20), Direction::Exit)));
        assert!(!f.matches(&move_at(day(9), Direction::Entrance)));
        assert!(!f.matches(&move_at(day(21), Direction::Entrance)));
    }

    #[test]
    fn direction_filter_excludes_other_direction() {
        let f = MoveFilter::any().with_direction(Direction::Exit);
        assert!(f.matches(&move_at(day(1), Direction::Exit)));
        assert!(!f.matches(&move_at(day(1), Direction::Entrance)));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let f = MoveFilter::any();
        assert!(f.matches(&move_at(day(1), Direction::Entrance)));
    }
}
