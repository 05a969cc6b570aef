use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cantina_core::{
    DomainResult, Entity, MoveId, ProductId, Quantity, SupplierId, UserId, quantity,
};

/// Direction of a stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Entrance,
    Exit,
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Direction::Entrance => f.write_str("entrance"),
            Direction::Exit => f.write_str("exit"),
        }
    }
}

/// One immutable ledger entry. Timestamp is assigned by the ledger at
/// append time, never by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMove {
    pub id: MoveId,
    pub product_id: ProductId,
    pub direction: Direction,
    pub quantity: Quantity,
    pub recorded_at: DateTime<Utc>,
    pub actor: Option<UserId>,
    pub supplier: Option<SupplierId>,
}

impl Entity for StockMove {
    type Id = MoveId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A movement ready to be appended (no id, no timestamp yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStockMove {
    pub product_id: ProductId,
    pub direction: Direction,
    pub quantity: Quantity,
    pub actor: Option<UserId>,
    pub supplier: Option<SupplierId>,
}

impl NewStockMove {
    /// Zero-delta moves never reach the ledger, so quantity must be > 0.
    pub fn validate(&self) -> DomainResult<()> {
        quantity::ensure_positive("quantity", self.quantity)?;
        Ok(())
    }
}

/// Signed difference between a prior and a target on-hand quantity.
///
/// This is the whole reason the ledger stays consistent with inventory:
/// every quantity change maps to exactly one delta, and every nonzero delta
/// maps to exactly one ledger entry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Delta(Quantity);

impl Delta {
    pub fn between(prior: Quantity, target: Quantity) -> Self {
        Self(target - prior)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    pub fn signed(&self) -> Quantity {
        self.0
    }

    /// Direction and absolute quantity of the movement this delta implies,
    /// or `None` for a no-op.
    pub fn movement(&self) -> Option<(Direction, Quantity)> {
        if self.is_zero() {
            return None;
        }
        let direction = if self.0 > 0.0 {
            Direction::Entrance
        } else {
            Direction::Exit
        };
        Some((direction, self.0.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_delta_is_an_entrance() {
        let (dir, qty) = Delta::between(0.0, 2500.0).movement().unwrap();
        assert_eq!(dir, Direction::Entrance);
        assert_eq!(qty, 2500.0);
    }

    #[test]
    fn negative_delta_is_an_exit() {
        let (dir, qty) = Delta::between(2500.0, 1800.0).movement().unwrap();
        assert_eq!(dir, Direction::Exit);
        assert_eq!(qty, 700.0);
    }

    #[test]
    fn zero_delta_yields_no_movement() {
        assert_eq!(Delta::between(42.0, 42.0).movement(), None);
    }

    #[test]
    fn new_move_rejects_non_positive_quantity() {
        let m = NewStockMove {
            product_id: ProductId::new(1),
            direction: Direction::Entrance,
            quantity: 0.0,
            actor: None,
            supplier: None,
        };
        assert!(m.validate().is_err());
    }

    #[test]
    fn direction_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Direction::Entrance).unwrap(),
            "\"entrance\""
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the movement implied by a delta always carries the
            /// absolute difference, with direction matching the sign.
            #[test]
            fn movement_matches_sign_and_magnitude(
                prior in 0.0f64..1.0e6,
                target in 0.0f64..1.0e6,
            ) {
                let delta = Delta::between(prior, target);
                match delta.movement() {
                    None => prop_assert_eq!(prior, target),
                    Some((dir, qty)) => {
                        prop_assert!(qty > 0.0);
                        prop_assert_eq!(qty, (target - prior).abs());
                        if target > prior {
                            prop_assert_eq!(dir, Direction::Entrance);
                        } else {
                            prop_assert_eq!(dir, Direction::Exit);
                        }
                    }
                }
            }

            /// Property: a quantity reconciled against itself is a no-op.
            #[test]
            fn self_delta_is_noop(q in 0.0f64..1.0e6) {
                prop_assert!(Delta::between(q, q).is_zero());
            }
        }
    }
}
