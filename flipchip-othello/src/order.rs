//! The order in which the computer examines candidate cells.
//!
//! A [`PlayOrder`] never changes which moves are legal. It only decides which of several
//! equally-scored moves the computer picks, so games differ from one another.

use crate::{Cell, OthelloError, NUM_SPACES};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A permutation of all 64 cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayOrder([Cell; NUM_SPACES]);

impl PlayOrder {
    /// Visit cells in index order, from A1 to H8.
    pub fn identity() -> Self {
        let mut cells = [Cell::new_unchecked(0); NUM_SPACES];
        for (slot, cell) in cells.iter_mut().zip(Cell::all()) {
            *slot = cell;
        }
        Self(cells)
    }

    /// A uniformly random permutation.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut order = Self::identity();
        order.0.shuffle(rng);
        order
    }

    /// Build an order from raw indices, which must name every cell exactly once.
    pub fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Result<Self, OthelloError> {
        let mut cells = [Cell::new_unchecked(0); NUM_SPACES];
        let mut seen = [false; NUM_SPACES];
        let mut len = 0;

        for index in indices {
            let cell = Cell::new(index)?;
            if len == NUM_SPACES || seen[cell.index()] {
                return Err(OthelloError::InvalidPlayOrder);
            }
            seen[cell.index()] = true;
            cells[len] = cell;
            len += 1;
        }

        if len != NUM_SPACES {
            return Err(OthelloError::InvalidPlayOrder);
        }
        Ok(Self(cells))
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Cell] {
        &self.0
    }
}

impl Default for PlayOrder {
    fn default() -> Self {
        Self::identity()
    }
}

/// Supplies a fresh [`PlayOrder`] at the start of every game.
pub trait OrderSource {
    fn next_order(&mut self) -> PlayOrder;
}

/// Any closure producing orders can act as a source.
impl<F: FnMut() -> PlayOrder> OrderSource for F {
    fn next_order(&mut self) -> PlayOrder {
        self()
    }
}

/// Shuffles a new order for each game from a seedable RNG.
#[derive(Clone, Debug)]
pub struct RandomOrder {
    rng: StdRng,
}

impl RandomOrder {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A reproducible sequence of orders.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOrder {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl OrderSource for RandomOrder {
    fn next_order(&mut self) -> PlayOrder {
        PlayOrder::shuffled(&mut self.rng)
    }
}

/// Hands out the same order for every game.
#[derive(Clone, Debug, Default)]
pub struct FixedOrder(pub PlayOrder);

impl OrderSource for FixedOrder {
    fn next_order(&mut self) -> PlayOrder {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(order: &PlayOrder) -> bool {
        let mut indices: Vec<usize> = order.iter().map(Cell::index).collect();
        indices.sort_unstable();
        indices == (0..NUM_SPACES).collect::<Vec<_>>()
    }

    #[test]
    fn identity_visits_in_index_order() {
        let order = PlayOrder::identity();
        assert!(order.iter().map(Cell::index).eq(0..NUM_SPACES));
    }

    #[test]
    fn shuffled_is_a_permutation() {
        let mut source = RandomOrder::seeded(7);
        for _ in 0..20 {
            assert!(is_permutation(&source.next_order()));
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = RandomOrder::seeded(42);
        let mut b = RandomOrder::seeded(42);
        assert_eq!(a.next_order(), b.next_order());
        assert_eq!(a.next_order(), b.next_order());
    }

    #[test]
    fn from_indices_validates() {
        assert_eq!(
            PlayOrder::from_indices((0..NUM_SPACES).rev()).map(|o| o.as_slice()[0].index()),
            Ok(63)
        );
        assert_eq!(
            PlayOrder::from_indices(0..63),
            Err(OthelloError::InvalidPlayOrder)
        );
        assert_eq!(
            PlayOrder::from_indices((0..63).chain(Some(0))),
            Err(OthelloError::InvalidPlayOrder)
        );
        assert_eq!(
            PlayOrder::from_indices((0..NUM_SPACES).chain(Some(1))),
            Err(OthelloError::InvalidPlayOrder)
        );
        assert_eq!(
            PlayOrder::from_indices((0..63).chain(Some(64))),
            Err(OthelloError::OutOfRange { index: 64 })
        );
    }

    #[test]
    fn closures_are_sources() {
        let mut calls = 0;
        let mut source = || {
            calls += 1;
            PlayOrder::identity()
        };
        assert_eq!(source.next_order(), PlayOrder::identity());
        assert_eq!(source.next_order(), PlayOrder::identity());
        drop(source);
        assert_eq!(calls, 2);
    }
}
