//! Randomized draw pool for study sessions.

use crate::types::Notecard;
use rand::Rng;

/// Working copy of a studyset's cards, consumed one uniform draw at a time.
///
/// A card leaves the pool when drawn, so no card repeats within a cycle.
/// When a draw finds the pool empty it is refilled from the snapshot first.
#[derive(Debug, Clone)]
pub struct DrawPool {
    snapshot: Vec<Notecard>,
    remaining: Vec<Notecard>,
    cycle: usize,
}

impl DrawPool {
    pub fn new(cards: Vec<Notecard>) -> Self {
        Self {
            remaining: cards.clone(),
            snapshot: cards,
            cycle: 1,
        }
    }

    /// Draw one card. Returns `None` only if the pool was built from no cards.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Notecard> {
        if self.snapshot.is_empty() {
            return None;
        }
        if self.remaining.is_empty() {
            self.remaining = self.snapshot.clone();
            self.cycle += 1;
            tracing::debug!(cycle = self.cycle, cards = self.remaining.len(), "refilled draw pool");
        }

        let idx = rng.gen_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(idx))
    }

    /// Cards not yet drawn in the current cycle.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Current cycle, starting at 1 and incremented on every refill.
    pub fn cycle(&self) -> usize {
        self.cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn cards(n: usize) -> Vec<Notecard> {
        (0..n)
            .map(|i| Notecard::new(format!("term{i}"), format!("definition{i}")))
            .collect()
    }

    #[test]
    fn empty_pool_draws_nothing() {
        let mut pool = DrawPool::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pool.draw(&mut rng).is_none());
        assert_eq!(pool.cycle(), 1);
    }

    #[test]
    fn no_repeats_within_a_cycle() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = DrawPool::new(cards(10));

        let drawn: HashSet<String> = (0..10)
            .map(|_| pool.draw(&mut rng).unwrap().term().to_string())
            .collect();

        assert_eq!(drawn.len(), 10);
        assert_eq!(pool.remaining(), 0);
        assert_eq!(pool.cycle(), 1);
    }

    #[test]
    fn refill_happens_on_the_draw_that_finds_the_pool_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = DrawPool::new(cards(3));
        for _ in 0..3 {
            pool.draw(&mut rng);
        }
        assert_eq!(pool.cycle(), 1);

        pool.draw(&mut rng).unwrap();
        assert_eq!(pool.cycle(), 2);
        assert_eq!(pool.remaining(), 2);
    }

    #[test]
    fn every_cycle_covers_every_card() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut pool = DrawPool::new(cards(4));
        for _ in 0..5 {
            let cycle: HashSet<String> = (0..4)
                .map(|_| pool.draw(&mut rng).unwrap().term().to_string())
                .collect();
            assert_eq!(cycle.len(), 4);
        }
        assert_eq!(pool.cycle(), 5);
    }

    #[test]
    fn first_draw_after_refill_may_repeat_last_card() {
        let repeated = (0..200u64).any(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut pool = DrawPool::new(cards(2));
            pool.draw(&mut rng);
            let last = pool.draw(&mut rng).unwrap();
            let next = pool.draw(&mut rng).unwrap();
            last.same_entry(&next)
        });
        assert!(repeated);
    }

    #[test]
    fn single_card_pool_repeats_every_draw() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut pool = DrawPool::new(cards(1));
        for expected_cycle in 1..=3 {
            assert_eq!(pool.draw(&mut rng).unwrap().term(), "term0");
            assert_eq!(pool.cycle(), expected_cycle);
        }
    }
}
