use crate::types::ItemId;
use std::time::SystemTime;

/// Pseudo-random numeric id generator, seeded from the clock and stepped
/// with an LCG per draw. Draws cover the full u32 range and are retried
/// against the ids currently in use, so a fresh id never collides within
/// its collection.
#[derive(Debug)]
pub struct IdGenerator {
    state: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        // Avoid a zero seed.
        IdGenerator { state: seed | 1 }
    }

    fn next_raw(&mut self) -> u64 {
        // Knuth's MMIX multiplier.
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 32
    }

    /// Draw a fresh numeric id that `in_use` rejects no draw for.
    pub fn fresh<F>(&mut self, in_use: F) -> ItemId
    where
        F: Fn(&ItemId) -> bool,
    {
        loop {
            let candidate = ItemId::Num(self.next_raw());
            if !in_use(&candidate) {
                return candidate;
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fresh_skips_ids_in_use() {
        let mut gen = IdGenerator::new();
        let mut taken = HashSet::new();
        for _ in 0..100 {
            let id = gen.fresh(|candidate| taken.contains(candidate));
            assert!(taken.insert(id));
        }
        assert_eq!(taken.len(), 100);
    }

    #[test]
    fn test_fresh_ids_are_numeric() {
        let mut gen = IdGenerator::new();
        match gen.fresh(|_| false) {
            ItemId::Num(_) => {}
            ItemId::Text(s) => panic!("expected numeric id, got {:?}", s),
        }
    }
}
