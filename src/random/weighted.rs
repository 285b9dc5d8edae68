use crate::random::unit_source::UnitSource;

/// Weighted choice over a list of entries.
#[derive(Debug, Clone, Default)]
pub struct WeightedPool<T> {
    entries: Vec<(T, f32)>,
}

impl<T: Clone + PartialEq> WeightedPool<T> {
    pub fn new() -> Self {
        WeightedPool { entries: Vec::new() }
    }

    /// Non-positive or non-finite weights are ignored.
    pub fn add(&mut self, value: T, weight: f32) {
        if weight.is_finite() && weight > 0.0 {
            self.entries.push((value, weight));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_weight(&self) -> f32 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    pub fn get<R: UnitSource + ?Sized>(&self, rng: &mut R) -> Option<T> {
        let last = self.entries.last()?;
        let mut roll = rng.next_unit() * self.total_weight();
        for (value, weight) in &self.entries {
            if roll < *weight {
                return Some(value.clone());
            }
            roll -= weight;
        }
        // Rounding can leave a sliver past the final entry.
        Some(last.0.clone())
    }

    /// Draws a value and removes every entry equal to it.
    pub fn take<R: UnitSource + ?Sized>(&mut self, rng: &mut R) -> Option<T> {
        let result = self.get(rng)?;
        self.entries.retain(|(value, _)| *value != result);
        Some(result)
    }
}

impl<T: Clone + PartialEq> FromIterator<(T, f32)> for WeightedPool<T> {
    fn from_iter<I: IntoIterator<Item = (T, f32)>>(iter: I) -> Self {
        let mut pool = WeightedPool::new();
        for (value, weight) in iter {
            pool.add(value, weight);
        }
        pool
    }
}
