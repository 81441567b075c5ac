/// Keeps the `capacity` highest-valued items seen so far.
///
/// Once full, a candidate is admitted only if its value is strictly greater than the
/// lowest kept value, so on a tie the item that arrived first keeps its place. Kept
/// items with equal values stay in arrival order.
#[derive(Debug, Clone)]
pub struct Ranking<T, V = usize> {
    capacity: usize,
    items: Vec<(T, V)>,
    min_value: Option<V>,
}

impl<T, V: Ord + Copy> Ranking<T, V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::new(),
            min_value: None,
        }
    }

    /// Returns whether the item made it into the ranking.
    pub fn add(&mut self, item: T, value: V) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if let Some(min_value) = self.min_value {
            if value <= min_value {
                return false;
            }
        }

        self.items.push((item, value));
        self.items.sort_by(|a, b| b.1.cmp(&a.1));
        self.items.truncate(self.capacity);

        // only a full ranking has an entry barrier
        self.min_value = if self.items.len() == self.capacity {
            self.items.last().map(|(_, value)| *value)
        } else {
            None
        };
        true
    }

    /// Kept items, highest value first.
    pub fn get(&self) -> &[(T, V)] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<(T, V)> {
        self.items
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
