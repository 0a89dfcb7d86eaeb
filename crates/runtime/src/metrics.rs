use std::collections::BTreeMap;

/// Deterministic counter aggregation.
///
/// Counters must not depend on wall-clock time or unordered iteration; the
/// sorted map keeps snapshots stable. The terrain classifier reports its
/// pixel reads and cache hits here, which is also how cache behavior is
/// asserted in tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Metrics {
    counters: BTreeMap<String, u64>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.counters.clear();
    }

    pub fn counter(&self, name: &str) -> u64 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    pub fn inc_counter(&mut self, name: impl Into<String>, by: u64) {
        let name = name.into();
        *self.counters.entry(name).or_insert(0) += by;
    }

    /// Returns a stable, sorted snapshot suitable for logs/debug output.
    pub fn snapshot(&self) -> Vec<(String, u64)> {
        self.counters.iter().map(|(k, v)| (k.clone(), *v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Metrics;

    #[test]
    fn counters_accumulate() {
        let mut m = Metrics::new();
        m.inc_counter("a", 1);
        m.inc_counter("a", 2);
        assert_eq!(m.counter("a"), 3);
        assert_eq!(m.counter("missing"), 0);
    }

    #[test]
    fn snapshot_is_stably_sorted() {
        let mut m = Metrics::new();
        m.inc_counter("b", 1);
        m.inc_counter("a", 1);
        assert_eq!(
            m.snapshot(),
            vec![("a".to_string(), 1), ("b".to_string(), 1)]
        );
    }
}
