/// Which failures a fan-out keeps when several translations fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureReport {
    /// Keep every failure, ordered by source index.
    #[default]
    All,
    /// Keep only the failure with the lowest source index.
    First,
}

/// The configuration of a mapper
#[derive(Debug, Clone)]
pub struct Config {
    /// Which failures are kept in a [crate::MappingFailures]
    pub failure_report: FailureReport,
    /// Whether to reserve output capacity from the source's size hint
    pub reserve_from_size_hint: bool,
}

impl Config {
    /// How much capacity to reserve for a source with the given size hint
    pub fn capacity_for(&self, size_hint: (usize, Option<usize>)) -> usize {
        if !self.reserve_from_size_hint {
            return 0;
        }

        match size_hint {
            // Exact length, typically a slice or a collection iterator
            (lower, Some(upper)) if lower == upper => upper,
            // Unknown length, grow as we go
            (lower, _) => lower,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            failure_report: FailureReport::All,
            reserve_from_size_hint: true,
        }
    }
}
