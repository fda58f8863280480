/// Counters accumulated while translating a trace.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Statistics {
    pub total_accesses: u64,
    pub tlb_hits: u64,
    pub page_table_hits: u64,
    pub page_faults: u64,
}

impl Statistics {
    /// Percentage of accesses that faulted; 0 for an empty run.
    pub fn page_fault_rate(&self) -> f64 {
        rate(self.page_faults, self.total_accesses)
    }

    pub fn tlb_hit_rate(&self) -> f64 {
        rate(self.tlb_hits, self.total_accesses)
    }
}

fn rate(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }

    count as f64 / total as f64 * 100.0
}

/// Formats `count / total` as a percentage with two decimals, e.g. `75.00%`.
pub fn format_rate(count: u64, total: u64) -> String {
    format!("{:.2}%", rate(count, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_rate(3, 4), "75.00%");
        assert_eq!(format_rate(1, 3), "33.33%");
        assert_eq!(format_rate(2, 3), "66.67%");
        assert_eq!(format_rate(0, 0), "0.00%");
    }

    #[test]
    fn rates_follow_counters() {
        let stats = Statistics {
            total_accesses: 4,
            tlb_hits: 1,
            page_table_hits: 0,
            page_faults: 3,
        };

        assert_eq!(stats.page_fault_rate(), 75.0);
        assert_eq!(stats.tlb_hit_rate(), 25.0);
    }
}
