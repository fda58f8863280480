use std::io::Write;

use vmm::{stats::format_rate, Statistics, Translation};

/// Writes `logical,physical,value` lines followed by the two rate lines.
pub struct CsvReport<W: Write> {
    out: W,
}

impl<W: Write> CsvReport<W> {
    pub fn new(out: W) -> Self {
        CsvReport { out }
    }

    pub fn write_record(&mut self, translation: &Translation) -> std::io::Result<()> {
        writeln!(
            self.out,
            "{},{},{}",
            translation.logical, translation.physical, translation.value
        )
    }

    pub fn finish(mut self, stats: &Statistics) -> std::io::Result<W> {
        writeln!(
            self.out,
            "Page Faults Rate, {},",
            format_rate(stats.page_faults, stats.total_accesses)
        )?;
        write!(
            self.out,
            "TLB Hits Rate, {},",
            format_rate(stats.tlb_hits, stats.total_accesses)
        )?;
        self.out.flush()?;

        Ok(self.out)
    }
}
