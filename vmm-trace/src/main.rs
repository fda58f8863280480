mod file_backing_store;
mod report;
mod trace;

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;
use vmm::{
    stats::format_rate, BackingStore, FifoPageReplacer, LruPageReplacer, Mmu, MmuConfig,
    PageReplacer, Statistics, TlbMode,
};

use crate::{file_backing_store::FileBackingStore, report::CsvReport};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Policy {
    Lru,
    Fifo,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum TlbModeArg {
    /// First insert goes to slot 0, evicted pages leave the TLB.
    Corrected,
    /// Reproduces reference traces: slot 0 skipped until wrap, stale entries kept.
    Reference,
}

impl From<TlbModeArg> for TlbMode {
    fn from(arg: TlbModeArg) -> Self {
        match arg {
            TlbModeArg::Corrected => TlbMode::Corrected,
            TlbModeArg::Reference => TlbMode::Reference,
        }
    }
}

/// Translates a trace of logical addresses through a simulated TLB, page
/// table and frame pool, loading pages from a backing store on demand.
#[derive(Parser, Debug)]
#[command(name = "vmm-trace", version)]
struct Args {
    /// Number of physical frames (1..=256).
    frames: usize,
    /// Backing store file, page `p` at byte `p * 256`.
    backing_store: PathBuf,
    /// Trace file, one logical address per line.
    trace: PathBuf,
    /// Result CSV. Defaults to `output<FRAMES>.csv`.
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Policy::Lru)]
    policy: Policy,
    #[arg(long, value_enum, default_value_t = TlbModeArg::Corrected)]
    tlb_mode: TlbModeArg,
}

impl Args {
    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("output{}.csv", self.frames)))
    }
}

fn translate_all<R, S, W>(
    mut mmu: Mmu<R, S>,
    addresses: &[u32],
    report: &mut CsvReport<W>,
) -> anyhow::Result<Statistics>
where
    R: PageReplacer,
    S: BackingStore,
    W: Write,
{
    mmu.run(addresses.iter().copied(), |translation| {
        report
            .write_record(translation)
            .context("failed to write result record")
    })
}

fn simulate(args: &Args) -> anyhow::Result<Statistics> {
    let config = MmuConfig::new(args.frames).with_tlb_mode(args.tlb_mode.into());
    config.validate()?;

    let trace_file = File::open(&args.trace)
        .with_context(|| format!("failed to open trace {}", args.trace.display()))?;
    let addresses = trace::read_trace(BufReader::new(trace_file))
        .with_context(|| format!("failed to parse trace {}", args.trace.display()))?;

    let store = FileBackingStore::open(&args.backing_store).with_context(|| {
        format!(
            "failed to open backing store {}",
            args.backing_store.display()
        )
    })?;

    let output_path = args.output_path();
    let output = File::create(&output_path)
        .with_context(|| format!("failed to create {}", output_path.display()))?;
    let mut report = CsvReport::new(BufWriter::new(output));

    info!(
        "vmm-trace: {} addresses, {} frames, policy {:?}, tlb {:?}",
        addresses.len(),
        args.frames,
        args.policy,
        args.tlb_mode
    );

    let stats = match args.policy {
        Policy::Lru => translate_all(
            Mmu::new(config, LruPageReplacer::new(), store)?,
            &addresses,
            &mut report,
        )?,
        Policy::Fifo => translate_all(
            Mmu::new(config, FifoPageReplacer::new(), store)?,
            &addresses,
            &mut report,
        )?,
    };

    report
        .finish(&stats)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    info!(
        "vmm-trace: page faults {} ({}), tlb hits {} ({}), wrote {}",
        stats.page_faults,
        format_rate(stats.page_faults, stats.total_accesses),
        stats.tlb_hits,
        format_rate(stats.tlb_hits, stats.total_accesses),
        output_path.display()
    );

    Ok(stats)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let stats = simulate(&args)?;

    println!(
        "Page Faults Rate: {}",
        format_rate(stats.page_faults, stats.total_accesses)
    );
    println!(
        "TLB Hits Rate: {}",
        format_rate(stats.tlb_hits, stats.total_accesses)
    );

    Ok(())
}
