use std::time::Instant;

use anyhow::{Context, bail};
use clap::Parser;
use log::info;
use rug::Integer;
use sqrtmod_core::{BatchSqrt, BatchSqrtEngine, EngineConfig, FieldPrime, PrimeField};
use sqrtmod_sampling::{Source, new_seed, seed_from_u64};

/// Benchmarks batch modular square roots over a 62-bit prime field.
#[derive(Parser, Debug)]
#[command(name = "sqrtmod", version, about)]
struct Cli {
    /// Field modulus: `quicksilver`, `virgo`, or an odd prime (decimal or 0x-hex)
    #[arg(long, default_value_t = FieldPrime::Quicksilver)]
    prime: FieldPrime,

    /// Batch size as a power of two
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(0..=30))]
    log_len: u32,

    /// Worker threads [default: logical cores]
    #[arg(long)]
    workers: Option<usize>,

    /// Seed for the input vector [default: random]
    #[arg(long)]
    seed: Option<u64>,

    /// Check every output after the run
    #[arg(long)]
    verify: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli: Cli = Cli::parse();

    let config: EngineConfig = match cli.workers {
        Some(workers) => EngineConfig::with_workers(workers),
        None => EngineConfig::default(),
    };
    let engine: BatchSqrtEngine = BatchSqrtEngine::new(config).context("creating the worker pool")?;
    println!("Number of available threads: {}", engine.workers());

    let field: PrimeField = match &cli.prime {
        FieldPrime::Custom(p) => PrimeField::new_checked(p.clone()).with_context(|| format!("invalid --prime {}", cli.prime))?,
        named => PrimeField::from(named.clone()),
    };
    info!("p = {}", field.modulus());
    println!("The first QNR found is: {}", field.qnr());

    let len: usize = 1 << cli.log_len;
    println!("Benchmark {} square roots", len);

    let seed: [u8; 32] = cli.seed.map(seed_from_u64).unwrap_or_else(new_seed);
    let mut source: Source = Source::new(seed);
    let input: Vec<Integer> = source.uniform_below_vec(field.modulus(), len);

    let now: Instant = Instant::now();
    let out: BatchSqrt = engine.run(&field, &input)?;
    let elapsed: f64 = now.elapsed().as_secs_f64();
    println!("Total time taken: {:.3} seconds for {} entries", elapsed, len);
    info!("{} of {} entries are quadratic residues", out.residues(), out.len());

    if cli.verify {
        if let Some(index) = out.verify(&field, &input) {
            bail!("verification failed at index {}: x={} r={} is_qr={}", index, input[index], out.roots[index], out.is_qr[index]);
        }
        println!("Verified {} square roots", len);
    }

    Ok(())
}
