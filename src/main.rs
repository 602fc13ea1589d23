use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use eyre::Result;
use rand::{rngs::StdRng, SeedableRng};
use tt_counter::{
    config::{DEFAULT_ARTIFACTS_DIR, DEFAULT_RESET_CYCLES},
    create_counter_runtime, random_stimulus, run_project_sequence, CounterTestbench, Harness,
    HarnessConfig, Lockstep, ModelDut,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// Software reference model
    Model,
    /// Verilated RTL
    Rtl,
}

/// Drives the Tiny Tapeout counter through its verification sequence.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Device to run the sequence against.
    #[arg(short, long, value_enum, default_value_t = Backend::Model)]
    backend: Backend,
    /// Clock cycles to hold reset at the start of the sequence.
    #[arg(long, default_value_t = DEFAULT_RESET_CYCLES)]
    reset_cycles: u32,
    /// Verilator build directory.
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    artifacts: Utf8PathBuf,
    /// Also compare RTL against the model for this many random cycles.
    #[arg(long)]
    lockstep: Option<usize>,
    /// Seed for the lockstep stimulus.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = HarnessConfig::default()
        .with_reset_cycles(args.reset_cycles)
        .with_artifacts_dir(args.artifacts.clone());

    match args.backend {
        Backend::Model => {
            println!("🚀 Running counter sequence on the reference model...");
            let mut harness = Harness::new(ModelDut::new(), config);
            run_project_sequence(&mut harness)?;
            if args.lockstep.is_some() {
                log::warn!("--lockstep needs the rtl backend, skipping");
            }
        }
        Backend::Rtl => {
            let artifacts = config.artifacts_dir.clone();
            println!("🚀 Building counter RTL in {artifacts}...");
            let runtime = create_counter_runtime(&artifacts)?;
            let mut tb = runtime
                .create_model_simple::<CounterTestbench>()
                .map_err(|e| eyre::eyre!("Failed to create counter model: {:?}", e))?;
            println!("✅ Counter model created!");

            let mut harness = Harness::new(&mut tb, config);
            run_project_sequence(&mut harness)?;

            if let Some(cycles) = args.lockstep {
                println!("🔁 Lockstep against the model for {cycles} cycles...");
                let mut rng = StdRng::seed_from_u64(args.seed);
                let stimulus = random_stimulus(&mut rng, cycles, 16);
                let mut lockstep = Lockstep::new(&mut tb, ModelDut::new());
                lockstep.run(&stimulus)?;
            }
        }
    }

    println!("🎉 All checks passed!");
    Ok(())
}
