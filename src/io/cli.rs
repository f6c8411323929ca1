//! Command-line interface for evaluating binomial tail probabilities

use crate::analysis::comparison::comparison_series;
use crate::analysis::distribution::{cumulative_mass, distribution_mass};
use crate::analysis::evaluation::evaluate;
use crate::analysis::parameters::Parameters;
use crate::analysis::simulation::MonteCarlo;
use crate::analysis::tips::smart_tips;
use crate::io::configuration::{
    DEFAULT_K, DEFAULT_MAX_BARS, DEFAULT_N, DEFAULT_P, DEFAULT_SEED, DEFAULT_SIMULATION_TRIALS,
    SIMULATION_BATCH_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::presets::{PRESETS, find_preset};
use crate::io::progress::SimulationProgress;
use crate::io::report::{
    DistributionTable, export_distribution_csv, write_distribution_table, write_presets,
    write_result, write_simulation, write_tips,
};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "binotail")]
#[command(
    author,
    version,
    about = "Binomial tail probabilities P(X > k) with Poisson and Normal approximations"
)]
/// Command-line arguments for the tail probability calculator
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Compute the exact tail and both approximations
    Eval {
        /// Distribution parameters
        #[command(flatten)]
        parameters: ParameterArgs,

        /// Omit interpretation tips
        #[arg(long)]
        no_tips: bool,
    },

    /// Print the probability mass function around the threshold
    Dist {
        /// Distribution parameters
        #[command(flatten)]
        parameters: ParameterArgs,

        /// Maximum x shown
        #[arg(short, long, default_value_t = DEFAULT_MAX_BARS)]
        max_bars: usize,

        /// Add Poisson and Normal comparison columns
        #[arg(short, long)]
        compare: bool,

        /// Write CSV to this file instead of printing a table
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List the preset scenarios
    Presets,

    /// Estimate the tail probability by Monte Carlo simulation
    Simulate {
        /// Distribution parameters
        #[command(flatten)]
        parameters: ParameterArgs,

        /// Number of simulated experiments
        #[arg(short, long, default_value_t = DEFAULT_SIMULATION_TRIALS)]
        trials: usize,

        /// Random seed for reproducible simulation
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },
}

/// Parameter selection shared by the computing commands
#[derive(Args, Debug, Clone, Default)]
pub struct ParameterArgs {
    /// Number of trials
    #[arg(short = 'n', long = "number", value_name = "N")]
    pub n: Option<usize>,

    /// Success probability of each trial
    #[arg(short = 'p', long = "probability", value_name = "P")]
    pub p: Option<f64>,

    /// Threshold the count must exceed
    #[arg(short = 'k', long = "threshold", value_name = "K")]
    pub k: Option<usize>,

    /// Start from a named preset; explicit values override it
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,
}

impl ParameterArgs {
    /// Resolve the preset and overrides into validated parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the preset is unknown or the resulting triple is
    /// out of range
    pub fn resolve(&self) -> Result<Parameters> {
        let (base_n, base_p, base_k) = match &self.preset {
            Some(name) => {
                let preset = find_preset(name)?;
                (preset.n, preset.p, preset.k)
            }
            None => (DEFAULT_N, DEFAULT_P, DEFAULT_K),
        };

        Parameters::new(
            self.n.unwrap_or(base_n),
            self.p.unwrap_or(base_p),
            self.k.unwrap_or(base_k),
        )
    }
}

/// Runs a parsed command, writing user-facing output to `out`
pub struct CommandRunner<W: Write> {
    out: W,
}

impl<W: Write> CommandRunner<W> {
    /// Create a runner writing to the given sink
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the output sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Execute one command
    ///
    /// # Errors
    ///
    /// Returns an error if parameters fail validation, the simulation cannot
    /// run, or output cannot be written
    pub fn run(&mut self, command: &Command) -> Result<()> {
        match command {
            Command::Eval {
                parameters,
                no_tips,
            } => self.eval(parameters, *no_tips),
            Command::Dist {
                parameters,
                max_bars,
                compare,
                output,
            } => self.dist(parameters, *max_bars, *compare, output.as_deref()),
            Command::Presets => write_presets(&mut self.out, &PRESETS),
            Command::Simulate {
                parameters,
                trials,
                seed,
                quiet,
            } => self.simulate(parameters, *trials, *seed, *quiet),
        }
    }

    fn eval(&mut self, parameters: &ParameterArgs, no_tips: bool) -> Result<()> {
        let params = parameters.resolve()?;
        let result = evaluate(&params);

        write_result(&mut self.out, &params, &result)?;
        if !no_tips {
            write_tips(&mut self.out, &smart_tips(&params, result.exact))?;
        }
        Ok(())
    }

    fn dist(
        &mut self,
        parameters: &ParameterArgs,
        max_bars: usize,
        compare: bool,
        output: Option<&Path>,
    ) -> Result<()> {
        if max_bars == 0 {
            return Err(invalid_parameter(
                "max_bars",
                &max_bars,
                &"at least one bar must be shown",
            ));
        }

        let params = parameters.resolve()?;
        let points = distribution_mass(params.n(), params.p(), params.k(), max_bars);
        let cumulative = cumulative_mass(&points);
        let comparison = compare.then(|| comparison_series(&params, points.len()));

        let table = DistributionTable {
            k: params.k(),
            points: &points,
            cumulative: &cumulative,
            comparison: comparison.as_deref(),
        };

        match output {
            Some(path) => {
                export_distribution_csv(path, &table)?;
                tracing::info!(path = %path.display(), rows = points.len(), "wrote distribution");
                Ok(())
            }
            None => write_distribution_table(&mut self.out, &table),
        }
    }

    fn simulate(
        &mut self,
        parameters: &ParameterArgs,
        trials: usize,
        seed: u64,
        quiet: bool,
    ) -> Result<()> {
        let params = parameters.resolve()?;
        let mut simulator = MonteCarlo::new(params, seed)?;
        let progress = if quiet {
            SimulationProgress::hidden(trials)
        } else {
            SimulationProgress::new(trials)
        };

        // A zero-sized first batch is rejected by the simulator
        let mut done = 0;
        loop {
            let batch = (trials - done).min(SIMULATION_BATCH_SIZE);
            simulator.run(batch)?;
            done += batch;
            progress.update(&simulator.estimate());
            if done >= trials {
                break;
            }
        }
        progress.finish();

        let exact = evaluate(&params).exact;
        write_simulation(&mut self.out, &params, &simulator.estimate(), exact)
    }
}
