//! Monte Carlo cross-check of the exact tail probability

use crate::analysis::parameters::Parameters;
use crate::io::error::{Result, computation_error, invalid_parameter};
use rand::distr::{Bernoulli, Distribution};
use rand::{SeedableRng, rngs::StdRng};

/// Empirical estimate of P(X > k) after a number of simulated experiments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationEstimate {
    /// Experiments simulated so far
    pub trials: usize,
    /// Experiments whose success count exceeded k
    pub exceedances: usize,
    /// Observed fraction of exceedances
    pub probability: f64,
    /// Binomial standard error of the observed fraction
    pub standard_error: f64,
}

/// Seeded simulator repeating the n-trial experiment
pub struct MonteCarlo {
    params: Parameters,
    trial: Bernoulli,
    rng: StdRng,
    trials: usize,
    exceedances: usize,
}

impl MonteCarlo {
    /// Create a simulator for the given parameters and seed
    ///
    /// # Errors
    ///
    /// Returns an error if the success probability cannot parameterise a
    /// Bernoulli trial
    pub fn new(params: Parameters, seed: u64) -> Result<Self> {
        let trial = Bernoulli::new(params.p())
            .map_err(|e| computation_error("bernoulli trial", &e))?;

        Ok(Self {
            params,
            trial,
            rng: StdRng::seed_from_u64(seed),
            trials: 0,
            exceedances: 0,
        })
    }

    /// Simulate `experiments` more experiments and fold them into the estimate
    ///
    /// # Errors
    ///
    /// Returns an error if `experiments` is zero
    pub fn run(&mut self, experiments: usize) -> Result<()> {
        if experiments == 0 {
            return Err(invalid_parameter(
                "trials",
                &experiments,
                &"at least one experiment must be simulated",
            ));
        }

        let (n, k) = (self.params.n(), self.params.k());
        let trial = self.trial;
        for _ in 0..experiments {
            let successes = (0..n).filter(|_| trial.sample(&mut self.rng)).count();
            if successes > k {
                self.exceedances += 1;
            }
        }
        self.trials += experiments;

        tracing::debug!(
            trials = self.trials,
            exceedances = self.exceedances,
            "simulation batch complete"
        );
        Ok(())
    }

    /// Current estimate; all zeros before the first run
    pub fn estimate(&self) -> SimulationEstimate {
        if self.trials == 0 {
            return SimulationEstimate {
                trials: 0,
                exceedances: 0,
                probability: 0.0,
                standard_error: 0.0,
            };
        }

        let count = self.trials as f64;
        let probability = self.exceedances as f64 / count;
        SimulationEstimate {
            trials: self.trials,
            exceedances: self.exceedances,
            probability,
            standard_error: (probability * (1.0 - probability) / count).sqrt(),
        }
    }

    /// Parameters being simulated
    pub const fn parameters(&self) -> &Parameters {
        &self.params
    }
}
