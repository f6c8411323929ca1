//! Ready-made parameter scenarios

use crate::analysis::parameters::Parameters;
use crate::io::error::{Result, invalid_parameter};

/// A named real-world scenario with its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Identifier used on the command line
    pub name: &'static str,
    /// Short human-readable title
    pub title: &'static str,
    /// What the tail probability means in this scenario
    pub description: &'static str,
    /// Number of trials
    pub n: usize,
    /// Success probability
    pub p: f64,
    /// Threshold
    pub k: usize,
}

impl Preset {
    /// Validated parameters of this scenario
    ///
    /// # Errors
    ///
    /// Returns an error if the preset table holds an out-of-range triple
    pub fn parameters(&self) -> Result<Parameters> {
        Parameters::new(self.n, self.p, self.k)
    }
}

/// All built-in scenarios
pub const PRESETS: [Preset; 9] = [
    Preset {
        name: "quality-control",
        title: "Quality control",
        description: "More than 5 defective parts in a batch of 100",
        n: 100,
        p: 0.02,
        k: 5,
    },
    Preset {
        name: "football",
        title: "Football",
        description: "More than 8 goals from 20 shots",
        n: 20,
        p: 0.3,
        k: 8,
    },
    Preset {
        name: "exams",
        title: "Exams",
        description: "More than 40 of 50 students passing",
        n: 50,
        p: 0.85,
        k: 40,
    },
    Preset {
        name: "software-bugs",
        title: "Software bugs",
        description: "More than 3 bugs in 1000 lines of code",
        n: 1000,
        p: 0.001,
        k: 3,
    },
    Preset {
        name: "epidemiology",
        title: "Epidemiology",
        description: "More than 2 positive cases in 500 tests",
        n: 500,
        p: 0.002,
        k: 2,
    },
    Preset {
        name: "rare-events",
        title: "Rare events",
        description: "More than 15 successes in 200 attempts",
        n: 200,
        p: 0.05,
        k: 15,
    },
    Preset {
        name: "free-throws",
        title: "Free throws",
        description: "More than 5 baskets from 30 free throws",
        n: 30,
        p: 0.1,
        k: 5,
    },
    Preset {
        name: "on-time-flights",
        title: "On-time flights",
        description: "More than 90 of 100 flights on time",
        n: 100,
        p: 0.95,
        k: 90,
    },
    Preset {
        name: "lottery",
        title: "Lottery",
        description: "More than 12 numbers drawn out of 60",
        n: 60,
        p: 0.15,
        k: 12,
    },
];

/// Look up a preset by name, ignoring case
///
/// # Errors
///
/// Returns an invalid parameter error naming the known presets when no
/// scenario matches
pub fn find_preset(name: &str) -> Result<&'static Preset> {
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            let known = PRESETS
                .iter()
                .map(|preset| preset.name)
                .collect::<Vec<_>>()
                .join(", ");
            invalid_parameter("preset", &name, &format!("unknown preset, expected one of: {known}"))
        })
}
