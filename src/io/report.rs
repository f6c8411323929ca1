//! Plain-text and CSV rendering of computed results

use crate::analysis::comparison::ComparisonPoint;
use crate::analysis::distribution::MassPoint;
use crate::analysis::evaluation::{CalculationResult, NormalQuality};
use crate::analysis::parameters::Parameters;
use crate::analysis::simulation::SimulationEstimate;
use crate::analysis::tips::Tip;
use crate::io::error::{Result, TailError, file_system_error};
use crate::io::presets::Preset;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Distribution rows ready for rendering
pub struct DistributionTable<'a> {
    /// Threshold separating the tail
    pub k: usize,
    /// Binomial mass points
    pub points: &'a [MassPoint],
    /// Running sums P(X ≤ x), aligned with `points`
    pub cumulative: &'a [f64],
    /// Optional approximation columns, aligned with `points`
    pub comparison: Option<&'a [ComparisonPoint]>,
}

impl DistributionTable<'_> {
    fn rows(&self) -> impl Iterator<Item = (&MassPoint, f64, Option<&ComparisonPoint>)> + '_ {
        self.points.iter().enumerate().map(|(index, point)| {
            let cumulative = self.cumulative.get(index).copied().unwrap_or(0.0);
            let comparison = self.comparison.and_then(|series| series.get(index));
            (point, cumulative, comparison)
        })
    }
}

/// Write the result record as aligned text
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_result(
    out: &mut impl Write,
    params: &Parameters,
    result: &CalculationResult,
) -> Result<()> {
    writeln!(out, "P(X > {}) for X ~ Binomial({}, {})", params.k(), params.n(), params.p())?;
    writeln!(out, "  mean               {:.4}", result.mean)?;
    writeln!(out, "  std deviation      {:.4}", result.std_dev)?;
    writeln!(out, "  exact              {:.8}", result.exact)?;

    let poisson_note = if result.poisson_recommended {
        "recommended"
    } else {
        "not recommended"
    };
    writeln!(
        out,
        "  poisson            {:.8}  (error {:.2}%, {poisson_note})",
        result.poisson, result.poisson_error
    )?;

    if result.normal_quality == NormalQuality::Unavailable {
        writeln!(out, "  normal             n/a  (degenerate distribution)")?;
    } else {
        writeln!(
            out,
            "  normal             {:.8}  (error {:.2}%, {})",
            result.normal, result.normal_error, result.normal_quality
        )?;
    }
    Ok(())
}

/// Write interpretation hints as a bullet list
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_tips(out: &mut impl Write, tips: &[Tip]) -> Result<()> {
    if tips.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "Tips:")?;
    for tip in tips {
        writeln!(out, "  - {tip}")?;
    }
    Ok(())
}

/// Write the distribution as an aligned text table, marking tail rows
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_distribution_table(out: &mut impl Write, table: &DistributionTable<'_>) -> Result<()> {
    write!(out, "{:>7}  {:>12}  {:>12}", "x", "P(X=x)", "P(X<=x)")?;
    if table.comparison.is_some() {
        write!(out, "  {:>12}  {:>12}", "poisson", "normal")?;
    }
    writeln!(out)?;

    for (point, cumulative, comparison) in table.rows() {
        write!(
            out,
            "{:>7}  {:>12.8}  {:>12.8}",
            point.x, point.probability, cumulative
        )?;
        if let Some(values) = comparison {
            write!(out, "  {:>12.8}  {:>12.8}", values.poisson, values.normal)?;
        }
        if point.in_tail(table.k) {
            write!(out, "  *")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the distribution as CSV with a header row
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_distribution_csv(out: &mut impl Write, table: &DistributionTable<'_>) -> Result<()> {
    write!(out, "x,probability,cumulative,in_tail")?;
    if table.comparison.is_some() {
        write!(out, ",poisson,normal")?;
    }
    writeln!(out)?;

    for (point, cumulative, comparison) in table.rows() {
        write!(
            out,
            "{},{},{},{}",
            point.x,
            point.probability,
            cumulative,
            point.in_tail(table.k)
        )?;
        if let Some(values) = comparison {
            write!(out, ",{},{}", values.poisson, values.normal)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the distribution CSV to a file
///
/// # Errors
///
/// Returns a file system error if the file cannot be created or written
pub fn export_distribution_csv(path: &Path, table: &DistributionTable<'_>) -> Result<()> {
    let file = File::create(path).map_err(|e| file_system_error(path, "create", e))?;
    let mut writer = BufWriter::new(file);

    write_distribution_csv(&mut writer, table).map_err(|e| match e {
        TailError::Output(source) => file_system_error(path, "write", source),
        other => other,
    })?;
    writer
        .flush()
        .map_err(|e| file_system_error(path, "flush", e))
}

/// Write the preset catalogue
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_presets(out: &mut impl Write, presets: &[Preset]) -> Result<()> {
    for preset in presets {
        writeln!(
            out,
            "{:<16} n = {:<5} p = {:<6} k = {:<3} {}: {}",
            preset.name, preset.n, preset.p, preset.k, preset.title, preset.description
        )?;
    }
    Ok(())
}

/// Write a simulation estimate next to the exact value
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_simulation(
    out: &mut impl Write,
    params: &Parameters,
    estimate: &SimulationEstimate,
    exact: f64,
) -> Result<()> {
    writeln!(out, "Simulated P(X > k) for {params}")?;
    writeln!(out, "  experiments        {}", estimate.trials)?;
    writeln!(out, "  exceedances        {}", estimate.exceedances)?;
    writeln!(
        out,
        "  estimate           {:.6} ± {:.6}",
        estimate.probability, estimate.standard_error
    )?;
    writeln!(out, "  exact              {exact:.6}")?;
    Ok(())
}
