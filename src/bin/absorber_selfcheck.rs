//! Absorber self-check.
//!
//! Builds small flowsheets around an [`Absorber`], exercises its connection
//! limits and its 30/70 split, and prints one pass/fail line per check.
//!
//! Exits with status 1 if any check fails. Set `RUST_LOG=debug` to see the
//! absorber's own log output.

use std::process::ExitCode;

use anyhow::{Context, Result};
use twine_flowsheet::{
    models::separation::Absorber,
    support::flowsheet::{Device, DeviceError, StreamArena, StreamId},
};
use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};

/// Settings shared by every check.
#[derive(Debug, Clone, Copy)]
struct SelfCheckConfig {
    /// Largest acceptable difference between expected and computed flows.
    tolerance: MassRate,
}

impl Default for SelfCheckConfig {
    fn default() -> Self {
        Self {
            tolerance: MassRate::new::<kilogram_per_second>(0.01),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Verdict {
    Passed,
    Failed(String),
}

struct Check {
    title: &'static str,
    run: fn(&SelfCheckConfig) -> Result<Verdict>,
}

const CHECKS: [Check; 4] = [
    Check {
        title: "Too Many Input Streams",
        run: too_many_inputs,
    },
    Check {
        title: "Too Many Output Streams",
        run: too_many_outputs,
    },
    Check {
        title: "Input-Output Mass Balance",
        run: mass_balance,
    },
    Check {
        title: "Output Mass Distribution (30%/70%)",
        run: output_distribution,
    },
];

fn main() -> ExitCode {
    env_logger::init();

    let config = SelfCheckConfig::default();
    let mut failures = 0;

    for (number, check) in (1..).zip(CHECKS.iter()) {
        println!("\nTest {number}: {}", check.title);
        match (check.run)(&config) {
            Ok(Verdict::Passed) => println!("Test {number} passed"),
            Ok(Verdict::Failed(reason)) => {
                failures += 1;
                println!("Test {number} failed: {reason}");
            }
            Err(err) => {
                failures += 1;
                println!("Test {number} failed: {err:#}");
            }
        }
    }

    log::info!("{} of {} checks failed", failures, CHECKS.len());

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn too_many_inputs(_config: &SelfCheckConfig) -> Result<Verdict> {
    let mut streams = StreamArena::new();
    let mut absorber = Absorber::new();

    absorber.add_input(streams.create()).context("connecting input 1")?;
    absorber.add_input(streams.create()).context("connecting input 2")?;

    Ok(match absorber.add_input(streams.create()) {
        Ok(()) => Verdict::Failed("third input was accepted".into()),
        Err(DeviceError::InputCapacityExceeded { .. }) => Verdict::Passed,
        Err(other) => Verdict::Failed(other.to_string()),
    })
}

fn too_many_outputs(_config: &SelfCheckConfig) -> Result<Verdict> {
    let mut streams = StreamArena::new();
    let mut absorber = Absorber::new();

    absorber.add_output(streams.create()).context("connecting output 1")?;
    absorber.add_output(streams.create()).context("connecting output 2")?;

    Ok(match absorber.add_output(streams.create()) {
        Ok(()) => Verdict::Failed("third output was accepted".into()),
        Err(DeviceError::OutputCapacityExceeded { .. }) => Verdict::Passed,
        Err(other) => Verdict::Failed(other.to_string()),
    })
}

fn mass_balance(config: &SelfCheckConfig) -> Result<Verdict> {
    let (streams, absorber) = run_absorber(10.0, 15.0)?;

    let total_in = total_flow(&streams, absorber.inputs())?;
    let total_out = total_flow(&streams, absorber.outputs())?;

    Ok(if (total_out - total_in).abs() < config.tolerance {
        Verdict::Passed
    } else {
        Verdict::Failed(format!(
            "{} != {}",
            total_out.get::<kilogram_per_second>(),
            total_in.get::<kilogram_per_second>()
        ))
    })
}

fn output_distribution(config: &SelfCheckConfig) -> Result<Verdict> {
    let (streams, absorber) = run_absorber(60.0, 40.0)?;

    let total_in = MassRate::new::<kilogram_per_second>(60.0 + 40.0);
    let expected = [total_in * 0.3, total_in * 0.7];

    for (id, expected) in absorber.outputs().iter().zip(expected) {
        let actual = streams.mass_flow(*id)?;
        if (actual - expected).abs() >= config.tolerance {
            return Ok(Verdict::Failed("Incorrect distribution".into()));
        }
    }

    Ok(Verdict::Passed)
}

/// Connects two inlets at the given flows (kg/s) and two outlets, then recomputes.
fn run_absorber(first: f64, second: f64) -> Result<(StreamArena, Absorber)> {
    let mut streams = StreamArena::new();
    let inlets = [streams.create(), streams.create()];
    let outlets = [streams.create(), streams.create()];

    for (id, flow) in inlets.into_iter().zip([first, second]) {
        streams
            .set_mass_flow(id, MassRate::new::<kilogram_per_second>(flow))
            .with_context(|| format!("setting inlet flow to {flow} kg/s"))?;
    }

    let mut absorber = Absorber::new();
    for id in inlets {
        absorber.add_input(id).context("connecting inlet")?;
    }
    for id in outlets {
        absorber.add_output(id).context("connecting outlet")?;
    }

    absorber
        .update_outputs(&mut streams)
        .context("updating absorber outputs")?;

    for (_, stream) in streams.iter() {
        log::debug!("{stream}");
    }

    Ok((streams, absorber))
}

fn total_flow(streams: &StreamArena, ids: &[StreamId]) -> Result<MassRate> {
    ids.iter().try_fold(
        MassRate::new::<kilogram_per_second>(0.0),
        |total, &id| Ok(total + streams.mass_flow(id)?),
    )
}
