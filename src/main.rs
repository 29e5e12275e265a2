use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

use steerx::presets;
use steerx::report::{render_ackermann, render_effort, render_linkage};
use steerx::{AckermannInput, JackingPairing, LinkageInput, SteeringEffortInput};

#[derive(Parser, Debug)]
#[command(name = "steerx", version, about = "Steering effort and Ackermann geometry calculator")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Steering wheel torque from the full vehicle description
    Effort {
        #[arg(long, value_enum, default_value_t = VehiclePreset::Mk2, help = "Vehicle the baseline parameters describe")]
        preset: VehiclePreset,
        #[arg(
            long,
            conflicts_with = "preset",
            help = "TOML parameter file; fields omitted from the file keep their default values"
        )]
        config: Option<PathBuf>,
        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Lateral acceleration in m/s^2; exactly zero analyses the parked car"
        )]
        lateral_accel: Option<f64>,
        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Average front wheel steer angle in degrees"
        )]
        steer_angle: Option<f64>,
        #[arg(long, value_enum, help = "Tangent pairing used in the jacking moment")]
        pairing: Option<PairingArg>,
    },
    /// Rim force from the force-based linkage chain
    Linkage {
        #[arg(long, value_enum, default_value_t = LinkagePreset::Rolling, help = "Scenario the baseline parameters describe")]
        preset: LinkagePreset,
        #[arg(
            long,
            conflicts_with = "preset",
            help = "TOML parameter file; fields omitted from the file keep their default values"
        )]
        config: Option<PathBuf>,
    },
    /// Ideal front wheel angles for a low-speed turn
    Ackermann {
        #[arg(long, default_value_t = 1.525, help = "Wheelbase in metres")]
        wheelbase: f64,
        #[arg(long, default_value_t = 1.145, help = "Front track width in metres")]
        track_width: f64,
        #[arg(
            long,
            default_value_t = 2.8,
            allow_hyphen_values = true,
            help = "Turn radius to the vehicle centreline in metres"
        )]
        turn_radius: f64,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VehiclePreset {
    /// First prototype revision
    Mk1,
    /// Second prototype revision
    Mk2,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LinkagePreset {
    /// Car rolling at speed
    Rolling,
    /// Car parked, static friction
    Parked,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PairingArg {
    /// scrub x tan(KPI) + trail x tan(caster)
    KingpinOnScrub,
    /// scrub x tan(caster) + trail x tan(KPI)
    CasterOnScrub,
}

impl From<PairingArg> for JackingPairing {
    fn from(value: PairingArg) -> Self {
        match value {
            PairingArg::KingpinOnScrub => JackingPairing::KingpinOnScrub,
            PairingArg::CasterOnScrub => JackingPairing::CasterOnScrub,
        }
    }
}

fn load_config<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Effort {
            preset,
            config,
            lateral_accel,
            steer_angle,
            pairing,
        } => {
            let mut input: SteeringEffortInput = match config.as_deref() {
                Some(path) => load_config(path)?,
                None => match preset {
                    VehiclePreset::Mk1 => presets::prototype_mk1(),
                    VehiclePreset::Mk2 => presets::prototype_mk2(),
                },
            };
            if let Some(lateral_accel) = lateral_accel {
                input.scenario.lateral_acceleration = lateral_accel;
            }
            if let Some(steer_angle) = steer_angle {
                input.scenario.steer_angle_deg = steer_angle;
            }
            if let Some(pairing) = pairing {
                input.scenario.jacking_pairing = pairing.into();
            }

            let breakdown = input.evaluate()?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                print!("{}", render_effort(&breakdown));
            }
        }
        Commands::Linkage { preset, config } => {
            let input: LinkageInput = match config.as_deref() {
                Some(path) => load_config(path)?,
                None => match preset {
                    LinkagePreset::Rolling => presets::linkage_rolling(),
                    LinkagePreset::Parked => presets::linkage_parked(),
                },
            };

            let forces = input.evaluate()?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&forces)?);
            } else {
                print!("{}", render_linkage(&forces));
            }
        }
        Commands::Ackermann {
            wheelbase,
            track_width,
            turn_radius,
        } => {
            let input = AckermannInput {
                wheelbase,
                track_width,
                turn_radius,
            };

            let geometry = input.evaluate()?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&geometry)?);
            } else {
                print!("{}", render_ackermann(&geometry));
            }
        }
    }

    Ok(())
}
