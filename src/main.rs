// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! QSVT toolkit command-line interface
//!
//! Builds block encodings, runs QSP sequences on the bundled state-vector
//! simulator, and prints Pauli and KAK decompositions.
//!
//! # Usage
//!
//! ```bash
//! # Reference run: scalar 0.3, three phases, probability of |1>
//! qsvt qsp
//!
//! # Block-encode a matrix read from a file
//! qsvt encode --matrix a.yaml
//!
//! # Pauli (LCU) terms of a matrix
//! qsvt pauli --matrix h.json --threshold 1e-6
//!
//! # KAK factors of a two-qubit gate
//! qsvt kak --matrix cnot.yaml
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use qsvt_toolkit::{
    config::Config,
    encoding::{BlockEncoding, EncodingKind},
    input::{load_matrix, MatrixFile},
    kak::{CartanDecomposer, InteractionAngles},
    lcu::{PauliDecomposer, PauliTerm},
    qsp::{PhaseSequence, SignalProcessor},
    simulator::{Simulator, StateVectorSimulator},
    Error, Result, VERSION,
};

/// QSVT toolkit
#[derive(Parser)]
#[command(name = "qsvt")]
#[command(author = "QubitOS Contributors")]
#[command(version = VERSION)]
#[command(about = "Block encodings, KAK/LCU decompositions and QSP sequencing")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Numerical tolerance override
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the block encoding of a scalar or a matrix file
    Encode {
        /// Scalar in [-1, 1]
        #[arg(long, allow_hyphen_values = true, conflicts_with = "matrix")]
        scalar: Option<f64>,

        /// Matrix file (YAML or JSON)
        #[arg(long, required_unless_present = "scalar")]
        matrix: Option<PathBuf>,
    },

    /// Run a QSP sequence on the state-vector simulator
    Qsp {
        /// Scalar to block-encode as the signal unitary
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.3)]
        scalar: f64,

        /// Comma-separated phases θ0,θ1,...
        #[arg(
            long,
            value_delimiter = ',',
            allow_hyphen_values = true,
            default_values_t = [-7.06858347, 0.78539887, 7.07098960e-7]
        )]
        phases: Vec<f64>,

        /// Register size
        #[arg(long, default_value_t = 1)]
        qubits: u32,

        /// Qubit the sequence acts on
        #[arg(long, default_value_t = 0)]
        target: u32,
    },

    /// Print the Pauli (LCU) terms of a matrix file
    Pauli {
        /// Matrix file (YAML or JSON)
        #[arg(long)]
        matrix: PathBuf,

        /// Drop terms with |c| at or below this value (default: tolerance)
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Print the KAK factors of a 4x4 unitary
    Kak {
        /// Matrix file (YAML or JSON)
        #[arg(long)]
        matrix: PathBuf,
    },

    /// Show effective configuration
    Config,

    /// Validate configuration file
    Validate,
}

#[derive(Serialize)]
struct EncodingReport {
    kind: &'static str,
    num_qubits: u32,
    unitary: MatrixFile,
}

#[derive(Serialize)]
struct QspReport {
    scalar: f64,
    phases: PhaseSequence,
    qubits: u32,
    target: u32,
    probability_one: f64,
}

#[derive(Serialize)]
struct PauliReport {
    num_qubits: u32,
    num_terms: usize,
    one_norm: f64,
    terms: Vec<PauliTerm>,
}

#[derive(Serialize)]
struct KakReport {
    k1: MatrixFile,
    a: MatrixFile,
    k2: MatrixFile,
    global_phase: f64,
    angles: InteractionAngles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration, then apply CLI overrides
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(tol) = cli.tolerance {
        config.numerics.tolerance = tol;
    }

    init_logging(&config.logging.level, &config.logging.format);

    match cli.command {
        Commands::Encode { scalar, matrix } => {
            config.validate()?;
            let encoding = match (scalar, matrix) {
                (Some(s), _) => BlockEncoding::from_scalar(s)?,
                (None, Some(path)) => BlockEncoding::from_matrix_with_numerics(
                    &read_matrix(&path)?,
                    &config.numerics,
                )?,
                (None, None) => {
                    return Err(Error::Config(
                        "either --scalar or --matrix is required".to_string(),
                    ))
                }
            };
            let kind = match encoding.kind() {
                EncodingKind::Scalar(_) => "scalar",
                EncodingKind::Matrix(_) => "matrix",
            };
            print_json(&EncodingReport {
                kind,
                num_qubits: encoding.num_qubits(),
                unitary: MatrixFile::from_array(encoding.matrix()),
            })?;
        }

        Commands::Qsp {
            scalar,
            phases,
            qubits,
            target,
        } => {
            config.validate()?;
            let phases = PhaseSequence::with_limits(phases, &config.limits)?;
            let encoding = BlockEncoding::from_scalar(scalar)?;
            let processor =
                SignalProcessor::from_encoding(&encoding, phases.clone())?.with_target(target);

            let mut sim = StateVectorSimulator::with_limits(qubits, &config.limits)?;
            processor.apply(&mut sim)?;
            let probability_one = sim.probability(target)?;

            info!(
                scalar,
                num_phases = phases.len(),
                probability_one,
                "QSP sequence complete"
            );
            print_json(&QspReport {
                scalar,
                phases,
                qubits,
                target,
                probability_one,
            })?;
        }

        Commands::Pauli { matrix, threshold } => {
            config.validate()?;
            let decomposition =
                PauliDecomposer::new(config.limits.clone()).decompose(&read_matrix(&matrix)?)?;
            let threshold = threshold.unwrap_or(config.numerics.tolerance);
            print_json(&PauliReport {
                num_qubits: decomposition.num_qubits(),
                num_terms: decomposition.len(),
                one_norm: decomposition.one_norm(),
                terms: decomposition.report(threshold),
            })?;
        }

        Commands::Kak { matrix } => {
            config.validate()?;
            let decomposer =
                CartanDecomposer::with_numerics(read_matrix(&matrix)?, config.numerics.clone())?;
            let factors = decomposer.solve()?;
            print_json(&KakReport {
                k1: MatrixFile::from_array(&factors.k1),
                a: MatrixFile::from_array(&factors.a),
                k2: MatrixFile::from_array(&factors.k2),
                global_phase: factors.global_phase,
                angles: factors.angles(),
            })?;
        }

        Commands::Config => {
            // Show effective configuration
            println!("{}", serde_yml::to_string(&config)?);
        }

        Commands::Validate => match config.validate() {
            Ok(()) => {
                println!("Configuration is valid");
            }
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Initialize logging with tracing. Logs go to stderr so stdout stays JSON.
fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    if format == "json" {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

fn read_matrix(path: &Path) -> Result<ndarray::Array2<num_complex::Complex64>> {
    info!(path = %path.display(), "Loading matrix");
    load_matrix(path)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
