//! nds-adsr — print DS envelope timing tables and convert single codes.
//!
//! With no subcommand the full 384-line report is written to stdout.
//! Diagnostics go to stderr so the report can be piped.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::{debug, Level};

use nds_adsr::config::{default_config_path, load_config};
use nds_adsr::envelope::{
    code_for_seconds, phase_steps, steps_to_seconds, sustain_attenuation_db, sustain_code_for_db,
    EnvelopeParams, Phase,
};
use nds_adsr::report::{format_seconds, OutputFormat, Report};
use nds_adsr::AdsrError;

#[derive(Debug, Parser)]
#[command(name = "nds-adsr", version, about = "DS sound-chip ADSR envelope timings")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: ~/.nds-adsr/config.yaml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Starting velocity for attack and release (0-127).
    #[arg(long, global = true, value_parser = clap::value_parser!(i32).range(0..=127))]
    velocity: Option<i32>,

    /// Sustain code at which decay stops.
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(0..=127))]
    sustain_index: Option<u8>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the attack, decay and release times for every code.
    Report {
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Seconds taken by one phase at one code.
    Time {
        phase: Phase,
        #[arg(value_parser = clap::value_parser!(u8).range(0..=127))]
        code: u8,
    },
    /// Attenuation in dB of a sustain code.
    Sustain {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=127))]
        code: u8,
    },
    /// Hardware code closest to a time in seconds (or attenuation in dB for sustain).
    Code { target: LookupTarget, value: f64 },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LookupTarget {
    Attack,
    Decay,
    Sustain,
    Release,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    if let Err(e) = run(cli, &mut stdout.lock()) {
        eprintln!("nds-adsr: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli, out: &mut dyn Write) -> Result<(), AdsrError> {
    let path = match &cli.config {
        Some(path) if !path.exists() => {
            return Err(AdsrError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("config file {} not found", path.display()),
            )));
        }
        Some(path) => path.clone(),
        None => default_config_path(),
    };

    let mut config = load_config(&path)?;
    if let Some(velocity) = cli.velocity {
        config.velocity = velocity;
    }
    if let Some(sustain_index) = cli.sustain_index {
        config.sustain_index = sustain_index;
    }
    config.validate()?;
    let params = config.params();
    debug!(?params, "envelope parameters");

    let command = cli.command.unwrap_or(Command::Report {
        format: None,
        output: None,
    });

    match command {
        Command::Report { format, output } => {
            let format = format.unwrap_or(config.format);
            let report = Report::generate(params);
            match output {
                Some(path) => {
                    let mut out = BufWriter::new(File::create(&path)?);
                    report.write_to(&mut out, format)?;
                }
                None => report.write_to(&mut BufWriter::new(out), format)?,
            }
        }
        Command::Time { phase, code } => print_time(out, phase, code, &params)?,
        Command::Sustain { code } => {
            writeln!(out, "{}", sustain_attenuation_db(code))?;
        }
        Command::Code { target, value } => {
            let code = match target {
                LookupTarget::Attack => code_for_seconds(Phase::Attack, value, &params),
                LookupTarget::Decay => code_for_seconds(Phase::Decay, value, &params),
                LookupTarget::Release => code_for_seconds(Phase::Release, value, &params),
                LookupTarget::Sustain => sustain_code_for_db(value),
            };
            writeln!(out, "{code}")?;
        }
    }
    Ok(())
}

fn print_time(
    out: &mut dyn Write,
    phase: Phase,
    code: u8,
    params: &EnvelopeParams,
) -> io::Result<()> {
    let steps = phase_steps(phase, code, params);
    debug!(%phase, code, steps, "phase simulated");
    writeln!(out, "{}", format_seconds(steps_to_seconds(steps)))
}
