//! wavuri CLI - encode amplitude samples as WAV data URIs
//!
//! This binary provides commands for encoding sample files, synthesizing
//! test tones, and inspecting the headers of produced files.

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;

use wavuri_cli::{commands, logging};

/// wavuri - Mono 16-bit PCM WAV data URI encoder
#[derive(Parser)]
#[command(name = "wavuri")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode amplitude samples from a file (JSON request, JSON array, or plain numbers)
    Encode {
        /// Path to the sample file, or - for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Sample rate in Hz, unsigned; negative rates are rejected and 0 is accepted
        /// (overrides sample_rate in a JSON request)
        #[arg(short, long)]
        rate: Option<u32>,

        /// Declared sample count (defaults to the number of samples read)
        #[arg(long)]
        declared_len: Option<usize>,

        /// Also write the raw WAV file to this path
        #[arg(long)]
        wav_out: Option<String>,

        /// Output a JSON summary instead of the bare data URI
        #[arg(long)]
        json: bool,
    },

    /// Synthesize a sine tone and encode it
    Tone {
        /// Tone frequency in Hz
        #[arg(short, long, default_value_t = 440.0)]
        frequency: f64,

        /// Duration in seconds
        #[arg(short, long, default_value_t = 1.0)]
        duration: f64,

        /// Sample rate in Hz, unsigned; negative rates are rejected and 0 is accepted
        #[arg(short, long, default_value_t = 44100)]
        rate: u32,

        /// Peak amplitude
        #[arg(short, long, default_value_t = 0.8)]
        amplitude: f64,

        /// Also write the raw WAV file to this path
        #[arg(long)]
        wav_out: Option<String>,

        /// Output a JSON summary instead of the bare data URI
        #[arg(long)]
        json: bool,
    },

    /// Print the header of a WAV file or WAV data URI
    Inspect {
        /// Path to a .wav file or a file holding a data URI, or - for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Output the header as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Encode {
            input,
            rate,
            declared_len,
            wav_out,
            json,
        } => commands::encode::run(&input, rate, declared_len, wav_out.as_deref(), json),
        Commands::Tone {
            frequency,
            duration,
            rate,
            amplitude,
            wav_out,
            json,
        } => commands::tone::run(frequency, duration, rate, amplitude, wav_out.as_deref(), json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
