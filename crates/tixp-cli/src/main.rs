//! tixp - CLI
//!
//! Minimal command-line interface to inspect and rebuild .8xp programs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;

use tixp_core::tokens::{self, CLR_HOME, DISP, NEXT_LINE_AND_CARRIAGE};
use tixp_core::{InstructionTable, Program, ProgramDecoder, ProgramEncoder, TixpConfig, TixpResult};

#[derive(Parser, Debug)]
#[command(name = "tixp", version, about = "Decode and compile TI-83 Plus .8xp programs")]
struct Cli {
    /// Enable debug logging (otherwise RUST_LOG decides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a program's metadata and instructions.
    Decode {
        file: PathBuf,

        /// Also print the program as source text.
        #[arg(long)]
        listing: bool,

        #[command(flatten)]
        options: DecodeOptions,
    },
    /// Decode a program and compile it again into a new file.
    Recompile {
        input: PathBuf,
        output: PathBuf,

        #[command(flatten)]
        options: DecodeOptions,
    },
    /// Write the HELOWRLD sample program.
    Hello { output: PathBuf },
}

#[derive(clap::Args, Debug)]
struct DecodeOptions {
    /// Reject files whose stored checksum does not match.
    #[arg(long)]
    verify_checksum: bool,

    /// Keep trailing NUL padding in the name and comment.
    #[arg(long)]
    keep_padding: bool,
}

impl DecodeOptions {
    fn config(&self) -> TixpConfig {
        TixpConfig {
            verify_checksum: self.verify_checksum,
            trim_padding: !self.keep_padding,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> TixpResult<()> {
    match command {
        Command::Decode { file, listing, options } => {
            let program = read_program(&file, options.config())?;
            println!("{}", program);
            if listing {
                println!();
                println!("{}", program.listing());
            }
        }
        Command::Recompile { input, output, options } => {
            let program = read_program(&input, options.config())?;
            let bytes = program.to_encoder().compile()?;
            fs::write(&output, &bytes)?;
            info!(path = %output.display(), bytes = bytes.len(), "wrote program");
        }
        Command::Hello { output } => {
            let bytes = hello_world()?.compile()?;
            fs::write(&output, &bytes)?;
            info!(path = %output.display(), bytes = bytes.len(), "wrote sample program");
        }
    }
    Ok(())
}

fn read_program(path: &Path, config: TixpConfig) -> TixpResult<Program> {
    let bytes = fs::read(path)?;
    info!(path = %path.display(), bytes = bytes.len(), "read container");
    ProgramDecoder::with_config(InstructionTable::standard(), config).decode(&bytes)
}

fn hello_world() -> TixpResult<ProgramEncoder> {
    let mut enc = ProgramEncoder::new();
    enc.set_name("HELOWRLD")?
        .set_uneditable(true)
        .append(CLR_HOME)
        .append(NEXT_LINE_AND_CARRIAGE)
        .append(DISP)
        .append_all(tokens::string("Hello World!")?);
    Ok(enc)
}
