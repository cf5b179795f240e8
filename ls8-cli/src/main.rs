//! `ls8`: run, assemble and disassemble LS-8 programs
//!
//! ```text
//! ls8 run program.ls8 [--trace] [--max-cycles N] [--stack-top 0xF4]
//! ls8 run program.asm
//! ls8 disasm program.ls8
//! ls8 asm program.asm > program.ls8
//! ```
//!
//! Program output goes to stdout, one decimal value per line. Logs and trace
//! rows go to stderr; `RUST_LOG` controls the filter.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ls8_runtime::{HaltReason, LineWriter, Machine, MachineConfig, TRACE_TARGET};
use ls8_spec::Program;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ls8", version, about = "LS-8 virtual machine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load a program and execute it
    Run {
        /// `.ls8` binary-literal file, or `.asm` assembly source
        file: PathBuf,

        /// Print a trace row to stderr before every instruction
        #[arg(long)]
        trace: bool,

        /// Stop after this many instructions
        #[arg(long, default_value_t = MachineConfig::default().max_cycles)]
        max_cycles: u64,

        /// Initial stack pointer, decimal or 0x-prefixed hex
        #[arg(long, value_parser = parse_byte)]
        stack_top: Option<u8>,
    },

    /// Print an address/hex/mnemonic listing of a program
    Disasm { file: PathBuf },

    /// Assemble a source file and print it in `.ls8` form
    Asm { file: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let trace = matches!(cli.command, Command::Run { trace: true, .. });
    if let Err(e) = init_tracing(trace) {
        eprintln!("error: {:#}", e);
        return ExitCode::FAILURE;
    }

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(trace: bool) -> Result<()> {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if trace {
        filter = filter.add_directive(format!("{}=trace", TRACE_TARGET).parse()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
    Ok(())
}

fn execute(command: Command) -> Result<()> {
    match command {
        Command::Run {
            file,
            trace,
            max_cycles,
            stack_top,
        } => {
            let program = load_program(&file)?;
            let mut config = MachineConfig {
                max_cycles,
                trace,
                ..MachineConfig::default()
            };
            if let Some(sp) = stack_top {
                config.stack_top = sp;
            }

            let mut machine = Machine::with_program(&program, config)
                .with_context(|| format!("failed to load {}", file.display()))?;
            let mut out = LineWriter::new(io::stdout().lock());

            let reason = machine.run_with(&mut out).with_context(|| {
                format!("execution of {} faulted", file.display())
            })?;
            if reason == HaltReason::CycleLimit {
                tracing::warn!(cycles = machine.state().cycles, "cycle limit reached");
            }
            Ok(())
        }

        Command::Disasm { file } => {
            let program = load_program(&file)?;
            print!("{}", ls8_disassembler::disassemble(&program));
            Ok(())
        }

        Command::Asm { file } => {
            let program = assemble_file(&file)?;
            print!("{}", ls8_assembler::to_ls8(&program));
            Ok(())
        }
    }
}

/// Read a program, choosing the parser by file extension
fn load_program(path: &Path) -> Result<Program> {
    if is_assembly(path) {
        assemble_file(path)
    } else {
        let source = read_source(path)?;
        ls8_assembler::parse_ls8(&source).with_context(|| format!("in {}", path.display()))
    }
}

fn assemble_file(path: &Path) -> Result<Program> {
    let source = read_source(path)?;
    ls8_assembler::assemble(&source).with_context(|| format!("in {}", path.display()))
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn is_assembly(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("asm") || ext.eq_ignore_ascii_case("s")
    )
}

fn parse_byte(text: &str) -> std::result::Result<u8, String> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => text.parse::<u8>(),
    };
    parsed.map_err(|e| format!("'{}' is not a byte value: {}", text, e))
}
