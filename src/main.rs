// SPDX-License-Identifier: Apache-2.0

//! Writes a pipelined Wallace tree multiplier to
//! `generated_codes/wtm_<n>_bits_k_<k>.v`.
//!
//! Exits with status 1 once the file is written and 0 on any failure.

use std::path::PathBuf;
use std::process::ExitCode;

use cellgen::Library;
use clap::Parser;

const OUTPUT_DIR: &str = "generated_codes";

/// Pipelined Wallace tree multiplier generator
#[derive(Parser, Debug)]
struct Options {
    /// Operand width in bits
    #[arg(short = 'n')]
    n: usize,
    /// Reduction levels per pipeline stage
    #[arg(short = 'k')]
    k: usize,
}

impl Options {
    /// Accepts exactly `<prog> -n <bits> -k <depth>` with both values at
    /// least 1.
    fn from_args(args: &[String]) -> Option<Options> {
        if args.len() != 5 || args[1] != "-n" || args[3] != "-k" {
            return None;
        }
        let options = Options::try_parse_from(args).ok()?;
        (options.n > 0 && options.k > 0).then_some(options)
    }
}

fn usage(prog: &str) {
    eprint!(
        "Invalid arguments\n  Usage {prog} [-n num_bits] [-k pipeline_steps] \n  Example: {prog} -n 64 -k 4\n"
    );
}

fn run(options: &Options) -> cellgen::Result<PathBuf> {
    let multiplier = Library::default().wallace_tree_multiplier(
        "Sample_Multiplier",
        "input_1",
        "input_2",
        "clk",
        "outputs",
        options.n,
        options.k,
    )?;
    multiplier.validate()?;

    let path = PathBuf::from(OUTPUT_DIR).join(format!("wtm_{}_bits_k_{}.v", options.n, options.k));
    multiplier.emit_to_file(&path)?;
    Ok(path)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let prog = args.first().map(String::as_str).unwrap_or("wtm");
    let Some(options) = Options::from_args(&args) else {
        usage(prog);
        return ExitCode::from(0);
    };

    match run(&options) {
        Ok(path) => {
            log::info!("Code {} written successfully!", path.display());
            ExitCode::from(1)
        }
        Err(err) => {
            log::error!("Unable to generate multiplier: {err}");
            ExitCode::from(0)
        }
    }
}
