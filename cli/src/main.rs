mod samples;

use chrono::Local;
use clap::{ArgAction, Parser, ValueEnum};
use jdattr::dump_meta_info;
use jdump::Emitter;
use samples::Sample;
use std::error::Error;
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Print sample documents produced by the jdump emitter.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Sample to print; may be repeated. Prints all samples when omitted.
    #[arg(short, long, value_enum)]
    sample: Vec<Sample>,

    /// Print the meta information record (command line and time) first.
    #[arg(short, long, default_value = "false")]
    meta: bool,

    /// Raise log verbosity on stderr; RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let options = Args::parse();
    init_tracing(options.verbose);

    let mut out = io::stdout().lock();
    writeln!(out, "Testing tool for the jdump module.")?;

    if options.meta {
        writeln!(out, "\nMeta information:")?;
        let args: Vec<String> = std::env::args().collect();
        let mut jd = Emitter::new(out);
        dump_meta_info(&mut jd, &args[..], &Local::now())?;
        out = jd.finish()?;
    }

    let samples = if options.sample.is_empty() {
        Sample::value_variants().to_vec()
    } else {
        options.sample
    };

    for sample in samples {
        debug!(?sample, "dumping sample");
        writeln!(out, "\nJdump output for {}:", sample.title())?;
        let mut jd = Emitter::new(out);
        sample.dump(&mut jd)?;
        out = jd.finish()?;
    }

    Ok(())
}
