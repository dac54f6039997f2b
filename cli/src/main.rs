mod args;
mod output;

use std::io::{self, Write};
use std::process::ExitCode;

use args::{Cli, CliErrors, ConversionRequest, ARGUMENT_COUNT_MESSAGE, FIELD_NAMES};
use clap::Parser;
use tracing::{debug, info, trace};
use tracing_subscriber::EnvFilter;
use transforms::CoordinateTransformer;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(&cli, &mut io::stdout().lock());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliErrors::ArgumentCount { found }) => {
            println!("{ARGUMENT_COUNT_MESSAGE}");
            info!(found, expected = FIELD_NAMES.len(), "wrong number of positional values");
            if cli.legacy {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliErrors> {
    let request = ConversionRequest::try_from(cli.values.as_slice())?;
    trace!(?request, "parsed positional values");

    match request.epoch.to_datetime() {
        Ok(dt) => info!(epoch = %dt, "converting ECI position"),
        Err(e) => info!("{e}, using the fields as given"),
    }

    let transformer = CoordinateTransformer::new(cli.model());
    let solution = transformer.eci_to_ecef(&request.epoch, request.r_eci);
    debug!(
        model = ?transformer.model(),
        julian_date = solution.julian_date.get_jd(),
        centuries = solution.centuries,
        "julian date"
    );
    debug!(
        seconds = solution.gmst.seconds,
        seconds_of_day = solution.gmst.seconds_of_day,
        radians = solution.gmst.radians,
        "gmst"
    );

    let rendered = output::render(&solution, cli.format)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
