use anyhow::Context;
use fatcp::cli::Cli;
use fatcp::{logging, CopyError, TreeCopier};
use std::process::ExitCode;
use tracing::{debug, info};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fatcp: {err:#}");
            exit_code(&err)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let verbose = cli.is_verbose();
    logging::init(verbose).context("installing log subscriber")?;

    let invocation = cli.into_invocation()?;
    debug!(
        version = fatcp::VERSION,
        source = %invocation.source.display(),
        destination = %invocation.destination.display(),
        "starting copy"
    );

    let report = TreeCopier::new(invocation.options)
        .copy_tree(&invocation.source, &invocation.destination)?;

    if verbose {
        info!(%report, "finished");
    }
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<CopyError>() {
        Some(copy_err) if copy_err.is_usage() => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}
