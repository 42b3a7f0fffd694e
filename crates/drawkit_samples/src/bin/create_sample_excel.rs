use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use drawkit_samples::cli::Args;
use drawkit_samples::{console, dataset, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_tracing(args.output.verbose);

    let mut stdout = io::stdout().lock();
    let l_rosters = dataset::derive_rosters();
    match console::write_rosters(&args.output.output_dir, &l_rosters, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = console::report_failure(&err, &mut stdout);
            let _ = stdout.flush();
            ExitCode::FAILURE
        }
    }
}
