use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use drawkit_samples::cli::ArgsVocabulary;
use drawkit_samples::{SampleError, SpecWriteSummary, console, dataset, logging};

fn run(args: &ArgsVocabulary, out: &mut impl Write) -> Result<SpecWriteSummary, SampleError> {
    let l_entries = match &args.dataset {
        Some(path) => dataset::load_vocabulary_dataset(path)?,
        None => dataset::derive_vocabulary_entries(),
    };
    console::write_vocabulary(&args.output.output_dir, &l_entries, out)
}

fn main() -> ExitCode {
    let args = ArgsVocabulary::parse();
    logging::init_tracing(args.output.verbose);

    let mut stdout = io::stdout().lock();
    match run(&args, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = console::report_failure(&err, &mut stdout);
            let _ = stdout.flush();
            ExitCode::FAILURE
        }
    }
}
