//! Command-line arguments shared by the generator binaries.

use std::path::PathBuf;

use clap::Parser;

use crate::conf::C_DIR_OUTPUT_DEFAULT;

/// Options every generator accepts.
#[derive(clap::Args, Debug, Clone)]
pub struct ArgsOutput {
    /// Directory the files are written into
    #[arg(short, long, default_value = C_DIR_OUTPUT_DEFAULT)]
    pub output_dir: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments of `create_sample_excel` and `create_words_excel`.
#[derive(Parser, Debug)]
#[command(author, version, about = "Write sample spreadsheets for the classroom picker")]
pub struct Args {
    #[command(flatten)]
    pub output: ArgsOutput,
}

/// Arguments of `create_vocabulary_excel`.
#[derive(Parser, Debug)]
#[command(author, version, about = "Write the extended vocabulary spreadsheet")]
pub struct ArgsVocabulary {
    #[command(flatten)]
    pub output: ArgsOutput,

    /// TOML file with `[[entries]]` to write instead of the built-in list
    #[arg(long)]
    pub dataset: Option<PathBuf>,
}
