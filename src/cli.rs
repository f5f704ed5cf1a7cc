// Command-line argument surface for the `donut-nes` binary. Mirrors
// donut-nes-cli.c's option set (`-d`, `-o`, `-c`, `-f`, `-q`/`-v`), plus
// the two block-encoder knobs the C CLI carries but leaves commented out.

use std::path::PathBuf;

use clap::Parser;

/// A NES CHR codec.
#[derive(Debug, Parser)]
#[command(name = "donut-nes", version, about = "A NES CHR codec")]
pub struct Args {
  /// Decompress input file (default action is compress)
  #[arg(short = 'd', long)]
  pub decompress: bool,

  /// Input file; reads stdin if omitted and --stdout is set
  pub input: Option<PathBuf>,

  /// Output file; writes stdout if omitted and --stdout is set. `-` means stdout.
  pub output: Option<PathBuf>,

  /// Output to FILE instead of the second positional argument
  #[arg(short = 'o', long = "output", value_name = "FILE")]
  pub output_flag: Option<PathBuf>,

  /// Use standard input/output when filenames are absent
  #[arg(short = 'c', long = "stdout")]
  pub use_stdio: bool,

  /// Overwrite output without prompting
  #[arg(short, long)]
  pub force: bool,

  /// Suppress error messages
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Show completion stats; repeat for more detail (-vv logs per-block mode
  /// selection, -vvv traces every improving candidate within a block)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Don't search bit-rotated encodings
  #[arg(long)]
  pub no_bit_flip: bool,

  /// Limit the simulated 6502 decode cost of any one compressed block
  #[arg(long, value_name = "CYCLES", default_value_t = 16384)]
  pub cycle_limit: i64,
}

impl Args {
  pub fn resolved_output(&self) -> Option<&PathBuf> {
    self.output_flag.as_ref().or(self.output.as_ref())
  }
}
