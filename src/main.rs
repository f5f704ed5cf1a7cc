mod cli;

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;

use cli::Args;
use donut_nes::{compress, decompress, EncodeOptions};

fn main() -> Result<()> {
  let args = Args::parse();

  let default_filter = if args.quiet {
    "off"
  } else {
    match args.verbose {
      0 => "warn",
      1 => "info",
      2 => "debug",
      _ => "trace",
    }
  };
  env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

  if args.cycle_limit < 1298 {
    bail!("invalid --cycle-limit: must be an integer >= 1298");
  }

  let mut input: Box<dyn Read> = match &args.input {
    Some(path) if path.as_os_str() != "-" => {
      Box::new(File::open(path).with_context(|| format!("failed to open {}", path.display()))?)
    }
    _ => Box::new(io::stdin()),
  };

  let output_path = args.resolved_output().cloned();
  let (output_name, mut output): (String, Box<dyn Write>) = match output_path.as_deref() {
    Some(path) if path.as_os_str() != "-" => {
      if !args.force && path.exists() && !confirm_overwrite(path, args.quiet)? {
        log::warn!("not overwritten");
        return Ok(());
      }
      let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
      (path.display().to_string(), Box::new(file))
    }
    _ if args.use_stdio || output_path.is_none() => ("<stdout>".to_string(), Box::new(io::stdout())),
    None => ("<stdout>".to_string(), Box::new(io::stdout())),
    Some(path) => {
      let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
      (path.display().to_string(), Box::new(file))
    }
  };

  let (bytes_in, bytes_out) = if args.decompress {
    decompress(&mut input, &mut output)?
  } else {
    let opts = EncodeOptions {
      cycle_limit: args.cycle_limit,
      allow_bit_flip: !args.no_bit_flip,
      dont_care_mask: None,
    };
    compress(&mut input, &mut output, &opts)?
  };

  if args.verbose >= 1 {
    let ratio = if args.decompress {
      if bytes_out != 0 {
        (1.0 - (bytes_in as f64 / bytes_out as f64)) * 100.0
      } else {
        0.0
      }
    } else if bytes_in != 0 {
      (1.0 - (bytes_out as f64 / bytes_in as f64)) * 100.0
    } else {
      0.0
    };
    eprintln!("{output_name} :{ratio:5.1}% ({bytes_in} => {bytes_out} bytes)");
  }

  Ok(())
}

fn confirm_overwrite(path: &Path, quiet: bool) -> Result<bool> {
  if quiet {
    return Ok(false);
  }
  eprint!("{} already exists; do you wish to overwrite (y/N) ? ", path.display());
  io::stderr().flush().ok();
  let mut line = String::new();
  io::stdin().read_line(&mut line)?;
  let answer = line.trim().chars().next().map(|c| c.eq_ignore_ascii_case(&'y')).unwrap_or(false);
  Ok(answer)
}
