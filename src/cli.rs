use std::path::PathBuf;

use clap::{Args, Parser};
use log::LevelFilter;

use crate::{config::PipelineConfig, error::Result};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Mirrors an image into a 2x2 tile and shuffles its strips in both directions
pub struct Cli {
    /// Image to transform, any format the image crate can decode
    pub input_file: PathBuf,

    /// Number of strips per permutation pass
    #[arg(allow_negative_numbers = true, value_parser = parse_slice_amt)]
    pub slice_amt: u32,

    /// Output path, defaults to `<input name>_gabial.png` in the working directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON file with `turn` ("cw" or "ccw", default "cw") and `show` (bool) settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not open the result in an image viewer
    #[arg(long)]
    pub no_show: bool,

    #[command(flatten)]
    pub global_options: GlobalOptions,
}

#[derive(Args, Debug)]
#[non_exhaustive]
pub struct GlobalOptions {
    /// Print debug information
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
    /// Do not print logs to console.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl GlobalOptions {
    pub fn level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Off
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

impl Cli {
    /// Effective settings: defaults, then the config file, then flags.
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut config = PipelineConfig::new(self.slice_amt);
        if let Some(path) = &self.config {
            config = config.read_config(path)?;
        }
        if self.no_show {
            config.show = false;
        }
        Ok(config)
    }

    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(output_file_name(&self.input_file.to_string_lossy())),
        }
    }
}

/// `RUST_LOG` still wins over the level picked on the command line.
pub fn init_logging(options: &GlobalOptions) {
    env_logger::Builder::new()
        .filter_level(options.level())
        .parse_default_env()
        .format_target(false)
        .format_timestamp(None)
        .init();
}

fn parse_slice_amt(value: &str) -> std::result::Result<u32, String> {
    let amount: i64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid slice amount `{value}`, expected a positive integer"))?;
    if amount <= 0 {
        return Err(format!(
            "invalid slice amount {amount}, expected a positive integer"
        ));
    }
    u32::try_from(amount).map_err(|_| format!("slice amount {amount} is too large"))
}

/// Derive the output name from the input argument.
///
/// The last extension is dropped, `_gabial` appended, everything outside
/// `[a-zA-Z_-]` removed and `.png` appended, so directories collapse into the
/// name and the file lands in the working directory.
pub fn output_file_name(input_file: &str) -> String {
    let stem = match input_file.rfind('.') {
        Some(dot) if !input_file[dot..].contains(['/', '\\']) => &input_file[..dot],
        _ => input_file,
    };

    let mut name: String = format!("{stem}_gabial")
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == '_' || *c == '-')
        .collect();
    name.push_str(".png");
    name
}
