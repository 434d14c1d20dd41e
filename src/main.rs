use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use gabial::{
    cli::{Cli, init_logging},
    make_gabial,
    utils::viewer::SystemViewer,
};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    init_logging(&cli.global_options);

    let config = match cli.pipeline_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("Effective config: {}", config.to_json());

    let output_path = cli.output_path();
    match make_gabial(&cli.input_file, &output_path, &config, &mut SystemViewer) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
