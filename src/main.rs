use clap::Parser;
use dcm2bids_config_upgrade::{
    read_config, upgrade_tree_with_report, write_config, ConfigError, UpgradeReport,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "dcm2bids-config-upgrade")]
#[command(about = "Transform legacy dcm2bids v2 configuration files to the v3 schema")]
struct Args {
    /// Path to the existing dcm2bids v2 configuration file
    input_file: PathBuf,

    /// Path to write the upgraded v3 configuration file
    output_file: PathBuf,
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(report) => {
            print!("{}", report.format_console());
            println!(
                "File '{}' processed and saved as '{}'.",
                args.input_file.display(),
                args.output_file.display()
            );
        }
        Err(e) => {
            match e {
                ConfigError::FileNotFound(_) | ConfigError::InvalidJson { .. } => {
                    eprintln!("Error: {}", e);
                }
                other => eprintln!("An error occurred: {}", other),
            }
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<UpgradeReport, ConfigError> {
    let config = read_config(&args.input_file)?;

    let mut report = UpgradeReport::new();
    let upgraded = upgrade_tree_with_report(&config, &mut report);

    write_config(&args.output_file, &upgraded)?;
    Ok(report)
}
