//! radar_fusion_launch CLI

use clap::{Parser, Subcommand};
use radar_fusion_launch::{generate_launch_description, record};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "radar_fusion_launch")]
#[command(about = "Launch description for the radar_fusion_to_detected_object node", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the launch description and write a record manifest
    Record {
        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_launch_arg)]
        args: Vec<(String, String)>,

        /// Output file path (default: record.json)
        #[arg(short, long, default_value = "record.json")]
        output: PathBuf,
    },

    /// List the declared launch arguments
    Args,
}

fn parse_launch_arg(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.split(":=").collect();
    if parts.len() != 2 {
        return Err(format!("Invalid launch argument format: {}", s));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Record { args, output } => {
            let overrides: HashMap<String, String> = args.into_iter().collect();
            write_record(overrides, &output)
        }
        Commands::Args => {
            list_arguments();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn write_record(
    overrides: HashMap<String, String>,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let description = generate_launch_description();
    let record = record::evaluate(&description, overrides)?;

    let json = record.to_json()?;
    std::fs::write(output, json)?;

    log::info!("Generated record manifest: {}", output.display());
    log::info!(
        "  {} arguments, {} nodes",
        record.arguments.len(),
        record.node.len()
    );

    Ok(())
}

fn list_arguments() {
    let description = generate_launch_description();
    let arguments = description.arguments();

    if arguments.is_empty() {
        println!("No declared arguments.");
        return;
    }

    println!("Declared arguments:");
    for arg in arguments {
        match &arg.default {
            Some(default) => match default.as_literal() {
                Some(value) => println!("  {} (default: {})", arg.name, value),
                None => println!("  {} (deferred default)", arg.name),
            },
            None => println!("  {} (required)", arg.name),
        }
    }
}
