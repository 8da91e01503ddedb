use std::{
    fs::{self},
    path::PathBuf,
};

use anyhow::anyhow;
use clap::{Parser, ValueEnum};
use env_logger::Builder as LoggerBuilder;
use log::LevelFilter;

#[derive(Debug, Clone, ValueEnum)]
enum Verbosity {
    Warnings,
    Silent,
    Debug,
}

#[derive(Debug, Clone, ValueEnum)]
enum ValueType {
    String,
    Bool,
    Int,
    Float,
}

/// Simple cli tool to look up values in .ini configuration files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path of the .ini file
    #[arg(short, long)]
    path: PathBuf,

    /// Section name. Leave empty for the DEFAULT section.
    #[arg(short, long)]
    section: Option<String>,

    /// Option name
    #[arg(short, long)]
    option: String,

    /// Coerce the resolved value to this type
    #[arg(short = 't', long, value_enum, default_value_t = ValueType::String)]
    value_type: ValueType,

    /// Print the stored value without unfolding %(name)s references
    #[arg(long)]
    raw: bool,

    /// Silent mode
    #[arg(value_enum, default_value_t = Verbosity::Warnings)]
    verbosity: Verbosity,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match args.verbosity {
        Verbosity::Silent => (),
        Verbosity::Warnings => LoggerBuilder::new().filter(None, LevelFilter::Warn).init(),
        Verbosity::Debug => LoggerBuilder::new().filter(None, LevelFilter::Debug).init(),
    }

    if let Some(extension) = args.path.extension() {
        if extension != "ini" {
            log::warn!("Specified file does not have an .ini extension!");
        }
    } else {
        log::warn!("Specified file does not have an .ini extension!");
    };

    // Try to read the file regardless

    let contents = fs::read_to_string(args.path)?;

    let config = iniconf::parse(contents.as_str())?;

    let section = match args.section.as_deref() {
        None | Some("") => iniconf::DEFAULT_SECTION,
        Some(section) => section,
    };

    if !config.has_section(section) {
        return Err(anyhow!("The given ini file did not contain the specified section"))?;
    }

    if args.raw {
        print!("{}", config.raw_string(section, &args.option)?);
        return Ok(());
    }

    match args.value_type {
        ValueType::String => print!("{}", config.string(section, &args.option)?),
        ValueType::Bool => print!("{}", config.bool_value(section, &args.option)?),
        ValueType::Int => print!("{}", config.int_value(section, &args.option)?),
        ValueType::Float => print!("{}", config.float_value(section, &args.option)?),
    }

    Ok(())
}
