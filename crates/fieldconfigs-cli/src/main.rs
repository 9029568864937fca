//! fieldconfigs CLI - regenerates FieldConfigs.csv and FieldConfigs.pkl

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fieldconfigs::prelude::*;
use fieldconfigs::read_snapshot_file;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "fieldconfigs")]
#[command(
    author,
    version,
    about = "Transpose the field configuration workbook into CSV and snapshot fixtures"
)]
#[command(propagate_version = true)]
struct Cli {
    /// Runs `convert` with default options when omitted
    #[command(subcommand)]
    command: Option<Commands>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the workbook and write the transposed CSV and the snapshot
    Convert(ConvertArgs),

    /// Print the resolved input and output paths without touching them
    Locate(LocateArgs),

    /// Summarize a snapshot written by `convert`
    Inspect {
        /// Snapshot file
        snapshot: PathBuf,
    },
}

#[derive(Args, Default)]
struct LocateArgs {
    /// Directory holding FieldConfigs.xlsx (skips environment detection)
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory the CSV and snapshot are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[derive(Args, Default)]
struct ConvertArgs {
    #[command(flatten)]
    dirs: LocateArgs,

    /// Keep repeated configuration names instead of failing
    #[arg(long)]
    allow_duplicate_names: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command.unwrap_or(Commands::Convert(ConvertArgs::default())) {
        Commands::Convert(args) => convert(args),
        Commands::Locate(args) => locate(&args),
        Commands::Inspect { snapshot } => inspect(&snapshot),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    // RUST_LOG wins over the flags
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn convert(args: ConvertArgs) -> Result<()> {
    let mut settings = Settings::default();
    if args.allow_duplicate_names {
        settings.load.duplicate_names = DuplicateNames::Allow;
    }

    let converter = Converter::new(settings);
    let locations = resolve(&converter, &args.dirs)?;

    let report = converter
        .run(&locations)
        .with_context(|| format!("Failed to convert '{}'", locations.input.display()))?;

    eprintln!(
        "Wrote {} configurations x {} fields to '{}' and '{}'",
        report.records,
        report.columns,
        report.csv.display(),
        report.snapshot.display()
    );
    Ok(())
}

fn locate(args: &LocateArgs) -> Result<()> {
    let converter = Converter::default();
    let locations = resolve(&converter, args)?;

    println!("input:    {}", locations.input.display());
    println!("csv:      {}", locations.csv.display());
    println!("snapshot: {}", locations.snapshot.display());
    Ok(())
}

fn inspect(path: &Path) -> Result<()> {
    let table = read_snapshot_file(path)
        .with_context(|| format!("Failed to read snapshot '{}'", path.display()))?;

    println!("File:    {}", path.display());
    println!("Index:   {}", table.index_name());
    println!("Records: {}", table.len());
    println!("Fields:  {}", table.columns().len());
    println!();

    for column in table.columns() {
        println!("  {}", column);
    }
    if !table.is_empty() {
        println!();
        let names: Vec<&str> = table.names().collect();
        println!("Names: {}", names.join(", "));
    }
    Ok(())
}

/// Environment-derived locations with any explicit directories applied on top
fn resolve(converter: &Converter, dirs: &LocateArgs) -> Result<Locations> {
    let settings = converter.settings();

    let (input_dir, output_dir) = match (&dirs.input_dir, &dirs.output_dir) {
        (Some(input), Some(output)) => (input.clone(), output.clone()),
        (input, output) => {
            let detected = converter
                .locate()
                .context("Failed to resolve input and output paths")?;
            let detected_input = parent_dir(&detected.input);
            let detected_output = parent_dir(&detected.csv);
            (
                input.clone().unwrap_or(detected_input),
                output.clone().unwrap_or(detected_output),
            )
        }
    };

    Ok(Locations::from_dirs(&input_dir, &output_dir, settings))
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_convert() {
        let cli = Cli::try_parse_from(["fieldconfigs"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_convert_flags() {
        let cli = Cli::try_parse_from([
            "fieldconfigs",
            "convert",
            "--input-dir",
            "in",
            "--output-dir",
            "out",
            "--allow-duplicate-names",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Convert(args)) => {
                assert_eq!(args.dirs.input_dir, Some(PathBuf::from("in")));
                assert_eq!(args.dirs.output_dir, Some(PathBuf::from("out")));
                assert!(args.allow_duplicate_names);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["fieldconfigs", "-q", "-v"]).is_err());
        assert!(Cli::try_parse_from(["fieldconfigs", "locate", "-q"]).is_ok());
    }

    #[test]
    fn test_inspect_requires_path() {
        assert!(Cli::try_parse_from(["fieldconfigs", "inspect"]).is_err());

        let cli = Cli::try_parse_from(["fieldconfigs", "inspect", "FieldConfigs.pkl"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Inspect { ref snapshot }) if snapshot == Path::new("FieldConfigs.pkl")
        ));
    }

    #[test]
    fn test_explicit_dirs_skip_detection() {
        let dirs = LocateArgs {
            input_dir: Some(PathBuf::from("in")),
            output_dir: Some(PathBuf::from("out")),
        };
        let locations = resolve(&Converter::default(), &dirs).unwrap();

        assert_eq!(locations.input, Path::new("in").join("FieldConfigs.xlsx"));
        assert_eq!(locations.csv, Path::new("out").join("FieldConfigs.csv"));
        assert_eq!(locations.snapshot, Path::new("out").join("FieldConfigs.pkl"));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
