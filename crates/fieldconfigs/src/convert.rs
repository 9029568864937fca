//! The workbook to CSV + snapshot conversion

use std::path::{Path, PathBuf};

use fieldconfigs_csv::CsvWriter;

use crate::error::{Error, Result};
use crate::load::load_config_table;
use crate::locate::{self, Environment, LocateError, Locations, ProcessEnv};
use crate::settings::Settings;
use crate::snapshot::write_snapshot_file;

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Configurations written
    pub records: usize,
    /// Value columns per configuration
    pub columns: usize,
    pub csv: PathBuf,
    pub snapshot: PathBuf,
}

/// Runs conversions with a fixed set of [`Settings`]
#[derive(Debug, Clone, Default)]
pub struct Converter {
    settings: Settings,
}

impl Converter {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolve input and output paths against the process environment
    pub fn locate(&self) -> Result<Locations> {
        let cwd = std::env::current_dir().map_err(LocateError::CurrentDir)?;
        self.locate_in(&ProcessEnv, &cwd)
    }

    /// Resolve input and output paths against an explicit environment
    pub fn locate_in<E: Environment + ?Sized>(&self, env: &E, cwd: &Path) -> Result<Locations> {
        Ok(locate::resolve(env, cwd, &self.settings)?)
    }

    /// Load the workbook, then write the transposed CSV and the snapshot
    ///
    /// Both outputs are replaced when they already exist. Output directories
    /// are not created.
    pub fn run(&self, locations: &Locations) -> Result<ConversionReport> {
        tracing::info!(input = %locations.input.display(), "loading configurations");

        let table = load_config_table(&locations.input, &self.settings.sheet, &self.settings.load)?;

        let transposed = table.transpose();
        CsvWriter::write_file(&transposed, &locations.csv, &self.settings.csv).map_err(
            |source| Error::WriteCsv {
                path: locations.csv.clone(),
                source,
            },
        )?;
        tracing::info!(path = %locations.csv.display(), "wrote transposed CSV");

        write_snapshot_file(&table, &locations.snapshot).map_err(|source| Error::Snapshot {
            path: locations.snapshot.clone(),
            source,
        })?;
        tracing::info!(path = %locations.snapshot.display(), "wrote table snapshot");

        Ok(ConversionReport {
            records: table.len(),
            columns: table.columns().len(),
            csv: locations.csv.clone(),
            snapshot: locations.snapshot.clone(),
        })
    }
}
