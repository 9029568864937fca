//! Run configuration
//!
//! [`Settings::default`] reproduces the layout of the FieldNBalance
//! repository: the workbook lives under `TestComponents/TestSets/Moisture`
//! and CI runs on GitHub Actions.

use std::path::PathBuf;

use fieldconfigs_core::LoadOptions;
use fieldconfigs_csv::CsvWriteOptions;
use fieldconfigs_xlsx::SheetSelector;

/// Everything the converter needs to know besides the process environment
#[derive(Debug, Clone)]
pub struct Settings {
    /// Variable whose boolean value marks a CI run
    pub ci_indicator_var: String,
    /// Variable holding the workspace root the input is read from in CI
    pub input_root_var: String,
    /// Variable holding the workspace root outputs are written under in CI
    pub output_root_var: String,
    /// Directory name that marks the project root on a local checkout
    pub project_marker: String,
    /// Input directory below the input root in CI
    pub ci_input_subdir: PathBuf,
    /// Output directory below the output root in CI
    pub ci_output_subdir: PathBuf,
    /// Input and output directory below the project root locally
    pub local_subdir: PathBuf,
    /// Workbook file name
    pub input_file: String,
    /// Transposed CSV file name
    pub csv_file: String,
    /// Snapshot file name
    pub snapshot_file: String,
    /// Worksheet holding the configurations
    pub sheet: SheetSelector,
    /// Table loading rules
    pub load: LoadOptions,
    /// CSV output format
    pub csv: CsvWriteOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ci_indicator_var: "GITHUB_ACTIONS".to_string(),
            input_root_var: "GITHUB_WORKSPACE".to_string(),
            output_root_var: "GITHUB_WORKSPACE".to_string(),
            project_marker: "FieldNBalance".to_string(),
            ci_input_subdir: ["TestComponents", "TestSets", "Moisture", "Outputs"]
                .iter()
                .collect(),
            ci_output_subdir: ["TestGraphs", "Outputs"].iter().collect(),
            local_subdir: ["TestComponents", "TestSets", "Moisture"].iter().collect(),
            input_file: "FieldConfigs.xlsx".to_string(),
            csv_file: "FieldConfigs.csv".to_string(),
            snapshot_file: "FieldConfigs.pkl".to_string(),
            sheet: SheetSelector::First,
            load: LoadOptions::default(),
            csv: CsvWriteOptions::default(),
        }
    }
}
