//! Environment detection and input/output path resolution

use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::settings::Settings;

/// Errors from path resolution
#[derive(Debug, Error)]
pub enum LocateError {
    /// A workspace root variable is unset or empty in a CI run
    #[error("environment variable {0} is not set")]
    MissingVariable(String),

    /// No ancestor of the working directory carries the project marker
    #[error("no '{marker}' directory in {}", .cwd.display())]
    ProjectRootNotFound { marker: String, cwd: PathBuf },

    /// The working directory could not be determined
    #[error("cannot determine the current directory: {0}")]
    CurrentDir(#[source] io::Error),
}

/// Read access to environment variables
pub trait Environment {
    /// Value of `name`, or `None` when unset or not valid Unicode
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Where the run takes place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunContext {
    /// Continuous integration: paths come from workspace root variables
    Ci,
    /// Developer checkout: paths come from the working directory
    Local,
}

/// Full paths of the workbook and both outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    pub input: PathBuf,
    pub csv: PathBuf,
    pub snapshot: PathBuf,
}

impl Locations {
    /// Join the configured file names onto input and output directories
    pub fn from_dirs(input_dir: &Path, output_dir: &Path, settings: &Settings) -> Self {
        Self {
            input: input_dir.join(&settings.input_file),
            csv: output_dir.join(&settings.csv_file),
            snapshot: output_dir.join(&settings.snapshot_file),
        }
    }
}

/// Interpret an environment value as a boolean flag
///
/// `true`, `1`, `yes` and `on` (any case) are set; everything else is unset.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Decide between CI and local resolution from the indicator variable
pub fn detect_context<E: Environment + ?Sized>(env: &E, settings: &Settings) -> RunContext {
    match env.var(&settings.ci_indicator_var) {
        Some(value) if is_truthy(&value) => RunContext::Ci,
        _ => RunContext::Local,
    }
}

/// Path from the filesystem root down to and including the first component
/// named `marker`
pub fn find_project_root(path: &Path, marker: &str) -> Option<PathBuf> {
    let mut root = PathBuf::new();
    for component in path.components() {
        root.push(component.as_os_str());
        if let Component::Normal(name) = component {
            if name == marker {
                return Some(root);
            }
        }
    }
    None
}

/// Resolve input and output paths for this run
pub fn resolve<E: Environment + ?Sized>(
    env: &E,
    cwd: &Path,
    settings: &Settings,
) -> Result<Locations, LocateError> {
    let context = detect_context(env, settings);

    let (input_dir, output_dir) = match context {
        RunContext::Ci => {
            let input_root = workspace_root(env, &settings.input_root_var)?;
            let output_root = workspace_root(env, &settings.output_root_var)?;
            (
                input_root.join(&settings.ci_input_subdir),
                output_root.join(&settings.ci_output_subdir),
            )
        }
        RunContext::Local => {
            let root = find_project_root(cwd, &settings.project_marker).ok_or_else(|| {
                LocateError::ProjectRootNotFound {
                    marker: settings.project_marker.clone(),
                    cwd: cwd.to_path_buf(),
                }
            })?;
            let dir = root.join(&settings.local_subdir);
            (dir.clone(), dir)
        }
    };

    tracing::debug!(
        ?context,
        input_dir = %input_dir.display(),
        output_dir = %output_dir.display(),
        "resolved directories"
    );

    Ok(Locations::from_dirs(&input_dir, &output_dir, settings))
}

fn workspace_root<E: Environment + ?Sized>(env: &E, name: &str) -> Result<PathBuf, LocateError> {
    match env.var(name) {
        Some(value) if !value.trim().is_empty() => Ok(PathBuf::from(value)),
        _ => Err(LocateError::MissingVariable(name.to_string())),
    }
}
