//! Locating and loading the verbiste data files.

use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::Args;
use log::debug;
use miette::Report;
use verbiste::{CatalogError, TemplateCatalog, VerbSearchIndex};

use crate::output::CatalogDiagnostic;

/// Template file name inside the data directory.
const TEMPLATES_FILE: &str = "conjugation-fr.xml";

/// Verb list file name inside the data directory.
const VERBS_FILE: &str = "verbs-fr.xml";

/// Where to find the template and verb data.
#[derive(Debug, Args)]
pub struct DataArgs {
    /// Directory containing conjugation-fr.xml and verbs-fr.xml
    #[arg(long, env = "VERBISTE_DATA_DIR", default_value = "data", global = true)]
    pub data_dir: PathBuf,

    /// Template file (.xml or .json), overriding the data directory
    #[arg(long, global = true)]
    pub templates: Option<PathBuf>,

    /// Verb list file (.xml), overriding the data directory
    #[arg(long, global = true)]
    pub verbs: Option<PathBuf>,
}

/// A data file that could not be loaded, with the exit code to report.
#[derive(Debug)]
pub struct LoadFailure {
    pub code: i32,
    pub report: Report,
}

impl LoadFailure {
    /// Prints the report to stderr and returns the exit code.
    pub fn emit(self) -> i32 {
        eprintln!("{:?}", self.report);
        self.code
    }
}

impl DataArgs {
    pub fn templates_path(&self) -> PathBuf {
        self.templates
            .clone()
            .unwrap_or_else(|| self.data_dir.join(TEMPLATES_FILE))
    }

    pub fn verbs_path(&self) -> PathBuf {
        self.verbs
            .clone()
            .unwrap_or_else(|| self.data_dir.join(VERBS_FILE))
    }

    /// Load the template catalog.
    pub fn load_templates(&self) -> Result<TemplateCatalog, LoadFailure> {
        let path = self.templates_path();
        let content = read(&path)?;
        let catalog = TemplateCatalog::from_content(&path, &content)
            .map_err(|e| malformed(&path, &content, &e))?;
        debug!("{} templates from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Load the verb list into a search index.
    pub fn load_verbs(&self) -> Result<VerbSearchIndex, LoadFailure> {
        let path = self.verbs_path();
        let content = read(&path)?;
        let index =
            VerbSearchIndex::from_xml(&content).map_err(|e| malformed(&path, &content, &e))?;
        debug!("{} verbs from {}", index.len(), path.display());
        Ok(index)
    }
}

fn read(path: &Path) -> Result<String, LoadFailure> {
    read_to_string(path).map_err(|e| {
        let code = if e.kind() == ErrorKind::NotFound {
            exitcode::NOINPUT
        } else {
            exitcode::IOERR
        };
        LoadFailure {
            code,
            report: miette::miette!("Cannot read data file {}: {}", path.display(), e),
        }
    })
}

fn malformed(path: &Path, content: &str, err: &CatalogError) -> LoadFailure {
    LoadFailure {
        code: exitcode::DATAERR,
        report: CatalogDiagnostic::from_catalog_error(path, content, err).into(),
    }
}
