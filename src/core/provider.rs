use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::core::model::Dataset;
use crate::core::sample::sample_dataset;
use crate::core::validate::dangling_references;

/// Source of the workspace the dashboard renders.
pub trait WorkspaceProvider {
    fn describe(&self) -> String;
    fn load(&self) -> anyhow::Result<Dataset>;
}

/// The built-in demo dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleWorkspace;

impl WorkspaceProvider for SampleWorkspace {
    fn describe(&self) -> String {
        "built-in sample".to_string()
    }

    fn load(&self) -> anyhow::Result<Dataset> {
        Ok(sample_dataset())
    }
}

/// A read-only JSON file in the same camelCase shape as [`Dataset`].
#[derive(Debug, Clone)]
pub struct JsonWorkspace {
    path: PathBuf,
}

impl JsonWorkspace {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WorkspaceProvider for JsonWorkspace {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> anyhow::Result<Dataset> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read dataset {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse dataset {}", self.path.display()))
    }
}

/// Load a dataset and check its references.
///
/// Broken references are logged and tolerated unless `strict` is set, in which
/// case every issue is joined into a single error.
pub fn load_dataset<P: WorkspaceProvider + ?Sized>(
    provider: &P,
    strict: bool,
) -> anyhow::Result<Dataset> {
    let dataset = provider.load()?;
    let issues = dangling_references(&dataset);

    if strict && !issues.is_empty() {
        let summary = issues
            .iter()
            .map(|issue| issue.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(anyhow::anyhow!(
            "Dataset {} has {} reference issue(s): {}",
            provider.describe(),
            issues.len(),
            summary
        ));
    }
    for issue in &issues {
        tracing::warn!(source = %provider.describe(), "{}", issue);
    }

    tracing::info!(
        source = %provider.describe(),
        projects = dataset.workspace.projects.len(),
        members = dataset.workspace.members.len(),
        tasks = dataset.tasks.len(),
        "Loaded workspace {}",
        dataset.workspace.name
    );
    Ok(dataset)
}
