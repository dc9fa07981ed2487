//! Sequences the six variants through a producer into output files.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{ImgsError, OutputError, RunError};
use crate::producer::Producer;
use crate::variant::ImageVariant;

/// What to do when a variant fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort at the first failing variant
    #[default]
    StopOnFirst,
    /// Attempt every variant and report all failures at the end
    KeepGoing,
}

/// A file written by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub variant: ImageVariant,
    pub path: PathBuf,
    pub bytes: usize,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub written: Vec<WrittenFile>,
    /// Variants that failed; only filled in keep-going mode
    pub failed: Vec<(ImageVariant, ImgsError)>,
}

pub struct Runner<P> {
    producer: P,
    out_dir: PathBuf,
    policy: FailurePolicy,
}

impl<P: Producer> Runner<P> {
    pub fn new(producer: P, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            producer,
            out_dir: out_dir.into(),
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Processes all variants in order
    pub async fn run(&self) -> Result<RunReport, RunError> {
        tracing::info!(
            producer = self.producer.name(),
            out_dir = %self.out_dir.display(),
            policy = ?self.policy,
            "starting run"
        );

        let mut report = RunReport::default();

        for variant in ImageVariant::ALL {
            match self.process(variant).await {
                Ok(written) => report.written.push(written),
                Err(source) => {
                    tracing::error!(variant = %variant, error = %source, "variant failed");
                    match self.policy {
                        FailurePolicy::StopOnFirst => {
                            return Err(RunError::Variant { variant, source });
                        }
                        FailurePolicy::KeepGoing => report.failed.push((variant, source)),
                    }
                }
            }
        }

        if !report.failed.is_empty() {
            tracing::warn!(
                files = report.written.len(),
                failed = report.failed.len(),
                "run finished with failures"
            );
            return Err(RunError::Partial { report });
        }

        tracing::info!(files = report.written.len(), "run complete");
        Ok(report)
    }

    async fn process(&self, variant: ImageVariant) -> Result<WrittenFile, ImgsError> {
        let data = self.producer.produce(variant).await?;
        let path = self.out_dir.join(variant.file_name());
        write_output(&path, &data)?;

        tracing::info!(
            variant = %variant,
            path = %path.display(),
            bytes = data.len(),
            "wrote variant"
        );

        Ok(WrittenFile {
            variant,
            path,
            bytes: data.len(),
        })
    }
}

/// Writes `data` to `path`, truncating or creating the file.
///
/// The handle is dropped before returning on every path.
pub fn write_output(path: &Path, data: &[u8]) -> Result<(), OutputError> {
    let wrap = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(wrap)?;
    file.write_all(data).map_err(wrap)?;
    file.flush().map_err(wrap)?;
    Ok(())
}
