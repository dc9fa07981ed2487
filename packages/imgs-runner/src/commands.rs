use std::path::PathBuf;

use imgs_core::embed::{generate_module, load_assets};
use imgs_core::storage::credentials_from;
use imgs_core::{
    write_output, EmbedError, FailurePolicy, IconProducer, OutputError, Producer, RenderParams,
    RunError, RunReport, Runner, StorageClient, StorageProducer,
};

use crate::cli::{EmbedArgs, RunArgs, Source};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error(transparent)]
    Embed(#[from] EmbedError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl AppError {
    /// Logs the error with a level matching its kind
    pub fn log(&self) {
        match self {
            AppError::Config(msg) => {
                tracing::warn!(error = %msg, "invalid configuration");
            }
            AppError::Run(RunError::Variant { variant, source }) => {
                tracing::error!(variant = %variant, error = %source, "run aborted");
            }
            AppError::Run(RunError::Partial { report }) => {
                for file in &report.written {
                    tracing::info!(
                        variant = %file.variant,
                        path = %file.path.display(),
                        "kept output"
                    );
                }
                for (variant, err) in &report.failed {
                    tracing::error!(variant = %variant, error = %err, "variant failed");
                }
                tracing::error!(
                    written = report.written.len(),
                    failed = report.failed.len(),
                    "run finished with failures"
                );
            }
            AppError::Embed(err) => {
                tracing::error!(error = %err, "embed failed");
            }
            AppError::Output(err) => {
                tracing::error!(error = %err, "output failed");
            }
        }
    }
}

/// Builds the producer selected by `args`
pub fn build_producer(args: &RunArgs) -> Result<Box<dyn Producer>, AppError> {
    match args.source {
        Source::Icon => Ok(Box::new(IconProducer::new(RenderParams::new(Some(args.size))))),
        Source::Remote => {
            let base_url = args
                .store_url
                .clone()
                .ok_or_else(|| AppError::Config("--store-url is required for remote source".to_string()))?;
            let credentials = credentials_from(
                args.access_client_id.clone(),
                args.access_client_secret.clone(),
            )
            .map_err(AppError::Config)?;

            let mut producer = StorageProducer::new(StorageClient::new(base_url, credentials));
            if let Some(prefix) = &args.store_prefix {
                producer = producer.with_prefix(prefix.as_str());
            }
            Ok(Box::new(producer))
        }
    }
}

pub async fn run(args: &RunArgs) -> Result<RunReport, AppError> {
    let producer = build_producer(args)?;
    let policy = if args.keep_going {
        FailurePolicy::KeepGoing
    } else {
        FailurePolicy::StopOnFirst
    };

    let report = Runner::new(producer, &args.out_dir)
        .with_policy(policy)
        .run()
        .await?;
    Ok(report)
}

pub fn embed(args: &EmbedArgs) -> Result<PathBuf, AppError> {
    let assets = load_assets(&args.files)?;
    let source = generate_module(&assets)?;
    write_output(&args.output, source.as_bytes())?;

    tracing::info!(
        assets = assets.len(),
        output = %args.output.display(),
        "wrote embed module"
    );
    Ok(args.output.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::Cli;

    fn run_args(extra: &[&str]) -> RunArgs {
        let mut argv = vec!["imgs", "run"];
        argv.extend_from_slice(extra);
        let cli = Cli::try_parse_from(argv).unwrap();
        cli.run_args().unwrap().clone()
    }

    #[test]
    fn test_remote_requires_url() {
        let args = run_args(&["--source", "remote"]);
        let err = build_producer(&args).err().unwrap();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_remote_rejects_half_credentials() {
        let args = run_args(&[
            "--source",
            "remote",
            "--store-url",
            "https://store.example.com",
            "--access-client-id",
            "id",
        ]);
        assert!(matches!(build_producer(&args).err(), Some(AppError::Config(_))));
    }

    #[test]
    fn test_remote_producer_selected() {
        let args = run_args(&["--source", "remote", "--store-url", "https://store.example.com"]);
        assert_eq!(build_producer(&args).unwrap().name(), "remote");
    }

    #[tokio::test]
    async fn test_run_writes_icons() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_str().unwrap();
        let args = run_args(&["--out-dir", out, "--size", "24"]);

        let report = run(&args).await.unwrap();

        assert_eq!(report.written.len(), 6);
        for name in ["zip.png", "zip.webp", "aes.png", "aes.webp", "cloud.png", "cloud.webp"] {
            assert!(dir.path().join(name).is_file(), "{name}");
        }
    }

    #[tokio::test]
    async fn test_run_error_message() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("absent");
        let args = run_args(&["--out-dir", out.to_str().unwrap()]);

        let err = run(&args).await.unwrap_err();
        let message = format!("error: {err}");

        assert!(message.starts_with("error: zip_png: output error: failed to write"));
    }

    #[tokio::test]
    async fn test_keep_going_error_carries_report() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_str().unwrap();
        // nothing listens on port 9, every fetch fails
        let args = run_args(&[
            "--out-dir",
            out,
            "--source",
            "remote",
            "--store-url",
            "http://127.0.0.1:9",
            "--keep-going",
        ]);

        let err = run(&args).await.unwrap_err();

        match err {
            AppError::Run(RunError::Partial { report }) => {
                assert!(report.written.is_empty());
                assert_eq!(report.failed.len(), 6);
            }
            other => panic!("expected partial run, got {other:?}"),
        }
    }

    #[test]
    fn test_embed_writes_module() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cloud.png");
        std::fs::write(&input, [0x89u8, 0x50, 0x4E, 0x47]).unwrap();
        let args = EmbedArgs {
            files: vec![input],
            output: dir.path().join("output.rs"),
        };

        let path = embed(&args).unwrap();

        let source = std::fs::read_to_string(path).unwrap();
        assert!(source.contains("pub fn cloud()"));
        assert!(source.contains("\"iVBORw==\","));
    }
}
