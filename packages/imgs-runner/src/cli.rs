use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use imgs_core::DEFAULT_ICON_SIZE;

#[derive(Debug, Parser)]
#[command(author, version, about = "Writes the zip/aes/cloud cover images", long_about = None)]
pub struct Cli {
    /// Log filter, e.g. `info` or `imgs_core=debug`
    #[arg(long, global = true, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Arguments for the implicit `run` command; ignored when a subcommand is given
    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Produce all six variants into the output directory
    Run(RunArgs),
    /// Generate a Rust module embedding files as base64
    Embed(EmbedArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Source {
    /// Render the built-in icons
    Icon,
    /// Download the files from an object store
    Remote,
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Directory receiving the six files (must exist)
    #[arg(long, env = "IMGS_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    #[arg(long, env = "IMGS_SOURCE", value_enum, default_value_t = Source::Icon)]
    pub source: Source,

    /// Icon edge length in pixels
    #[arg(long, env = "IMGS_ICON_SIZE", default_value_t = DEFAULT_ICON_SIZE)]
    pub size: u32,

    /// Attempt every variant instead of stopping at the first failure
    #[arg(long)]
    pub keep_going: bool,

    /// Object store base URL (remote source)
    #[arg(long, env = "IMGS_STORE_URL")]
    pub store_url: Option<String>,

    /// Key prefix below the store URL
    #[arg(long, env = "IMGS_STORE_PREFIX")]
    pub store_prefix: Option<String>,

    #[arg(long, env = "IMGS_ACCESS_CLIENT_ID")]
    pub access_client_id: Option<String>,

    #[arg(long, env = "IMGS_ACCESS_CLIENT_SECRET", hide_env_values = true)]
    pub access_client_secret: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct EmbedArgs {
    /// Files to embed
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Destination of the generated source
    #[arg(short, long, default_value = "output.rs")]
    pub output: PathBuf,
}

/// Command selected on the command line
#[derive(Debug, Clone, Copy)]
pub enum Action<'a> {
    Run(&'a RunArgs),
    Embed(&'a EmbedArgs),
}

impl Cli {
    /// Resolves the subcommand, falling back to `run` with the top-level flags
    pub fn action(&self) -> Action<'_> {
        match &self.command {
            Some(Commands::Run(args)) => Action::Run(args),
            Some(Commands::Embed(args)) => Action::Embed(args),
            None => Action::Run(&self.run),
        }
    }

    pub fn run_args(&self) -> Option<&RunArgs> {
        match self.action() {
            Action::Run(args) => Some(args),
            Action::Embed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_runs_with_defaults() {
        let cli = Cli::try_parse_from(["imgs"]).unwrap();
        let args = cli.run_args().unwrap();

        assert_eq!(args.out_dir, PathBuf::from("."));
        assert_eq!(args.source, Source::Icon);
        assert_eq!(args.size, DEFAULT_ICON_SIZE);
        assert!(!args.keep_going);
    }

    #[test]
    fn test_run_subcommand() {
        let cli = Cli::try_parse_from([
            "imgs",
            "run",
            "--out-dir",
            "/tmp/out",
            "--source",
            "remote",
            "--store-url",
            "https://store.example.com",
            "--keep-going",
        ])
        .unwrap();
        let args = cli.run_args().unwrap();

        assert_eq!(args.out_dir, PathBuf::from("/tmp/out"));
        assert_eq!(args.source, Source::Remote);
        assert_eq!(args.store_url.as_deref(), Some("https://store.example.com"));
        assert!(args.keep_going);
    }

    #[test]
    fn test_log_level_before_subcommand() {
        let cli = Cli::try_parse_from(["imgs", "--log-level", "debug", "run"]).unwrap();

        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Some(Commands::Run(_))));
    }

    #[test]
    fn test_log_level_after_subcommand() {
        let cli = Cli::try_parse_from(["imgs", "embed", "a.png", "--log-level", "warn"]).unwrap();

        assert_eq!(cli.log_level, "warn");
        assert!(matches!(cli.action(), Action::Embed(_)));
    }

    #[test]
    fn test_top_level_flags_without_subcommand() {
        let cli = Cli::try_parse_from(["imgs", "--log-level", "debug", "--size", "64"]).unwrap();

        match cli.action() {
            Action::Run(args) => assert_eq!(args.size, 64),
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn test_subcommand_flags_take_precedence() {
        let cli = Cli::try_parse_from(["imgs", "run", "--size", "32"]).unwrap();

        assert_eq!(cli.run_args().unwrap().size, 32);
    }

    #[test]
    fn test_embed_subcommand() {
        let cli = Cli::try_parse_from(["imgs", "embed", "a.png", "b.webp", "-o", "icons.rs"]).unwrap();

        match cli.command {
            Some(Commands::Embed(args)) => {
                assert_eq!(args.files.len(), 2);
                assert_eq!(args.output, PathBuf::from("icons.rs"));
            }
            other => panic!("expected embed, got {other:?}"),
        }
        assert!(Cli::try_parse_from(["imgs", "embed"]).is_err());
    }
}
