//! Clone command implementation
//!
//! The clone command:
//! 1. Loads the configuration (built-in defaults if there is none)
//! 2. Parses the repository identifier and fills in the default host/scheme
//! 3. Determines the main language, from `--language` or a GitHub lookup
//! 4. Resolves the destination path from the path templates
//! 5. Clones into that path (skipped with `--dry-run`) and prints it

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use repoclone::config;
use repoclone::git::{GitCli, GitOperations};
use repoclone::language::{GithubLanguages, LanguageProvider, NoLanguage};

/// Arguments for the clone command
#[derive(Args, Debug)]
pub struct CloneArgs {
    /// Repository to clone: owner/name, host/owner/name, git@host:owner/name or a URL
    #[arg(value_name = "REPOSITORY")]
    pub repository: String,

    /// Main language of the repository (skips the GitHub lookup)
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH", env = "CLONE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the destination path without cloning
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Execute the clone command
pub fn execute(args: CloneArgs) -> Result<()> {
    let languages: Box<dyn LanguageProvider> = match GithubLanguages::new() {
        Ok(provider) => Box::new(provider),
        Err(e) => {
            log::warn!("{}", e);
            Box::new(NoLanguage)
        }
    };

    let destination = run(&args, languages.as_ref(), &GitCli)?;
    println!("{}", destination.display());
    Ok(())
}

/// Resolves the destination for `args.repository` and clones into it.
///
/// Returns the destination path.
pub fn run(
    args: &CloneArgs,
    languages: &dyn LanguageProvider,
    git: &dyn GitOperations,
) -> Result<PathBuf> {
    let config = config::load(args.config.as_deref());
    let parser = config
        .repository_parser()
        .context("Invalid scheme defaults in configuration")?;
    let resolver = config
        .path_resolver()
        .context("Invalid path templates in configuration")?;

    let repo = parser.parse(&args.repository)?;

    let language = match &args.language {
        Some(language) => language.to_lowercase(),
        None => languages.main_language(&repo).unwrap_or_else(|e| {
            log::warn!("{}", e);
            String::new()
        }),
    };
    log::info!("Resolved {} (language: '{}')", repo.url(), language);

    let destination = PathBuf::from(resolver.resolve(&language, &repo)?);

    if args.dry_run {
        log::info!("Dry run, not cloning {}", repo.url());
    } else {
        git.clone_repo(repo.url(), &destination)?;
    }

    Ok(destination)
}
