use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, GenerateSummary};
use crate::{
    cli::{args::GenerateCommand, report::StatusPrinter},
    config::{Config, load_config},
    core::{GenerateOptions, Generator, MergeStrategy},
};

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let root_dir = match &cmd.args.common.root {
        Some(root) => root.clone(),
        None => env::current_dir().context("Failed to resolve the current directory")?,
    };
    let config = load_config(&root_dir)?.config;
    let options = build_options(&cmd, config, root_dir)?;

    let generator = Generator::new(options);
    let output = generator.run(&mut StatusPrinter)?;

    Ok(CommandResult::new(CommandSummary::Generate(GenerateSummary {
        skipped_count: output.skipped_count,
    })))
}

/// Merge command line flags over the loaded config.
fn build_options(
    cmd: &GenerateCommand,
    config: Config,
    root_dir: PathBuf,
) -> Result<GenerateOptions> {
    let args = &cmd.args;

    let mut config = config;
    if !args.lang.is_empty() {
        config.languages = args.lang.clone();
    }
    if let Some(file_type) = args.file_type {
        config.file_type = file_type;
    }
    if let Some(name) = &args.name {
        config.file_name = name.clone();
    }
    if args.no_short_keys {
        config.short_keys = false;
    }
    config.validate()?;

    let strategy = if args.new {
        MergeStrategy::New
    } else if args.append {
        MergeStrategy::Append
    } else {
        MergeStrategy::Update
    };

    Ok(GenerateOptions {
        root_dir,
        languages: config.languages,
        file_type: config.file_type,
        file_name: config.file_name,
        short_keys: config.short_keys,
        strategy,
        sync: args.sync,
        lang_root: PathBuf::from(config.lang_root),
        views_root: PathBuf::from(config.views_root),
        app_root: PathBuf::from(config.app_root),
        custom_path: args.path.clone(),
        ignores: config.ignores,
        verbose: args.common.verbose,
    })
}
