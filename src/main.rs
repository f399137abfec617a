//! adev's main application entry point.
//! Handles command-line argument parsing and dispatches to the repo
//! scaffolder or the config augmenters.

use adev::{
    augment::{ConnectionAugmenter, LoggingAugmenter},
    cli::{get_args, Args, AugmentCommand, Command, RepoArgs},
    context::RenderContext,
    error::{default_error_handler, Result},
    executor::ShellExecutor,
    logger::init_logger,
    renderer::MiniJinjaRenderer,
    repo::create_repo,
    template::TemplateSet,
};
use log::info;

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run_repo(args: RepoArgs, verbose: bool) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let executor = ShellExecutor::new(verbose);
    let templates = TemplateSet::discover(&args.templates_dir)?;

    let context = RenderContext::new(args.name)
        .with_author(args.author)
        .with_email(args.email)
        .with_description(args.description)
        .with_version(args.project_version);

    let repo_dir = create_repo(&engine, &executor, &templates, &args.type_of_repo, context)?;
    info!("Repo created at {}", repo_dir.display());
    Ok(())
}

/// Main application logic execution.
fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Repo(repo_args) => run_repo(repo_args, args.verbose),
        Command::Augment { config, target } => match target {
            AugmentCommand::Logging { handlers } => {
                let augmenter = LoggingAugmenter::new(&config);
                augmenter.scaffold(handlers.as_slice())?;
                info!("Logging config updated in {}", config.display());
                Ok(())
            }
            AugmentCommand::Connection { connections } => {
                let augmenter = ConnectionAugmenter::new(&config);
                let appended = augmenter.scaffold(connections.as_slice())?;
                info!("Added {} connection(s) to {}", appended, config.display());
                Ok(())
            }
        },
    }
}
