use anyhow::Result;
use arvo::logging::init_logging;
use arvo::{Identity, LogOptions, Repository};
use chrono::{DateTime, FixedOffset};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "arvo",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal version control engine for project artifacts",
    long_about = "arvo stages working-tree files into an index, seals them into \
    single-parent commits on named branches, and stores every object under the \
    SHA-256 of its content.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv, -vvv)")]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path. \
        Running it on an existing repository changes nothing."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
        #[arg(long, default_value = "", help = "User name recorded in the config")]
        name: String,
        #[arg(long, default_value = "", help = "User email recorded in the config")]
        email: String,
    },
    #[command(
        name = "add",
        about = "Add files to the staging index",
        long_about = "This command stages files for the next commit. \
        Directories are expanded to the tracked files they contain."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The paths to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command seals the staging index into a new commit on the current branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
        #[arg(long, env = "ARVO_AUTHOR_NAME", help = "Author name")]
        author_name: Option<String>,
        #[arg(long, env = "ARVO_AUTHOR_EMAIL", help = "Author email")]
        author_email: Option<String>,
        #[arg(long, env = "ARVO_AUTHOR_DATE", value_parser = parse_timestamp, help = "Author date (RFC 3339)")]
        author_date: Option<DateTime<FixedOffset>>,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command lists staged files and files changed since they were staged."
    )]
    Status,
    #[command(
        name = "diff",
        about = "List files changed since they were staged",
        long_about = "This command lists tracked files whose content differs from the staging index."
    )]
    Diff,
    #[command(
        name = "log",
        about = "Show the commit history of the current branch",
        long_about = "This command walks the current branch from its head commit back to the root commit."
    )]
    Log {
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the full or abbreviated SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short, long, help = "Pretty-print the object")]
        pretty: bool,
        #[arg(index = 1, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Compute the object id of a file",
        long_about = "This command hashes a working-tree file without storing it."
    )]
    HashObject {
        #[arg(index = 1)]
        file: PathBuf,
    },
}

fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value)
}

fn open_repository(path: Option<&PathBuf>) -> Result<Repository> {
    let path = match path {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };

    Repository::new(path, Box::new(std::io::stdout()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match &cli.command {
        Commands::Init { path, name, email } => {
            let repository = open_repository(path.as_ref())?;
            let created = repository.init(name, email)?;
            repository.show_init(created)?
        }
        Commands::Add { paths } => {
            let repository = open_repository(None)?;
            let report = repository.add(paths)?;
            repository.show_add(&report)?
        }
        Commands::Commit {
            message,
            author_name,
            author_email,
            author_date,
        } => {
            let repository = open_repository(None)?;
            let identity = Identity::new(author_name.clone(), author_email.clone(), *author_date);
            let commit_oid = repository.commit(message, &identity)?;
            repository.show_commit(&commit_oid)?
        }
        Commands::Status => {
            let repository = open_repository(None)?;
            let status_info = repository.status()?;
            repository.show_status(&status_info)?
        }
        Commands::Diff => {
            let repository = open_repository(None)?;
            let files = repository.diff()?;
            repository.show_diff(&files)?
        }
        Commands::Log { oneline } => {
            let repository = open_repository(None)?;
            repository.show_log(&LogOptions { oneline: *oneline })?
        }
        Commands::CatFile { pretty, sha } => {
            let repository = open_repository(None)?;
            repository.show_object(sha, *pretty)?
        }
        Commands::HashObject { file } => {
            let repository = open_repository(None)?;
            let object_id = repository.hash_object(file)?;
            repository.show_object_id(&object_id)?
        }
    }

    Ok(())
}
