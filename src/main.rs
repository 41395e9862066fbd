use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use linediff::areas::session::Session;
use linediff::artifacts::core::{PagedOutput, should_page};
use linediff::artifacts::diff::render::DiffOptions;
use linediff::commands::porcelain::diff::resolve_filter;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "linediff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A line-oriented diff tool",
    long_about = "This is a line-oriented diff tool, written in Rust. \
    It computes the shortest edit script between two text files with Myers' algorithm \
    and prints every line prefixed with '+ ', '- ' or two spaces.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = ColorChoice::Auto,
        help = "When to colorize added and removed lines"
    )]
    color: ColorChoice,
    #[arg(long, global = true, help = "Write straight to stdout instead of the pager")]
    no_pager: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Applies the choice globally and tells whether lines should be colorized
    fn apply(self) -> bool {
        match self {
            // colored already honors NO_COLOR, CLICOLOR and non-terminal stdout
            ColorChoice::Auto => true,
            ColorChoice::Always => {
                colored::control::set_override(true);
                true
            }
            ColorChoice::Never => {
                colored::control::set_override(false);
                false
            }
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show the line differences between two files",
        long_about = "This command prints the shortest edit script between two text files, \
        one line per operation: '+ ' for added, '- ' for removed and two spaces for unchanged lines."
    )]
    Diff {
        #[arg(index = 1, help = "The original file")]
        old: PathBuf,
        #[arg(index = 2, help = "The modified file")]
        new: PathBuf,
        #[arg(
            long = "diff-filter",
            value_name = "ARU",
            help = "Only show these kinds of lines: A (added), R or D (removed), U (unchanged)"
        )]
        diff_filter: Option<String>,
        #[arg(long, help = "Hide added lines")]
        no_added: bool,
        #[arg(long, help = "Hide removed lines")]
        no_removed: bool,
        #[arg(long, help = "Hide unchanged lines")]
        no_unchanged: bool,
    },
    #[command(
        name = "edit-script",
        about = "Print the raw edit script between two files",
        long_about = "This command prints one operation label (ADD, DEL or NOP) per line, \
        followed by the edit distance."
    )]
    EditScript {
        #[arg(index = 1, help = "The original file")]
        old: PathBuf,
        #[arg(index = 2, help = "The modified file")]
        new: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let colorize = cli.color.apply();

    let paged_output = should_page(cli.no_pager).then(PagedOutput::new);
    let writer: Box<dyn Write> = match &paged_output {
        Some(output) => Box::new(output.writer()),
        None => Box::new(std::io::stdout()),
    };

    let pwd = std::env::current_dir()?;
    let session = Session::new(&pwd.to_string_lossy(), writer)?;

    match &cli.command {
        Commands::Diff {
            old,
            new,
            diff_filter,
            no_added,
            no_removed,
            no_unchanged,
        } => {
            let filter = resolve_filter(
                diff_filter.as_deref(),
                *no_added,
                *no_removed,
                *no_unchanged,
            )?;
            let options = DiffOptions::new(filter, colorize);

            session.diff(old, new, &options)?
        }
        Commands::EditScript { old, new } => session.edit_script(old, new)?,
    }

    if let Some(output) = paged_output {
        output.show()?;
    }

    Ok(())
}
