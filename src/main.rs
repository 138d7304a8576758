use anyhow::Result;
use clap::error::{ContextKind, ErrorKind};
use clap::{CommandFactory, Parser};
use std::process::ExitCode;

use gitrc::{commands, logging, paths::Paths, ui::Ui};

const USAGE: &str = "
  gitrc               List all profiles
  gitrc [name]        Switch to profile
  gitrc -n [name]     Create a new profile
  gitrc -d [name]     Delete the profile
  gitrc -h            Display this screen";

#[derive(Parser, Debug)]
#[command(name = "gitrc")]
#[command(about = "Easily switch between different gitconfig files")]
#[command(override_usage = USAGE)]
struct Cli {
    /// Create a new, empty profile
    #[arg(short = 'n', long = "new", conflicts_with = "delete")]
    new: bool,

    /// Delete a profile
    #[arg(short = 'd', long = "delete")]
    delete: bool,

    /// Profile name; only the first one is used
    #[arg(value_name = "NAME")]
    names: Vec<String>,
}

/// What a single run of gitrc does
#[derive(Debug, PartialEq, Eq)]
enum Action {
    List,
    Switch(String),
    Create(Option<String>),
    Delete(Option<String>),
}

impl Cli {
    fn action(self) -> Action {
        let name = self.names.into_iter().next();
        if self.new {
            Action::Create(name)
        } else if self.delete {
            Action::Delete(name)
        } else {
            match name {
                Some(name) => Action::Switch(name),
                None => Action::List,
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return parse_error(e),
    };
    let ui = Ui::from_env();

    match run(cli.action(), &ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.err(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(action: Action, ui: &Ui) -> Result<()> {
    logging::init(ui.color_enabled)?;
    let paths = Paths::new()?;

    if commands::init(&paths, ui)? {
        return Ok(());
    }

    match action {
        Action::List => commands::list(&paths, ui),
        Action::Switch(name) => commands::use_profile(&paths, &name, ui),
        Action::Create(name) => commands::create(&paths, name.as_deref(), ui),
        Action::Delete(name) => commands::delete(&paths, name.as_deref(), ui),
    }
}

/// Unknown options show the usage and succeed; other parse errors fail
fn parse_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        ErrorKind::UnknownArgument => {
            if let Some(arg) = e.get(ContextKind::InvalidArg) {
                anstream::eprintln!("Unknown option: {arg}");
            }
            let _ = Cli::command().print_help();
            ExitCode::SUCCESS
        }
        _ => {
            let _ = e.print();
            ExitCode::FAILURE
        }
    }
}
