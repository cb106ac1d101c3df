use log::error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Operation cancelled by user.")]
    Cancelled,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Could not start `{}`: {}", .program, .original)]
    SubProcess {
        program: String,
        original: std::io::Error,
    },

    #[error("Error parsing the command catalog: {}", .0)]
    Catalog(#[from] serde_yaml::Error),

    #[error("The command catalog does not define any commands.")]
    EmptyCatalog,

    #[error("Found a non-unique command name: `{}`", .0)]
    NonUniqueCommandName(String),

    #[error("Found a non-unique flag on command {}: `{}`", .0, .1)]
    NonUniqueFlag(String, String),

    #[error("Found a non-unique global flag: `{}`", .0)]
    NonUniqueGlobalFlag(String),

    #[error("Invalid flag `{}`: flags must start with `--`", .0)]
    InvalidFlagToken(String),

    #[error("Invalid command name: name may not be empty or contain spaces (`{}`)", .0)]
    InvalidCommandName(String),

    #[error("Command name `{}` is reserved for the menu", .0)]
    ReservedCommandName(String),

    #[error("Command {} refers to an unknown guided plan: `{}`", .0, .1)]
    UnknownPlan(String, String),

    #[error("Guided plan for command {} uses flag `{}`: {}", .command, .flag, .reason)]
    PlanFlagMismatch {
        command: String,
        flag: String,
        reason: String,
    },

    #[error("Unknown command: `{}`", .0)]
    UnknownCommand(String),
}

impl Error {
    pub fn sub_process(program: String, original: std::io::Error) -> Self {
        error!("Failed to spawn `{}`: {}", program, original);
        Self::SubProcess { program, original }
    }

    pub fn plan_flag_mismatch(command: &str, flag: &str, reason: &str) -> Self {
        Self::PlanFlagMismatch {
            command: command.to_string(),
            flag: flag.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error is the user backing out rather than a fault.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
