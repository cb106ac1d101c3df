//! The catalog of subcommands and global flags offered by the front-end.
//!
//! The catalog is a YAML table compiled into the binary. It is parsed into
//! raw [`CommandDefinition`]s, validated, and frozen into a [`Catalog`] that
//! the navigator and collectors only ever borrow.

use std::fmt::{Display, Formatter};

use indexmap::map::Entry;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::error::Error::{
    EmptyCatalog, InvalidCommandName, InvalidFlagToken, NonUniqueCommandName, NonUniqueFlag,
    NonUniqueGlobalFlag, ReservedCommandName, UnknownPlan,
};
use crate::error::{Error, Result};
use crate::plan::{self, FlagUse, Plan};

/// The table shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../catalog/walrus.yml");

/// Name the menu uses for its "leave without running anything" row.
pub const EXIT_COMMAND: &str = "exit";

#[derive(Deserialize, Debug, Clone)]
pub struct FlagDefinition {
    pub flag: String,
    pub description: String,
    #[serde(default)]
    pub bare: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CommandDefinition {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub optional: Vec<String>,
    #[serde(default)]
    pub flags: Vec<FlagDefinition>,
    pub guided: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CatalogDefinition {
    pub commands: Vec<CommandDefinition>,
    #[serde(default)]
    pub global_flags: Vec<FlagDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    pub token: String,
    pub description: String,
    /// Bare flags are never followed by a value.
    pub bare: bool,
}

impl Display for FlagSpec {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: {}", self.token, self.description)
    }
}

/// How the arguments of a subcommand are gathered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Required positionals, then a free-form option loop over the flag table.
    Generic,
    /// A fixed plan of questions.
    Guided(&'static Plan),
}

#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: String,
    pub description: String,
    pub required_positionals: Vec<String>,
    /// Reserved: no prompt sequence consumes these yet.
    pub optional_positionals: Vec<String>,
    pub flags: IndexMap<String, FlagSpec>,
    pub strategy: Strategy,
}

impl CommandSpec {
    pub fn flag(&self, token: &str) -> Option<&FlagSpec> {
        self.flags.get(token)
    }
}

impl Display for CommandSpec {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: {}", self.name, self.description)
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    commands: IndexMap<String, CommandSpec>,
    global_flags: IndexMap<String, FlagSpec>,
}

impl Catalog {
    /// Builds the catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded table does not parse or validate.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Parses and validates a catalog table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] for malformed YAML and one of the
    /// validation errors for duplicate names, bad flag tokens, reserved names
    /// or guided plans that don't match the command's flag table.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let definition: CatalogDefinition = serde_yaml::from_str(yaml)?;
        Self::from_definition(definition)
    }

    /// # Errors
    ///
    /// See [`Catalog::from_yaml`].
    pub fn from_definition(definition: CatalogDefinition) -> Result<Self> {
        if definition.commands.is_empty() {
            return Err(EmptyCatalog);
        }

        let mut commands = IndexMap::with_capacity(definition.commands.len());
        for command in definition.commands {
            let spec = build_command(command)?;
            match commands.entry(spec.name.clone()) {
                Entry::Occupied(entry) => return Err(NonUniqueCommandName(entry.key().clone())),
                Entry::Vacant(entry) => {
                    entry.insert(spec);
                }
            }
        }

        let global_flags = build_flags(definition.global_flags, NonUniqueGlobalFlag)?;

        debug!(
            "Catalog has {} commands and {} global flags",
            commands.len(),
            global_flags.len()
        );

        Ok(Self {
            commands,
            global_flags,
        })
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    /// Commands in declaration order.
    pub fn commands(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.values()
    }

    /// Global flags in declaration order.
    pub fn global_flags(&self) -> impl Iterator<Item = &FlagSpec> {
        self.global_flags.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(InvalidCommandName(name.to_string()));
    }

    if name == EXIT_COMMAND {
        return Err(ReservedCommandName(name.to_string()));
    }

    Ok(())
}

fn validate_flag_token(token: &str) -> Result<()> {
    let valid = token
        .strip_prefix("--")
        .is_some_and(|rest| !rest.is_empty() && !rest.contains(char::is_whitespace));

    if valid {
        Ok(())
    } else {
        Err(InvalidFlagToken(token.to_string()))
    }
}

fn build_flags(
    definitions: Vec<FlagDefinition>,
    duplicate: impl Fn(String) -> Error,
) -> Result<IndexMap<String, FlagSpec>> {
    let mut flags = IndexMap::with_capacity(definitions.len());

    for definition in definitions {
        validate_flag_token(&definition.flag)?;

        if flags.contains_key(&definition.flag) {
            return Err(duplicate(definition.flag));
        }

        flags.insert(
            definition.flag.clone(),
            FlagSpec {
                token: definition.flag,
                description: definition.description,
                bare: definition.bare,
            },
        );
    }

    Ok(flags)
}

fn build_command(definition: CommandDefinition) -> Result<CommandSpec> {
    validate_name(&definition.name)?;

    let name = definition.name;
    let flags = build_flags(definition.flags, |flag| NonUniqueFlag(name.clone(), flag))?;

    let strategy = match definition.guided {
        None => Strategy::Generic,
        Some(plan_name) => match plan::find(&plan_name) {
            Some(plan) => {
                check_plan_flags(&name, plan, &flags)?;
                Strategy::Guided(plan)
            }
            None => return Err(UnknownPlan(name, plan_name)),
        },
    };

    Ok(CommandSpec {
        name,
        description: definition.description,
        required_positionals: definition.required,
        optional_positionals: definition.optional,
        flags,
        strategy,
    })
}

/// A plan may only emit flags its command declares, and must use each one
/// the way the table says (bare or with a value).
fn check_plan_flags(command: &str, plan: &Plan, flags: &IndexMap<String, FlagSpec>) -> Result<()> {
    for (flag, flag_use) in plan.flag_uses() {
        let Some(spec) = flags.get(flag) else {
            return Err(Error::plan_flag_mismatch(
                command,
                flag,
                "the flag is not declared for this command",
            ));
        };

        let declared = if spec.bare {
            FlagUse::Bare
        } else {
            FlagUse::WithValue
        };

        if declared != flag_use {
            return Err(Error::plan_flag_mismatch(
                command,
                flag,
                &format!("the plan emits it {flag_use} but it is declared {declared}"),
            ));
        }
    }

    Ok(())
}
