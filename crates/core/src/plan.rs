//! Guided prompt plans for subcommands whose flags cannot be gathered by the
//! generic option loop.
//!
//! A plan is a flat list of [`Step`]s. Conditional follow-ups hang off a
//! [`Step::Toggle`] and mutually exclusive flags are declared as the branch
//! set of a [`Step::Exclusive`], so adding another "pick exactly one of"
//! command means declaring its branches rather than writing a new handler.

use std::fmt::{Display, Formatter};

/// One alternative of a mutually exclusive option group.
#[derive(Debug, PartialEq, Eq)]
pub struct Branch {
    /// Menu text shown next to the branch number.
    pub label: &'static str,
    pub flag: &'static str,
    /// Prompt for the value that follows `flag`.
    pub prompt: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    /// A required positional value.
    Positional { prompt: &'static str },
    /// A flag that is always emitted with a required value.
    Valued {
        flag: &'static str,
        prompt: &'static str,
    },
    /// A flag emitted with its value only when the value is non-empty.
    Elidable {
        flag: &'static str,
        prompt: &'static str,
    },
    /// A yes/no question. On yes, `flag` (if any) is emitted bare and the
    /// follow-up steps run.
    Toggle {
        question: &'static str,
        flag: Option<&'static str>,
        then: &'static [Step],
    },
    /// Exactly one branch is chosen by number; its flag and value are emitted.
    Exclusive {
        title: &'static str,
        branches: &'static [Branch],
    },
}

/// Whether a flag used by a plan is emitted with or without a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagUse {
    Bare,
    WithValue,
}

impl Display for FlagUse {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagUse::Bare => formatter.write_str("without a value"),
            FlagUse::WithValue => formatter.write_str("with a value"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub steps: &'static [Step],
}

impl Plan {
    /// Every flag the plan can emit, in declaration order, with how it is used.
    pub fn flag_uses(&self) -> Vec<(&'static str, FlagUse)> {
        let mut uses = Vec::new();
        collect_flag_uses(self.steps, &mut uses);
        uses
    }
}

fn collect_flag_uses(steps: &'static [Step], uses: &mut Vec<(&'static str, FlagUse)>) {
    for step in steps {
        match step {
            Step::Positional { .. } => {}
            Step::Valued { flag, .. } | Step::Elidable { flag, .. } => {
                uses.push((*flag, FlagUse::WithValue));
            }
            Step::Toggle { flag, then, .. } => {
                if let Some(flag) = flag {
                    uses.push((*flag, FlagUse::Bare));
                }
                collect_flag_uses(*then, uses);
            }
            Step::Exclusive { branches, .. } => {
                uses.extend(branches.iter().map(|b| (b.flag, FlagUse::WithValue)));
            }
        }
    }
}

pub static STORE: Plan = Plan {
    name: "store",
    steps: &[
        Step::Positional {
            prompt: "Enter file path",
        },
        Step::Valued {
            flag: "--epochs",
            prompt: "Enter number of epochs (or 'max' for maximum)",
        },
        Step::Toggle {
            question: "Make blob deletable?",
            flag: Some("--deletable"),
            then: &[],
        },
        Step::Toggle {
            question: "Create as shared blob?",
            flag: Some("--share"),
            then: &[Step::Elidable {
                flag: "--amount",
                prompt: "Enter amount to fund (optional)",
            }],
        },
        Step::Toggle {
            question: "Force store even if already exists?",
            flag: Some("--force"),
            then: &[],
        },
    ],
};

pub static READ: Plan = Plan {
    name: "read",
    steps: &[
        Step::Positional {
            prompt: "Enter blob ID",
        },
        Step::Toggle {
            question: "Specify output file?",
            flag: None,
            then: &[Step::Valued {
                flag: "--out",
                prompt: "Enter output file path",
            }],
        },
        Step::Toggle {
            question: "Use custom RPC URL?",
            flag: None,
            then: &[Step::Valued {
                flag: "--rpc-url",
                prompt: "Enter RPC URL",
            }],
        },
    ],
};

pub static LIST_BLOBS: Plan = Plan {
    name: "list-blobs",
    steps: &[Step::Toggle {
        question: "Include expired blobs?",
        flag: Some("--include-expired"),
        then: &[],
    }],
};

pub static BLOB_STATUS: Plan = Plan {
    name: "blob-status",
    steps: &[Step::Exclusive {
        title: "Check blob status - Choose one of the following options:",
        branches: &[
            Branch {
                label: "Check by blob ID",
                flag: "--blob-id",
                prompt: "Enter blob ID",
            },
            Branch {
                label: "Check by file path",
                flag: "--file",
                prompt: "Enter file path",
            },
        ],
    }],
};

pub static DELETE: Plan = Plan {
    name: "delete",
    steps: &[
        Step::Exclusive {
            title: "Delete blob - Choose one of the following options:",
            branches: &[
                Branch {
                    label: "Delete by blob ID",
                    flag: "--blob-id",
                    prompt: "Enter blob ID",
                },
                Branch {
                    label: "Delete by file path",
                    flag: "--file",
                    prompt: "Enter file path",
                },
                Branch {
                    label: "Delete by object ID",
                    flag: "--object-id",
                    prompt: "Enter object ID",
                },
            ],
        },
        Step::Toggle {
            question: "Skip confirmation prompt?",
            flag: Some("--yes"),
            then: &[],
        },
        Step::Toggle {
            question: "Skip status check after deletion?",
            flag: Some("--no-status-check"),
            then: &[],
        },
    ],
};

static PLANS: [&Plan; 5] = [&STORE, &READ, &LIST_BLOBS, &BLOB_STATUS, &DELETE];

/// Looks up a guided plan by the name used in the catalog's `guided` field.
pub fn find(name: &str) -> Option<&'static Plan> {
    PLANS.iter().copied().find(|plan| plan.name == name)
}
