// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{BookError, Company, CompanyFilter, EditCompanyDescriptor, Index, Model};

pub const MESSAGE_SHOWING_HELP: &str = "opened help window";
pub const MESSAGE_EXITING: &str = "exiting LinkMeIn as requested ...";
pub const MESSAGE_LISTED_ALL: &str = "listed all companies";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("at least one field to edit must be provided")]
    NotEdited,
    #[error("company index {index} is invalid -- the displayed list has {displayed} companies")]
    InvalidIndex { index: Index, displayed: usize },
    #[error("this company already exists in the address book")]
    DuplicateCompany,
    #[error(transparent)]
    Book(#[from] BookError),
}

pub type CommandOutcome = std::result::Result<CommandResult, CommandError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn message(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditCompanyDescriptor,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: &EditCompanyDescriptor) -> Self {
        Self {
            index,
            descriptor: descriptor.clone(),
        }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &EditCompanyDescriptor {
        &self.descriptor
    }

    /// Applies the descriptor to the company at `index` in the displayed list.
    ///
    /// Every check runs before the model is touched; on error the model is
    /// unchanged.
    pub fn execute(&self, model: &mut impl Model) -> CommandOutcome {
        if !self.descriptor.is_any_field_edited() {
            return Err(CommandError::NotEdited);
        }

        let target = resolve(&*model, self.index)?;
        let edited = self.descriptor.apply_to(&target);

        if !target.is_same_company(&edited) && model.has_company(&edited) {
            warn!(
                index = self.index.one_based(),
                name = %edited.name,
                "edit rejected: duplicate company"
            );
            return Err(CommandError::DuplicateCompany);
        }
        if target.has_same_fields(&edited) {
            debug!(name = %target.name, "edit left every field unchanged");
        }

        model.set_company(&target, edited.clone())?;
        model.update_filter(CompanyFilter::All);
        let feedback = format!("{} company edited.", edited.name);
        model.set_current_viewed(Some(edited));
        info!(index = self.index.one_based(), "company edited");
        Ok(CommandResult::message(feedback))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Company),
    Edit(EditCommand),
    Delete(Index),
    Find(Vec<String>),
    List,
    View(Index),
    Help,
    Exit,
}

impl Command {
    pub const fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Edit(_) => "edit",
            Self::Delete(_) => "delete",
            Self::Find(_) => "find",
            Self::List => "list",
            Self::View(_) => "view",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    pub fn execute(&self, model: &mut impl Model) -> CommandOutcome {
        debug!(command = self.word(), "executing command");
        match self {
            Self::Add(company) => {
                if model.has_company(company) {
                    return Err(CommandError::DuplicateCompany);
                }
                model.add_company(company.clone())?;
                Ok(CommandResult::message(format!(
                    "new company added: {company}"
                )))
            }
            Self::Edit(edit) => edit.execute(model),
            Self::Delete(index) => {
                let target = resolve(&*model, *index)?;
                model.delete_company(&target)?;
                Ok(CommandResult::message(format!(
                    "deleted company: {}",
                    target.name
                )))
            }
            Self::Find(keywords) => {
                model.update_filter(CompanyFilter::NameKeywords(keywords.clone()));
                let count = model.filtered_companies().len();
                Ok(CommandResult::message(format!("{count} companies listed")))
            }
            Self::List => {
                model.update_filter(CompanyFilter::All);
                Ok(CommandResult::message(MESSAGE_LISTED_ALL))
            }
            Self::View(index) => {
                let target = resolve(&*model, *index)?;
                let feedback = target.details();
                model.set_current_viewed(Some(target));
                Ok(CommandResult::message(feedback))
            }
            Self::Help => Ok(CommandResult {
                feedback: MESSAGE_SHOWING_HELP.to_owned(),
                show_help: true,
                exit: false,
            }),
            Self::Exit => Ok(CommandResult {
                feedback: MESSAGE_EXITING.to_owned(),
                show_help: false,
                exit: true,
            }),
        }
    }
}

/// Looks `index` up in the displayed list, not the full book.
fn resolve(model: &impl Model, index: Index) -> Result<Company, CommandError> {
    let displayed = model.filtered_companies();
    displayed
        .get(index.zero_based())
        .cloned()
        .ok_or_else(|| CommandError::InvalidIndex {
            index,
            displayed: displayed.len(),
        })
}
