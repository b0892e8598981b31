// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeSet;
use thiserror::Error;

use crate::{
    ApplicationStatus, Command, Company, CompanyName, Deadline, EditCommand,
    EditCompanyDescriptor, Email, Index, Phone, RecruiterName, Role, Tag, ValidationError,
};

pub const ADD_USAGE: &str = "add c/COMPANY_NAME n/RECRUITER_NAME r/ROLE a/APPLICATION_STATUS d/DEADLINE [e/EMAIL] [p/PHONE] [t/TAG]...";
pub const EDIT_USAGE: &str = "edit INDEX [c/COMPANY_NAME] [n/RECRUITER_NAME] [r/ROLE] [a/APPLICATION_STATUS] [d/DEADLINE] [e/EMAIL] [p/PHONE] [t/TAG]...";
pub const DELETE_USAGE: &str = "delete INDEX";
pub const VIEW_USAGE: &str = "view INDEX";
pub const FIND_USAGE: &str = "find KEYWORD [MORE_KEYWORDS]...";

pub const HELP_TEXT: &str = "\
commands:
  add c/COMPANY_NAME n/RECRUITER_NAME r/ROLE a/APPLICATION_STATUS d/DEADLINE [e/EMAIL] [p/PHONE] [t/TAG]...
  edit INDEX [c/COMPANY_NAME] [n/RECRUITER_NAME] [r/ROLE] [a/APPLICATION_STATUS] [d/DEADLINE] [e/EMAIL] [p/PHONE] [t/TAG]...
  delete INDEX
  view INDEX
  find KEYWORD [MORE_KEYWORDS]...
  list
  help
  exit
INDEX is the position in the displayed list, starting at 1.
APPLICATION_STATUS is one of pa, pi, po, a, r. DEADLINE is YYYY-MM-DD.
In edit, a lone t/ clears every tag.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Prefix {
    CompanyName,
    RecruiterName,
    Role,
    Status,
    Deadline,
    Email,
    Phone,
    Tag,
}

impl Prefix {
    pub const ALL: [Self; 8] = [
        Self::CompanyName,
        Self::RecruiterName,
        Self::Role,
        Self::Status,
        Self::Deadline,
        Self::Email,
        Self::Phone,
        Self::Tag,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CompanyName => "c/",
            Self::RecruiterName => "n/",
            Self::Role => "r/",
            Self::Status => "a/",
            Self::Deadline => "d/",
            Self::Email => "e/",
            Self::Phone => "p/",
            Self::Tag => "t/",
        }
    }

    const fn repeatable(self) -> bool {
        matches!(self, Self::Tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("enter a command -- type `help` to see what is available")]
    Empty,
    #[error("unknown command {0:?} -- type `help` to see what is available")]
    UnknownCommand(String),
    #[error("invalid command format -- usage: {usage}")]
    InvalidFormat { usage: &'static str },
    #[error("index must be a positive integer, got {0:?}")]
    InvalidIndex(String),
    #[error("invalid value for {}: {source}", .prefix.as_str())]
    InvalidValue {
        prefix: Prefix,
        #[source]
        source: ValidationError,
    },
    #[error("prefix {} may only be given once", .0.as_str())]
    DuplicatePrefix(Prefix),
    #[error("missing required fields {} -- usage: {usage}", join_prefixes(.missing))]
    MissingPrefixes {
        missing: Vec<Prefix>,
        usage: &'static str,
    },
    #[error("at least one field to edit must be provided -- usage: {usage}", usage = EDIT_USAGE)]
    NotEdited,
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Parses one line of user input into a command.
pub fn parse_command(input: &str) -> ParseResult<Command> {
    let trimmed = input.trim();
    let (word, args) = match trimmed.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args.trim()),
        None => (trimmed, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Err(ParseError::Empty),
        "add" => parse_add(args),
        "edit" => parse_edit(args),
        "delete" => parse_index(args, DELETE_USAGE).map(Command::Delete),
        "view" => parse_index(args, VIEW_USAGE).map(Command::View),
        "find" => parse_find(args),
        "list" => Ok(Command::List),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand(word.to_owned())),
    }
}

fn parse_add(args: &str) -> ParseResult<Command> {
    let arguments = ArgumentMap::tokenize(args);
    if !arguments.preamble.is_empty() {
        return Err(ParseError::InvalidFormat { usage: ADD_USAGE });
    }

    let required_prefixes = [
        Prefix::CompanyName,
        Prefix::RecruiterName,
        Prefix::Role,
        Prefix::Status,
        Prefix::Deadline,
    ];
    let missing = required_prefixes
        .into_iter()
        .filter(|prefix| !arguments.contains(*prefix))
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(ParseError::MissingPrefixes {
            missing,
            usage: ADD_USAGE,
        });
    }

    let name = field(
        Prefix::CompanyName,
        CompanyName::parse(required(&arguments, Prefix::CompanyName)?),
    )?;
    let recruiter_name = field(
        Prefix::RecruiterName,
        RecruiterName::parse(required(&arguments, Prefix::RecruiterName)?),
    )?;
    let role = field(Prefix::Role, Role::parse(required(&arguments, Prefix::Role)?))?;
    let status = field(
        Prefix::Status,
        parse_status(required(&arguments, Prefix::Status)?),
    )?;
    let deadline = field(
        Prefix::Deadline,
        Deadline::parse(required(&arguments, Prefix::Deadline)?),
    )?;

    let company = Company {
        name,
        phone: optional_field(&arguments, Prefix::Phone, Phone::parse)?,
        email: optional_field(&arguments, Prefix::Email, Email::parse)?,
        role,
        deadline,
        status,
        recruiter_name,
        tags: parse_tags(arguments.all(Prefix::Tag))?,
    };
    Ok(Command::Add(company))
}

fn parse_edit(args: &str) -> ParseResult<Command> {
    let arguments = ArgumentMap::tokenize(args);
    if arguments.preamble.is_empty() {
        return Err(ParseError::InvalidFormat { usage: EDIT_USAGE });
    }
    let index = parse_one_based(&arguments.preamble)?;

    let mut descriptor = EditCompanyDescriptor::new();
    descriptor.set_name(optional_field(
        &arguments,
        Prefix::CompanyName,
        CompanyName::parse,
    )?);
    descriptor.set_recruiter_name(optional_field(
        &arguments,
        Prefix::RecruiterName,
        RecruiterName::parse,
    )?);
    descriptor.set_role(optional_field(&arguments, Prefix::Role, Role::parse)?);
    descriptor.set_status(optional_field(&arguments, Prefix::Status, parse_status)?);
    descriptor.set_deadline(optional_field(
        &arguments,
        Prefix::Deadline,
        Deadline::parse,
    )?);
    descriptor.set_email(optional_field(&arguments, Prefix::Email, Email::parse)?);
    descriptor.set_phone(optional_field(&arguments, Prefix::Phone, Phone::parse)?);

    let tag_values = arguments.all(Prefix::Tag);
    if !tag_values.is_empty() {
        let tags = if tag_values == [""] {
            BTreeSet::new()
        } else {
            parse_tags(tag_values)?
        };
        descriptor.set_tags(Some(&tags));
    }

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }
    Ok(Command::Edit(EditCommand::new(index, &descriptor)))
}

fn parse_find(args: &str) -> ParseResult<Command> {
    let keywords = args
        .split_whitespace()
        .map(str::to_owned)
        .collect::<Vec<_>>();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat { usage: FIND_USAGE });
    }
    Ok(Command::Find(keywords))
}

fn parse_index(args: &str, usage: &'static str) -> ParseResult<Index> {
    if args.is_empty() || args.split_whitespace().count() != 1 {
        return Err(ParseError::InvalidFormat { usage });
    }
    parse_one_based(args)
}

/// Only plain digits count; `usize::from_str` would also take a leading `+`.
fn parse_one_based(raw: &str) -> ParseResult<Index> {
    let trimmed = raw.trim();
    Some(trimmed)
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit()))
        .and_then(|digits| digits.parse::<usize>().ok())
        .and_then(Index::from_one_based)
        .ok_or_else(|| ParseError::InvalidIndex(trimmed.to_owned()))
}

fn parse_status(raw: &str) -> Result<ApplicationStatus, ValidationError> {
    ApplicationStatus::parse(raw).ok_or(ValidationError::InvalidStatus)
}

fn parse_tags(values: Vec<&str>) -> ParseResult<BTreeSet<Tag>> {
    values
        .into_iter()
        .map(|value| field(Prefix::Tag, Tag::parse(value)))
        .collect()
}

fn field<T>(prefix: Prefix, parsed: Result<T, ValidationError>) -> ParseResult<T> {
    parsed.map_err(|source| ParseError::InvalidValue { prefix, source })
}

fn required(arguments: &ArgumentMap, prefix: Prefix) -> ParseResult<&str> {
    Ok(arguments.single(prefix)?.unwrap_or_default())
}

fn optional_field<T>(
    arguments: &ArgumentMap,
    prefix: Prefix,
    parse: impl FnOnce(&str) -> Result<T, ValidationError>,
) -> ParseResult<Option<T>> {
    arguments
        .single(prefix)?
        .map(|raw| field(prefix, parse(raw)))
        .transpose()
}

fn join_prefixes(prefixes: &[Prefix]) -> String {
    prefixes
        .iter()
        .map(|prefix| prefix.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits `c/Foo Bar n/Jane` style arguments into the text before the first
/// prefix and the values that follow each prefix.
#[derive(Debug, Default)]
struct ArgumentMap {
    preamble: String,
    values: Vec<(Prefix, String)>,
}

impl ArgumentMap {
    fn tokenize(args: &str) -> Self {
        let mut map = Self::default();
        let mut current: Option<(Prefix, Vec<&str>)> = None;
        let mut preamble = Vec::new();

        for token in args.split_whitespace() {
            let started = Prefix::ALL
                .into_iter()
                .find(|prefix| token.starts_with(prefix.as_str()));
            if let Some(prefix) = started {
                if let Some((previous, words)) = current.take() {
                    map.values.push((previous, words.join(" ")));
                }
                let rest = &token[prefix.as_str().len()..];
                let words = if rest.is_empty() { Vec::new() } else { vec![rest] };
                current = Some((prefix, words));
            } else if let Some((_, words)) = current.as_mut() {
                words.push(token);
            } else {
                preamble.push(token);
            }
        }
        if let Some((previous, words)) = current {
            map.values.push((previous, words.join(" ")));
        }
        map.preamble = preamble.join(" ");
        map
    }

    fn contains(&self, prefix: Prefix) -> bool {
        self.values.iter().any(|(seen, _)| *seen == prefix)
    }

    fn single(&self, prefix: Prefix) -> ParseResult<Option<&str>> {
        let mut matches = self.values.iter().filter(|(seen, _)| *seen == prefix);
        let first = matches.next();
        if !prefix.repeatable() && matches.next().is_some() {
            return Err(ParseError::DuplicatePrefix(prefix));
        }
        Ok(first.map(|(_, value)| value.as_str()))
    }

    fn all(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(seen, _)| *seen == prefix)
            .map(|(_, value)| value.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{ParseError, Prefix, parse_command};
    use crate::{ApplicationStatus, Command, Index, Tag, ValidationError};
    use std::collections::BTreeSet;

    fn edit(input: &str) -> crate::EditCommand {
        match parse_command(input).expect("edit parses") {
            Command::Edit(edit) => edit,
            other => panic!("expected edit, got {other:?}"),
        }
    }

    #[test]
    fn add_collects_multi_word_values_and_tags() {
        let command = parse_command(
            "add c/Jane Street n/Ann Lee r/Quant Trader a/pi d/2026-11-01 e/ann@js.com p/91234567 t/finance t/nyc",
        )
        .expect("add parses");
        let Command::Add(company) = command else {
            panic!("expected add");
        };
        assert_eq!(company.name.as_str(), "Jane Street");
        assert_eq!(company.recruiter_name.as_str(), "Ann Lee");
        assert_eq!(company.role.as_str(), "Quant Trader");
        assert_eq!(company.status, ApplicationStatus::PendingInterview);
        assert_eq!(company.deadline.to_string(), "2026-11-01");
        assert_eq!(company.tags.len(), 2);
        assert!(company.email.is_some() && company.phone.is_some());
    }

    #[test]
    fn add_reports_every_missing_required_prefix() {
        let error = parse_command("add c/Foo r/Dev").expect_err("missing prefixes");
        let ParseError::MissingPrefixes { missing, .. } = &error else {
            panic!("expected missing prefixes, got {error:?}");
        };
        assert_eq!(
            missing,
            &vec![Prefix::RecruiterName, Prefix::Status, Prefix::Deadline]
        );
        assert!(error.to_string().starts_with("missing required fields n/ a/ d/"));
    }

    #[test]
    fn add_rejects_invalid_field_values() {
        let error = parse_command("add c/Foo n/Ann r/Dev a/maybe d/2026-11-01")
            .expect_err("bad status");
        assert_eq!(
            error,
            ParseError::InvalidValue {
                prefix: Prefix::Status,
                source: ValidationError::InvalidStatus,
            }
        );
    }

    #[test]
    fn edit_builds_sparse_descriptor() {
        let command = edit("edit 2 p/91234567 a/A");
        assert_eq!(command.index(), Index::from_one_based(2).expect("positive"));
        let descriptor = command.descriptor();
        assert_eq!(descriptor.phone().map(|phone| phone.as_str()), Some("91234567"));
        assert_eq!(descriptor.status(), Some(ApplicationStatus::Accepted));
        assert_eq!(descriptor.name(), None);
        assert_eq!(descriptor.tags(), None);
    }

    #[test]
    fn edit_lone_tag_prefix_clears_tags() {
        let command = edit("edit 1 t/");
        assert_eq!(command.descriptor().tags(), Some(&BTreeSet::new()));

        let tagged = edit("edit 1 t/remote t/visa");
        let expected = ["remote", "visa"]
            .into_iter()
            .map(|value| Tag::parse(value).expect("valid tag"))
            .collect::<BTreeSet<_>>();
        assert_eq!(tagged.descriptor().tags(), Some(&expected));
    }

    #[test]
    fn edit_without_fields_is_rejected() {
        assert_eq!(parse_command("edit 1"), Err(ParseError::NotEdited));
    }

    #[test]
    fn edit_index_must_be_positive_integer() {
        assert_eq!(
            parse_command("edit 0 p/911"),
            Err(ParseError::InvalidIndex("0".to_owned()))
        );
        assert_eq!(
            parse_command("edit abc p/911"),
            Err(ParseError::InvalidIndex("abc".to_owned()))
        );
        assert!(matches!(
            parse_command("edit p/911"),
            Err(ParseError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn signed_indices_are_rejected() {
        assert_eq!(
            parse_command("edit +1 p/911"),
            Err(ParseError::InvalidIndex("+1".to_owned()))
        );
        assert_eq!(
            parse_command("edit -1 p/911"),
            Err(ParseError::InvalidIndex("-1".to_owned()))
        );
        assert_eq!(
            parse_command("delete +2"),
            Err(ParseError::InvalidIndex("+2".to_owned()))
        );
        assert_eq!(
            parse_command("view 02"),
            Ok(Command::View(Index::from_zero_based(1)))
        );
    }

    #[test]
    fn edit_rejects_repeated_single_value_prefix() {
        assert_eq!(
            parse_command("edit 1 p/911 p/922"),
            Err(ParseError::DuplicatePrefix(Prefix::Phone))
        );
    }

    #[test]
    fn simple_commands_parse() {
        assert_eq!(parse_command("  LIST "), Ok(Command::List));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("exit"), Ok(Command::Exit));
        assert_eq!(
            parse_command("view 3"),
            Ok(Command::View(Index::from_one_based(3).expect("positive")))
        );
        assert_eq!(
            parse_command("find jane street"),
            Ok(Command::Find(vec!["jane".to_owned(), "street".to_owned()]))
        );
        assert!(matches!(
            parse_command("delete 1 2"),
            Err(ParseError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn unknown_and_empty_input_are_errors() {
        assert_eq!(parse_command("   "), Err(ParseError::Empty));
        assert_eq!(
            parse_command("frobnicate 1"),
            Err(ParseError::UnknownCommand("frobnicate".to_owned()))
        );
    }
}
