// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use time::Date;

use crate::validation::{
    ValidationError, ValidationResult, format_date, is_valid_company_name, is_valid_email,
    is_valid_phone, is_valid_recruiter_name, is_valid_role, is_valid_tag, parse_date,
};

macro_rules! text_field {
    ($name:ident, $is_valid:path, $error:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn parse(value: &str) -> ValidationResult<Self> {
                let trimmed = value.trim();
                if !$is_valid(trimmed) {
                    return Err($error);
                }
                Ok(Self(trimmed.to_owned()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> ValidationResult<Self> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_field!(
    CompanyName,
    is_valid_company_name,
    ValidationError::InvalidCompanyName
);
text_field!(
    RecruiterName,
    is_valid_recruiter_name,
    ValidationError::InvalidRecruiterName
);
text_field!(Role, is_valid_role, ValidationError::InvalidRole);
text_field!(Phone, is_valid_phone, ValidationError::InvalidPhone);
text_field!(Email, is_valid_email, ValidationError::InvalidEmail);
text_field!(Tag, is_valid_tag, ValidationError::InvalidTag);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Deadline(Date);

impl Deadline {
    pub const fn new(date: Date) -> Self {
        Self(date)
    }

    pub fn parse(value: &str) -> ValidationResult<Self> {
        parse_date(value).map(Self)
    }

    pub const fn date(self) -> Date {
        self.0
    }
}

impl TryFrom<String> for Deadline {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::parse(&value)
    }
}

impl From<Deadline> for String {
    fn from(value: Deadline) -> Self {
        format_date(value.0)
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_date(self.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    PendingApplication,
    PendingInterview,
    PendingOutcome,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [Self; 5] = [
        Self::PendingApplication,
        Self::PendingInterview,
        Self::PendingOutcome,
        Self::Accepted,
        Self::Rejected,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PendingApplication => "pa",
            Self::PendingInterview => "pi",
            Self::PendingOutcome => "po",
            Self::Accepted => "a",
            Self::Rejected => "r",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pa" => Some(Self::PendingApplication),
            "pi" => Some(Self::PendingInterview),
            "po" => Some(Self::PendingOutcome),
            "a" => Some(Self::Accepted),
            "r" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PendingApplication => "pending application",
            Self::PendingInterview => "pending interview",
            Self::PendingOutcome => "pending outcome",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A tracked job application.
///
/// Values are replaced wholesale on edit; the model only ever hands out
/// shared references to stored companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: CompanyName,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub role: Role,
    pub deadline: Deadline,
    pub status: ApplicationStatus,
    pub recruiter_name: RecruiterName,
    pub tags: BTreeSet<Tag>,
}

impl Company {
    /// Identity check used for duplicate detection: same company name.
    pub fn is_same_company(&self, other: &Self) -> bool {
        self.name == other.name
    }

    /// Full structural equality over every field.
    pub fn has_same_fields(&self, other: &Self) -> bool {
        self == other
    }

    pub fn details(&self) -> String {
        let mut out = format!(
            "{}\n  role: {}\n  status: {}\n  deadline: {}\n  recruiter: {}",
            self.name, self.role, self.status, self.deadline, self.recruiter_name
        );
        if let Some(phone) = &self.phone {
            out.push_str(&format!("\n  phone: {phone}"));
        }
        if let Some(email) = &self.email {
            out.push_str(&format!("\n  email: {email}"));
        }
        if !self.tags.is_empty() {
            out.push_str(&format!("\n  tags: {}", self.tag_list()));
        }
        out
    }

    fn tag_list(&self) -> String {
        self.tags
            .iter()
            .map(|tag| format!("[{tag}]"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | due {}",
            self.name, self.role, self.status, self.deadline
        )?;
        if !self.tags.is_empty() {
            write!(f, " | {}", self.tag_list())?;
        }
        Ok(())
    }
}
