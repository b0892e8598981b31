// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use thiserror::Error;
use time::Date;
use time::macros::format_description;

pub const DATE_LAYOUT: &str = "YYYY-MM-DD";

const MAX_COMPANY_NAME_CHARS: usize = 100;
const MIN_PHONE_DIGITS: usize = 3;
const EMAIL_SPECIAL_CHARS: &[char] = &['+', '_', '.', '-'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("company name must be 1-100 printable characters -- enter a name and retry")]
    InvalidCompanyName,
    #[error("recruiter name may only contain letters, digits and spaces, and cannot be blank")]
    InvalidRecruiterName,
    #[error("role cannot be blank -- enter the role you applied for")]
    InvalidRole,
    #[error("phone number must contain only digits and be at least 3 digits long")]
    InvalidPhone,
    #[error("email must look like local-part@domain (for example jane.doe@example.com)")]
    InvalidEmail,
    #[error("deadline must be a calendar date in YYYY-MM-DD form")]
    InvalidDeadline,
    #[error("application status must be one of pa, pi, po, a, r")]
    InvalidStatus,
    #[error("tag must be a single alphanumeric word")]
    InvalidTag,
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

pub fn is_valid_company_name(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty()
        && trimmed.chars().count() <= MAX_COMPANY_NAME_CHARS
        && !trimmed.chars().any(char::is_control)
}

pub fn is_valid_recruiter_name(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_alphanumeric() || ch == ' ')
}

pub fn is_valid_role(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty() && !trimmed.chars().any(char::is_control)
}

pub fn is_valid_phone(input: &str) -> bool {
    input.len() >= MIN_PHONE_DIGITS && input.bytes().all(|byte| byte.is_ascii_digit())
}

pub fn is_valid_email(input: &str) -> bool {
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    is_valid_email_local_part(local) && is_valid_email_domain(domain)
}

pub fn is_valid_tag(input: &str) -> bool {
    !input.is_empty() && input.chars().all(char::is_alphanumeric)
}

pub fn parse_date(input: &str) -> ValidationResult<Date> {
    Date::parse(input.trim(), &format_description!("[year]-[month]-[day]"))
        .map_err(|_| ValidationError::InvalidDeadline)
}

pub fn format_date(value: Date) -> String {
    value
        .format(&format_description!("[year]-[month]-[day]"))
        .expect("date format is valid")
}

fn is_valid_email_local_part(local: &str) -> bool {
    let Some(first) = local.chars().next() else {
        return false;
    };
    let last = local.chars().last().unwrap_or(first);
    first.is_alphanumeric()
        && last.is_alphanumeric()
        && local
            .chars()
            .all(|ch| ch.is_alphanumeric() || EMAIL_SPECIAL_CHARS.contains(&ch))
}

fn is_valid_email_domain(domain: &str) -> bool {
    let labels = domain.split('.').collect::<Vec<_>>();
    let Some(last) = labels.last() else {
        return false;
    };
    if last.chars().count() < 2 {
        return false;
    }
    labels.iter().all(|label| is_valid_domain_label(label))
}

fn is_valid_domain_label(label: &str) -> bool {
    let Some(first) = label.chars().next() else {
        return false;
    };
    let last = label.chars().last().unwrap_or(first);
    first.is_alphanumeric()
        && last.is_alphanumeric()
        && label.chars().all(|ch| ch.is_alphanumeric() || ch == '-')
}
