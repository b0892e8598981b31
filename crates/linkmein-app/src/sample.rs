// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeSet;

use crate::{
    ApplicationStatus, Company, CompanyName, Deadline, Email, Phone, RecruiterName, Role, Tag,
    ValidationResult,
};

// (company, recruiter, role, status, deadline, email, phone, tags)
type SampleRow = (
    &'static str,
    &'static str,
    &'static str,
    ApplicationStatus,
    &'static str,
    Option<&'static str>,
    Option<&'static str>,
    &'static [&'static str],
);

const SAMPLE_ROWS: [SampleRow; 6] = [
    (
        "Google",
        "Alex Yeoh",
        "Software Engineer Intern",
        ApplicationStatus::PendingApplication,
        "2026-11-15",
        Some("alexyeoh@google.com"),
        Some("87438807"),
        &["bigtech"],
    ),
    (
        "Jane Street",
        "Bernice Yu",
        "Quantitative Trader",
        ApplicationStatus::PendingInterview,
        "2026-11-02",
        Some("berniceyu@janestreet.com"),
        None,
        &["finance", "nyc"],
    ),
    (
        "Shopee",
        "Charlotte Oliveiro",
        "Backend Engineer",
        ApplicationStatus::PendingOutcome,
        "2026-10-30",
        None,
        Some("93210283"),
        &[],
    ),
    (
        "Grab",
        "David Li",
        "Data Analyst",
        ApplicationStatus::Rejected,
        "2026-10-20",
        Some("lidavid@grab.com"),
        Some("91031282"),
        &["sea"],
    ),
    (
        "Stripe",
        "Irfan Ibrahim",
        "Site Reliability Engineer",
        ApplicationStatus::Accepted,
        "2026-12-01",
        Some("irfan@stripe.com"),
        None,
        &["remote", "payments"],
    ),
    (
        "Canva",
        "Roy Balakrishnan",
        "Frontend Engineer",
        ApplicationStatus::PendingApplication,
        "2027-01-10",
        None,
        Some("92624417"),
        &["design"],
    ),
];

/// Demo companies used by `--demo`.
pub fn sample_companies() -> ValidationResult<Vec<Company>> {
    SAMPLE_ROWS.iter().map(sample_company).collect()
}

fn sample_company(row: &SampleRow) -> ValidationResult<Company> {
    let (name, recruiter, role, status, deadline, email, phone, tags) = *row;
    Ok(Company {
        name: CompanyName::parse(name)?,
        phone: phone.map(Phone::parse).transpose()?,
        email: email.map(Email::parse).transpose()?,
        role: Role::parse(role)?,
        deadline: Deadline::parse(deadline)?,
        status,
        recruiter_name: RecruiterName::parse(recruiter)?,
        tags: tags
            .iter()
            .map(|tag| Tag::parse(tag))
            .collect::<ValidationResult<BTreeSet<_>>>()?,
    })
}

#[cfg(test)]
mod tests {
    use super::sample_companies;
    use crate::CompanyBook;

    #[test]
    fn sample_companies_are_valid_and_unique() {
        let companies = sample_companies().expect("sample rows are valid");
        let count = companies.len();
        let book = CompanyBook::from_companies(companies).expect("sample names are unique");
        assert_eq!(book.len(), count);
        assert!(count > 0);
    }
}
