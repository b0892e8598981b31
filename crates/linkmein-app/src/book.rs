// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use thiserror::Error;

use crate::{Company, CompanyName};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("company {0} is not in the address book")]
    CompanyNotFound(CompanyName),
    #[error("this company already exists in the address book")]
    DuplicateCompany,
}

pub type BookResult<T> = std::result::Result<T, BookError>;

/// Ordered list of companies with unique company names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyBook {
    companies: Vec<Company>,
}

impl CompanyBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_companies(companies: Vec<Company>) -> BookResult<Self> {
        let mut book = Self::new();
        for company in companies {
            book.add(company)?;
        }
        Ok(book)
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn contains(&self, company: &Company) -> bool {
        self.companies
            .iter()
            .any(|existing| existing.is_same_company(company))
    }

    pub fn add(&mut self, company: Company) -> BookResult<()> {
        if self.contains(&company) {
            return Err(BookError::DuplicateCompany);
        }
        self.companies.push(company);
        Ok(())
    }

    /// Replaces `target` with `edited` in place, keeping its position.
    ///
    /// Fails without mutating when `target` is absent or when `edited`
    /// collides with a company other than `target`.
    pub fn set_company(&mut self, target: &Company, edited: Company) -> BookResult<()> {
        let position = self.position_of(target)?;
        if !target.is_same_company(&edited) && self.contains(&edited) {
            return Err(BookError::DuplicateCompany);
        }
        self.companies[position] = edited;
        Ok(())
    }

    pub fn remove(&mut self, target: &Company) -> BookResult<Company> {
        let position = self.position_of(target)?;
        Ok(self.companies.remove(position))
    }

    fn position_of(&self, target: &Company) -> BookResult<usize> {
        self.companies
            .iter()
            .position(|existing| existing == target)
            .ok_or_else(|| BookError::CompanyNotFound(target.name.clone()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CompanyFilter {
    #[default]
    All,
    /// Matches companies whose name contains any of the keywords as a whole
    /// word, ignoring case.
    NameKeywords(Vec<String>),
}

impl CompanyFilter {
    pub fn matches(&self, company: &Company) -> bool {
        match self {
            Self::All => true,
            Self::NameKeywords(keywords) => company
                .name
                .as_str()
                .split_whitespace()
                .any(|word| keywords.iter().any(|keyword| word.eq_ignore_ascii_case(keyword))),
        }
    }
}

/// Operations the commands need from the application state.
pub trait Model {
    /// Companies as currently displayed, after filtering.
    fn filtered_companies(&self) -> &[Company];
    /// True when a company with the same identity is stored.
    fn has_company(&self, company: &Company) -> bool;
    fn add_company(&mut self, company: Company) -> BookResult<()>;
    fn delete_company(&mut self, target: &Company) -> BookResult<()>;
    fn set_company(&mut self, target: &Company, edited: Company) -> BookResult<()>;
    fn update_filter(&mut self, filter: CompanyFilter);
    fn set_current_viewed(&mut self, company: Option<Company>);
    fn current_viewed(&self) -> Option<&Company>;
}

#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    book: CompanyBook,
    filter: CompanyFilter,
    filtered: Vec<Company>,
    current_viewed: Option<Company>,
}

impl ModelManager {
    pub fn new(book: CompanyBook) -> Self {
        let mut model = Self {
            book,
            ..Self::default()
        };
        model.refresh_filtered();
        model
    }

    pub fn book(&self) -> &CompanyBook {
        &self.book
    }

    pub fn filter(&self) -> &CompanyFilter {
        &self.filter
    }

    fn refresh_filtered(&mut self) {
        self.filtered = self
            .book
            .companies()
            .iter()
            .filter(|company| self.filter.matches(company))
            .cloned()
            .collect();
    }
}

impl Model for ModelManager {
    fn filtered_companies(&self) -> &[Company] {
        &self.filtered
    }

    fn has_company(&self, company: &Company) -> bool {
        self.book.contains(company)
    }

    fn add_company(&mut self, company: Company) -> BookResult<()> {
        self.book.add(company)?;
        self.refresh_filtered();
        Ok(())
    }

    fn delete_company(&mut self, target: &Company) -> BookResult<()> {
        let removed = self.book.remove(target)?;
        if self.current_viewed.as_ref() == Some(&removed) {
            self.current_viewed = None;
        }
        self.refresh_filtered();
        Ok(())
    }

    fn set_company(&mut self, target: &Company, edited: Company) -> BookResult<()> {
        self.book.set_company(target, edited)?;
        self.refresh_filtered();
        Ok(())
    }

    fn update_filter(&mut self, filter: CompanyFilter) {
        self.filter = filter;
        self.refresh_filtered();
    }

    fn set_current_viewed(&mut self, company: Option<Company>) {
        self.current_viewed = company;
    }

    fn current_viewed(&self) -> Option<&Company> {
        self.current_viewed.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::{BookError, CompanyBook, CompanyFilter, Model, ModelManager};
    use crate::{ApplicationStatus, Company, CompanyName, Deadline, Phone, RecruiterName, Role};
    use std::collections::BTreeSet;

    fn company(name: &str) -> Company {
        Company {
            name: CompanyName::parse(name).expect("valid name"),
            phone: None,
            email: None,
            role: Role::parse("Analyst").expect("valid role"),
            deadline: Deadline::parse("2026-10-31").expect("valid deadline"),
            status: ApplicationStatus::PendingInterview,
            recruiter_name: RecruiterName::parse("Sam").expect("valid recruiter"),
            tags: BTreeSet::new(),
        }
    }

    #[test]
    fn book_rejects_duplicate_names() {
        let mut book = CompanyBook::new();
        book.add(company("Foo")).expect("first add succeeds");
        assert_eq!(book.add(company("Foo")), Err(BookError::DuplicateCompany));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn book_set_company_keeps_position() {
        let mut book =
            CompanyBook::from_companies(vec![company("A"), company("B"), company("C")])
                .expect("unique names");
        let edited = Company {
            name: CompanyName::parse("B2").expect("valid name"),
            ..company("B")
        };
        book.set_company(&company("B"), edited.clone())
            .expect("replace succeeds");
        assert_eq!(book.companies()[1], edited);
    }

    #[test]
    fn book_set_company_allows_self_collision() {
        let mut book = CompanyBook::from_companies(vec![company("Foo")]).expect("unique names");
        let edited = Company {
            phone: Some(Phone::parse("555").expect("valid phone")),
            ..company("Foo")
        };
        book.set_company(&company("Foo"), edited.clone())
            .expect("self collision is allowed");
        assert_eq!(book.companies(), &[edited]);
    }

    #[test]
    fn book_set_company_rejects_other_collision_without_mutation() {
        let mut book =
            CompanyBook::from_companies(vec![company("Foo"), company("Bar")]).expect("unique");
        let before = book.clone();
        let result = book.set_company(
            &company("Bar"),
            Company {
                name: CompanyName::parse("Foo").expect("valid name"),
                ..company("Bar")
            },
        );
        assert_eq!(result, Err(BookError::DuplicateCompany));
        assert_eq!(book, before);
    }

    #[test]
    fn book_missing_target_is_reported() {
        let mut book = CompanyBook::new();
        let error = book
            .remove(&company("Ghost"))
            .expect_err("missing company should fail");
        assert_eq!(error.to_string(), "company Ghost is not in the address book");
    }

    #[test]
    fn keyword_filter_matches_whole_words_ignoring_case() {
        let filter = CompanyFilter::NameKeywords(vec!["street".to_owned()]);
        assert!(filter.matches(&company("Jane Street")));
        assert!(!filter.matches(&company("Streetwise")));
        assert!(CompanyFilter::All.matches(&company("Anything")));
    }

    #[test]
    fn model_recomputes_filtered_view_on_mutation() {
        let book = CompanyBook::from_companies(vec![company("Jane Street"), company("Stripe")])
            .expect("unique names");
        let mut model = ModelManager::new(book);
        model.update_filter(CompanyFilter::NameKeywords(vec!["jane".to_owned()]));
        assert_eq!(model.filtered_companies(), &[company("Jane Street")]);

        model
            .add_company(company("Jane Capital"))
            .expect("add succeeds");
        assert_eq!(model.filtered_companies().len(), 2);

        model.update_filter(CompanyFilter::All);
        assert_eq!(model.filtered_companies().len(), 3);
    }

    #[test]
    fn deleting_current_viewed_clears_selection() {
        let book = CompanyBook::from_companies(vec![company("Foo")]).expect("unique names");
        let mut model = ModelManager::new(book);
        model.set_current_viewed(Some(company("Foo")));

        model
            .delete_company(&company("Foo"))
            .expect("delete succeeds");
        assert_eq!(model.current_viewed(), None);
        assert!(model.filtered_companies().is_empty());
    }
}
