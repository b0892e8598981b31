// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeSet;

use crate::{
    ApplicationStatus, Company, CompanyName, Deadline, Email, Phone, RecruiterName, Role, Tag,
};

/// Sparse set of company field changes.
///
/// A `None` field leaves the company's current value in place when the
/// descriptor is applied. Tags are held as an owned copy of whatever set the
/// caller handed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditCompanyDescriptor {
    name: Option<CompanyName>,
    phone: Option<Phone>,
    email: Option<Email>,
    role: Option<Role>,
    deadline: Option<Deadline>,
    status: Option<ApplicationStatus>,
    recruiter_name: Option<RecruiterName>,
    tags: Option<BTreeSet<Tag>>,
}

impl EditCompanyDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.role.is_some()
            || self.deadline.is_some()
            || self.status.is_some()
            || self.recruiter_name.is_some()
            || self.tags.is_some()
    }

    pub fn name(&self) -> Option<&CompanyName> {
        self.name.as_ref()
    }

    pub fn set_name(&mut self, name: Option<CompanyName>) {
        self.name = name;
    }

    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    pub fn set_phone(&mut self, phone: Option<Phone>) {
        self.phone = phone;
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn set_email(&mut self, email: Option<Email>) {
        self.email = email;
    }

    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    pub fn set_role(&mut self, role: Option<Role>) {
        self.role = role;
    }

    pub fn deadline(&self) -> Option<Deadline> {
        self.deadline
    }

    pub fn set_deadline(&mut self, deadline: Option<Deadline>) {
        self.deadline = deadline;
    }

    pub fn status(&self) -> Option<ApplicationStatus> {
        self.status
    }

    pub fn set_status(&mut self, status: Option<ApplicationStatus>) {
        self.status = status;
    }

    pub fn recruiter_name(&self) -> Option<&RecruiterName> {
        self.recruiter_name.as_ref()
    }

    pub fn set_recruiter_name(&mut self, recruiter_name: Option<RecruiterName>) {
        self.recruiter_name = recruiter_name;
    }

    pub fn tags(&self) -> Option<&BTreeSet<Tag>> {
        self.tags.as_ref()
    }

    /// Copies `tags`; later changes to the caller's set are not observed.
    pub fn set_tags(&mut self, tags: Option<&BTreeSet<Tag>>) {
        self.tags = tags.cloned();
    }

    /// Builds a new company from `company`, taking every set field from the
    /// descriptor and every unset field from `company`.
    pub fn apply_to(&self, company: &Company) -> Company {
        Company {
            name: self.name.clone().unwrap_or_else(|| company.name.clone()),
            phone: self.phone.clone().or_else(|| company.phone.clone()),
            email: self.email.clone().or_else(|| company.email.clone()),
            role: self.role.clone().unwrap_or_else(|| company.role.clone()),
            deadline: self.deadline.unwrap_or(company.deadline),
            status: self.status.unwrap_or(company.status),
            recruiter_name: self
                .recruiter_name
                .clone()
                .unwrap_or_else(|| company.recruiter_name.clone()),
            tags: self.tags.clone().unwrap_or_else(|| company.tags.clone()),
        }
    }
}
