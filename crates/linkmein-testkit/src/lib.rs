// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use linkmein_app::{
    ApplicationStatus, Company, CompanyBook, CompanyName, Deadline, EditCompanyDescriptor, Email,
    Index, ModelManager, Phone, RecruiterName, Role, Tag,
};
use std::collections::BTreeSet;
use time::{Date, Duration, Month};

const COMPANY_PREFIXES: [&str; 12] = [
    "Northwind", "Contoso", "Globex", "Initech", "Umbrella", "Hooli", "Vandelay", "Stark",
    "Wayne", "Acme", "Tyrell", "Cyberdyne",
];
const COMPANY_SUFFIXES: [&str; 6] = ["Labs", "Systems", "Capital", "Robotics", "Health", "Works"];

const ROLES: [&str; 10] = [
    "Software Engineer",
    "Backend Engineer",
    "Frontend Engineer",
    "Data Scientist",
    "Product Manager",
    "Site Reliability Engineer",
    "Quantitative Analyst",
    "Security Engineer",
    "Machine Learning Engineer",
    "Mobile Developer",
];

const FIRST_NAMES: [&str; 16] = [
    "Avery", "Jordan", "Taylor", "Riley", "Morgan", "Casey", "Alex", "Quinn", "Parker", "Drew",
    "Kai", "Elliot", "Robin", "Cameron", "Hayden", "Rowan",
];
const LAST_NAMES: [&str; 18] = [
    "Walker", "Martin", "Hill", "Evans", "Lopez", "Gray", "Ward", "Young", "Diaz", "Reed",
    "Campbell", "Turner", "Flores", "Bennett", "Price", "Morris", "Foster", "Brooks",
];

const TAGS: [&str; 8] = [
    "remote", "onsite", "hybrid", "intern", "fulltime", "referral", "visa", "startup",
];

const EMAIL_DOMAINS: [&str; 4] = ["example.com", "careers.io", "talent.net", "hiring.org"];

const REFERENCE_YEAR: i32 = 2026;

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Seeded generator of valid companies.
#[derive(Debug, Clone)]
pub struct CompanyFaker {
    rng: DeterministicRng,
}

impl CompanyFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn company(&mut self) -> Company {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        let name = format!(
            "{} {}",
            self.pick(&COMPANY_PREFIXES),
            self.pick(&COMPANY_SUFFIXES)
        );
        let email = self.rng.bool().then(|| {
            format!(
                "{}.{}@{}",
                first.to_ascii_lowercase(),
                last.to_ascii_lowercase(),
                self.pick(&EMAIL_DOMAINS)
            )
        });
        let phone = self
            .rng
            .bool()
            .then(|| (80_000_000 + self.rng.int_n(19_999_999)).to_string());
        let status = ApplicationStatus::ALL[self.rng.int_n(ApplicationStatus::ALL.len())];
        let deadline = self.deadline();
        let tag_count = self.rng.int_n(3);
        let tags = (0..tag_count)
            .map(|_| tag(self.pick(&TAGS)))
            .collect::<BTreeSet<_>>();

        Company {
            name: company_name(&name),
            phone: phone.as_deref().map(self::phone),
            email: email.as_deref().map(self::email),
            role: role(self.pick(&ROLES)),
            deadline,
            status,
            recruiter_name: recruiter(&format!("{first} {last}")),
            tags,
        }
    }

    /// `count` companies with distinct names.
    pub fn companies(&mut self, count: usize) -> Vec<Company> {
        let mut out: Vec<Company> = Vec::with_capacity(count);
        while out.len() < count {
            let mut company = self.company();
            let base = company.name.as_str().to_owned();
            let mut suffix = 1;
            while out.iter().any(|existing| existing.is_same_company(&company)) {
                suffix += 1;
                company.name = company_name(&format!("{base} {suffix}"));
            }
            out.push(company);
        }
        out
    }

    pub fn deadline(&mut self) -> Deadline {
        let start = date(REFERENCE_YEAR, Month::January, 1);
        let offset = self.rng.int_n(730) as i64;
        Deadline::new(start + Duration::days(offset))
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }
}

/// Fluent builder for companies in tests; every field starts valid.
#[derive(Debug, Clone)]
pub struct CompanyBuilder {
    company: Company,
}

impl Default for CompanyBuilder {
    fn default() -> Self {
        Self {
            company: Company {
                name: company_name("Default Corp"),
                phone: Some(phone("85355255")),
                email: Some(email("hr@defaultcorp.com")),
                role: role("Software Engineer"),
                deadline: Deadline::new(date(REFERENCE_YEAR, Month::December, 31)),
                status: ApplicationStatus::PendingApplication,
                recruiter_name: recruiter("Amy Bee"),
                tags: BTreeSet::new(),
            },
        }
    }
}

impl CompanyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_company(company: &Company) -> Self {
        Self {
            company: company.clone(),
        }
    }

    pub fn name(mut self, value: &str) -> Self {
        self.company.name = company_name(value);
        self
    }

    pub fn phone(mut self, value: &str) -> Self {
        self.company.phone = Some(phone(value));
        self
    }

    pub fn no_phone(mut self) -> Self {
        self.company.phone = None;
        self
    }

    pub fn email(mut self, value: &str) -> Self {
        self.company.email = Some(email(value));
        self
    }

    pub fn no_email(mut self) -> Self {
        self.company.email = None;
        self
    }

    pub fn role(mut self, value: &str) -> Self {
        self.company.role = role(value);
        self
    }

    pub fn deadline(mut self, value: &str) -> Self {
        self.company.deadline = Deadline::parse(value).expect("valid fixture deadline");
        self
    }

    pub fn status(mut self, value: ApplicationStatus) -> Self {
        self.company.status = value;
        self
    }

    pub fn recruiter(mut self, value: &str) -> Self {
        self.company.recruiter_name = recruiter(value);
        self
    }

    pub fn tags(mut self, values: &[&str]) -> Self {
        self.company.tags = values.iter().map(|value| tag(value)).collect();
        self
    }

    pub fn build(self) -> Company {
        self.company
    }
}

/// Fluent builder for edit descriptors in tests.
#[derive(Debug, Clone, Default)]
pub struct DescriptorBuilder {
    descriptor: EditCompanyDescriptor,
}

impl DescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor that sets every field to `company`'s values.
    pub fn from_company(company: &Company) -> Self {
        let mut descriptor = EditCompanyDescriptor::new();
        descriptor.set_name(Some(company.name.clone()));
        descriptor.set_phone(company.phone.clone());
        descriptor.set_email(company.email.clone());
        descriptor.set_role(Some(company.role.clone()));
        descriptor.set_deadline(Some(company.deadline));
        descriptor.set_status(Some(company.status));
        descriptor.set_recruiter_name(Some(company.recruiter_name.clone()));
        descriptor.set_tags(Some(&company.tags));
        Self { descriptor }
    }

    pub fn name(mut self, value: &str) -> Self {
        self.descriptor.set_name(Some(company_name(value)));
        self
    }

    pub fn phone(mut self, value: &str) -> Self {
        self.descriptor.set_phone(Some(phone(value)));
        self
    }

    pub fn email(mut self, value: &str) -> Self {
        self.descriptor.set_email(Some(email(value)));
        self
    }

    pub fn role(mut self, value: &str) -> Self {
        self.descriptor.set_role(Some(role(value)));
        self
    }

    pub fn deadline(mut self, value: &str) -> Self {
        self.descriptor
            .set_deadline(Some(Deadline::parse(value).expect("valid fixture deadline")));
        self
    }

    pub fn status(mut self, value: ApplicationStatus) -> Self {
        self.descriptor.set_status(Some(value));
        self
    }

    pub fn recruiter(mut self, value: &str) -> Self {
        self.descriptor.set_recruiter_name(Some(recruiter(value)));
        self
    }

    pub fn tags(mut self, values: &[&str]) -> Self {
        let tags = values.iter().map(|value| tag(value)).collect::<BTreeSet<_>>();
        self.descriptor.set_tags(Some(&tags));
        self
    }

    pub fn build(self) -> EditCompanyDescriptor {
        self.descriptor
    }
}

/// Fixture companies in display order: Alphabet, Bytedance, Citadel, DBS, Equinix.
pub fn typical_companies() -> Vec<Company> {
    vec![
        CompanyBuilder::new()
            .name("Alphabet")
            .recruiter("Alice Pauline")
            .role("Software Engineer")
            .status(ApplicationStatus::PendingApplication)
            .deadline("2026-11-01")
            .email("alice@alphabet.com")
            .phone("94351253")
            .tags(&["bigtech"])
            .build(),
        CompanyBuilder::new()
            .name("Bytedance")
            .recruiter("Benson Meier")
            .role("Data Engineer")
            .status(ApplicationStatus::PendingInterview)
            .deadline("2026-11-15")
            .email("benson@bytedance.com")
            .phone("98765432")
            .tags(&["bigtech", "remote"])
            .build(),
        CompanyBuilder::new()
            .name("Citadel")
            .recruiter("Carl Kurz")
            .role("Quantitative Researcher")
            .status(ApplicationStatus::PendingOutcome)
            .deadline("2026-10-31")
            .no_email()
            .phone("95352563")
            .build(),
        CompanyBuilder::new()
            .name("DBS")
            .recruiter("Daniel Meier")
            .role("Backend Engineer")
            .status(ApplicationStatus::Accepted)
            .deadline("2026-12-05")
            .email("daniel@dbs.com")
            .no_phone()
            .tags(&["finance"])
            .build(),
        CompanyBuilder::new()
            .name("Equinix")
            .recruiter("Elle Meyer")
            .role("Network Engineer")
            .status(ApplicationStatus::Rejected)
            .deadline("2027-01-20")
            .email("elle@equinix.com")
            .phone("94822245")
            .build(),
    ]
}

pub fn typical_book() -> Result<CompanyBook> {
    CompanyBook::from_companies(typical_companies()).context("build typical company book")
}

pub fn typical_model() -> Result<ModelManager> {
    Ok(ModelManager::new(typical_book()?))
}

pub fn index(one_based: usize) -> Index {
    Index::from_one_based(one_based).expect("fixture index is positive")
}

pub fn company_name(value: &str) -> CompanyName {
    CompanyName::parse(value).expect("valid fixture company name")
}

pub fn phone(value: &str) -> Phone {
    Phone::parse(value).expect("valid fixture phone")
}

pub fn email(value: &str) -> Email {
    Email::parse(value).expect("valid fixture email")
}

pub fn role(value: &str) -> Role {
    Role::parse(value).expect("valid fixture role")
}

pub fn recruiter(value: &str) -> RecruiterName {
    RecruiterName::parse(value).expect("valid fixture recruiter name")
}

pub fn tag(value: &str) -> Tag {
    Tag::parse(value).expect("valid fixture tag")
}

fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).expect("valid calendar date")
}
