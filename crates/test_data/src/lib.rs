//! Fixture generation for the trip-shop card payment form.
//!
//! A [`CardFixture`] is one set of form inputs; [`FixtureBuilder`] derives
//! them from per-field specs so every validation scenario varies exactly one
//! dimension against a known-valid default. Expiry fields are shifted
//! relative to "now" so fixtures stay valid regardless of when the suite
//! runs. The mapping from fixtures to expected outcomes lives in
//! [`scenario`].

pub mod scenario;

pub use scenario::{catalog, DbStatus, Outcome, Scenario, ScenarioKind};

use fake::{
    faker::name::en::{FirstName, LastName},
    Fake,
};
use rand::{seq::SliceRandom, Rng};
use time::{Date, OffsetDateTime};

/// One set of values typed into the payment form.
///
/// Pure data: no identity beyond field equality, created fresh per scenario
/// and never mutated. Deliberately invalid values are represented as-is,
/// so no field carries validation of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardFixture {
    pub number: String,
    pub month: String,
    pub year: String,
    pub holder: String,
    pub cvc: String,
}

/// The backend test accounts the suite runs against.
///
/// `approved` and `declined` are the two numbers the payment backend knows;
/// `unknown` is well-formed but absent from its records. Environment
/// fixtures, not business logic: override them via the `[cards]` table of
/// the suite config to point at different test accounts.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CardNumbers {
    pub approved: String,
    pub declined: String,
    pub unknown: String,
}

impl Default for CardNumbers {
    fn default() -> Self {
        Self {
            approved: "4444444444444441".to_string(),
            declined: "4444444444444442".to_string(),
            unknown: "1444444444444444".to_string(),
        }
    }
}

/// Current month shifted by `shift` months, zero-padded to two digits,
/// wrapping across year boundaries.
pub fn shifted_month(shift: i32) -> String {
    month_for(today(), shift)
}

/// Current two-digit year shifted by `shift` years, mod 100, zero-padded.
pub fn shifted_year(shift: i32) -> String {
    year_for(today(), shift)
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

fn month_for(date: Date, shift: i32) -> String {
    let months = date.year() * 12 + i32::from(u8::from(date.month())) - 1 + shift;
    format!("{:02}", months.rem_euclid(12) + 1)
}

fn year_for(date: Date, shift: i32) -> String {
    format!("{:02}", (date.year() + shift).rem_euclid(100))
}

/// Card number field spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberSpec {
    /// The configured number the backend approves.
    Approved,
    /// The configured number the backend declines.
    Declined,
    /// The configured well-formed number absent from backend records.
    Unknown,
    /// A fresh run of random digits of the given length.
    Digits(usize),
    Empty,
}

/// Expiry month/year field spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateSpec {
    /// Shift relative to "now" (months for the month field, years for the
    /// year field).
    Shift(i32),
    Literal(&'static str),
    /// A fresh run of random digits of the given length.
    Digits(usize),
    Empty,
}

/// Card holder field spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HolderSpec {
    /// Random Latin first and last name.
    FullName,
    /// Random Latin first name only.
    SingleWord,
    /// Random full name in Cyrillic.
    Cyrillic,
    /// Random first name followed by a digit.
    WithDigit,
    /// Random first name followed by symbols.
    WithSymbols,
    Empty,
}

/// CVC field spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CvcSpec {
    /// A fresh run of random digits of the given length.
    Digits(usize),
    Empty,
}

/// Parametrized fixture builder.
///
/// Defaults describe a fully valid card: the approved number, expiry one
/// month and one year ahead, a Latin full name and a 3-digit CVC. Each
/// scenario overrides the one field under test. Random components are
/// regenerated on every [`build`](Self::build) and never affect a
/// scenario's outcome.
#[derive(Clone, Debug)]
pub struct FixtureBuilder<'a> {
    cards: &'a CardNumbers,
    number: NumberSpec,
    month: DateSpec,
    year: DateSpec,
    holder: HolderSpec,
    cvc: CvcSpec,
}

impl<'a> FixtureBuilder<'a> {
    pub fn new(cards: &'a CardNumbers) -> Self {
        Self {
            cards,
            number: NumberSpec::Approved,
            month: DateSpec::Shift(1),
            year: DateSpec::Shift(1),
            holder: HolderSpec::FullName,
            cvc: CvcSpec::Digits(3),
        }
    }

    pub fn number(mut self, spec: NumberSpec) -> Self {
        self.number = spec;
        self
    }

    pub fn month(mut self, spec: DateSpec) -> Self {
        self.month = spec;
        self
    }

    pub fn year(mut self, spec: DateSpec) -> Self {
        self.year = spec;
        self
    }

    pub fn holder(mut self, spec: HolderSpec) -> Self {
        self.holder = spec;
        self
    }

    pub fn cvc(mut self, spec: CvcSpec) -> Self {
        self.cvc = spec;
        self
    }

    pub fn build(self) -> CardFixture {
        CardFixture {
            number: match self.number {
                NumberSpec::Approved => self.cards.approved.clone(),
                NumberSpec::Declined => self.cards.declined.clone(),
                NumberSpec::Unknown => self.cards.unknown.clone(),
                NumberSpec::Digits(len) => random_digits(len),
                NumberSpec::Empty => String::new(),
            },
            month: date_field(self.month, shifted_month),
            year: date_field(self.year, shifted_year),
            holder: holder_field(self.holder),
            cvc: match self.cvc {
                CvcSpec::Digits(len) => random_digits(len),
                CvcSpec::Empty => String::new(),
            },
        }
    }
}

fn date_field(spec: DateSpec, shifted: fn(i32) -> String) -> String {
    match spec {
        DateSpec::Shift(count) => shifted(count),
        DateSpec::Literal(value) => value.to_string(),
        DateSpec::Digits(len) => random_digits(len),
        DateSpec::Empty => String::new(),
    }
}

const CYRILLIC_FIRST_NAMES: &[&str] = &["Иван", "Пётр", "Анна", "Мария", "Олег"];
const CYRILLIC_LAST_NAMES: &[&str] = &["Иванов", "Петров", "Смирнова", "Кузнецова", "Сидоров"];

fn holder_field(spec: HolderSpec) -> String {
    let mut rng = rand::thread_rng();
    match spec {
        HolderSpec::FullName => format!(
            "{} {}",
            FirstName().fake::<String>(),
            LastName().fake::<String>()
        ),
        HolderSpec::SingleWord => FirstName().fake(),
        HolderSpec::Cyrillic => format!(
            "{} {}",
            CYRILLIC_FIRST_NAMES.choose(&mut rng).unwrap_or(&"Иван"),
            CYRILLIC_LAST_NAMES.choose(&mut rng).unwrap_or(&"Иванов"),
        ),
        HolderSpec::WithDigit => {
            format!("{} {}", FirstName().fake::<String>(), rng.gen_range(0..10))
        }
        HolderSpec::WithSymbols => format!("{} %$ * &", FirstName().fake::<String>()),
        HolderSpec::Empty => String::new(),
    }
}

fn random_digits(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| char::from(b'0' + rng.gen_range(0..10))).collect()
}
