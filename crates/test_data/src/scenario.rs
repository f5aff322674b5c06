//! The scenario catalog: every validation case the payment form is tested
//! against, paired with the notification and persisted state it must
//! produce.
//!
//! The catalog encodes the form's validation rules as oracles instead of
//! re-implementing them. One asymmetry is intentional and must stay: a
//! well-formed 16-digit number the backend does not know is *declined* (the
//! form accepts it, the backend rejects it, nothing is persisted), while a
//! 15-digit number never leaves the form and reads as *wrong format*.

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    CardFixture, CardNumbers, CvcSpec, DateSpec, FixtureBuilder, HolderSpec, NumberSpec,
};

/// Notification the form shows after a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Approved,
    Declined,
    WrongFormat,
    RequiredField,
    Expired,
    WrongValidity,
}

/// Status the payment backend writes for submissions it processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DbStatus {
    Approved,
    Declined,
}

impl DbStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::Declined => "DECLINED",
        }
    }
}

/// A fixture paired with the outcomes it must produce.
///
/// For the two success-path scenarios the persisted status is the oracle
/// (`expected_status` set, `expected_orders` unset — the status row is the
/// row). Every rejected submission expects zero persisted orders.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: String,
    pub fixture: CardFixture,
    pub expected_ui: Outcome,
    pub expected_status: Option<DbStatus>,
    pub expected_orders: Option<u32>,
}

/// Every named validation case, one variant per row of the oracle table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ScenarioKind {
    ApprovedCard,
    DeclinedCard,
    AllFieldsEmpty,
    UnknownCard,
    Number15Digits,
    MonthOneDigit,
    MonthOver12,
    MonthBeforeCurrentInCurrentYear,
    MonthZeroFutureYear,
    YearOneDigit,
    YearTooFarAhead,
    YearBeforeCurrent,
    YearZero,
    CvcOneDigit,
    CvcTwoDigits,
    HolderSingleWord,
    HolderCyrillic,
    HolderWithDigit,
    HolderWithSymbols,
    NumberEmpty,
    MonthEmpty,
    YearEmpty,
    HolderEmpty,
    CvcEmpty,
}

impl ScenarioKind {
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Builds the scenario against the given backend test accounts.
    ///
    /// Total for every variant; fresh random components on each call.
    pub fn build(self, cards: &CardNumbers) -> Scenario {
        let builder = FixtureBuilder::new(cards);
        let (fixture, expected_ui, expected_status, expected_orders) = match self {
            Self::ApprovedCard => (
                builder.month(DateSpec::Shift(5)).year(DateSpec::Shift(1)).build(),
                Outcome::Approved,
                Some(DbStatus::Approved),
                None,
            ),
            Self::DeclinedCard => (
                builder
                    .number(NumberSpec::Declined)
                    .month(DateSpec::Shift(3))
                    .year(DateSpec::Shift(2))
                    .build(),
                Outcome::Declined,
                Some(DbStatus::Declined),
                None,
            ),
            Self::AllFieldsEmpty => (
                builder
                    .number(NumberSpec::Empty)
                    .month(DateSpec::Empty)
                    .year(DateSpec::Empty)
                    .holder(HolderSpec::Empty)
                    .cvc(CvcSpec::Empty)
                    .build(),
                Outcome::RequiredField,
                None,
                Some(0),
            ),
            // Passes form validation, rejected by the backend, never stored.
            Self::UnknownCard => (
                builder.number(NumberSpec::Unknown).build(),
                Outcome::Declined,
                None,
                Some(0),
            ),
            Self::Number15Digits => (
                builder.number(NumberSpec::Digits(15)).build(),
                Outcome::WrongFormat,
                None,
                Some(0),
            ),
            Self::MonthOneDigit => (
                builder.month(DateSpec::Digits(1)).build(),
                Outcome::WrongFormat,
                None,
                Some(0),
            ),
            Self::MonthOver12 => (
                builder.month(DateSpec::Literal("13")).build(),
                Outcome::WrongValidity,
                None,
                Some(0),
            ),
            Self::MonthBeforeCurrentInCurrentYear => (
                builder.month(DateSpec::Shift(-1)).year(DateSpec::Shift(0)).build(),
                Outcome::WrongValidity,
                None,
                Some(0),
            ),
            Self::MonthZeroFutureYear => (
                builder.month(DateSpec::Literal("00")).build(),
                Outcome::WrongValidity,
                None,
                Some(0),
            ),
            Self::YearOneDigit => (
                builder.year(DateSpec::Digits(1)).build(),
                Outcome::WrongFormat,
                None,
                Some(0),
            ),
            Self::YearTooFarAhead => (
                builder.year(DateSpec::Shift(6)).build(),
                Outcome::WrongValidity,
                None,
                Some(0),
            ),
            Self::YearBeforeCurrent => (
                builder.year(DateSpec::Shift(-1)).build(),
                Outcome::Expired,
                None,
                Some(0),
            ),
            Self::YearZero => (
                builder.year(DateSpec::Literal("00")).build(),
                Outcome::Expired,
                None,
                Some(0),
            ),
            Self::CvcOneDigit => (
                builder.cvc(CvcSpec::Digits(1)).build(),
                Outcome::WrongFormat,
                None,
                Some(0),
            ),
            Self::CvcTwoDigits => (
                builder.cvc(CvcSpec::Digits(2)).build(),
                Outcome::WrongFormat,
                None,
                Some(0),
            ),
            Self::HolderSingleWord => (
                builder.holder(HolderSpec::SingleWord).build(),
                Outcome::WrongFormat,
                None,
                Some(0),
            ),
            Self::HolderCyrillic => (
                builder.holder(HolderSpec::Cyrillic).build(),
                Outcome::WrongFormat,
                None,
                Some(0),
            ),
            Self::HolderWithDigit => (
                builder.holder(HolderSpec::WithDigit).build(),
                Outcome::WrongFormat,
                None,
                Some(0),
            ),
            Self::HolderWithSymbols => (
                builder.holder(HolderSpec::WithSymbols).build(),
                Outcome::WrongFormat,
                None,
                Some(0),
            ),
            Self::NumberEmpty => (
                builder.number(NumberSpec::Empty).build(),
                Outcome::WrongFormat,
                None,
                Some(0),
            ),
            Self::MonthEmpty => (
                builder.month(DateSpec::Empty).build(),
                Outcome::WrongFormat,
                None,
                Some(0),
            ),
            Self::YearEmpty => (
                builder.year(DateSpec::Empty).build(),
                Outcome::WrongFormat,
                None,
                Some(0),
            ),
            Self::HolderEmpty => (
                builder.holder(HolderSpec::Empty).build(),
                Outcome::WrongFormat,
                None,
                Some(0),
            ),
            Self::CvcEmpty => (
                builder.cvc(CvcSpec::Empty).build(),
                Outcome::WrongFormat,
                None,
                Some(0),
            ),
        };
        Scenario {
            name: self.to_string(),
            fixture,
            expected_ui,
            expected_status,
            expected_orders,
        }
    }
}

/// The full catalog against the given backend test accounts.
pub fn catalog(cards: &CardNumbers) -> Vec<Scenario> {
    ScenarioKind::all().map(|kind| kind.build(cards)).collect()
}
