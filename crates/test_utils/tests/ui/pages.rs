//! Page objects for the shop, expressed as event sequences over the
//! harness DSL. Locators are text-based against the displayed strings, and
//! the notification texts must stay byte-for-byte identical to the UI for
//! the oracle table to apply.

use test_data::{CardFixture, Outcome};
use thirtyfour::By;

use crate::selenium::{Assert, Event, Trigger};

const START_HEADING: &str = "Путешествие дня";
const CONTINUE_BUTTON: &str = "Продолжить";

/// Which purchase flow a suite drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Payment,
    Credit,
}

impl Flow {
    fn entry_button(self) -> &'static str {
        match self {
            Self::Payment => "Купить",
            Self::Credit => "Купить в кредит",
        }
    }

    fn form_heading(self) -> &'static str {
        match self {
            Self::Payment => "Оплата по карте",
            Self::Credit => "Кредит по данным карты",
        }
    }
}

/// Start page → flow form: heading checks on both sides of the click.
pub fn open_flow(app_url: &str, flow: Flow) -> Vec<Event<'_>> {
    vec![
        Event::Trigger(Trigger::Goto(app_url)),
        Event::Assert(Assert::IsPresent(START_HEADING)),
        Event::Trigger(Trigger::Click(exact_text(flow.entry_button()))),
        Event::Assert(Assert::IsPresent(flow.form_heading())),
    ]
}

/// Fills the five inputs by their field labels and presses the submit
/// control. Empty fixture values leave the input untouched.
pub fn fill_card_form(fixture: &CardFixture) -> Vec<Event<'_>> {
    vec![
        Event::Trigger(Trigger::SendKeys(field_input("Номер карты"), &fixture.number)),
        Event::Trigger(Trigger::SendKeys(field_input("Месяц"), &fixture.month)),
        Event::Trigger(Trigger::SendKeys(field_input("Год"), &fixture.year)),
        Event::Trigger(Trigger::SendKeys(field_input("Владелец"), &fixture.holder)),
        Event::Trigger(Trigger::SendKeys(field_input("CVC/CVV"), &fixture.cvc)),
        Event::Trigger(Trigger::Click(contains_text(CONTINUE_BUTTON))),
    ]
}

/// Locator of the notification element each outcome must produce.
///
/// Bank responses surface as toasts, form validation as per-field hints.
pub fn notification_locator(outcome: Outcome) -> By {
    match outcome {
        Outcome::Approved => toast("notification_status_ok", "Операция одобрена Банком."),
        Outcome::Declined => toast(
            "notification_status_error",
            "Ошибка! Банк отказал в проведении операции.",
        ),
        Outcome::WrongFormat => input_sub("Неверный формат"),
        Outcome::RequiredField => input_sub("Поле обязательно для заполнения"),
        Outcome::Expired => input_sub("Истёк срок действия карты"),
        Outcome::WrongValidity => input_sub("Неверно указан срок действия карты"),
    }
}

// "Купить" is a prefix of "Купить в кредит", so entry buttons match on
// exact text.
fn exact_text(text: &str) -> By {
    By::XPath(&format!("//*[text()='{text}']"))
}

fn contains_text(text: &str) -> By {
    By::XPath(&format!("//*[text()[contains(., '{text}')]]"))
}

fn field_input(label: &str) -> By {
    By::XPath(&format!("//*[contains(text(), '{label}')]/..//input"))
}

fn toast(status_class: &str, text: &str) -> By {
    By::XPath(&format!(
        "//*[contains(@class, '{status_class}')]//*[contains(@class, 'notification__content')][contains(text(), '{text}')]"
    ))
}

fn input_sub(text: &str) -> By {
    By::XPath(&format!(
        "//*[contains(@class, 'input__sub')][contains(text(), '{text}')]"
    ))
}
