//! Onboarding form state machine
//!
//! Three pages, one text field each. Advancing is gated on the current page's
//! validator, retreating is always allowed, and submitting from the last page
//! hands an [`IntakeRecord`] to the injected [`IntakeSink`].

use super::field::FormField;
use super::validate::{is_valid_name, EmailPattern};
use crate::intake::{IntakeRecord, IntakeSink};

/// Page of the onboarding wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnboardingPage {
    #[default]
    FirstName,
    LastName,
    Email,
}

impl OnboardingPage {
    pub const ALL: [OnboardingPage; 3] = [Self::FirstName, Self::LastName, Self::Email];

    /// Zero-based index as shown by the page indicator
    pub fn index(&self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::Email => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
        }
    }

    pub fn is_last(&self) -> bool {
        matches!(self, Self::Email)
    }

    fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    fn prev(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

/// Navigation trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingEvent {
    Advance,
    Retreat,
    Submit,
}

/// The three text fields collected by the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
}

impl FormFields {
    pub fn new() -> Self {
        Self {
            first_name: FormField::text("First Name", "First Name"),
            last_name: FormField::text("Last Name", "Last Name"),
            email: FormField::text("Email", "you@example.com"),
        }
    }

    /// Field shown on the given page
    pub fn field(&self, page: OnboardingPage) -> &FormField {
        match page {
            OnboardingPage::FirstName => &self.first_name,
            OnboardingPage::LastName => &self.last_name,
            OnboardingPage::Email => &self.email,
        }
    }

    pub fn field_mut(&mut self, page: OnboardingPage) -> &mut FormField {
        match page {
            OnboardingPage::FirstName => &mut self.first_name,
            OnboardingPage::LastName => &mut self.last_name,
            OnboardingPage::Email => &mut self.email,
        }
    }

    fn to_record(&self) -> IntakeRecord {
        IntakeRecord {
            first_name: self.first_name.as_text().to_string(),
            last_name: self.last_name.as_text().to_string(),
            email: self.email.as_text().to_string(),
        }
    }
}

impl Default for FormFields {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of applying an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub page: OnboardingPage,
    pub changed: bool,
    /// Set only by a successful submit
    pub record: Option<IntakeRecord>,
}

impl Step {
    fn stay(page: OnboardingPage) -> Self {
        Self {
            page,
            changed: false,
            record: None,
        }
    }

    fn move_to(page: OnboardingPage) -> Self {
        Self {
            page,
            changed: true,
            record: None,
        }
    }
}

/// Guard for leaving `page` forward (or submitting, on the last page)
pub fn page_guard(page: OnboardingPage, fields: &FormFields, email: &EmailPattern) -> bool {
    match page {
        OnboardingPage::FirstName => is_valid_name(fields.first_name.as_text()),
        OnboardingPage::LastName => is_valid_name(fields.last_name.as_text()),
        OnboardingPage::Email => email.matches(fields.email.as_text()),
    }
}

/// Pure transition function. Events with no transition from `page`, or whose
/// guard fails, leave the page unchanged.
pub fn transition(
    page: OnboardingPage,
    event: OnboardingEvent,
    fields: &FormFields,
    email: &EmailPattern,
) -> Step {
    match event {
        OnboardingEvent::Advance if !page.is_last() && page_guard(page, fields, email) => page
            .next()
            .map(Step::move_to)
            .unwrap_or_else(|| Step::stay(page)),
        OnboardingEvent::Retreat => page
            .prev()
            .map(Step::move_to)
            .unwrap_or_else(|| Step::stay(page)),
        OnboardingEvent::Submit if page.is_last() && page_guard(page, fields, email) => Step {
            page,
            changed: false,
            record: Some(fields.to_record()),
        },
        _ => Step::stay(page),
    }
}

/// Owns the form state for one mounted screen and forwards submissions to the
/// intake sink.
pub struct OnboardingController {
    fields: FormFields,
    page: OnboardingPage,
    email_pattern: EmailPattern,
    sink: Box<dyn IntakeSink>,
}

impl std::fmt::Debug for OnboardingController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardingController")
            .field("fields", &self.fields)
            .field("page", &self.page)
            .field("email_pattern", &self.email_pattern.as_str())
            .finish_non_exhaustive()
    }
}

impl OnboardingController {
    pub fn new(sink: Box<dyn IntakeSink>, email_pattern: EmailPattern) -> Self {
        Self {
            fields: FormFields::new(),
            page: OnboardingPage::default(),
            email_pattern,
            sink,
        }
    }

    pub fn page(&self) -> OnboardingPage {
        self.page
    }

    /// Field bound to the current page
    pub fn active_field(&self) -> &FormField {
        self.fields.field(self.page)
    }

    pub fn active_field_mut(&mut self) -> &mut FormField {
        self.fields.field_mut(self.page)
    }

    pub fn active_value(&self) -> &str {
        self.active_field().as_text()
    }

    /// Whether the value on the current page passes its validator
    pub fn is_active_valid(&self) -> bool {
        page_guard(self.page, &self.fields, &self.email_pattern)
    }

    pub fn can_advance(&self) -> bool {
        !self.page.is_last() && self.is_active_valid()
    }

    pub fn can_retreat(&self) -> bool {
        self.page != OnboardingPage::FirstName
    }

    pub fn can_submit(&self) -> bool {
        self.page.is_last() && self.is_active_valid()
    }

    /// Apply an event, forwarding any produced record to the sink
    pub fn dispatch(&mut self, event: OnboardingEvent) -> Step {
        let step = transition(self.page, event, &self.fields, &self.email_pattern);

        if step.changed {
            tracing::debug!(from = ?self.page, to = ?step.page, "onboarding page changed");
            self.page = step.page;
        } else if step.record.is_none() {
            tracing::trace!(page = ?self.page, ?event, "onboarding event ignored");
        }

        if let Some(record) = &step.record {
            tracing::info!("submitting onboarding record");
            self.sink.onboard(record.clone());
        }

        step
    }

    pub fn advance(&mut self) -> Step {
        self.dispatch(OnboardingEvent::Advance)
    }

    pub fn retreat(&mut self) -> Step {
        self.dispatch(OnboardingEvent::Retreat)
    }

    pub fn submit(&mut self) -> Step {
        self.dispatch(OnboardingEvent::Submit)
    }
}

/// Per-field access. The key handler only edits the active field, so these
/// are used by embedders and tests.
#[allow(dead_code)]
impl OnboardingController {
    pub fn first_name(&self) -> &str {
        self.fields.first_name.as_text()
    }

    pub fn last_name(&self) -> &str {
        self.fields.last_name.as_text()
    }

    pub fn email(&self) -> &str {
        self.fields.email.as_text()
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.fields.first_name.set_text(value);
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.fields.last_name.set_text(value);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.fields.email.set_text(value);
    }

    pub fn set_active_value(&mut self, value: impl Into<String>) {
        self.active_field_mut().set_text(value);
    }

    pub fn is_first_name_valid(&self) -> bool {
        is_valid_name(self.first_name())
    }

    pub fn is_last_name_valid(&self) -> bool {
        is_valid_name(self.last_name())
    }

    pub fn is_email_valid(&self) -> bool {
        self.email_pattern.matches(self.email())
    }
}
