use std::{fmt, str::FromStr};

use crate::foundation::error::{ElevateError, ElevateResult};

/// Options of the "Current Focus / Challenge" select, in display order.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum FocusArea {
    #[default]
    #[serde(rename = "Executive Performance")]
    ExecutivePerformance,
    #[serde(rename = "Emotional Resilience")]
    EmotionalResilience,
    #[serde(rename = "Mindset Re-patterning")]
    MindsetRepatterning,
    #[serde(rename = "Purpose Discovery")]
    PurposeDiscovery,
}

impl FocusArea {
    pub const ALL: [FocusArea; 4] = [
        FocusArea::ExecutivePerformance,
        FocusArea::EmotionalResilience,
        FocusArea::MindsetRepatterning,
        FocusArea::PurposeDiscovery,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ExecutivePerformance => "Executive Performance",
            Self::EmotionalResilience => "Emotional Resilience",
            Self::MindsetRepatterning => "Mindset Re-patterning",
            Self::PurposeDiscovery => "Purpose Discovery",
        }
    }
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FocusArea {
    type Err = ElevateError;

    fn from_str(s: &str) -> ElevateResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|area| area.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ElevateError::form("focus", format!("unknown focus area '{s}'")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingField {
    Name,
    Email,
    Focus,
    Description,
}

impl BookingField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Focus => "focus",
            Self::Description => "description",
        }
    }
}

/// Form contents as typed. A fresh form has the first focus area selected.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    pub focus: Option<FocusArea>,
    pub description: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            focus: Some(FocusArea::default()),
            description: String::new(),
        }
    }
}

impl BookingDraft {
    /// Set one field. An empty focus value clears the selection.
    pub fn set(&mut self, field: BookingField, value: &str) -> ElevateResult<()> {
        match field {
            BookingField::Name => self.name = value.to_owned(),
            BookingField::Email => self.email = value.to_owned(),
            BookingField::Description => self.description = value.to_owned(),
            BookingField::Focus => {
                self.focus = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
        }
        Ok(())
    }

    /// Required-field presence plus the email shape check.
    pub fn validate(&self) -> ElevateResult<BookingRequest> {
        let name = required(BookingField::Name, &self.name)?;
        let email = required(BookingField::Email, &self.email)?;
        if !is_email_shaped(email) {
            return Err(ElevateError::form(
                BookingField::Email.as_str(),
                format!("'{email}' is not an email address"),
            ));
        }
        let focus = self.focus.ok_or_else(|| {
            ElevateError::form(BookingField::Focus.as_str(), "a focus area is required")
        })?;
        let description = required(BookingField::Description, &self.description)?;
        Ok(BookingRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            focus,
            description: description.to_owned(),
        })
    }
}

fn required(field: BookingField, value: &str) -> ElevateResult<&str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ElevateError::form(field.as_str(), "required"));
    }
    Ok(value)
}

/// `local@domain.tld`: one `@`, no whitespace, and a dotted domain with non-empty labels.
fn is_email_shaped(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

/// Accepted submission. It stays in process; nothing is sent anywhere.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub focus: FocusArea,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingView {
    Form,
    Confirmation,
}

/// Form view and confirmation view of the booking page.
#[derive(Clone, Debug)]
pub struct BookingFlow {
    view: BookingView,
    draft: BookingDraft,
    submitted: Option<BookingRequest>,
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingFlow {
    pub fn new() -> Self {
        Self {
            view: BookingView::Form,
            draft: BookingDraft::default(),
            submitted: None,
        }
    }

    pub fn fill(&mut self, field: BookingField, value: &str) -> ElevateResult<()> {
        if self.view != BookingView::Form {
            return Err(ElevateError::form(
                field.as_str(),
                "the form is not shown while confirming",
            ));
        }
        self.draft.set(field, value)
    }

    /// Validate and switch to the confirmation view. A failed check leaves the form as it is.
    pub fn submit(&mut self) -> ElevateResult<&BookingRequest> {
        if self.view != BookingView::Form {
            return Err(ElevateError::validation("booking already submitted"));
        }
        let request = self.draft.validate()?;
        self.view = BookingView::Confirmation;
        Ok(self.submitted.insert(request))
    }

    /// Back from the confirmation to a fresh, empty form. Returns `false` when already there.
    pub fn return_to_form(&mut self) -> bool {
        if self.view == BookingView::Form {
            return false;
        }
        self.view = BookingView::Form;
        self.draft = BookingDraft::default();
        true
    }

    pub fn view(&self) -> BookingView {
        self.view
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn last_submitted(&self) -> Option<&BookingRequest> {
        self.submitted.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pages/booking.rs"]
mod tests;
