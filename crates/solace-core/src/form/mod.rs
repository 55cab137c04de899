//! Multi-step lead capture form
//!
//! A form is a linear sequence of data-entry steps followed by a terminal
//! `Submitted` state. Only the current step's fields are validated on
//! "continue"; validated values are merged into the accumulated map and the
//! final step hands that map to a [`SubmissionSink`].
//!
//! Drafts are kept per step, so going back and forth never loses input.

pub mod spec;
pub mod validation;

pub use spec::{FieldKind, FieldSpec, FormSpec, SelectOption, StepSpec};
pub use validation::{is_valid_email, validate_field, FieldError, ValidationErrors};

use crate::observable::Observable;
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Value of one form control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Value an untouched control contributes
    pub fn empty_for(field: &FieldSpec) -> Self {
        if field.is_checkbox() {
            FieldValue::Flag(false)
        } else {
            FieldValue::Text(String::new())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Field name to value, ordered for stable logging
pub type FieldMap = BTreeMap<String, FieldValue>;

/// Position in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormStep {
    /// Zero-based data-entry step
    Entry(usize),
    Submitted,
}

impl FormStep {
    /// Indicator status of step `index` while the form is at `self`
    pub fn status_of(self, index: usize) -> StepStatus {
        match self {
            FormStep::Submitted => StepStatus::Complete,
            FormStep::Entry(current) if index < current => StepStatus::Complete,
            FormStep::Entry(current) if index == current => StepStatus::Current,
            FormStep::Entry(_) => StepStatus::Upcoming,
        }
    }
}

/// How a step is drawn in the progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Complete,
    Current,
    Upcoming,
}

/// Receiver of the accumulated field map once the last step validates.
pub trait SubmissionSink {
    fn submit(&self, form_id: &str, fields: &FieldMap);
}

/// Sink that only logs the payload. There is no backend to hand it to.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&self, form_id: &str, fields: &FieldMap) {
        match serde_json::to_string(fields) {
            Ok(payload) => info!(form = form_id, %payload, "form submitted"),
            Err(err) => warn!(form = form_id, error = %err, "form submitted, payload not serializable"),
        }
    }
}

pub struct MultiStepForm {
    spec: FormSpec,
    step: Observable<FormStep>,
    errors: Observable<Vec<FieldError>>,
    drafts: Vec<FieldMap>,
    accumulated: FieldMap,
}

impl MultiStepForm {
    pub fn new(spec: FormSpec) -> CoreResult<Self> {
        spec.validate()?;
        let drafts = vec![FieldMap::new(); spec.step_count()];
        Ok(Self {
            spec,
            step: Observable::new(FormStep::Entry(0)),
            errors: Observable::new(Vec::new()),
            drafts,
            accumulated: FieldMap::new(),
        })
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    pub fn step(&self) -> FormStep {
        self.step.get()
    }

    pub fn step_observable(&self) -> &Observable<FormStep> {
        &self.step
    }

    pub fn errors(&self) -> &Observable<Vec<FieldError>> {
        &self.errors
    }

    pub fn step_count(&self) -> usize {
        self.spec.step_count()
    }

    /// One-based step number; `step_count() + 1` once submitted.
    pub fn step_number(&self) -> usize {
        match self.step() {
            FormStep::Entry(index) => index + 1,
            FormStep::Submitted => self.step_count() + 1,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.step() == FormStep::Submitted
    }

    pub fn is_last_step(&self) -> bool {
        self.step() == FormStep::Entry(self.step_count() - 1)
    }

    pub fn step_status(&self, index: usize) -> StepStatus {
        self.step().status_of(index)
    }

    /// Values merged from every completed step
    pub fn accumulated(&self) -> &FieldMap {
        &self.accumulated
    }

    /// Draft value of a field on any step
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.drafts.iter().find_map(|draft| draft.get(name))
    }

    pub fn error_for(&self, name: &str) -> Option<String> {
        self.errors
            .get()
            .into_iter()
            .find(|e| e.field == name)
            .map(|e| e.message)
    }

    /// Record input for a field of the current step.
    ///
    /// A field already flagged as invalid is re-checked immediately.
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) -> CoreResult<()> {
        let FormStep::Entry(index) = self.step() else {
            return Err(CoreError::FormClosed);
        };
        let field = self.spec.steps[index]
            .field(name)
            .ok_or_else(|| CoreError::UnknownField(name.to_string()))?;

        let value = value.into();
        let flagged = self.errors.get().iter().any(|e| e.field == name);
        if flagged {
            let recheck = validate_field(field, Some(&value));
            self.errors.update(|errors| match recheck {
                Some(error) => {
                    if let Some(slot) = errors.iter_mut().find(|e| e.field == name) {
                        *slot = error;
                    }
                }
                None => errors.retain(|e| e.field != name),
            });
        }

        self.drafts[index].insert(name.to_string(), value);
        Ok(())
    }

    /// Validate the current step and move forward.
    ///
    /// From the last step this submits through `sink` and enters
    /// `Submitted`. Continuing once submitted does nothing.
    pub fn continue_step(
        &mut self,
        sink: &dyn SubmissionSink,
    ) -> Result<FormStep, ValidationErrors> {
        let FormStep::Entry(index) = self.step() else {
            return Ok(FormStep::Submitted);
        };
        let step = &self.spec.steps[index];
        let draft = &self.drafts[index];

        let errors: Vec<FieldError> = step
            .fields
            .iter()
            .filter_map(|field| validate_field(field, draft.get(&field.name)))
            .collect();
        if !errors.is_empty() {
            debug!(form = %self.spec.id, step = index + 1, invalid = errors.len(), "step rejected");
            self.errors.set(errors.clone());
            return Err(ValidationErrors(errors));
        }

        for field in &step.fields {
            let value = draft
                .get(&field.name)
                .cloned()
                .unwrap_or_else(|| FieldValue::empty_for(field));
            self.accumulated.insert(field.name.clone(), value);
        }
        self.errors.set(Vec::new());

        let next = if index + 1 < self.spec.step_count() {
            FormStep::Entry(index + 1)
        } else {
            sink.submit(&self.spec.id, &self.accumulated);
            FormStep::Submitted
        };
        debug!(form = %self.spec.id, from = index + 1, to = ?next, "step advanced");
        self.step.set(next);
        Ok(next)
    }

    /// Go back one step. Nothing happens on the first step or once submitted.
    pub fn back(&mut self) -> FormStep {
        if let FormStep::Entry(index) = self.step() {
            if index > 0 {
                self.errors.set(Vec::new());
                self.step.set(FormStep::Entry(index - 1));
            }
        }
        self.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        sent: RefCell<Vec<(String, FieldMap)>>,
    }

    impl SubmissionSink for RecordingSink {
        fn submit(&self, form_id: &str, fields: &FieldMap) {
            self.sent
                .borrow_mut()
                .push((form_id.to_string(), fields.clone()));
        }
    }

    fn fill_step_one(form: &mut MultiStepForm) {
        form.set_field("name", "Ada Lovelace").unwrap();
        form.set_field("email", "ada@example.com").unwrap();
        form.set_field("phone", "555-0100").unwrap();
    }

    fn fill_step_two(form: &mut MultiStepForm) {
        form.set_field("organization", "St. Mary's").unwrap();
        form.set_field("role", "clergy").unwrap();
        form.set_field("size", "51-200").unwrap();
    }

    #[test]
    fn test_full_walkthrough_submits_once() {
        let sink = RecordingSink::default();
        let mut form = MultiStepForm::new(FormSpec::demo_request()).unwrap();

        fill_step_one(&mut form);
        assert_eq!(form.continue_step(&sink), Ok(FormStep::Entry(1)));
        fill_step_two(&mut form);
        assert_eq!(form.continue_step(&sink), Ok(FormStep::Entry(2)));
        assert!(form.is_last_step());
        assert!(!form.is_submitted());
        form.set_field("interestedIn.analytics", true).unwrap();
        assert_eq!(form.continue_step(&sink), Ok(FormStep::Submitted));
        assert!(form.is_submitted());
        assert_eq!(form.step_number(), 4);

        let sent = sink.sent.borrow();
        assert_eq!(sent.len(), 1);
        let (id, fields) = &sent[0];
        assert_eq!(id, "demo-request");
        assert_eq!(fields.len(), 11);
        assert_eq!(fields["interestedIn.analytics"], FieldValue::Flag(true));
        assert_eq!(fields["interestedIn.virtualSpaces"], FieldValue::Flag(false));
        assert_eq!(fields["message"], FieldValue::Text(String::new()));
        drop(sent);

        assert_eq!(form.continue_step(&sink), Ok(FormStep::Submitted));
        assert_eq!(sink.sent.borrow().len(), 1);
    }

    #[test]
    fn test_invalid_step_stays_and_reports_each_field() {
        let sink = RecordingSink::default();
        let mut form = MultiStepForm::new(FormSpec::demo_request()).unwrap();
        form.set_field("email", "not-an-email").unwrap();

        let err = form.continue_step(&sink).unwrap_err();
        assert_eq!(form.step(), FormStep::Entry(0));
        assert_eq!(err.errors().len(), 3);
        assert_eq!(err.for_field("name").unwrap().message, "Name is required");
        assert_eq!(err.for_field("email").unwrap().message, "Invalid email address");
        assert_eq!(err.for_field("phone").unwrap().message, "Phone number is required");
        assert!(form.accumulated().is_empty());
        assert_eq!(form.errors().get().len(), 3);
    }

    #[test]
    fn test_editing_flagged_field_rechecks_it() {
        let sink = RecordingSink::default();
        let mut form = MultiStepForm::new(FormSpec::demo_request()).unwrap();
        assert!(form.continue_step(&sink).is_err());

        form.set_field("email", "nope").unwrap();
        assert_eq!(form.error_for("email").as_deref(), Some("Invalid email address"));
        form.set_field("email", "user@example.com").unwrap();
        assert_eq!(form.error_for("email"), None);
        assert_eq!(form.error_for("name").as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_back_keeps_drafts() {
        let sink = RecordingSink::default();
        let mut form = MultiStepForm::new(FormSpec::demo_request()).unwrap();
        fill_step_one(&mut form);
        form.continue_step(&sink).unwrap();
        form.set_field("organization", "Half typed").unwrap();

        assert_eq!(form.back(), FormStep::Entry(0));
        assert_eq!(form.value("name"), Some(&FieldValue::from("Ada Lovelace")));
        assert_eq!(form.value("organization"), Some(&FieldValue::from("Half typed")));

        assert_eq!(form.continue_step(&sink), Ok(FormStep::Entry(1)));
        assert_eq!(form.value("organization"), Some(&FieldValue::from("Half typed")));
    }

    #[test]
    fn test_back_is_noop_on_first_step() {
        let mut form = MultiStepForm::new(FormSpec::demo_request()).unwrap();
        assert_eq!(form.back(), FormStep::Entry(0));
    }

    #[test]
    fn test_fields_belong_to_current_step() {
        let sink = RecordingSink::default();
        let mut form = MultiStepForm::new(FormSpec::research_download()).unwrap();
        assert!(matches!(
            form.set_field("phone", "555"),
            Err(CoreError::UnknownField(_))
        ));

        form.set_field("name", "Grace").unwrap();
        form.set_field("email", "grace@example.org").unwrap();
        form.set_field("organization", "Navy").unwrap();
        form.set_field("role", "academic").unwrap();
        assert_eq!(form.continue_step(&sink), Ok(FormStep::Submitted));
        assert!(matches!(
            form.set_field("name", "again"),
            Err(CoreError::FormClosed)
        ));
        assert_eq!(form.back(), FormStep::Submitted);
    }

    #[test]
    fn test_step_status() {
        let sink = RecordingSink::default();
        let mut form = MultiStepForm::new(FormSpec::demo_request()).unwrap();
        fill_step_one(&mut form);
        form.continue_step(&sink).unwrap();

        assert_eq!(form.step_status(0), StepStatus::Complete);
        assert_eq!(form.step_status(1), StepStatus::Current);
        assert_eq!(form.step_status(2), StepStatus::Upcoming);
    }

    #[test]
    fn test_payload_serializes_flat() {
        let mut fields = FieldMap::new();
        fields.insert("email".into(), "a@b.co".into());
        fields.insert("interestedIn.analytics".into(), true.into());
        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"{"email":"a@b.co","interestedIn.analytics":true}"#);
    }

    fn text() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z .']{0,15}"
    }

    fn email() -> impl Strategy<Value = String> {
        "[a-z0-9._%+-]{1,10}@[a-z0-9-]{1,8}\\.[a-z]{2,5}"
    }

    fn choice(values: &'static [&'static str]) -> impl Strategy<Value = String> {
        proptest::sample::select(values).prop_map(str::to_string)
    }

    prop_compose! {
        fn valid_entries()(
            name in text(),
            email in email(),
            phone in "[0-9][0-9() +-]{2,13}",
            organization in text(),
            role in choice(&["clergy", "admin", "tech", "consultant", "other"]),
            size in choice(&["1-50", "51-200", "201-500", "501-1000", "1000+"]),
            agents in any::<bool>(),
            message in "[a-z ]{0,20}",
        ) -> Vec<Vec<(&'static str, FieldValue)>> {
            vec![
                vec![("name", name.into()), ("email", email.into()), ("phone", phone.into())],
                vec![("organization", organization.into()), ("role", role.into()), ("size", size.into())],
                vec![("interestedIn.spiritualAgents", agents.into()), ("message", message.into())],
            ]
        }
    }

    proptest! {
        #[test]
        fn prop_valid_input_submits_after_n_continues(steps in valid_entries()) {
            let sink = RecordingSink::default();
            let mut form = MultiStepForm::new(FormSpec::demo_request()).unwrap();
            let n = form.step_count();

            for (i, entries) in steps.iter().enumerate() {
                for (name, value) in entries {
                    form.set_field(name, value.clone()).unwrap();
                }
                let outcome = form.continue_step(&sink).unwrap();
                if i + 1 < n {
                    prop_assert_eq!(outcome, FormStep::Entry(i + 1));
                } else {
                    prop_assert_eq!(outcome, FormStep::Submitted);
                }
            }

            let all_names: Vec<&str> = form
                .spec()
                .steps
                .iter()
                .flat_map(|s| s.fields.iter().map(|f| f.name.as_str()))
                .collect();
            prop_assert_eq!(form.accumulated().len(), all_names.len());
            for entries in &steps {
                for (name, value) in entries {
                    prop_assert_eq!(form.accumulated().get(*name), Some(value));
                }
            }
            prop_assert_eq!(sink.sent.borrow().len(), 1);
        }

        #[test]
        fn prop_blank_required_field_blocks(
            steps in valid_entries(),
            stop_at in 0usize..2,
            blank in 0usize..3,
        ) {
            let sink = RecordingSink::default();
            let mut form = MultiStepForm::new(FormSpec::demo_request()).unwrap();

            for entries in steps.iter().take(stop_at) {
                for (name, value) in entries {
                    form.set_field(name, value.clone()).unwrap();
                }
                form.continue_step(&sink).unwrap();
            }

            for (i, (name, value)) in steps[stop_at].iter().enumerate() {
                let value = if i == blank { FieldValue::from("  ") } else { value.clone() };
                form.set_field(name, value).unwrap();
            }
            let before = form.accumulated().clone();

            let err = form.continue_step(&sink).unwrap_err();
            prop_assert!(!err.errors().is_empty());
            prop_assert_eq!(form.step(), FormStep::Entry(stop_at));
            prop_assert_eq!(form.accumulated(), &before);
        }

        #[test]
        fn prop_back_then_continue_restores(steps in valid_entries(), depth in 1usize..3) {
            let sink = RecordingSink::default();
            let mut form = MultiStepForm::new(FormSpec::demo_request()).unwrap();
            for entries in steps.iter().take(depth) {
                for (name, value) in entries {
                    form.set_field(name, value.clone()).unwrap();
                }
                form.continue_step(&sink).unwrap();
            }
            prop_assert_eq!(form.step(), FormStep::Entry(depth));

            form.back();
            prop_assert_eq!(form.continue_step(&sink), Ok(FormStep::Entry(depth)));
            for entries in steps.iter().take(depth) {
                for (name, value) in entries {
                    prop_assert_eq!(form.value(name), Some(value));
                }
            }
        }
    }
}
