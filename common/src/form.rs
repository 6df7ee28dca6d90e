//! Form State Controller.
//!
//! [`DishForm`] is the single owner of the draft and everything derived from
//! it. Each mutation re-runs the schema before returning, so the error map is
//! always in step with the draft and never holds entries for fields the
//! current category does not use.

use std::collections::BTreeSet;

use crate::model::dish::{Category, DishDraft, DishField, DishPayload};
use crate::notification::Notification;
use crate::schema::{self, FieldErrors};
use crate::submission::{self, SubmitError, SubmitOutcome};

/// Behaviour around submission that the form leaves to configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormOptions {
    /// Clear the draft once the dish API accepted it.
    pub reset_after_success: bool,
    /// Refuse `begin_submit` while an earlier request is outstanding.
    pub block_concurrent_submits: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            reset_after_success: false,
            block_concurrent_submits: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DishForm {
    draft: DishDraft,
    touched: BTreeSet<DishField>,
    errors: FieldErrors,
    options: FormOptions,
    pending: usize,
}

impl Default for DishForm {
    fn default() -> Self {
        Self::new(FormOptions::default())
    }
}

impl DishForm {
    pub fn new(options: FormOptions) -> Self {
        let draft = DishDraft::default();
        let errors = schema::validate(&draft);
        Self {
            draft,
            touched: BTreeSet::new(),
            errors,
            options,
            pending: 0,
        }
    }

    pub fn draft(&self) -> &DishDraft {
        &self.draft
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    pub fn set_options(&mut self, options: FormOptions) {
        self.options = options;
    }

    /// Stores raw input for `field`. Selecting through `DishField::Category`
    /// behaves exactly like [`DishForm::set_category`].
    pub fn set_field(&mut self, field: DishField, raw: impl Into<String>) {
        if field == DishField::Category {
            self.set_category(Category::parse(&raw.into()));
            return;
        }
        self.draft.set(field, raw.into());
        self.revalidate();
    }

    /// Switches the active category. Values typed for the previous category
    /// are kept, but their errors are dropped with the revalidation. A select
    /// has no meaningful blur, so the change itself marks it touched.
    pub fn set_category(&mut self, category: Option<Category>) {
        self.draft.category = category;
        self.touched.insert(DishField::Category);
        self.revalidate();
    }

    /// Marks a field touched. Returns `false` if it already was.
    pub fn touch(&mut self, field: DishField) -> bool {
        self.touched.insert(field)
    }

    /// Marks every field touched, so a submit attempt reveals all errors.
    pub fn touch_all(&mut self) {
        self.touched.extend(DishField::ALL);
    }

    pub fn is_touched(&self, field: DishField) -> bool {
        self.touched.contains(&field)
    }

    /// Current error of a relevant field, touched or not.
    pub fn error(&self, field: DishField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Error to render next to the input: only once the field is touched.
    pub fn visible_error(&self, field: DishField) -> Option<&str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether the draft differs from the empty initial draft.
    pub fn is_dirty(&self) -> bool {
        self.draft != DishDraft::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.pending > 0
    }

    /// Whether every field the active category needs at submit time holds a
    /// value. Without a category nothing can be submitted.
    pub fn has_category_values(&self) -> bool {
        match self.draft.category {
            Some(category) => category
                .fields()
                .iter()
                .all(|field| !self.draft.is_blank(*field)),
            None => false,
        }
    }

    /// Drives the enabled state of the submit control.
    pub fn is_submittable(&self) -> bool {
        if self.options.block_concurrent_submits && self.is_submitting() {
            return false;
        }
        self.is_valid() && self.is_dirty() && self.has_category_values()
    }

    /// Starts a submit attempt and hands back the payload to send. On success
    /// the form counts one outstanding request until [`DishForm::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<DishPayload, SubmitError> {
        self.touch_all();
        if self.options.block_concurrent_submits && self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        if !self.is_submittable() {
            return Err(SubmitError::NotSubmittable);
        }

        let payload = submission::build_payload(&self.draft)?;
        self.pending += 1;
        Ok(payload)
    }

    /// Records the outcome of one request and returns the notification to
    /// show. A failure leaves the draft exactly as it was.
    pub fn finish_submit(&mut self, outcome: &SubmitOutcome) -> Notification {
        self.pending = self.pending.saturating_sub(1);
        if outcome.is_success() && self.options.reset_after_success {
            self.reset();
        }
        outcome.notification()
    }

    /// Back to the empty draft. Outstanding requests are still tracked.
    pub fn reset(&mut self) {
        self.draft = DishDraft::default();
        self.touched.clear();
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = schema::validate(&self.draft);
    }
}
