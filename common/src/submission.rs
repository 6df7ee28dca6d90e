//! Submission Pipeline: draft to wire payload, and request outcome to
//! notification.
//!
//! The HTTP call itself lives in the frontend; everything here is pure so the
//! mapping rules can be tested without a browser.

use std::fmt;

use serde_json::Number;
use thiserror::Error;

use crate::model::dish::{Category, DishDetails, DishDraft, DishField, DishPayload};
use crate::notification::{DISH_CREATED, Notification, SUBMIT_FAILED};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayloadError {
    #[error("no dish category selected")]
    MissingCategory,
    #[error("{field} is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Reasons a submit attempt never reaches the network.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("the form is not ready to be submitted")]
    NotSubmittable,
    #[error("a previous submission is still in flight")]
    InFlight,
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// Converts raw numeric text. Blank text becomes `None`, which serializes as
/// `null`. Whole numbers stay integers on the wire.
pub fn to_number(field: DishField, raw: &str) -> Result<Option<Number>, PayloadError> {
    if raw.is_empty() {
        return Ok(None);
    }

    let text = raw.trim();
    if let Ok(value) = text.parse::<u64>() {
        return Ok(Some(Number::from(value)));
    }
    if let Ok(value) = text.parse::<i64>() {
        return Ok(Some(Number::from(value)));
    }
    let value = text
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| PayloadError::InvalidNumber {
            field: field.key(),
            value: raw.to_string(),
        })?;

    // "30.0" and "1e1" are whole numbers too and go out as integers.
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        return Ok(Some(Number::from(value as i64)));
    }
    Ok(Number::from_f64(value))
}

/// Builds the request body for the draft's category. Fields of the other
/// categories are never part of the result, whatever the draft holds.
pub fn build_payload(draft: &DishDraft) -> Result<DishPayload, PayloadError> {
    let category = draft.category.ok_or(PayloadError::MissingCategory)?;
    let number = |field: DishField| to_number(field, draft.value(field));

    let details = match category {
        Category::Pizza => DishDetails::Pizza {
            no_of_slices: number(DishField::NumberOfSlices)?,
            diameter: number(DishField::Diameter)?,
        },
        Category::Soup => DishDetails::Soup {
            spiciness_scale: number(DishField::SpicinessScale)?,
        },
        Category::Sandwich => DishDetails::Sandwich {
            slices_of_bread: number(DishField::SlicesOfBread)?,
        },
    };

    Ok(DishPayload {
        name: draft.name.clone(),
        preparation_time: draft.preparation_time.clone(),
        details,
    })
}

/// How one POST to the dish API ended. Only the success/failure split is
/// visible to the user; the variants exist for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created { status: u16 },
    Rejected { status: u16 },
    Transport(String),
    TimedOut,
}

impl SubmitOutcome {
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            SubmitOutcome::Created { status }
        } else {
            SubmitOutcome::Rejected { status }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Created { .. })
    }

    pub fn notification(&self) -> Notification {
        if self.is_success() {
            DISH_CREATED
        } else {
            SUBMIT_FAILED
        }
    }
}

impl fmt::Display for SubmitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitOutcome::Created { status } => write!(f, "dish created (HTTP {status})"),
            SubmitOutcome::Rejected { status } => write!(f, "dish rejected (HTTP {status})"),
            SubmitOutcome::Transport(reason) => write!(f, "request failed: {reason}"),
            SubmitOutcome::TimedOut => write!(f, "request timed out"),
        }
    }
}
