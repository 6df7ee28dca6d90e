//! Field Schema: stateless validation rules for the dish form.
//!
//! `validate` looks only at the always-required fields plus the fields of the
//! active category, so values typed for another category never produce errors.
//! Category-specific fields are range-checked only when non-empty; whether they
//! are filled in at all is a submit-time concern handled by
//! [`crate::form::DishForm::is_submittable`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::dish::{Category, DishDraft, DishField};

/// Field to message. A missing entry means the field is valid.
pub type FieldErrors = BTreeMap<DishField, String>;

/// Strict 24-hour `HH:MM:SS`. ASCII classes on purpose: `\d` would accept
/// non-ASCII digits.
static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]$").expect("time pattern compiles")
});

const TIME_LENGTH: usize = 8;

pub const NAME_REQUIRED: &str = "Name is required";
pub const TIME_REQUIRED: &str = "Preparation time is required";
pub const TIME_INVALID: &str = "Invalid time format (HH:mm:ss)";
pub const CATEGORY_REQUIRED: &str = "Type is required";

struct NumericRule {
    min: f64,
    max: Option<f64>,
    integer: bool,
    out_of_range: &'static str,
}

fn numeric_rule(field: DishField) -> Option<NumericRule> {
    let rule = match field {
        DishField::NumberOfSlices => NumericRule {
            min: 1.0,
            max: None,
            integer: false,
            out_of_range: "Number of slices must be greater than 0",
        },
        DishField::Diameter => NumericRule {
            min: 0.01,
            max: None,
            integer: false,
            out_of_range: "Diameter must be greater than 0",
        },
        DishField::SpicinessScale => NumericRule {
            min: 1.0,
            max: Some(10.0),
            integer: true,
            out_of_range: "Spiciness scale must be between 1 and 10",
        },
        DishField::SlicesOfBread => NumericRule {
            min: 1.0,
            max: None,
            integer: false,
            out_of_range: "Slices of bread must be greater than 0",
        },
        DishField::Name | DishField::PreparationTime | DishField::Category => return None,
    };
    Some(rule)
}

/// Parses numeric input the way a number input reports it. Infinite and NaN
/// values are not numbers for the purpose of this form.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Checks `HH:MM:SS` on a 24-hour clock, exactly eight characters long.
pub fn is_valid_time(raw: &str) -> bool {
    raw.len() == TIME_LENGTH && TIME_PATTERN.is_match(raw)
}

/// Runs the rule of a single field against the draft, regardless of whether
/// the field is relevant for the current category.
pub fn validate_field(field: DishField, draft: &DishDraft) -> Option<String> {
    let raw = draft.value(field);
    match field {
        DishField::Name if raw.is_empty() => Some(NAME_REQUIRED.to_string()),
        DishField::Name => None,
        DishField::PreparationTime if raw.is_empty() => Some(TIME_REQUIRED.to_string()),
        DishField::PreparationTime if !is_valid_time(raw) => Some(TIME_INVALID.to_string()),
        DishField::PreparationTime => None,
        DishField::Category if draft.category.is_none() => Some(CATEGORY_REQUIRED.to_string()),
        DishField::Category => None,
        _ => validate_numeric(field, raw),
    }
}

fn validate_numeric(field: DishField, raw: &str) -> Option<String> {
    let rule = numeric_rule(field)?;
    if raw.is_empty() {
        return None;
    }

    let Some(value) = parse_number(raw) else {
        return Some(format!("{} must be a number", field.label()));
    };
    if rule.integer && value.fract() != 0.0 {
        return Some(format!("{} must be a whole number", field.label()));
    }
    if value < rule.min || rule.max.is_some_and(|max| value > max) {
        return Some(rule.out_of_range.to_string());
    }
    None
}

/// Fields that take part in validation for the given category.
pub fn relevant_fields(category: Option<Category>) -> Vec<DishField> {
    let mut fields = DishField::ALWAYS_REQUIRED.to_vec();
    if let Some(category) = category {
        fields.extend_from_slice(category.fields());
    }
    fields
}

/// Validates every relevant field of the draft.
pub fn validate(draft: &DishDraft) -> FieldErrors {
    relevant_fields(draft.category)
        .into_iter()
        .filter_map(|field| validate_field(field, draft).map(|message| (field, message)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(field: DishField, raw: &str) -> DishDraft {
        let mut draft = DishDraft::default();
        draft.set(field, raw.to_string());
        draft
    }

    #[test]
    fn name_only_needs_to_be_non_empty() {
        let blank = draft_with(DishField::Name, "");
        assert_eq!(validate_field(DishField::Name, &blank).as_deref(), Some(NAME_REQUIRED));

        let spaces = draft_with(DishField::Name, "  ");
        assert_eq!(validate_field(DishField::Name, &spaces), None);
    }

    #[test]
    fn preparation_time_bounds() {
        assert!(is_valid_time("23:59:59"));
        assert!(is_valid_time("00:00:00"));
        assert!(!is_valid_time("25:00:00"));
        assert!(!is_valid_time("24:00:00"));
        assert!(!is_valid_time("12:60:00"));
        assert!(!is_valid_time("12:00:60"));
        assert!(!is_valid_time("9:00:00"));
        assert!(!is_valid_time("09:00:00 "));
        assert!(!is_valid_time("09:00"));
    }

    #[test]
    fn preparation_time_messages() {
        let blank = draft_with(DishField::PreparationTime, "");
        assert_eq!(
            validate_field(DishField::PreparationTime, &blank).as_deref(),
            Some(TIME_REQUIRED)
        );

        let short = draft_with(DishField::PreparationTime, "9:00:00");
        assert_eq!(
            validate_field(DishField::PreparationTime, &short).as_deref(),
            Some(TIME_INVALID)
        );
    }

    #[test]
    fn blank_numeric_fields_are_valid() {
        let draft = DishDraft::default();
        for field in [
            DishField::NumberOfSlices,
            DishField::Diameter,
            DishField::SpicinessScale,
            DishField::SlicesOfBread,
        ] {
            assert_eq!(validate_field(field, &draft), None, "{field:?}");
        }
    }

    #[test]
    fn numeric_lower_bounds() {
        let cases = [
            (DishField::NumberOfSlices, "0", false),
            (DishField::NumberOfSlices, "1", true),
            (DishField::Diameter, "0", false),
            (DishField::Diameter, "0.01", true),
            (DishField::Diameter, "-3", false),
            (DishField::SlicesOfBread, "0", false),
            (DishField::SlicesOfBread, "2", true),
        ];
        for (field, raw, ok) in cases {
            let draft = draft_with(field, raw);
            assert_eq!(validate_field(field, &draft).is_none(), ok, "{field:?} = {raw}");
        }
    }

    #[test]
    fn spiciness_is_an_integer_between_one_and_ten() {
        for raw in ["1", "7", "10"] {
            let draft = draft_with(DishField::SpicinessScale, raw);
            assert_eq!(validate_field(DishField::SpicinessScale, &draft), None);
        }

        let draft = draft_with(DishField::SpicinessScale, "11");
        assert_eq!(
            validate_field(DishField::SpicinessScale, &draft).as_deref(),
            Some("Spiciness scale must be between 1 and 10")
        );

        let draft = draft_with(DishField::SpicinessScale, "2.5");
        assert_eq!(
            validate_field(DishField::SpicinessScale, &draft).as_deref(),
            Some("Spiciness scale must be a whole number")
        );
    }

    #[test]
    fn non_numeric_text_is_reported() {
        let draft = draft_with(DishField::Diameter, "large");
        assert_eq!(
            validate_field(DishField::Diameter, &draft).as_deref(),
            Some("Diameter must be a number")
        );

        let draft = draft_with(DishField::Diameter, "inf");
        assert!(validate_field(DishField::Diameter, &draft).is_some());
    }

    #[test]
    fn validate_ignores_fields_of_other_categories() {
        let mut draft = DishDraft {
            name: "Club".to_string(),
            preparation_time: "00:05:00".to_string(),
            category: Some(Category::Sandwich),
            no_of_slices: "-1".to_string(),
            diameter: "abc".to_string(),
            spiciness_scale: "99".to_string(),
            slices_of_bread: "3".to_string(),
        };
        assert!(validate(&draft).is_empty());

        draft.category = Some(Category::Pizza);
        let errors = validate(&draft);
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![DishField::NumberOfSlices, DishField::Diameter]
        );
    }

    #[test]
    fn empty_draft_reports_the_required_trio() {
        let errors = validate(&DishDraft::default());
        assert_eq!(errors.get(&DishField::Name).map(String::as_str), Some(NAME_REQUIRED));
        assert_eq!(
            errors.get(&DishField::PreparationTime).map(String::as_str),
            Some(TIME_REQUIRED)
        );
        assert_eq!(
            errors.get(&DishField::Category).map(String::as_str),
            Some(CATEGORY_REQUIRED)
        );
        assert_eq!(errors.len(), 3);
    }
}
