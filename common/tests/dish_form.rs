use common::form::DishForm;
use common::model::dish::{Category, DishDraft, DishField};
use common::notification::{NotificationKey, Toaster};
use common::submission::{SubmitOutcome, build_payload};
use serde_json::json;

fn form_with(values: &[(DishField, &str)]) -> DishForm {
    let mut form = DishForm::default();
    for (field, raw) in values {
        form.set_field(*field, *raw);
    }
    form
}

#[test]
fn margherita_end_to_end() {
    let mut form = form_with(&[
        (DishField::Name, "Margherita"),
        (DishField::PreparationTime, "00:20:00"),
        (DishField::Category, "pizza"),
        (DishField::NumberOfSlices, "8"),
        (DishField::Diameter, "30"),
    ]);
    assert!(form.is_submittable());

    let payload = form.begin_submit().unwrap();
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({
            "name": "Margherita",
            "preparation_time": "00:20:00",
            "type": "pizza",
            "no_of_slices": 8,
            "diameter": 30
        })
    );
}

#[test]
fn missing_trio_is_never_submittable() {
    let complete = [
        (DishField::Name, "Bread"),
        (DishField::PreparationTime, "00:03:00"),
        (DishField::Category, "sandwich"),
        (DishField::SlicesOfBread, "2"),
    ];
    assert!(form_with(&complete).is_submittable());

    let broken = [
        (DishField::Name, ""),
        (DishField::PreparationTime, "3:00:00"),
        (DishField::Category, ""),
    ];
    for (field, raw) in broken {
        let mut form = form_with(&complete);
        form.set_field(field, raw);
        assert!(!form.is_submittable(), "{field:?} = {raw:?}");
    }
}

#[test]
fn pizza_needs_both_numbers_in_range() {
    let base = [
        (DishField::Name, "Quattro"),
        (DishField::PreparationTime, "00:25:00"),
        (DishField::Category, "pizza"),
    ];
    let cases = [
        ("8", "30", true),
        ("8", "", false),
        ("", "30", false),
        ("0", "30", false),
        ("8", "0", false),
        ("1", "0.01", true),
    ];
    for (slices, diameter, expected) in cases {
        let mut form = form_with(&base);
        form.set_field(DishField::NumberOfSlices, slices);
        form.set_field(DishField::Diameter, diameter);
        assert_eq!(form.is_submittable(), expected, "slices={slices:?} diameter={diameter:?}");
    }
}

#[test]
fn invalid_pizza_values_do_not_block_soup() {
    let mut form = form_with(&[
        (DishField::Name, "Minestrone"),
        (DishField::PreparationTime, "01:00:00"),
        (DishField::Category, "pizza"),
        (DishField::NumberOfSlices, "-4"),
        (DishField::Diameter, "wide"),
    ]);
    form.touch_all();
    assert!(!form.is_valid());

    form.set_field(DishField::Category, "soup");
    form.set_field(DishField::SpicinessScale, "3");
    assert!(form.is_valid());
    assert!(form.is_submittable());
    assert_eq!(form.visible_error(DishField::NumberOfSlices), None);
    assert_eq!(form.visible_error(DishField::Diameter), None);
}

#[test]
fn soup_payload_has_no_foreign_keys() {
    let draft = DishDraft {
        name: "Tomato".to_string(),
        preparation_time: "00:15:00".to_string(),
        category: Some(Category::Soup),
        no_of_slices: "8".to_string(),
        diameter: "30".to_string(),
        spiciness_scale: "7".to_string(),
        slices_of_bread: "2".to_string(),
    };
    assert_eq!(
        serde_json::to_value(build_payload(&draft).unwrap()).unwrap(),
        json!({
            "name": "Tomato",
            "preparation_time": "00:15:00",
            "type": "soup",
            "spiciness_scale": 7
        })
    );
}

#[test]
fn blank_soup_spiciness_is_null_not_missing() {
    let draft = DishDraft {
        name: "Tomato".to_string(),
        preparation_time: "00:15:00".to_string(),
        category: Some(Category::Soup),
        ..DishDraft::default()
    };
    let value = serde_json::to_value(build_payload(&draft).unwrap()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.get("spiciness_scale"), Some(&serde_json::Value::Null));
}

#[test]
fn preparation_time_examples() {
    let mut form = form_with(&[(DishField::PreparationTime, "25:00:00")]);
    assert!(form.error(DishField::PreparationTime).is_some());

    form.set_field(DishField::PreparationTime, "23:59:59");
    assert_eq!(form.error(DishField::PreparationTime), None);

    form.set_field(DishField::PreparationTime, "9:00:00");
    assert!(form.error(DishField::PreparationTime).is_some());
}

#[test]
fn repeated_failures_show_one_error_toast() {
    let mut form = form_with(&[
        (DishField::Name, "Club"),
        (DishField::PreparationTime, "00:05:00"),
        (DishField::Category, "sandwich"),
        (DishField::SlicesOfBread, "3"),
    ]);
    let before = form.draft().clone();
    let mut toaster = Toaster::new();
    let mut shown = 0;

    for _ in 0..3 {
        form.begin_submit().unwrap();
        let notification =
            form.finish_submit(&SubmitOutcome::Transport("network unreachable".to_string()));
        if toaster.push(notification).is_some() {
            shown += 1;
        }
    }

    assert_eq!(shown, 1);
    assert!(toaster.is_visible(NotificationKey::Error));
    assert_eq!(form.draft(), &before);
}

#[test]
fn name_of_spaces_is_submittable() {
    let form = form_with(&[
        (DishField::Name, "   "),
        (DishField::PreparationTime, "00:05:00"),
        (DishField::Category, "sandwich"),
        (DishField::SlicesOfBread, "2"),
    ]);
    assert_eq!(form.error(DishField::Name), None);
    assert!(form.is_submittable());
}
