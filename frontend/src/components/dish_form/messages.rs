use common::config::FormConfig;
use common::model::dish::{Category, DishField};
use common::notification::NotificationKey;
use common::submission::SubmitOutcome;

#[derive(Clone)]
pub enum Msg {
    SetConfig(FormConfig),
    SetField(DishField, String),
    SetCategory(Option<Category>),
    Blur(DishField),
    Submit,
    SubmitFinished(SubmitOutcome),
    DismissToast(NotificationKey),
    ExpireToast(NotificationKey, u64),
}
