//! View rendering for the dish form component.
//!
//! Always renders name, preparation time and the category select; below them
//! only the inputs of the selected category. An inline error appears under a
//! field once it is touched. Toasts are drawn top-center from the `Toaster`.

use common::model::dish::{Category, DishField};
use common::notification::{Notification, Severity};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{clicked_value, input_value, selected_category, spiciness_display};
use super::messages::Msg;
use super::state::DishFormComponent;

/// Main view function: title, form, and toast stack.
pub fn view(component: &DishFormComponent, ctx: &Context<DishFormComponent>) -> Html {
    let link = ctx.link();
    let form = &component.form;

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <>
            <div style="display:flex;flex-direction:column;align-items:center;margin-top:50px;">
                <h1 style="font-size:30px;font-weight:700;margin-bottom:30px;">{"Dish creator"}</h1>
                <form
                    {onsubmit}
                    novalidate=true
                    style="display:flex;flex-direction:column;align-items:center;width:500px;padding:30px;border:1px solid #ccc;border-radius:10px;"
                >
                    { text_field(component, link, DishField::Name, "text", None) }
                    { text_field(component, link, DishField::PreparationTime, "text", None) }
                    { category_select(component, link) }
                    { category_fields(component, link) }
                    <button
                        type="submit"
                        disabled={!form.is_submittable()}
                        style="width:60%;height:60px;margin-bottom:20px;"
                    >
                        { if form.is_submitting() { "Submitting..." } else { "Submit" } }
                    </button>
                </form>
            </div>
            { toast_stack(component, link) }
        </>
    }
}

/// Inputs of the active category, nothing when no category is selected.
fn category_fields(component: &DishFormComponent, link: &Scope<DishFormComponent>) -> Html {
    match component.form.draft().category {
        Some(Category::Pizza) => html! {
            <>
                { text_field(component, link, DishField::NumberOfSlices, "number", None) }
                { text_field(component, link, DishField::Diameter, "number", Some("0.01")) }
            </>
        },
        Some(Category::Soup) => spiciness_slider(component, link),
        Some(Category::Sandwich) => {
            text_field(component, link, DishField::SlicesOfBread, "number", None)
        }
        None => html! {},
    }
}

fn text_field(
    component: &DishFormComponent,
    link: &Scope<DishFormComponent>,
    field: DishField,
    input_type: &'static str,
    step: Option<&'static str>,
) -> Html {
    let error = component.form.visible_error(field);
    let border = if error.is_some() { "#d32f2f" } else { "#ccc" };

    html! {
        <div style="width:100%;margin-bottom:20px;">
            <label for={field.key()} style="display:block;margin-bottom:4px;">{ field.label() }</label>
            <input
                id={field.key()}
                name={field.key()}
                type={input_type}
                step={step}
                value={component.form.draft().value(field).to_string()}
                oninput={link.callback(move |e: InputEvent| Msg::SetField(field, input_value(&e)))}
                onblur={link.callback(move |_: FocusEvent| Msg::Blur(field))}
                style={format!("width:100%;padding:8px;box-sizing:border-box;border:1px solid {};border-radius:4px;", border)}
            />
            { helper_text(error) }
        </div>
    }
}

fn category_select(component: &DishFormComponent, link: &Scope<DishFormComponent>) -> Html {
    let field = DishField::Category;
    let current = component.form.draft().category;

    html! {
        <div style="width:100%;margin-bottom:20px;">
            <label for={field.key()} style="display:block;margin-bottom:4px;">{ field.label() }</label>
            <select
                id={field.key()}
                name={field.key()}
                onchange={link.callback(|e: Event| Msg::SetCategory(selected_category(&e)))}
                style="width:100%;padding:8px;border:1px solid #ccc;border-radius:4px;"
            >
                <option value="" selected={current.is_none()}>{"None"}</option>
                {
                    for Category::ALL.into_iter().map(|category| html! {
                        <option value={category.as_str()} selected={current == Some(category)}>
                            { category.label() }
                        </option>
                    })
                }
            </select>
            { helper_text(component.form.visible_error(field)) }
        </div>
    }
}

/// Range input for 1-10. Moving it is the only interaction, so it marks the
/// field touched right away. While blank it is drawn faded, and a click on
/// the thumb picks the value under it.
fn spiciness_slider(component: &DishFormComponent, link: &Scope<DishFormComponent>) -> Html {
    let field = DishField::SpicinessScale;
    let raw = component.form.draft().value(field);
    let display = spiciness_display(raw);

    html! {
        <div style="width:100%;margin-bottom:20px;">
            <label for={field.key()} style="display:block;margin-bottom:4px;">
                { format!("{}: {}", field.label(), display.label) }
            </label>
            <input
                id={field.key()}
                name={field.key()}
                type="range"
                min="1"
                max="10"
                step="1"
                value={raw.to_string()}
                oninput={link.batch_callback(move |e: InputEvent| {
                    vec![Msg::SetField(field, input_value(&e)), Msg::Blur(field)]
                })}
                onclick={link.batch_callback(move |e: MouseEvent| {
                    vec![Msg::SetField(field, clicked_value(&e)), Msg::Blur(field)]
                })}
                style={format!("width:100%;opacity:{};", display.opacity)}
            />
            {
                if display.unset {
                    html! {
                        <span style="display:block;margin-top:4px;color:#777;font-size:12px;">
                            {"Drag or click the slider to choose"}
                        </span>
                    }
                } else {
                    html! {}
                }
            }
            { helper_text(component.form.visible_error(field)) }
        </div>
    }
}

fn helper_text(error: Option<&str>) -> Html {
    match error {
        Some(message) => html! {
            <span style="display:block;margin-top:4px;color:#d32f2f;font-size:12px;">{ message.to_string() }</span>
        },
        None => html! {},
    }
}

fn toast_stack(component: &DishFormComponent, link: &Scope<DishFormComponent>) -> Html {
    html! {
        <div style="position:fixed;top:20px;left:50%;transform:translateX(-50%);z-index:10000;display:flex;flex-direction:column;gap:8px;">
            { for component.toaster.visible().map(|notification| toast(notification, link)) }
        </div>
    }
}

fn toast(notification: &Notification, link: &Scope<DishFormComponent>) -> Html {
    let key = notification.key;
    let background = match notification.severity {
        Severity::Success => "#2e7d32",
        Severity::Error => "#d32f2f",
    };

    html! {
        <div
            id={format!("toast-{}", key.as_str())}
            role="status"
            onclick={link.callback(move |_: MouseEvent| Msg::DismissToast(key))}
            style={format!("background:{};color:#fff;padding:10px 20px;border-radius:4px;font-family:Arial, sans-serif;cursor:pointer;", background)}
        >
            { notification.message }
        </div>
    }
}
