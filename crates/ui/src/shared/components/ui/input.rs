use contracts::shared::format::{format_number_with_decimals, parse_amount};
use leptos::prelude::*;

pub(crate) fn input_class(has_error: bool, extra: &str) -> String {
    let mut class = String::from("form__input");
    if has_error {
        class.push_str(" form__input--error");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Input component with label, hint and validation message
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", "email", "search", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Helper text under the field
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    /// Validation message; switches the field to the error state
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let has_error = move || error.get().is_some_and(|e| !e.is_empty());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || input_class(has_error(), &additional_class())
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                aria-invalid=move || has_error().to_string()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || {
                if has_error() {
                    error.get().map(|e| view! { <div class="form__error">{e}</div> }.into_any())
                } else {
                    hint.get().map(|h| view! { <div class="form__hint">{h}</div> }.into_any())
                }
            }}
        </div>
    }
}

/// Money input. Accepts "1 234,50"-style text and reports the parsed amount,
/// `None` for an empty field. Unparsable text keeps the last valid amount and
/// shows an error.
#[component]
pub fn AmountInput(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Initial amount
    #[prop(optional)]
    initial: Option<f64>,
    /// Fired with the parsed amount on every valid edit
    #[prop(optional)]
    on_change: Option<Callback<Option<f64>>>,
    /// Currency suffix shown after the field
    #[prop(optional, into)]
    currency: MaybeProp<String>,
    /// Reject negative amounts
    #[prop(optional)]
    non_negative: bool,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let text = RwSignal::new(
        initial
            .map(|v| format_number_with_decimals(v, 2))
            .unwrap_or_default(),
    );
    let error = RwSignal::new(None::<String>);

    let handle_input = Callback::new(move |raw: String| {
        text.set(raw.clone());
        if raw.trim().is_empty() {
            error.set(None);
            if let Some(handler) = on_change {
                handler.run(None);
            }
            return;
        }
        match parse_amount(&raw) {
            Some(v) if non_negative && v < 0.0 => {
                error.set(Some("Amount cannot be negative".to_string()));
            }
            Some(v) => {
                error.set(None);
                if let Some(handler) = on_change {
                    handler.run(Some(v));
                }
            }
            None => error.set(Some("Enter a number, e.g. 1 234.50".to_string())),
        }
    });

    view! {
        <div class="amount-input">
            <Input
                label=label
                value=text
                on_input=handle_input
                input_type="text"
                placeholder="0.00"
                error=Signal::derive(move || error.get())
                disabled=disabled
                id=id
                class="amount-input__field"
            />
            {move || currency.get().map(|c| view! {
                <span class="amount-input__currency">{c}</span>
            })}
        </div>
    }
}
