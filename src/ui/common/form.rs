use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Field label text
    #[prop(into)]
    label: Signal<String>,
    /// Input type (text, email, tel, date, number, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(into, default = String::new().into())]
    placeholder: Signal<String>,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Optional icon name shown inside the input
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Extra attributes for constrained inputs (min, max)
    #[prop(optional)]
    min: Option<&'static str>,
    #[prop(optional)]
    max: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">{move || label.get()}</label>
            <div class="relative">
                {icon.map(|name| view! {
                    <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-500 pointer-events-none">
                        <Icon name=name class="w-4 h-4"/>
                    </span>
                })}
                <input
                    type=input_type
                    class=if icon.is_some() { "input-base pl-10" } else { "input-base" }
                    placeholder=move || placeholder.get()
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    disabled=disabled
                    min=min
                    max=max
                />
            </div>
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    /// Field label text
    #[prop(into)]
    label: Signal<String>,
    /// Placeholder text
    #[prop(into, default = String::new().into())]
    placeholder: Signal<String>,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
    /// Whether field is disabled
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">{move || label.get()}</label>
            <textarea
                class="input-base resize-none"
                placeholder=move || placeholder.get()
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=disabled
            />
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    /// Field label text
    #[prop(into)]
    label: Signal<String>,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
    /// Whether field is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Optional icon name shown inside the select
    #[prop(optional)]
    icon: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">{move || label.get()}</label>
            <div class="relative">
                {icon.map(|name| view! {
                    <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-500 pointer-events-none">
                        <Icon name=name class="w-4 h-4"/>
                    </span>
                })}
                <select
                    class=if icon.is_some() { "select-base pl-10" } else { "select-base" }
                    prop:value=move || value.get()
                    on:change=move |ev| {
                        let val = event_target_value(&ev);
                        on_change.run(val);
                    }
                    disabled=disabled
                >
                    {options.into_iter().map(|(val, text)| {
                        view! {
                            <option value=val.clone()>{text}</option>
                        }
                    }).collect_view()}
                </select>
            </div>
        </div>
    }
}
