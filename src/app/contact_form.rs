use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
};

use crate::contact::{ContactState, Field, LogSink};

use super::theme::Theme;

#[component]
pub fn ContactSection(
    theme: ReadSignal<Theme>,
    contact: ReadSignal<ContactState>,
    set_contact: WriteSignal<ContactState>,
) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_contact.update(|c| c.submit(&LogSink));
    };

    view! {
        <section id="contact" class="py-20">
            <div class="max-w-2xl mx-auto px-4">
                <h2 class="text-3xl font-bold mb-8">"Get in Touch"</h2>
                <form on:submit=on_submit class="space-y-6" novalidate=true>
                    <FormField field=Field::Name theme contact set_contact />
                    <FormField field=Field::Email theme contact set_contact />
                    <FormField field=Field::Message theme contact set_contact />
                    <button
                        type="submit"
                        class="w-full bg-blue-500 text-white px-6 py-2 rounded-md hover:bg-blue-600 transform transition-all duration-200 hover:shadow-lg hover:scale-[1.02] active:scale-[0.98]"
                    >
                        "Send Message"
                    </button>
                    {move || {
                        contact
                            .with(|c| c.delivery_error.clone())
                            .map(|e| view! { <p class="text-red-500 mt-1">{e}</p> })
                    }}
                </form>
            </div>
        </section>
    }
}

#[component]
fn FormField(
    field: Field,
    theme: ReadSignal<Theme>,
    contact: ReadSignal<ContactState>,
    set_contact: WriteSignal<ContactState>,
) -> impl IntoView {
    let class = move || {
        format!(
            "w-full px-4 py-2 rounded-md border {}",
            theme.get().classes().input
        )
    };
    let value = move || contact.with(|c| c.form.get(field).to_string());
    let on_input = move |ev: Event| {
        let value = event_target_value(&ev);
        set_contact.update(|c| c.edit(field, value));
    };

    let input = match field {
        Field::Message => view! {
            <textarea
                placeholder="Message"
                rows=4
                class=class
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        Field::Name | Field::Email => {
            let (kind, placeholder) = if field == Field::Email {
                ("email", "Email")
            } else {
                ("text", "Name")
            };
            view! {
                <input
                    type=kind
                    placeholder=placeholder
                    class=class
                    prop:value=value
                    on:input=on_input
                />
            }
            .into_any()
        }
    };

    view! {
        <div>
            {input}
            {move || {
                contact
                    .with(|c| c.errors.get(field).map(str::to_string))
                    .map(|msg| view! { <p class="text-red-500 mt-1">{msg}</p> })
            }}
        </div>
    }
}
