//! Registration Page Component
//!
//! Sign-up form. Validates locally, then registers and opens the session.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::registration_failure_message;
use crate::context::{use_app_context, Page};
use crate::registration::RegistrationForm;
use crate::store::{store_sign_in, use_session_store};

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_session_store();

    let form = RwSignal::new(RegistrationForm::default());
    let (error_message, set_error_message) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(String::new());

        let request = match form.with_untracked(RegistrationForm::validate) {
            Ok(request) => request,
            Err(e) => {
                set_error_message.set(e.to_string());
                return;
            }
        };

        set_pending.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api.register(&request).await {
                Ok(auth) => {
                    set_pending.set(false);
                    store_sign_in(&store, auth);
                    ctx.navigate(Page::Dashboard);
                }
                Err(e) => {
                    log::error!("registration error: {}", e);
                    set_error_message.set(registration_failure_message(&e));
                    set_pending.set(false);
                }
            }
        });
    };

    // Field accessors
    let value_of = move |get: fn(&RegistrationForm) -> &String| {
        Signal::derive(move || form.with(|f| get(f).clone()))
    };
    let setter = move |set: fn(&mut RegistrationForm, String)| {
        Callback::new(move |value: String| form.update(|f| set(f, value)))
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-title">"Create an Account"</h2>

                <Show when=move || !error_message.get().is_empty()>
                    <div class="form-error">{move || error_message.get()}</div>
                </Show>

                <form on:submit=submit>
                    <FormField
                        id="first_name"
                        label="First Name"
                        value=value_of(|f| &f.first_name)
                        on_input=setter(|f, v| f.first_name = v)
                        required=true
                    />
                    <FormField
                        id="last_name"
                        label="Last Name"
                        value=value_of(|f| &f.last_name)
                        on_input=setter(|f, v| f.last_name = v)
                        required=true
                    />
                    <FormField
                        id="email"
                        label="Email"
                        input_type="email"
                        value=value_of(|f| &f.email)
                        on_input=setter(|f, v| f.email = v)
                        required=true
                    />
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        value=value_of(|f| &f.password)
                        on_input=setter(|f, v| f.password = v)
                        required=true
                    />
                    <Show when=move || form.with(RegistrationForm::show_strength_hint)>
                        <p class="field-hint">"Password must be at least 8 characters."</p>
                    </Show>
                    <FormField
                        id="confirm_password"
                        label="Confirm Password"
                        input_type="password"
                        value=value_of(|f| &f.confirm_password)
                        on_input=setter(|f, v| f.confirm_password = v)
                        required=true
                    />
                    <Show when=move || form.with(RegistrationForm::show_mismatch_hint)>
                        <p class="field-hint">"Passwords do not match."</p>
                    </Show>
                    <FormField
                        id="profile_picture"
                        label="Profile Picture URL (optional)"
                        value=value_of(|f| &f.profile_picture_url)
                        on_input=setter(|f, v| f.profile_picture_url = v)
                    />

                    <button type="submit" class="auth-submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Labelled input bound to one form field
#[component]
fn FormField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into, default = "text".to_string())] input_type: String,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id.clone()>{label}</label>
            <input
                type=input_type
                id=id
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
