use leptos::ev::SubmitEvent;
use leptos::*;

use crate::components::page_view::{browser_controller, dispatch, PageView};
use crate::controller::Command;

/// Login page. On success the controller stores the token and leaves for the listing.
#[component]
pub fn LoginForm() -> impl IntoView {
    let page = PageView::new();
    let controller = store_value(browser_controller());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        page.login_message.set(None);
        let command = Command::Login {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        controller.with_value(|c| dispatch(c, page, command));
    };

    view! {
        <form id="login-form" on:submit=handle_submit>
            <h1>{ "Login" }</h1>
            <label for="email">{ "Email" }</label>
            <input
                type="email"
                id="email"
                required=true
                on:input=move |e| set_email.set(event_target_value(&e))
            />
            <label for="password">{ "Password" }</label>
            <input
                type="password"
                id="password"
                required=true
                on:input=move |e| set_password.set(event_target_value(&e))
            />
            <button type="submit" class="login-button">{ "Login" }</button>
            <p id="error-message">{ move || page.login_message.get().unwrap_or_default() }</p>
        </form>
    }
}
