use leptos::ev::SubmitEvent;
use leptos::*;

use crate::models::review::{MAX_RATING, MIN_RATING};

const DEFAULT_RATING: &str = "5";

/// Review input. Hands `(comment, rating)` to `on_submit` and clears itself
/// whenever `resets` changes.
#[component]
pub fn ReviewForm(
    #[prop(into)] resets: Signal<u32>,
    on_submit: Callback<(String, String)>,
) -> impl IntoView {
    let (comment, set_comment) = create_signal(String::new());
    let (rating, set_rating) = create_signal(DEFAULT_RATING.to_string());

    create_effect(move |_| {
        let _ = resets.get();
        set_comment.set(String::new());
        set_rating.set(DEFAULT_RATING.to_string());
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call((comment.get_untracked(), rating.get_untracked()));
    };

    view! {
        <form id="review-form" on:submit=handle_submit>
            <h3>{ "Add a Review" }</h3>
            <textarea
                id="review-text"
                placeholder="Write your review here"
                prop:value=move || comment.get()
                on:input=move |e| set_comment.set(event_target_value(&e))
            />
            <label for="rating">{ "Rating:" }</label>
            <select
                id="rating"
                prop:value=move || rating.get()
                on:change=move |e| set_rating.set(event_target_value(&e))
            >
                { (MIN_RATING..=MAX_RATING).map(|r| view! {
                    <option value=r.to_string()>{ r.to_string() }</option>
                }).collect_view() }
            </select>
            <button type="submit">{ "Submit Review" }</button>
        </form>
    }
}
