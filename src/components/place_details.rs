use leptos::*;

use crate::components::page_view::{alert, browser_controller, current_query, dispatch, PageView};
use crate::components::render_tree::RenderTree;
use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsList;
use crate::controller::Command;
use crate::models::place::PlaceId;

/// Detail page for `place.html?id=<id>`. Anonymous visitors are sent back to the listing.
#[component]
pub fn PlaceDetails() -> impl IntoView {
    let page = PageView::new();
    let controller = store_value(browser_controller());
    let query = current_query();
    let place_id = PlaceId::from_query(&query);
    let authenticated = controller.with_value(|c| c.session().is_authenticated());

    controller.with_value(|c| dispatch(c, page, Command::LoadPlace { query }));

    let on_submit = Callback::new(move |(comment, rating): (String, String)| {
        let Some(place_id) = place_id.clone() else {
            alert("No place selected");
            return;
        };
        let command = Command::SubmitReview {
            place_id,
            comment,
            rating,
        };
        controller.with_value(|c| dispatch(c, page, command));
    });

    view! {
        <div>
            <p class="error-message">{ move || page.place_error.get() }</p>
            <RenderTree tree=page.place_details />
            <ReviewsList reviews=page.reviews />
            { authenticated.then(|| view! {
                <ReviewForm resets=page.review_form_resets on_submit=on_submit />
            }) }
        </div>
    }
}
