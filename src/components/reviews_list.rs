use leptos::*;

use crate::components::render_tree::RenderTree;
use crate::view::node::Node;

#[component]
pub fn ReviewsList(#[prop(into)] reviews: Signal<Option<Node>>) -> impl IntoView {
    view! {
        <div class="reviews">
            <RenderTree tree=reviews />
        </div>
    }
}
