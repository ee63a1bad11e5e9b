//! Mounts [`Node`] trees produced by the renderers.
use leptos::html::{custom, Custom};
use leptos::*;

use crate::view::node::{Element, Node};

impl IntoView for Node {
    fn into_view(self) -> View {
        match self {
            Node::Text(content) => content.into_view(),
            Node::Element(Element {
                tag,
                attrs,
                children,
            }) => {
                let mut element = custom(Custom::new(tag));
                for (name, value) in attrs {
                    element = element.attr(name, value);
                }
                for child in children {
                    element = element.child(child.into_view());
                }
                element.into_view()
            }
        }
    }
}

/// Shows the latest tree of a region, replacing whatever was there.
#[component]
pub fn RenderTree(#[prop(into)] tree: Signal<Option<Node>>) -> impl IntoView {
    move || tree.get().map(IntoView::into_view)
}
