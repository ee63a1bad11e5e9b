//! Place and review renderers. Each returns the full new content of its region.
use crate::models::place::Place;
use crate::models::review::Review;
use crate::view::model::{PlaceCard, ReviewCard};
use crate::view::node::{el, Node};

pub const PLACES_LIST_ID: &str = "places-list";
pub const REVIEWS_ID: &str = "reviews";

pub fn render_place_card(card: &PlaceCard, hidden: bool) -> Node {
    el("article")
        .class("place-card")
        .attr("data-place-id", card.id.as_str())
        .hidden(hidden)
        .child(el("h2").text(card.name.as_str()))
        .child(el("p").class("price").text(card.price_text.as_str()))
        .child(el("p").class("location").text(card.location_text.as_str()))
        .child(
            el("a")
                .class("details-button")
                .attr("href", card.details_href.as_str())
                .text("View Details"),
        )
        .build()
}

pub fn render_place_list(places: &[Place]) -> Node {
    el("section")
        .id(PLACES_LIST_ID)
        .children(
            places
                .iter()
                .map(|place| render_place_card(&PlaceCard::from(place), false)),
        )
        .build()
}

pub fn render_place_detail(place: &Place) -> Node {
    let mut details = el("div")
        .class("place-details")
        .child(el("h1").text(place.name.as_str()))
        .child(el("p").class("host").text(format!("Host: {}", place.host)))
        .child(
            el("p")
                .class("price")
                .text(format!("Price per night: ${}", place.price)),
        )
        .child(
            el("p")
                .class("location")
                .text(format!("Location: {}", place.location())),
        )
        .child(el("p").class("description").text(place.description.as_str()));

    if let Some(image) = place.image.as_deref().filter(|i| !i.trim().is_empty()) {
        details = details.child(
            el("img")
                .class("place-image")
                .attr("src", image)
                .attr("alt", place.name.as_str()),
        );
    }

    let amenities = if place.amenities.is_empty() {
        el("p").class("no-amenities").text("No amenities listed")
    } else {
        el("ul")
            .class("amenities")
            .children(place.amenities.iter().map(|a| el("li").text(a.as_str())))
    };

    details
        .child(el("h2").text("Amenities"))
        .child(amenities)
        .build()
}

pub fn render_reviews(reviews: &[Review]) -> Node {
    let section = el("section").id(REVIEWS_ID).child(el("h2").text("Reviews"));
    if reviews.is_empty() {
        return section
            .child(el("p").class("no-reviews").text("No reviews yet"))
            .build();
    }

    section
        .children(reviews.iter().map(|review| {
            let card = ReviewCard::from(review);
            el("article")
                .class("review-card")
                .child(el("p").class("review-user").text(card.user))
                .child(el("p").class("review-comment").text(card.comment))
                .child(el("p").class("review-rating").text(card.glyphs.to_text()))
        }))
        .build()
}
