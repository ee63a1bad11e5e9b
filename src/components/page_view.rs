//! Glue between page components and [`PageController`].
use std::rc::Rc;

use leptos::logging::{error, log};
use leptos::*;

use crate::api::HttpApi;
use crate::config::Config;
use crate::controller::{Command, Effect, MessageSlot, PageController, Region};
use crate::credentials::CookieStore;
use crate::utils::leptos_owner::with_owner_safe;
use crate::view::node::Node;

pub type BrowserController = PageController<HttpApi, CookieStore>;

/// Builds the controller for the current page load, reading the session cookie.
pub fn browser_controller() -> Rc<BrowserController> {
    let config = Config::from_env();
    Rc::new(PageController::new(
        HttpApi::new(config.clone()),
        CookieStore::new(&config),
    ))
}

/// Reactive state of a page, written only by [`PageView::apply`].
#[derive(Clone, Copy)]
pub struct PageView {
    pub places: RwSignal<Option<Node>>,
    pub place_details: RwSignal<Option<Node>>,
    pub reviews: RwSignal<Option<Node>>,
    pub login_message: RwSignal<Option<String>>,
    pub places_error: RwSignal<Option<String>>,
    pub place_error: RwSignal<Option<String>>,
    pub show_login_link: RwSignal<bool>,
    pub countries: RwSignal<Vec<String>>,
    pub review_form_resets: RwSignal<u32>,
}

impl PageView {
    pub fn new() -> Self {
        Self {
            places: create_rw_signal(None),
            place_details: create_rw_signal(None),
            reviews: create_rw_signal(None),
            login_message: create_rw_signal(None),
            places_error: create_rw_signal(None),
            place_error: create_rw_signal(None),
            show_login_link: create_rw_signal(false),
            countries: create_rw_signal(Vec::new()),
            review_form_resets: create_rw_signal(0),
        }
    }

    fn message_slot(&self, slot: MessageSlot) -> RwSignal<Option<String>> {
        match slot {
            MessageSlot::Login => self.login_message,
            MessageSlot::PlacesList => self.places_error,
            MessageSlot::PlaceDetails => self.place_error,
        }
    }

    pub fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Navigate(page) => navigate(&page.href()),
                Effect::ShowLoginLink(show) => self.show_login_link.set(show),
                Effect::Render(region, node) => {
                    self.message_slot(region.into()).set(None);
                    match region {
                        Region::PlacesList => self.places.set(Some(node)),
                        Region::PlaceDetails => self.place_details.set(Some(node)),
                        Region::Reviews => self.reviews.set(Some(node)),
                    }
                }
                Effect::CountryOptions(countries) => self.countries.set(countries),
                Effect::InlineError(slot, message) => self.message_slot(slot).set(Some(message)),
                Effect::Alert(message) => alert(&message),
                Effect::ClearReviewForm => self.review_form_resets.update(|n| *n += 1),
            }
        }
    }
}

impl Default for PageView {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `command` in the background and applies its effects to `page`.
pub fn dispatch(controller: &Rc<BrowserController>, page: PageView, command: Command) {
    let controller = Rc::clone(controller);
    let owner = Owner::current();
    spawn_local(async move {
        let effects = controller.dispatch(command).await;
        with_owner_safe(owner, "applying page effects", move || page.apply(effects));
    });
}

pub fn navigate(href: &str) {
    log!("[NAV] Navigating to {}", href);
    if let Err(err) = window().location().set_href(href) {
        error!("[NAV] Navigation to {} failed: {:?}", href, err);
    }
}

pub fn alert(message: &str) {
    if let Err(err) = window().alert_with_message(message) {
        error!("[ALERT] Could not show alert {:?}: {:?}", message, err);
    }
}

/// The `location.search` of the current page, empty if unavailable.
pub fn current_query() -> String {
    window().location().search().unwrap_or_default()
}
