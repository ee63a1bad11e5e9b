/// Listing page: the places grid plus the country filter.
/// Filtering only toggles entries that were already rendered.
use leptos::*;

use crate::components::page_view::{browser_controller, dispatch, PageView};
use crate::components::render_tree::RenderTree;
use crate::controller::{Command, Page};
use crate::view::listing::{CountryFilter, ALL_COUNTRIES};

#[component]
pub fn PlacesList() -> impl IntoView {
    let page = PageView::new();
    let controller = store_value(browser_controller());

    controller.with_value(|c| dispatch(c, page, Command::LoadListing));

    let login_href = Page::Login.href();

    let on_filter = move |ev: ev::Event| {
        let filter = CountryFilter::from_selection(&event_target_value(&ev));
        controller.with_value(|c| dispatch(c, page, Command::FilterByCountry(filter)));
    };

    view! {
        <div>
            <header>
                <h1>{ "Places" }</h1>
                <Show when=move || page.show_login_link.get()>
                    <a class="login-button" href=login_href.clone()>{ "Login" }</a>
                </Show>
            </header>
            <section id="filter">
                <label for="country-filter">{ "Country:" }</label>
                <select id="country-filter" on:change=on_filter>
                    <option value=ALL_COUNTRIES>{ "All" }</option>
                    { move || page.countries.get().into_iter().map(|country| view! {
                        <option value=country.clone()>{ country }</option>
                    }).collect_view() }
                </select>
            </section>
            <p class="error-message">{ move || page.places_error.get() }</p>
            <RenderTree tree=page.places />
        </div>
    }
}
