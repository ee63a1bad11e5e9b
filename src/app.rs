/// Main application entry point for the HBnB web client.
/// Routes each static page name to its component; moving between pages is a full
/// page load so every page reads the session cookie afresh.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::{
    login_form::LoginForm, place_details::PlaceDetails, places_list::PlacesList,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="HBnB" />
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=PlacesList />
                    <Route path="/index.html" view=PlacesList />
                    <Route path="/login.html" view=LoginForm />
                    <Route path="/place.html" view=PlaceDetails />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div>
            <h1>{ "Page not found" }</h1>
            <a href="index.html">{ "Back to places" }</a>
        </div>
    }
}
