#[cfg(feature = "csr")]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // to run: `trunk serve --open`
    use hbnb_web::app::App;

    hbnb_web::utils::panic_hook::init();
    leptos::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydrate entry point instead
}
