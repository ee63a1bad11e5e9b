use std::panic;
use leptos::logging::error;

/// Forwards panics to the browser console, then adds where and what in one line.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let console_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        console_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());

        error!("[PANIC] {} at {}", message, location);
    }));
}

/// Call once before mounting the app.
pub fn init() {
    set_custom_panic_hook();
    leptos::logging::log!("[PANIC_HOOK] Custom panic hook set up");
}
