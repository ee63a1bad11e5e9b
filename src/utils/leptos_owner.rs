use leptos::Owner;

/// Runs `f` under `owner`, the reactive owner captured before an await.
/// If the page has since torn that owner down, logs and returns None.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R + 'static,
{
    let Some(owner) = owner else {
        leptos::logging::log!("[OWNER] No Leptos owner captured: {}", log_context);
        return None;
    };
    match leptos::try_with_owner(owner, f) {
        Ok(value) => Some(value),
        Err(err) => {
            leptos::logging::warn!("[OWNER] Owner gone for {}: {:?}", log_context, err);
            None
        }
    }
}
