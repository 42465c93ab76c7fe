/// Leave the dashboard for another page (the login page, usually)
pub fn redirect_to(page: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(page).is_err() {
            log::error!("Failed to navigate to {}", page);
        }
    }
}

/// Blocking browser confirmation dialog; false when it cannot be shown
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Put `theme` on the body, replacing the other theme class
pub fn apply_body_theme(theme: &str, previous: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let classes = body.class_list();
        let _ = classes.remove_1(previous);
        let _ = classes.add_1(theme);
    }
}
