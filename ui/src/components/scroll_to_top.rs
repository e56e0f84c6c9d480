//! Floating "back to top" button, shown once the page is scrolled far enough.

use dioxus::prelude::*;
use tracing::debug;

use crate::context::use_app;

/// Scroll offset (px) past which the button appears.
pub const SCROLL_THRESHOLD_PX: f64 = 500.0;

pub fn scroll_button_visible(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

// Reports the current offset once, then on every scroll event. The trailing
// await keeps the channel open for the life of the component.
const SCROLL_LISTENER_JS: &str = r#"
    const report = () => dioxus.send(window.pageYOffset || document.documentElement.scrollTop || 0);
    window.addEventListener("scroll", report, { passive: true });
    report();
    await new Promise(() => {});
"#;

const SCROLL_TO_TOP_JS: &str = "window.scrollTo({ top: 0, behavior: 'smooth' });";

#[component]
pub fn ScrollToTop() -> Element {
    let app = use_app();
    let mut visible = use_signal(|| false);

    use_future(move || async move {
        let mut listener = document::eval(SCROLL_LISTENER_JS);
        while let Ok(offset) = listener.recv::<f64>().await {
            let next = scroll_button_visible(offset);
            if *visible.peek() != next {
                visible.set(next);
            }
        }
        debug!(target: "scroll", "scroll listener closed");
    });

    let label = app.t("scroll_top_label");

    rsx! {
        if visible() {
            button {
                r#type: "button",
                class: "scroll-top",
                aria_label: "{label}",
                onclick: move |_| {
                    let _ = document::eval(SCROLL_TO_TOP_JS);
                },
                "↑"
            }
        }
    }
}
