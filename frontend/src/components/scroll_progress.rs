use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, HtmlElement};
use yew::prelude::*;

use crate::config::SCROLL_HOST_SELECTOR;

/// How far the scroll host has travelled, in `[0, 1]`. A host that cannot
/// scroll reports 0.
pub fn progress_ratio(scroll_left: f64, scroll_width: f64, client_width: f64) -> f64 {
    let range = scroll_width - client_width;
    if !(range > 0.0) || !scroll_left.is_finite() {
        return 0.0;
    }
    (scroll_left / range).clamp(0.0, 1.0)
}

fn host_progress(host: &Element) -> f64 {
    progress_ratio(
        host.scroll_left() as f64,
        host.scroll_width() as f64,
        host.client_width() as f64,
    )
}

fn paint(bar: &NodeRef, progress: f64) {
    if let Some(bar) = bar.cast::<HtmlElement>() {
        if let Err(e) = bar
            .style()
            .set_property("transform", &format!("scaleX({})", progress))
        {
            log::warn!("Failed to paint scroll progress: {:?}", e);
        }
    }
}

/// Mirrors the scroll host's horizontal position onto `bar`. The bar is styled
/// directly so scrolling never re-renders the page.
#[hook]
pub fn use_scroll_progress(bar: NodeRef) {
    use_effect_with_deps(
        move |bar: &NodeRef| {
            let host = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.query_selector(SCROLL_HOST_SELECTOR).ok().flatten());
            let destructor: Box<dyn FnOnce()> = if let Some(host) = host {
                let callback = Closure::<dyn Fn()>::new({
                    let host = host.clone();
                    let bar = bar.clone();
                    move || paint(&bar, host_progress(&host))
                });
                let options = AddEventListenerOptions::new();
                options.set_passive(true);
                if let Err(e) = host.add_event_listener_with_callback_and_add_event_listener_options(
                    "scroll",
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    log::warn!("Failed to attach scroll progress listener: {:?}", e);
                }
                // Initial paint
                paint(bar, host_progress(&host));
                Box::new(move || {
                    if let Err(e) = host.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("Failed to detach scroll progress listener: {:?}", e);
                    }
                })
            } else {
                Box::new(|| ())
            };
            move || {
                destructor();
            }
        },
        bar,
    );
}

#[derive(Properties, PartialEq)]
pub struct ScrollProgressProps {
    pub bar: NodeRef,
}

#[function_component(ScrollProgress)]
pub fn scroll_progress(props: &ScrollProgressProps) -> Html {
    html! {
        <div ref={props.bar.clone()} class="scroll-progress" aria-hidden="true" />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_tracks_position_within_range() {
        assert_eq!(progress_ratio(0.0, 5000.0, 1000.0), 0.0);
        assert_eq!(progress_ratio(2000.0, 5000.0, 1000.0), 0.5);
        assert_eq!(progress_ratio(4000.0, 5000.0, 1000.0), 1.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress_ratio(-30.0, 5000.0, 1000.0), 0.0);
        assert_eq!(progress_ratio(4100.0, 5000.0, 1000.0), 1.0);
    }

    #[test]
    fn non_scrollable_host_reports_zero() {
        assert_eq!(progress_ratio(0.0, 1000.0, 1000.0), 0.0);
        assert_eq!(progress_ratio(10.0, 800.0, 1000.0), 0.0);
        assert_eq!(progress_ratio(f64::NAN, 5000.0, 1000.0), 0.0);
    }
}
