use yew::prelude::*;

use crate::parallax;

/// Keeps the parallax controller alive for as long as the calling component is
/// mounted. Call it from the component that renders the scroll host, its effect
/// runs once the host is in the document.
#[hook]
pub fn use_horizontal_scroll() {
    use_effect_with_deps(
        move |_| {
            let binding = parallax::activate();
            move || drop(binding)
        },
        (),
    );
}
