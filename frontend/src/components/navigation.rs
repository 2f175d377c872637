use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { id: "hero", label: "Home" },
    NavItem { id: "features", label: "Features" },
    NavItem { id: "benefits", label: "Benefits" },
    NavItem { id: "faq", label: "FAQ" },
    NavItem { id: "contact", label: "Contact" },
];

/// Smoothly brings a section to the start of the scroll host. Unknown ids are ignored.
pub fn scroll_to_section(section_id: &str) {
    let section = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section_id));
    let Some(section) = section else {
        log::debug!("No section with id {}", section_id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Nearest);
    options.set_inline(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    html! {
        <nav class="nav-dock" aria-label="Sections">
            { for NAV_ITEMS.iter().map(|item| {
                let id = item.id;
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    scroll_to_section(id);
                });
                html! {
                    <button class="nav-item" {onclick}>{item.label}</button>
                }
            }) }
        </nav>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    Select,
}

/// Open/closed state of the mobile menu after `action`. Picking a section always closes it.
pub fn menu_reducer(open: bool, action: MenuAction) -> bool {
    match action {
        MenuAction::Toggle => !open,
        MenuAction::Select => false,
    }
}

/// Burger button with a full-screen section list, shown on small screens only.
#[function_component(MobileMenu)]
pub fn mobile_menu() -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_open.set(menu_reducer(*is_open, MenuAction::Toggle));
        })
    };

    html! {
        <>
            <button
                class={classes!("burger", if *is_open { "open" } else { "" })}
                onclick={toggle}
                aria-label="Toggle menu"
                aria-expanded={is_open.to_string()}
            >
                <span /><span /><span />
            </button>
            <div class={classes!("mobile-menu", if *is_open { "open" } else { "" })}>
                <nav aria-label="Sections">
                    { for NAV_ITEMS.iter().map(|item| {
                        let id = item.id;
                        let is_open = is_open.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            is_open.set(menu_reducer(*is_open, MenuAction::Select));
                            scroll_to_section(id);
                        });
                        html! {
                            <a href={format!("#{}", id)} {onclick}>{item.label}</a>
                        }
                    }) }
                </nav>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_are_unique() {
        let ids: HashSet<_> = NAV_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), NAV_ITEMS.len());
    }

    #[test]
    fn menu_opens_then_closes_on_select() {
        let open = menu_reducer(false, MenuAction::Toggle);
        assert!(open);
        assert!(!menu_reducer(open, MenuAction::Select));
    }

    #[test]
    fn selecting_with_menu_closed_keeps_it_closed() {
        assert!(!menu_reducer(false, MenuAction::Select));
        assert!(!menu_reducer(menu_reducer(true, MenuAction::Toggle), MenuAction::Select));
    }

    #[test]
    fn first_item_is_the_hero() {
        assert_eq!(NAV_ITEMS[0].id, "hero");
    }
}
