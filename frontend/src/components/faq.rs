use web_sys::MouseEvent;
use yew::prelude::*;

pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        id: "faq-data",
        question: "What do you store about my company?",
        answer: "Only what the bot needs to work: the Telegram group name, employee names with their Telegram IDs for notifications, and the history of who changed what. Prices, costs and contracts never leave your side.",
    },
    FaqEntry {
        id: "faq-inventory",
        question: "What happens to stocktake data?",
        answer: "Item names are loaded for the duration of the count and encrypted. When the count is finished you get an Excel report and the drafts are deleted. Only the action history and your notes are kept.",
    },
    FaqEntry {
        id: "faq-setup",
        question: "How long does setup take?",
        answer: "Add the bot to your team's Telegram group and invite employees. Most teams run their first checklist the same day.",
    },
    FaqEntry {
        id: "faq-devices",
        question: "Do employees need a new app?",
        answer: "No. Everything happens inside Telegram on the phones they already use.",
    },
    FaqEntry {
        id: "faq-trial",
        question: "Can we try it before paying?",
        answer: "Yes. Leave a request in the contact section and we will set up a trial workspace for your team.",
    },
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    id: AttrValue,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };
    html! {
        <div id={props.id.clone()} class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[function_component(FaqList)]
pub fn faq_list() -> Html {
    html! {
        <div class="faq-list">
            { for FAQ_ENTRIES.iter().map(|entry| html! {
                <FaqItem key={entry.id} id={entry.id} question={entry.question}>
                    <p>{entry.answer}</p>
                </FaqItem>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn entry_anchors_are_unique() {
        let ids: HashSet<_> = FAQ_ENTRIES.iter().map(|entry| entry.id).collect();
        assert_eq!(ids.len(), FAQ_ENTRIES.len());
    }
}
