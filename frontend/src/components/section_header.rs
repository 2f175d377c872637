use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    #[default]
    Center,
}

impl Align {
    fn class(self) -> &'static str {
        match self {
            Align::Left => "align-left",
            Align::Center => "align-center",
        }
    }
}

/// Splits `title` around the first occurrence of `word`.
/// Returns `None` when the word is empty or absent.
pub fn split_highlight<'a>(title: &'a str, word: &str) -> Option<(&'a str, &'a str, &'a str)> {
    if word.is_empty() {
        return None;
    }
    let start = title.find(word)?;
    let end = start + word.len();
    Some((&title[..start], &title[start..end], &title[end..]))
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub badge: Option<AttrValue>,
    #[prop_or_default]
    pub highlighted_word: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub align: Align,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let title = match props
        .highlighted_word
        .as_ref()
        .and_then(|word| split_highlight(&props.title, word))
    {
        Some((before, word, after)) => html! {
            <>
                <span>{before.to_string()}</span>
                <span class="highlight">{word.to_string()}</span>
                <span>{after.to_string()}</span>
            </>
        },
        None => html! { <span>{props.title.clone()}</span> },
    };

    html! {
        <div class={classes!("section-header", props.align.class())}>
            if let Some(badge) = &props.badge {
                <span class="badge">{badge.clone()}</span>
            }
            <h2>{title}</h2>
            if let Some(description) = &props.description {
                <p class="section-description">{description.clone()}</p>
            }
        </div>
    }
}
