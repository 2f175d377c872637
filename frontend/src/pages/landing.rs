use yew::prelude::*;

use crate::components::faq::FaqList;
use crate::components::horizontal_scroll::use_horizontal_scroll;
use crate::components::magnetic::use_magnetic;
use crate::components::navigation::{scroll_to_section, MobileMenu, Navigation};
use crate::components::scroll_progress::{use_scroll_progress, ScrollProgress};
use crate::components::section_header::{Align, SectionHeader};

struct Feature {
    title: &'static str,
    text: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Stocktakes in Telegram",
        text: "Staff count items right in the chat. Totals and discrepancies land in an Excel report when the count closes.",
    },
    Feature {
        title: "Checklists",
        text: "Opening and closing routines with photo proof. Missed steps are escalated to the manager automatically.",
    },
    Feature {
        title: "Shift handover",
        text: "Every shift leaves a structured summary so the next one starts with the full picture.",
    },
    Feature {
        title: "Action history",
        text: "Who changed what and when, for every location, searchable in seconds.",
    },
];

struct Benefit {
    value: &'static str,
    label: &'static str,
}

const BENEFITS: &[Benefit] = &[
    Benefit { value: "3x", label: "faster stocktakes" },
    Benefit { value: "0", label: "new apps to install" },
    Benefit { value: "24/7", label: "visibility across locations" },
    Benefit { value: "1 day", label: "to get the team onboard" },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let progress_bar = use_node_ref();
    let demo_button = use_node_ref();
    let telegram_link = use_node_ref();
    // Both hooks look up the scroll host rendered below, so they live here.
    use_horizontal_scroll();
    use_scroll_progress(progress_bar.clone());
    use_magnetic(demo_button.clone());
    use_magnetic(telegram_link.clone());

    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("contact");
    });

    html! {
        <>
            <ScrollProgress bar={progress_bar} />
            <Navigation />
            <MobileMenu />
            <main class="scroll-host">
                <section id="hero" class="panel hero">
                    <div class="orb orb-warm" data-parallax-speed="80" aria-hidden="true" />
                    <div class="orb orb-cool" data-parallax-speed="60" aria-hidden="true" />
                    <div class="hero-content">
                        <span class="badge">{"Business automation in Telegram"}</span>
                        <h1>{"Run your locations "}<span class="highlight">{"on autopilot"}</span></h1>
                        <p>{"Flowix turns routine operations into bots your team already knows how to use: stocktakes, checklists and shift handovers, all inside Telegram."}</p>
                        <button ref={demo_button} class="cta-button magnetic" onclick={to_contact}>
                            <span>{"Get a demo"}</span>
                            <i class="arrow">{"→"}</i>
                        </button>
                    </div>
                </section>

                <section id="features" class="panel features">
                    <div class="orb orb-warm small" data-parallax-speed="70" aria-hidden="true" />
                    <div class="orb orb-cool" data-parallax-speed="-40" aria-hidden="true" />
                    <SectionHeader
                        badge="Features"
                        title="Everything your floor team needs"
                        highlighted_word="floor team"
                        description="Four tools that replace paper forms, spreadsheets and chat chaos."
                    />
                    <div class="feature-track">
                        { for FEATURES.iter().map(|feature| html! {
                            <article class="glass-card">
                                <h3>{feature.title}</h3>
                                <p>{feature.text}</p>
                            </article>
                        }) }
                    </div>
                </section>

                <section id="benefits" class="panel benefits">
                    <div class="orb orb-warm" data-parallax-speed="50" aria-hidden="true" />
                    <SectionHeader
                        badge="Benefits"
                        title="Less routine, more control"
                        highlighted_word="control"
                        align={Align::Left}
                    />
                    <div class="benefit-grid">
                        { for BENEFITS.iter().map(|benefit| html! {
                            <div class="glass-card benefit">
                                <span class="benefit-value">{benefit.value}</span>
                                <span class="benefit-label">{benefit.label}</span>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="faq" class="panel faq">
                    <div class="orb orb-cool" data-parallax-speed="45" aria-hidden="true" />
                    <SectionHeader
                        badge="FAQ"
                        title="Questions we hear most"
                        highlighted_word="most"
                    />
                    <FaqList />
                </section>

                <section id="contact" class="panel contact">
                    <div class="orb orb-warm" data-parallax-speed="65" aria-hidden="true" />
                    <div class="orb orb-cool small" data-parallax-speed="55" aria-hidden="true" />
                    <SectionHeader
                        badge="Contact"
                        title="Let's talk about your team"
                        highlighted_word="your team"
                        description="Tell us how your locations work and we will show Flowix on your own processes."
                    />
                    <div class="contact-channels">
                        <a ref={telegram_link} class="glass-card channel magnetic" href="https://t.me/Flowix_support" target="_blank" rel="noopener noreferrer">
                            <h3>{"Telegram"}</h3>
                            <p>{"@Flowix_support"}</p>
                        </a>
                        <a class="glass-card channel" href="mailto:hello@flowix.ru">
                            <h3>{"Email"}</h3>
                            <p>{"hello@flowix.ru"}</p>
                        </a>
                    </div>
                </section>
            </main>
            <style>{LANDING_CSS}</style>
        </>
    }
}

const LANDING_CSS: &str = r#"
    .scroll-host {
        display: flex;
        flex-direction: row;
        height: 100vh;
        overflow-x: scroll;
        overflow-y: hidden;
        scroll-snap-type: x proximity;
        scrollbar-width: none;
    }
    .scroll-host::-webkit-scrollbar {
        display: none;
    }
    .panel {
        position: relative;
        flex: 0 0 100vw;
        height: 100vh;
        scroll-snap-align: start;
        display: flex;
        flex-direction: column;
        justify-content: center;
        padding: 6rem 8vw;
        box-sizing: border-box;
        overflow: hidden;
    }
    .orb {
        position: absolute;
        width: 28rem;
        height: 28rem;
        border-radius: 50%;
        filter: blur(80px);
        opacity: 0.45;
        pointer-events: none;
        will-change: transform;
    }
    .orb.small {
        width: 16rem;
        height: 16rem;
    }
    .orb-warm {
        top: 10%;
        right: 8%;
        background: radial-gradient(circle, #FF9D66, transparent 70%);
    }
    .orb-cool {
        bottom: 5%;
        left: 10%;
        background: radial-gradient(circle, #7EB2FF, transparent 70%);
    }
    .hero-content {
        position: relative;
        z-index: 2;
        max-width: 720px;
    }
    .hero h1 {
        font-size: clamp(2.5rem, 6vw, 5rem);
        line-height: 1.05;
        margin: 1.5rem 0;
    }
    .highlight {
        background: linear-gradient(90deg, #FF9D66, #FF8040, #FF9D66);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .badge {
        display: inline-flex;
        padding: 0.5rem 1.5rem;
        border-radius: 999px;
        border: 1px solid rgba(255, 157, 102, 0.4);
        color: #FFB88C;
        font-weight: 700;
        font-size: 0.9rem;
    }
    .cta-button {
        display: inline-flex;
        align-items: center;
        gap: 0.75rem;
        padding: 1rem 2rem;
        border: none;
        border-radius: 999px;
        background: linear-gradient(90deg, #FF9D66, #FF8040);
        color: #fff;
        font-size: 1.1rem;
        cursor: pointer;
    }
    .magnetic {
        transition: transform 0.3s cubic-bezier(0.22, 1, 0.36, 1);
        will-change: transform;
    }
    .burger,
    .mobile-menu {
        display: none;
    }
    .section-header {
        position: relative;
        z-index: 2;
        margin-bottom: 3rem;
    }
    .section-header h2 {
        font-size: clamp(2rem, 4.5vw, 4rem);
        margin: 1rem 0;
    }
    .section-description {
        font-size: 1.25rem;
        max-width: 48rem;
        color: #ccc;
    }
    .align-left { text-align: left; }
    .align-center { text-align: center; }
    .align-center .section-description { margin: 0 auto; }
    .feature-track,
    .benefit-grid,
    .contact-channels {
        position: relative;
        z-index: 2;
        display: grid;
        gap: 1.5rem;
    }
    .feature-track { grid-template-columns: repeat(4, minmax(0, 1fr)); }
    .benefit-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .contact-channels { grid-template-columns: repeat(2, minmax(0, 20rem)); justify-content: center; }
    .glass-card {
        padding: 2rem;
        border-radius: 1.5rem;
        background: rgba(255, 255, 255, 0.06);
        border: 1px solid rgba(255, 255, 255, 0.12);
        backdrop-filter: blur(18px);
        color: inherit;
        text-decoration: none;
    }
    .benefit-value {
        display: block;
        font-size: 3rem;
        font-weight: 900;
        color: #FF9D66;
    }
    .faq-list {
        position: relative;
        z-index: 2;
        max-width: 56rem;
        margin: 0 auto;
        width: 100%;
    }
    .faq-item {
        border-bottom: 1px solid rgba(255, 255, 255, 0.12);
    }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        padding: 1.25rem 0;
        background: none;
        border: none;
        color: inherit;
        font-size: 1.15rem;
        cursor: pointer;
        text-align: left;
    }
    .faq-answer {
        padding-bottom: 1.25rem;
        color: #ccc;
    }
    @media (max-width: 768px) {
        .nav-dock { display: none; }
        .burger {
            position: fixed;
            top: 1rem;
            right: 1rem;
            z-index: 300;
            width: 3rem;
            height: 3rem;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            gap: 0.375rem;
            border: 1px solid rgba(255, 255, 255, 0.15);
            border-radius: 50%;
            background: rgba(13, 13, 13, 0.8);
            backdrop-filter: blur(12px);
            cursor: pointer;
        }
        .burger span {
            width: 1.5rem;
            height: 2px;
            background: #fff;
            transition: transform 0.3s ease, opacity 0.3s ease;
        }
        .burger.open span:nth-child(1) { transform: translateY(8px) rotate(45deg); }
        .burger.open span:nth-child(2) { opacity: 0; }
        .burger.open span:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }
        .mobile-menu {
            position: fixed;
            inset: 0;
            z-index: 240;
            display: flex;
            align-items: center;
            justify-content: center;
            background: #0d0d0d;
            opacity: 0;
            visibility: hidden;
            transition: opacity 0.3s ease, visibility 0.3s ease;
        }
        .mobile-menu.open {
            opacity: 1;
            visibility: visible;
        }
        .mobile-menu nav {
            display: flex;
            flex-direction: column;
            align-items: center;
            gap: 2rem;
            font-size: 1.5rem;
        }
        .mobile-menu a {
            color: inherit;
            text-decoration: none;
        }
        .mobile-menu a:hover { color: #FF9D66; }
        .panel { padding: 5rem 1.5rem; }
        .feature-track,
        .benefit-grid,
        .contact-channels { grid-template-columns: 1fr; }
    }
"#;
