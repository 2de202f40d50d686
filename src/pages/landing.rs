use chrono::{Datelike, Local};
use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::notification::Notification;
use crate::config;
use crate::content::{PlatformCard, FEATURES, PLATFORM_CARDS, SHOWCASE_HIGHLIGHTS};
use crate::download::{download_notice, Platform};
use crate::notify::{Stage, Toast, ToastAction};
use crate::observe::use_reveal;
use crate::state::{PageAction, PageState, HERO_REVEAL_DELAY_MS};

#[function_component(Landing)]
pub fn landing() -> Html {
    let page = use_reducer(PageState::default);
    let toast = use_reducer(Toast::default);

    let features_ref = use_node_ref();
    let showcase_ref = use_node_ref();
    let download_ref = use_node_ref();
    let features_seen = use_reveal(features_ref.clone());
    let showcase_seen = use_reveal(showcase_ref.clone());
    let download_seen = use_reveal(download_ref.clone());

    // Track the scroll offset for the header style and the back-to-top
    // button; the listener must not outlive the page.
    {
        let page = page.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_clone.scroll_y().unwrap_or_default();
                    page.dispatch(PageAction::Scrolled(offset));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Hero entrance plays shortly after mount.
    {
        let page = page.clone();
        use_effect_with_deps(
            move |_| {
                let reveal = Timeout::new(HERO_REVEAL_DELAY_MS, move || {
                    page.dispatch(PageAction::HeroRevealed);
                });
                move || drop(reveal)
            },
            (),
        );
    }

    // One pending timer per toast stage. Changing stage or generation drops
    // the previous handle, so a superseded lifecycle cannot fire out of
    // order; the generation check in the reducer catches any straggler.
    {
        let deps = (toast.stage, toast.generation);
        let toast = toast.clone();
        use_effect_with_deps(
            move |deps: &(Stage, u64)| {
                let (_, generation) = *deps;
                let pending = toast.step_delay_ms().map(|delay| {
                    let toast = toast.clone();
                    Timeout::new(delay, move || {
                        toast.dispatch(ToastAction::Step { generation });
                    })
                });
                move || drop(pending)
            },
            deps,
        );
    }

    let on_download = {
        let toast = toast.clone();
        Callback::from(move |platform: Platform| {
            info!("download requested for {platform:?}");
            let notice = download_notice(platform);
            toast.dispatch(ToastAction::Show {
                message: notice.message,
                kind: notice.kind,
            });
        })
    };

    let on_dismiss = {
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| toast.dispatch(ToastAction::Dismiss))
    };

    let scroll_to_top = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let mut options = web_sys::ScrollToOptions::new();
            options.top(0.0);
            options.behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <div class="landing-page">
            <Notification toast={(*toast).clone()} on_dismiss={on_dismiss} />

            <Header elevated={page.header_elevated()} />
            <Hero revealed={page.hero_revealed} on_download={on_download.clone()} />
            <FeaturesSection node={features_ref} revealed={features_seen} />
            <ShowcaseSection node={showcase_ref} revealed={showcase_seen} />
            <DownloadSection
                node={download_ref}
                revealed={download_seen}
                on_download={on_download}
            />
            <Footer />

            <BackToTop visible={page.back_to_top_visible()} onclick={scroll_to_top} />

            <style>
                {r#"
                    .landing-page {
                        display: flex;
                        flex-direction: column;
                        min-height: 100vh;
                        background: #f9fafb;
                        color: #111827;
                        font-family: 'Segoe UI', system-ui, sans-serif;
                    }

                    .landing-page section {
                        scroll-margin-top: 84px;
                    }

                    /* Header */

                    .top-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        padding: 1.25rem 0;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease, padding 0.3s ease;
                        z-index: 40;
                    }

                    .top-header.elevated {
                        padding: 0.75rem 0;
                        background: #fff;
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                    }

                    .header-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .header-logo img {
                        height: 48px;
                        width: auto;
                    }

                    .header-nav ul {
                        display: flex;
                        gap: 2rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }

                    .header-nav a {
                        color: #4b5563;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .header-nav a:hover {
                        color: #f97316;
                    }

                    .header-cta {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1.25rem;
                        background: #f97316;
                        color: #fff;
                        border-radius: 10px;
                        text-decoration: none;
                        font-weight: 500;
                        transition: background 0.2s ease;
                    }

                    .header-cta:hover {
                        background: #ea580c;
                    }

                    @media (max-width: 768px) {
                        .header-nav, .header-cta {
                            display: none;
                        }
                    }

                    /* Hero */

                    .hero {
                        position: relative;
                        padding: 10rem 1.5rem 6rem;
                        background: linear-gradient(135deg, #ffffff, #fff7ed);
                    }

                    .hero-inner {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 3rem;
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.7s ease, transform 0.7s ease;
                    }

                    .hero.revealed .hero-inner {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .hero-copy {
                        flex: 1 1 420px;
                        max-width: 580px;
                    }

                    .hero-copy h1 {
                        font-size: clamp(2.5rem, 5vw, 3.75rem);
                        line-height: 1.15;
                        margin: 0 0 1.5rem;
                    }

                    .hero-copy h1 .accent {
                        color: #f97316;
                    }

                    .hero-copy p {
                        font-size: 1.2rem;
                        color: #4b5563;
                        margin: 0 0 2rem;
                    }

                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }

                    .cta {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.85rem 1.5rem;
                        border: none;
                        border-radius: 10px;
                        font-size: 1rem;
                        font-weight: 500;
                        text-decoration: none;
                        cursor: pointer;
                        transition: background 0.2s ease;
                    }

                    .cta-android {
                        background: #f97316;
                        color: #fff;
                    }

                    .cta-android:hover {
                        background: #ea580c;
                    }

                    .cta-ios {
                        background: #374151;
                        color: #fff;
                    }

                    .cta-ios:hover {
                        background: #1f2937;
                    }

                    .cta .muted {
                        opacity: 0.7;
                        font-size: 0.85rem;
                    }

                    .hero-art {
                        position: relative;
                        flex: 1 1 320px;
                        display: flex;
                        justify-content: center;
                    }

                    .hero-art img {
                        position: relative;
                        width: 180px;
                        height: 180px;
                        z-index: 1;
                    }

                    .hero-blob {
                        position: absolute;
                        width: 280px;
                        height: 280px;
                        border-radius: 50%;
                        opacity: 0.12;
                        filter: blur(60px);
                    }

                    .hero-blob.warm {
                        top: -3rem;
                        right: -2rem;
                        background: #f97316;
                    }

                    .hero-blob.hot {
                        bottom: -4rem;
                        left: -3rem;
                        background: #ef4444;
                    }

                    .hero-scroll-hint {
                        position: absolute;
                        bottom: 1.25rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 42px;
                        height: 42px;
                        border-radius: 50%;
                        background: #fff;
                        color: #f97316;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
                        animation: hint-bounce 1.6s infinite;
                    }

                    @keyframes hint-bounce {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, -8px); }
                    }

                    /* Shared section reveal */

                    .reveal {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    }

                    .reveal.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .section-heading {
                        text-align: center;
                        max-width: 640px;
                        margin: 0 auto 4rem;
                    }

                    .section-heading h2 {
                        font-size: clamp(1.9rem, 3.5vw, 2.5rem);
                        margin: 0 0 1rem;
                    }

                    .section-heading p {
                        color: #4b5563;
                        margin: 0;
                    }

                    /* Features */

                    .features-section {
                        padding: 5rem 1.5rem;
                        background: #fff;
                    }

                    .features-grid {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                    }

                    .feature-card {
                        background: #f9fafb;
                        border-radius: 16px;
                        padding: 1.75rem;
                        transition: box-shadow 0.3s ease;
                    }

                    .feature-card:hover {
                        box-shadow: 0 12px 28px rgba(0, 0, 0, 0.1);
                    }

                    .feature-icon {
                        width: 56px;
                        height: 56px;
                        border-radius: 12px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.5rem;
                        transition: transform 0.3s ease;
                    }

                    .feature-card:hover .feature-icon {
                        transform: scale(1.1);
                    }

                    .feature-icon.orange { background: #f97316; }
                    .feature-icon.slate { background: #374151; }
                    .feature-icon.red { background: #ef4444; }

                    .feature-icon span {
                        width: 24px;
                        height: 24px;
                        border-radius: 6px;
                        background: #fff;
                    }

                    .feature-card h3 {
                        font-size: 1.25rem;
                        margin: 0 0 0.75rem;
                    }

                    .feature-card p {
                        color: #4b5563;
                        margin: 0;
                    }

                    /* Showcase */

                    .showcase-section {
                        padding: 5rem 1.5rem;
                        background: #f9fafb;
                    }

                    .showcase-body {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 3rem;
                    }

                    .showcase-video {
                        flex: 1 1 420px;
                        position: relative;
                        border-radius: 18px;
                        overflow: hidden;
                        background: #000;
                        aspect-ratio: 16 / 9;
                        box-shadow: 0 16px 40px rgba(0, 0, 0, 0.2);
                    }

                    .showcase-video img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.8;
                    }

                    .showcase-play {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .showcase-play span {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 64px;
                        height: 64px;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.3);
                        backdrop-filter: blur(6px);
                        color: #fff;
                    }

                    .showcase-copy {
                        flex: 1 1 380px;
                    }

                    .showcase-copy h3 {
                        font-size: 1.6rem;
                        margin: 0 0 1rem;
                    }

                    .showcase-copy > p {
                        color: #4b5563;
                        margin: 0 0 1.5rem;
                    }

                    .showcase-highlights {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .showcase-highlights li {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: #374151;
                    }

                    .showcase-highlights li span {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        flex-shrink: 0;
                        width: 24px;
                        height: 24px;
                        border-radius: 50%;
                        background: #f97316;
                        color: #fff;
                    }

                    /* Download */

                    .download-section {
                        padding: 5rem 1.5rem;
                        background: #111827;
                        color: #fff;
                    }

                    .download-section .section-heading p {
                        color: #d1d5db;
                    }

                    .download-cards {
                        max-width: 780px;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1.5rem;
                    }

                    .download-card {
                        flex: 1 1 300px;
                        background: #1f2937;
                        border-radius: 16px;
                        padding: 1.75rem;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }

                    .download-card:hover {
                        background: #273449;
                        box-shadow: 0 12px 28px rgba(0, 0, 0, 0.35);
                    }

                    .download-card-head {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1.5rem;
                    }

                    .platform-badge {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 48px;
                        height: 48px;
                        border-radius: 12px;
                        color: #fff;
                    }

                    .platform-badge.android { background: #22c55e; }
                    .platform-badge.ios { background: #4b5563; }

                    .download-card h3 {
                        font-size: 1.25rem;
                        margin: 0;
                    }

                    .download-card > p {
                        color: #9ca3af;
                        margin: 0 0 1.5rem;
                    }

                    .download-meta {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-bottom: 0.85rem;
                        font-size: 0.85rem;
                    }

                    .download-meta .label {
                        color: #9ca3af;
                    }

                    .download-meta .value {
                        background: #374151;
                        padding: 0.2rem 0.5rem;
                        border-radius: 6px;
                        font-weight: 500;
                    }

                    .card-action {
                        width: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.85rem;
                        border: none;
                        border-radius: 10px;
                        font-size: 1rem;
                        font-weight: 500;
                        text-decoration: none;
                        transition: background 0.2s ease;
                    }

                    .card-action.android {
                        background: #f97316;
                        color: #fff;
                        cursor: pointer;
                    }

                    .card-action.android:hover {
                        background: #ea580c;
                    }

                    .card-action.ios {
                        background: #4b5563;
                        color: #fff;
                        opacity: 0.8;
                        cursor: not-allowed;
                    }

                    /* Footer */

                    .footer {
                        padding: 2.5rem 1.5rem;
                        background: #1f2937;
                        color: #d1d5db;
                    }

                    .footer-inner {
                        max-width: 1100px;
                        margin: 0 auto;
                    }

                    .footer-social {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                    }

                    .footer-social a {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        background: #374151;
                        color: #d1d5db;
                        transition: background 0.2s ease;
                    }

                    .footer-social a:hover {
                        background: #f97316;
                    }

                    .footer-bottom {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        border-top: 1px solid #374151;
                        margin-top: 2rem;
                        padding-top: 2rem;
                    }

                    .footer-links {
                        display: flex;
                        gap: 1.5rem;
                    }

                    .footer-links a {
                        color: #d1d5db;
                        font-size: 0.9rem;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .footer-links a:hover {
                        color: #f97316;
                    }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    elevated: bool,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    html! {
        <header class={classes!("top-header", props.elevated.then_some("elevated"))}>
            <div class="header-content">
                <div class="header-logo">
                    <img src="/logo-transparent-bg.png" alt="Tanaw Logo" />
                </div>
                <nav class="header-nav">
                    <ul>
                        <li><a href="#features">{"Features"}</a></li>
                        <li><a href="#showcase">{"Showcase"}</a></li>
                        <li><a href="#download">{"Download"}</a></li>
                    </ul>
                </nav>
                <a href="#download" class="header-cta">
                    { download_icon(18) }
                    {"Get the App"}
                </a>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    revealed: bool,
    on_download: Callback<Platform>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let android = download_action(&props.on_download, Platform::Android);
    let ios = download_action(&props.on_download, Platform::Ios);

    html! {
        <section class={classes!("hero", props.revealed.then_some("revealed"))}>
            <div class="hero-inner">
                <div class="hero-copy">
                    <h1>
                        {"Experience the world through "}
                        <span class="accent">{"tanaw"}</span>
                    </h1>
                    <p>
                        {"Your ultimate companion for exploring and discovering the \
                          world around you. Download now and see the difference."}
                    </p>
                    <div class="hero-actions">
                        <a
                            class="cta cta-android"
                            href={config::release_url()}
                            download={config::APK_FILENAME}
                            target="_blank"
                            rel="noopener noreferrer"
                            onclick={android}
                        >
                            { download_icon(20) }
                            {"Download for Android"}
                            <span class="muted">{format!("v{}", config::APP_VERSION)}</span>
                        </a>
                        <button class="cta cta-ios" onclick={ios}>
                            { download_icon(20) }
                            {"iOS "}
                            <span class="muted">{"(Coming Soon)"}</span>
                        </button>
                    </div>
                </div>
                <div class="hero-art">
                    <div class="hero-blob warm"></div>
                    <div class="hero-blob hot"></div>
                    <img src="/logo-circle.png" alt="Tanaw app icon" />
                </div>
            </div>
            <a href="#features" class="hero-scroll-hint" aria-label="Scroll to features">
                <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M12 5v14M19 12l-7 7-7-7" />
                </svg>
            </a>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    node: NodeRef,
    revealed: bool,
}

#[function_component(FeaturesSection)]
fn features_section(props: &SectionProps) -> Html {
    html! {
        <section
            id="features"
            ref={props.node.clone()}
            class={classes!("features-section", "reveal", props.revealed.then_some("revealed"))}
        >
            <div class="section-heading">
                <h2>{"Why Choose Tanaw?"}</h2>
                <p>{"Discover the powerful features that make Tanaw the perfect app for your needs"}</p>
            </div>
            <div class="features-grid">
                { for FEATURES.iter().map(|feature| html! {
                    <div class="feature-card">
                        <div class={classes!("feature-icon", feature.accent)}>
                            <span></span>
                        </div>
                        <h3>{ feature.title }</h3>
                        <p>{ feature.description }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(ShowcaseSection)]
fn showcase_section(props: &SectionProps) -> Html {
    html! {
        <section
            id="showcase"
            ref={props.node.clone()}
            class={classes!("showcase-section", "reveal", props.revealed.then_some("revealed"))}
        >
            <div class="section-heading">
                <h2>{"App Showcase"}</h2>
                <p>{"Take a look at what Tanaw can do for you"}</p>
            </div>
            <div class="showcase-body">
                <div class="showcase-video">
                    <img src="/showcase-placeholder.png" alt="Tanaw app demo video placeholder" />
                    <div class="showcase-play">
                        <span>
                            <svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor">
                                <path d="M8 5v14l11-7z" />
                            </svg>
                        </span>
                    </div>
                </div>
                <div class="showcase-copy">
                    <h3>{"Transform Your Experience"}</h3>
                    <p>
                        {"With Tanaw, you'll discover a new way to interact with the \
                          world around you. Our innovative features are designed to \
                          enhance your daily experience, making life more efficient \
                          and enjoyable."}
                    </p>
                    <ul class="showcase-highlights">
                        { for SHOWCASE_HIGHLIGHTS.iter().map(|highlight| html! {
                            <li>
                                <span>
                                    <svg width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="3" stroke-linecap="round" stroke-linejoin="round">
                                        <path d="M9 18l6-6-6-6" />
                                    </svg>
                                </span>
                                { *highlight }
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct DownloadSectionProps {
    node: NodeRef,
    revealed: bool,
    on_download: Callback<Platform>,
}

#[function_component(DownloadSection)]
fn download_section(props: &DownloadSectionProps) -> Html {
    html! {
        <section
            id="download"
            ref={props.node.clone()}
            class={classes!("download-section", "reveal", props.revealed.then_some("revealed"))}
        >
            <div class="section-heading">
                <h2>{"Get Tanaw Today"}</h2>
                <p>{"Join thousands of satisfied users and download Tanaw now"}</p>
            </div>
            <div class="download-cards">
                { for PLATFORM_CARDS.iter().map(|card| html! {
                    <div class="download-card">
                        <div class="download-card-head">
                            { platform_badge(card.platform) }
                            <h3>{ card.name }</h3>
                        </div>
                        <p>{ card.blurb }</p>
                        <div class="download-meta">
                            <span class="label">{ card.status_label }</span>
                            <span class="value">{ card.status_value }</span>
                        </div>
                        { card_action(card, &props.on_download) }
                    </div>
                }) }
            </div>
        </section>
    }
}

/// Android gets a real anchor so browser-native download handling applies;
/// everything else only raises the coming-soon notice.
fn card_action(card: &PlatformCard, on_download: &Callback<Platform>) -> Html {
    let onclick = download_action(on_download, card.platform);
    match card.platform.release_href() {
        Some(href) => html! {
            <a
                class="card-action android"
                {href}
                download={config::APK_FILENAME}
                target="_blank"
                rel="noopener noreferrer"
                {onclick}
            >
                { download_icon(18) }
                { card.action_label }
            </a>
        },
        None => html! {
            <button class="card-action ios" {onclick}>
                <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 8v4M12 16h.01" />
                </svg>
                { card.action_label }
            </button>
        },
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-social">
                    <a
                        href="https://github.com/jules-pecaoco/tanaw"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Tanaw on GitHub"
                    >
                        <svg width="20" height="20" fill="currentColor" viewBox="0 0 24 24">
                            <path d="M12 0C5.373 0 0 5.373 0 12c0 5.303 3.438 9.8 8.205 11.387.6.111.82-.26.82-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.09-.745.082-.73.082-.73 1.205.085 1.84 1.238 1.84 1.238 1.07 1.834 2.807 1.304 3.492.997.108-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23a11.5 11.5 0 0 1 3.003-.404c1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576C20.565 21.797 24 17.3 24 12c0-6.627-5.373-12-12-12z" />
                        </svg>
                    </a>
                </div>
                <div class="footer-bottom">
                    <p>{ format!("© {year} Tanaw. All rights reserved.") }</p>
                    <div class="footer-links">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                        <a href="#">{"Contact"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

fn download_action(on_download: &Callback<Platform>, platform: Platform) -> Callback<MouseEvent> {
    let on_download = on_download.clone();
    Callback::from(move |_| on_download.emit(platform))
}

fn download_icon(size: u32) -> Html {
    html! {
        <svg width={size.to_string()} height={size.to_string()} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3" />
        </svg>
    }
}

fn platform_badge(platform: Platform) -> Html {
    match platform {
        Platform::Android => html! {
            <span class="platform-badge android">
                <svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor">
                    <path d="M17.6 9.48l1.84-3.18a.38.38 0 0 0-.14-.52.38.38 0 0 0-.52.14l-1.86 3.22a11.46 11.46 0 0 0-9.84 0L5.22 5.92a.38.38 0 0 0-.52-.14.38.38 0 0 0-.14.52L6.4 9.48A10.82 10.82 0 0 0 1 18h22a10.82 10.82 0 0 0-5.4-8.52zM7 15.25a1.25 1.25 0 1 1 1.25-1.25A1.25 1.25 0 0 1 7 15.25zm10 0a1.25 1.25 0 1 1 1.25-1.25A1.25 1.25 0 0 1 17 15.25z" />
                </svg>
            </span>
        },
        Platform::Ios => html! {
            <span class="platform-badge ios">
                <svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor">
                    <path d="M14.94 5.19A4.38 4.38 0 0 0 16 2.5a4.47 4.47 0 0 0-3 1.52 4.18 4.18 0 0 0-1.05 2.69 3.92 3.92 0 0 0 2.99-1.52zm2.52 6.92a4.51 4.51 0 0 1 2.16-3.81 4.66 4.66 0 0 0-3.66-2c-1.56-.16-3.04.92-3.83.92-.8 0-2.01-.9-3.3-.87a4.92 4.92 0 0 0-4.14 2.53c-1.77 3.07-.45 7.6 1.27 10.09.84 1.22 1.84 2.59 3.16 2.54 1.27-.05 1.75-.82 3.28-.82 1.53 0 1.97.82 3.3.79 1.37-.02 2.23-1.24 3.06-2.47a11 11 0 0 0 1.39-2.85 4.41 4.41 0 0 1-2.69-4.05z" />
                </svg>
            </span>
        },
    }
}
