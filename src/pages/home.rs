use log::error;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::controller::{HomeAction, HomeController, HomeState};
use crate::forms::{FormSlot, Origin};
use crate::handoff::{open_store_link, MailtoHandoff, StoreLink};
use crate::navigation::Section;
use crate::router::Route;

type Controller = HomeController<NodeRef, MailtoHandoff>;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<Route>,
}

fn acknowledge(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.alert_with_message(message) {
            error!("Could not show acknowledgment: {:?}", err);
        }
    }
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let overview_ref = use_node_ref();
    let problems_ref = use_node_ref();
    let features_ref = use_node_ref();
    let contact_ref = use_node_ref();

    let state = {
        let targets = [
            (Section::Overview, overview_ref.clone()),
            (Section::Problems, problems_ref.clone()),
            (Section::Features, features_ref.clone()),
            (Section::Contact, contact_ref.clone()),
        ];
        use_reducer(move || {
            HomeState::new(Controller::new(targets.into_iter().collect(), MailtoHandoff))
        })
    };

    // Track the scrolled flag for the nav background
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let on_scroll = move || {
                        if let Some(offset) = web_sys::window().and_then(|win| win.scroll_y().ok()) {
                            dispatcher.dispatch(HomeAction::Scroll(offset));
                        }
                    };
                    // Initial check
                    on_scroll();
                    let callback = Closure::<dyn Fn()>::new(on_scroll);
                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        error!("Could not register scroll listener: {:?}", err);
                    }
                    Box::new(move || {
                        if let Err(err) = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            error!("Could not remove scroll listener: {:?}", err);
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Show the thank-you once per submission
    {
        let acknowledgment = state.acknowledgment;
        use_effect_with_deps(
            move |_| {
                if let Some(message) = acknowledgment {
                    acknowledge(message);
                }
                || ()
            },
            state.submissions,
        );
    }

    let navigate_to = |section: Section| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(HomeAction::NavigateTo(section)))
    };

    let navigate_to_contact = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(HomeAction::NavigateToContact))
    };

    let on_input = |slot: FormSlot| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(HomeAction::Input(slot, input.value()));
        })
    };

    let submit = |origin: Origin| {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(HomeAction::Submit(origin));
        })
    };

    let open_store = |link: StoreLink| {
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = open_store_link(link) {
                error!("Could not open {:?}: {}", link, err);
            }
        })
    };

    let open_legal = |route: Route| props.on_navigate.reform(move |_: MouseEvent| route);

    let home = &state.controller;
    let active = home.active_section();
    let hero = home.form(FormSlot::Hero).clone();
    let footer = home.form(FormSlot::Footer).clone();

    html! {
        <div class="home-page">
            <style>{HOME_CSS}</style>

            <nav class={classes!("top-nav", home.is_scrolled().then(|| "scrolled"))}>
                <div class="nav-content">
                    <div class="nav-logo">{"Fundr"}</div>
                    <div class="nav-tabs">
                        {
                            Section::ALL.into_iter().map(|section| html! {
                                <button
                                    class={classes!("nav-tab", (active == section).then(|| "active"))}
                                    onclick={navigate_to(section)}
                                >
                                    {section.tab_label()}
                                </button>
                            }).collect::<Html>()
                        }
                    </div>
                    <button class="contact-button" onclick={navigate_to_contact}>
                        {"Contact us"}
                    </button>
                </div>
            </nav>

            <div class="hero-backdrop">
                <section ref={overview_ref} id={Section::Overview.anchor_id()} class="hero">
                    <h1>{"Your Gateway to Smart Startup"}</h1>
                    <h2><span class="highlight">{"Fundraising & Seamless VC Discovery"}</span></h2>
                    <p class="hero-subtitle">
                        {"Fundr connects ambitious founders with active investors — built on trust, transparency, and curated matching."}
                    </p>

                    <div class="capture">
                        <button class="premium-access" onclick={submit(Origin::PremiumAccess)}>
                            {"Get Prelaunch Access"}
                        </button>
                        <div class="capture-row">
                            <input
                                type="email"
                                placeholder="Enter your Email ID"
                                value={hero.value}
                                oninput={on_input(FormSlot::Hero)}
                                class={classes!("email-input", hero.error.then(|| "invalid"))}
                            />
                            <button class="capture-submit" onclick={submit(Origin::Hero)}>{"›"}</button>
                        </div>
                        {
                            if hero.error {
                                html! { <p class="email-error">{"Please enter a valid email address"}</p> }
                            } else {
                                html! {}
                            }
                        }
                    </div>

                    <div class="store-buttons">
                        <button class="store-button" onclick={open_store(StoreLink::PlayStore)}>
                            <img src="/assets/playstore.png" alt="Google Play" />
                            <div>
                                <div class="store-caption">{"GET IT ON"}</div>
                                <div class="store-name">{"Google Play"}</div>
                            </div>
                        </button>
                        <button class="store-button" onclick={open_store(StoreLink::AppStore)}>
                            <img src="/assets/ios.png" alt="App Store" />
                            <div>
                                <div class="store-caption">{"Download on the"}</div>
                                <div class="store-name">{"App Store"}</div>
                            </div>
                        </button>
                    </div>
                </section>

                <section ref={problems_ref} id={Section::Problems.anchor_id()} class="problems">
                    <div class="pill">{"Problem & Solution"}</div>
                    <div class="problems-grid">
                        <div>
                            <h2>
                                {"Bridging the Gap Between "}
                                <span class="highlight">{"Founders and Investors"}</span>
                            </h2>
                            <h3>{"The Problem"}</h3>
                            <p>{"Early-stage fundraising remains slow, inefficient, and outdated. Founders spend valuable time creating pitch decks, sending cold emails, and following up with little success."}</p>
                            <p>{"Meanwhile, investors are flooded with unstructured, irrelevant pitches and lack a streamlined way to discover high-quality startups."}</p>
                            <h3>{"The Solution"}</h3>
                            <p>{"FUNDR is a modern pitch discovery platform that simplifies early-stage investing."}</p>
                            <p>{"We replace traditional pitch decks with concise video pitches anchored by real startup data — including traction, financials, and team insights."}</p>
                            <p>{"With smart filters and direct engagement tools, investors can easily discover, evaluate, and connect with promising startups all in one place."}</p>
                        </div>
                        <img src="/assets/mainimg.png" alt="Fundr Overview" class="overview-image" />
                    </div>
                </section>
            </div>

            <section ref={features_ref} id={Section::Features.anchor_id()} class="features">
                <h2>{"The Smart Way to Find"}</h2>
                <h3>{"Promising Startups"}</h3>
                <p class="features-intro">
                    {"From discovery to connection, FUNDR is packed with powerful tools that make early-stage investing faster, smarter, and more efficient for both founders and investors."}
                </p>
                <div class="features-grid">
                    <div class="feature-card">
                        <h3>{"Smart Filters for Instant Discovery"}</h3>
                        <p>{"Filter startups by sector, stage, revenue, geography, or background to get instantly relevant matches."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Short-form Video Pitches"}</h3>
                        <p>{"Founders present their vision in 60-second videos — concise, authentic, and engaging."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Data-Backed Profiles"}</h3>
                        <p>{"Startup profiles include key metrics like revenue, team size, cap table, and founder idea fit for smarter decisions."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Direct Messaging & Tracking"}</h3>
                        <p>{"Investors can connect directly with founders — no intermediaries, no delays."}</p>
                    </div>
                </div>
            </section>

            <section class="coming-soon">
                <h2>{"Coming Soon"}</h2>
                <p>
                    {"Be the first to discover smarter "}
                    <span class="highlight">{"startup investing with FUNDR"}</span>
                    {"."}
                </p>
            </section>

            <footer ref={contact_ref} id={Section::Contact.anchor_id()} class="site-footer">
                <div class="footer-grid">
                    <div>
                        <div class="footer-logo">{"Fundr"}</div>
                        <div class="footer-text">
                            { for config::OFFICE_ADDRESS.iter().map(|line| html! { <>{*line}<br /></> }) }
                        </div>
                    </div>

                    <div>
                        <h4>{"Product"}</h4>
                        <ul>
                            <li><button onclick={navigate_to(Section::Overview)}>{"Overview"}</button></li>
                            <li><button onclick={navigate_to(Section::Problems)}>{"Problems"}</button></li>
                            <li><button onclick={navigate_to(Section::Features)}>{"Key Features"}</button></li>
                        </ul>
                    </div>

                    <div>
                        <h4>{"Legal"}</h4>
                        <ul>
                            <li><button onclick={open_legal(Route::Privacy)}>{"Privacy Policy"}</button></li>
                            <li><button onclick={open_legal(Route::Terms)}>{"Terms"}</button></li>
                            <li><button onclick={open_legal(Route::Cookies)}>{"Cookie Policy"}</button></li>
                        </ul>
                    </div>

                    <div>
                        <h4>{"Contact"}</h4>
                        <div class="footer-text">
                            {config::CONTACT_PHONE}<br />
                            {config::SUPPORT_EMAIL}
                        </div>
                        <h5>{"Prelaunch Access"}</h5>
                        <p class="footer-small">
                            {"Join our waitlist today! See the curated pitches, key insights, and fundraising success every week."}
                        </p>
                        <div class="capture-row">
                            <input
                                type="email"
                                placeholder="Enter your Email ID"
                                value={footer.value}
                                oninput={on_input(FormSlot::Footer)}
                                class={classes!("email-input", footer.error.then(|| "invalid"))}
                            />
                            <button class="capture-submit" onclick={submit(Origin::Footer)}>{"→"}</button>
                        </div>
                        {
                            if footer.error {
                                html! { <p class="email-error">{"Please enter a valid email"}</p> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>

                <div class="footer-bottom">
                    <div class="footer-text">{"© 2025. All rights reserved."}</div>
                    <div class="socials">
                        <img src="/assets/LinkedIn.png" alt="LinkedIn" />
                        <img src="/assets/Instagram.png" alt="Instagram" />
                        <img src="/assets/Facebook.png" alt="Facebook" />
                    </div>
                </div>
            </footer>
        </div>
    }
}

const HOME_CSS: &str = r#"
    .home-page {
        min-height: 100vh;
        background: linear-gradient(to bottom, #0f172a, #172554, #0f172a);
        color: #fff;
        scrollbar-width: none;
    }
    .home-page ::-webkit-scrollbar {
        display: none;
    }
    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        background: transparent;
        transition: all 0.3s ease;
    }
    .top-nav.scrolled {
        background: rgba(15, 23, 42, 0.95);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid #1e293b;
    }
    .nav-content {
        max-width: 72rem;
        margin: 0 auto;
        height: 4rem;
        padding: 0 1rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo, .footer-logo {
        font-weight: bold;
        color: #34d399;
    }
    .nav-logo {
        font-size: 1.5rem;
    }
    .nav-tabs {
        display: flex;
        gap: 2rem;
    }
    .nav-tab {
        background: none;
        border: none;
        border-bottom: 2px solid transparent;
        color: #cbd5e1;
        padding-bottom: 0.25rem;
        cursor: pointer;
    }
    .nav-tab.active {
        color: #34d399;
        border-bottom-color: #34d399;
    }
    .contact-button, .capture-submit {
        background: #10b981;
        border: none;
        color: #fff;
        cursor: pointer;
        border-radius: 0.5rem;
        padding: 0.5rem 1rem;
    }
    .hero-backdrop {
        background: linear-gradient(to bottom, #101323 0%, #101323 70%, #3F4A89 100%);
    }
    .hero {
        padding: 6rem 1rem 4rem;
        max-width: 56rem;
        margin: 0 auto;
        text-align: center;
    }
    .highlight {
        color: #34d399;
        font-weight: bold;
    }
    .premium-access {
        background: none;
        border: none;
        color: #34d399;
        font-size: 1.125rem;
        cursor: pointer;
        margin-bottom: 2rem;
    }
    .capture-row {
        display: flex;
        max-width: 28rem;
        margin: 0 auto;
    }
    .email-input {
        flex: 1;
        background: rgba(30, 41, 59, 0.8);
        border: 1px solid #334155;
        border-radius: 0.5rem 0 0 0.5rem;
        color: #fff;
        padding: 0.75rem 1rem;
    }
    .email-input.invalid {
        border-color: #ef4444;
    }
    .capture-row .capture-submit {
        border-radius: 0 0.5rem 0.5rem 0;
    }
    .email-error {
        color: #f87171;
        font-size: 0.875rem;
        margin-top: 0.5rem;
    }
    .store-buttons {
        display: flex;
        justify-content: center;
        gap: 1rem;
        margin-top: 3rem;
    }
    .store-button {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        background: #000;
        color: #fff;
        border: none;
        border-radius: 0.75rem;
        padding: 0.75rem 1.5rem;
        cursor: pointer;
    }
    .store-button img {
        width: 1.75rem;
        height: 1.75rem;
    }
    .store-caption {
        font-size: 0.75rem;
        color: #94a3b8;
        text-transform: uppercase;
    }
    .problems, .features, .coming-soon {
        padding: 4rem 1rem;
    }
    .problems {
        max-width: 72rem;
        margin: 0 auto;
    }
    .pill {
        display: inline-block;
        border: 1px solid rgba(16, 185, 129, 0.3);
        border-radius: 9999px;
        padding: 0.5rem 1rem;
        color: #34d399;
    }
    .problems-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
        gap: 4rem;
        align-items: center;
    }
    .problems p, .features p {
        color: #cbd5e1;
        font-weight: 300;
        line-height: 1.6;
    }
    .overview-image {
        width: 100%;
        border-radius: 1rem;
    }
    .features {
        background: #222958;
        text-align: center;
    }
    .features-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
        gap: 2rem;
        max-width: 72rem;
        margin: 0 auto;
    }
    .feature-card {
        background: rgba(30, 41, 59, 0.4);
        border: 1px solid rgba(51, 65, 85, 0.3);
        border-radius: 1rem;
        padding: 2rem;
        text-align: left;
    }
    .coming-soon {
        background: #0F121D;
        text-align: center;
    }
    .site-footer {
        background: #0A0C19;
        border-top: 1px solid rgba(51, 65, 85, 0.5);
        padding: 4rem 1rem;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
        gap: 2rem;
        max-width: 72rem;
        margin: 0 auto;
    }
    .footer-logo {
        font-size: 3rem;
    }
    .footer-text, .footer-small {
        color: #94a3b8;
        font-size: 0.875rem;
        line-height: 1.6;
    }
    .site-footer ul {
        list-style: none;
        padding: 0;
    }
    .site-footer li button {
        background: none;
        border: none;
        color: #94a3b8;
        cursor: pointer;
        padding: 0.375rem 0;
    }
    .site-footer li button:hover {
        color: #34d399;
    }
    .footer-bottom {
        max-width: 72rem;
        margin: 3rem auto 0;
        padding-top: 2rem;
        border-top: 1px solid rgba(51, 65, 85, 0.5);
        display: flex;
        justify-content: space-between;
    }
    .socials img {
        width: 1.5rem;
        height: 1.5rem;
        margin-left: 0.75rem;
        cursor: pointer;
    }
    @media (max-width: 768px) {
        .nav-tabs {
            display: none;
        }
    }
"#;
