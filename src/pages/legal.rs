use yew::prelude::*;

use crate::legal::LegalDocument;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    pub route: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    // Start each policy at the top, even when opened from the footer
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        props.route,
    );

    let Some(document) = LegalDocument::for_route(props.route) else {
        return html! {};
    };

    let go_home = props.on_navigate.reform(|_: MouseEvent| Route::Home);

    html! {
        <div class="legal-page">
            <style>{LEGAL_CSS}</style>
            <nav class="legal-nav">
                <div class="legal-nav-content">
                    <button class="legal-logo" onclick={go_home}>{"Fundr"}</button>
                </div>
            </nav>

            <div class="legal-content">
                <h1>{document.title}</h1>
                {
                    if let Some(link) = document.cross_link {
                        let to = link.to;
                        html! {
                            <div class="legal-cross-link">
                                <button onclick={props.on_navigate.reform(move |_: MouseEvent| to)}>
                                    <span>{link.label}</span>{" →"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="legal-card">
                    <pre>{document.body}</pre>
                </div>
            </div>
        </div>
    }
}

const LEGAL_CSS: &str = r#"
    .legal-page {
        min-height: 100vh;
        background: linear-gradient(to bottom, #0f172a, #172554, #0f172a);
        color: #fff;
    }
    .legal-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        background: rgba(15, 23, 42, 0.95);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid #1e293b;
    }
    .legal-nav-content {
        max-width: 80rem;
        margin: 0 auto;
        height: 4rem;
        padding: 0 1.5rem;
        display: flex;
        align-items: center;
    }
    .legal-logo {
        background: none;
        border: none;
        font-size: 1.5rem;
        font-weight: bold;
        color: #34d399;
        cursor: pointer;
    }
    .legal-logo:hover, .legal-cross-link button:hover {
        color: #6ee7b7;
    }
    .legal-content {
        max-width: 56rem;
        margin: 0 auto;
        padding: 6rem 1.5rem 3rem;
    }
    .legal-content h1 {
        font-size: 1.875rem;
        margin-bottom: 2rem;
    }
    .legal-cross-link {
        margin-bottom: 2rem;
    }
    .legal-cross-link button {
        background: none;
        border: none;
        color: #34d399;
        font-weight: 500;
        cursor: pointer;
    }
    .legal-card {
        background: rgba(30, 41, 59, 0.6);
        border: 1px solid rgba(51, 65, 85, 0.5);
        border-radius: 1rem;
        padding: 2rem;
    }
    .legal-card pre {
        color: #cbd5e1;
        white-space: pre-wrap;
        font-family: inherit;
        font-size: 0.875rem;
        line-height: 1.6;
    }
"#;
