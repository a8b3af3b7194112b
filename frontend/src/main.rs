use log::info;
use yew::prelude::*;

mod config;
mod content;
mod theme;
mod components {
    pub mod common;
    pub mod faq;
    pub mod header;
    pub mod icons;
}
mod sections {
    pub mod authority;
    pub mod benefits;
    pub mod cta;
    pub mod demo;
    pub mod differentiators;
    pub mod footer;
    pub mod hero;
    pub mod pricing;
    pub mod testimonials;
}

use components::{faq::Faq, header::Header};
use content::PageSection;
use sections::{
    authority::Authority,
    benefits::Benefits,
    cta::CallToAction,
    demo::VisualDemo,
    differentiators::Differentiators,
    footer::Footer,
    hero::Hero,
    pricing::Pricing,
    testimonials::Testimonials,
};
use theme::{BrowserStorage, ThemeController};

fn render_section(section: PageSection) -> Html {
    match section {
        PageSection::Hero => html! { <Hero /> },
        PageSection::Authority => html! { <Authority /> },
        PageSection::Benefits => html! { <Benefits /> },
        PageSection::VisualDemo => html! { <VisualDemo /> },
        PageSection::Differentiators => html! { <Differentiators /> },
        PageSection::Testimonials => html! { <Testimonials /> },
        PageSection::Pricing => html! { <Pricing /> },
        PageSection::Faq => html! { <Faq /> },
        PageSection::CallToAction => html! { <CallToAction /> },
    }
}

#[function_component]
fn App() -> Html {
    let controller = use_mut_ref(|| ThemeController::initialize(BrowserStorage));
    let theme = use_state(|| controller.borrow().theme());

    {
        use_effect_with_deps(
            move |current| {
                theme::apply_to_document(*current);
                || ()
            },
            *theme,
        );
    }

    let toggle_theme = {
        let controller = controller.clone();
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = controller.borrow_mut().toggle();
            theme.set(next);
        })
    };

    html! {
        <div class="app">
            <Header theme={*theme} on_toggle_theme={toggle_theme} />
            <main>
                { for PageSection::ORDER.iter().map(|&s| render_section(s)) }
            </main>
            <Footer />

            <style>
                {r#"
                :root {
                    --primary: #00bfff;
                    --background: #f8fafc;
                    --surface: #ffffff;
                    --text-main: #0f172a;
                    --text-muted: #64748b;
                    --border-soft: rgba(15, 23, 42, 0.05);
                    --border: rgba(15, 23, 42, 0.1);
                    --border-strong: rgba(15, 23, 42, 0.2);
                }

                .dark {
                    --background: #0a0f1a;
                    --surface: #111827;
                    --text-main: #f8fafc;
                    --text-muted: #94a3b8;
                    --border-soft: rgba(248, 250, 252, 0.05);
                    --border: rgba(248, 250, 252, 0.1);
                    --border-strong: rgba(248, 250, 252, 0.2);
                }

                body {
                    margin: 0;
                    font-family: 'Inter', system-ui, sans-serif;
                }

                .app {
                    min-height: 100vh;
                    background: var(--background);
                    color: var(--text-main);
                    transition: background-color 0.3s, color 0.3s;
                }

                .app ::selection {
                    background: var(--primary);
                    color: var(--background);
                }

                .text-primary {
                    color: var(--primary);
                }

                .section-container {
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .section-heading {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    gap: 1rem;
                    margin-bottom: 4rem;
                    animation: slide-up 0.6s ease-out;
                }

                .section-heading h2 {
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 900;
                    letter-spacing: -0.025em;
                    margin: 0;
                }

                .section-subtitle {
                    font-size: 1.125rem;
                    color: var(--text-muted);
                    max-width: 42rem;
                    line-height: 1.6;
                }

                .badge {
                    display: inline-flex;
                    align-items: center;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    border: 1px solid color-mix(in srgb, var(--primary) 20%, transparent);
                    background: color-mix(in srgb, var(--primary) 10%, transparent);
                    color: var(--primary);
                    font-size: 0.75rem;
                    font-weight: 500;
                }

                .badge-caps {
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }

                .card {
                    padding: 2rem;
                    border-radius: 1rem;
                    background: var(--surface);
                    border: 1px solid var(--border-soft);
                    transition: all 0.3s;
                }

                .card:hover {
                    border-color: color-mix(in srgb, var(--primary) 30%, transparent);
                    transform: translateY(-0.25rem);
                }

                .logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 700;
                    font-size: 1.25rem;
                    letter-spacing: -0.025em;
                    user-select: none;
                }

                .logo-mark {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 0.5rem;
                    background: var(--primary);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transform: rotate(3deg);
                    box-shadow: 0 0 15px rgba(0, 191, 255, 0.5);
                }

                .logo-mark-inner {
                    width: 1rem;
                    height: 1rem;
                    border-radius: 0.125rem;
                    background: var(--background);
                    transform: rotate(-3deg);
                }

                .btn {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: all 0.3s;
                }

                .btn-primary {
                    background: var(--primary);
                    color: var(--background);
                    border: none;
                    box-shadow: 0 0 20px rgba(0, 191, 255, 0.3);
                }

                .btn-primary:hover {
                    opacity: 0.9;
                    box-shadow: 0 0 30px rgba(0, 191, 255, 0.5);
                    transform: translateY(-0.125rem);
                }

                .btn-outline {
                    background: transparent;
                    color: var(--text-main);
                    border: 1px solid var(--border-strong);
                }

                .btn-outline:hover {
                    background: var(--surface);
                    transform: translateY(-0.125rem);
                }

                .btn-ghost {
                    background: transparent;
                    color: var(--text-muted);
                    border: none;
                }

                .btn-ghost:hover {
                    color: var(--text-main);
                }

                .btn-compact {
                    height: 2.5rem;
                    padding: 0.5rem 1rem;
                }

                .btn-large {
                    height: 3.5rem;
                    padding: 0 2rem;
                    font-size: 1rem;
                }

                .btn-block {
                    width: 100%;
                }

                @keyframes fade-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes slide-up {
                    from { opacity: 0; transform: translateY(1rem); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes ping {
                    75%, 100% { transform: scale(2); opacity: 0; }
                }
                "#}
            </style>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
