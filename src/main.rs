use log::info;
use yew::prelude::*;

mod config;
mod content;
mod scroll;

mod components {
    pub mod icons;
    pub mod nav;
    pub mod reveal;
}

mod sections {
    pub mod about;
    pub mod cta;
    pub mod footer;
    pub mod hero;
    pub mod services;
    pub mod stats;
    pub mod testimonials;
    pub mod trust_bar;
}

mod pages {
    pub mod home;
}

#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Home />
            <style>
                {BASE_STYLE}
            </style>
        </>
    }
}

// Shared by every section: typography, container width, buttons.
const BASE_STYLE: &str = r#"
html { scroll-behavior: smooth; }
body {
    margin: 0;
    font-family: 'Inter', system-ui, sans-serif;
    color: #0f172a;
    background: #ffffff;
}
::selection {
    background: #ffe4e6;
    color: #e11d48;
}
img { display: block; }
.icon {
    width: 1.5rem;
    height: 1.5rem;
}
.container {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    box-sizing: border-box;
}
.section-heading.centered {
    text-align: center;
    margin-bottom: 4rem;
}
.eyebrow {
    color: #f43f5e;
    font-weight: 600;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    font-size: 0.875rem;
    margin: 0 0 0.75rem;
}
.section-title {
    font-family: 'Playfair Display', serif;
    font-weight: 400;
    font-size: 2.25rem;
    line-height: 1.25;
    color: #0f172a;
    margin: 0 0 1.5rem;
}
.card-grid {
    display: grid;
    gap: 2rem;
}
.btn-primary, .btn-glass, .btn-dark, .btn-light {
    border: none;
    border-radius: 9999px;
    font-weight: 600;
    cursor: pointer;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    transition: all 0.2s;
}
.btn-primary {
    background: #f43f5e;
    color: #ffffff;
}
.btn-primary:hover { background: #e11d48; }
.btn-glass {
    background: rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(12px);
    color: #ffffff;
    border: 1px solid rgba(255, 255, 255, 0.3);
}
.btn-glass:hover { background: rgba(255, 255, 255, 0.2); }
.btn-dark {
    background: #0f172a;
    color: #ffffff;
}
.btn-dark:hover { background: #1e293b; }
.btn-light {
    background: #ffffff;
    color: #0f172a;
    border: 1px solid #e2e8f0;
    font-weight: 700;
}
.btn-light:hover { background: #f8fafc; }
.btn-large {
    padding: 1rem 2rem;
    font-size: 1.125rem;
}
.text-link {
    background: none;
    border: none;
    padding: 0;
    color: #f43f5e;
    font-weight: 600;
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    cursor: pointer;
    transition: gap 0.2s;
}
.text-link:hover { gap: 0.75rem; }
.text-link .icon {
    width: 1rem;
    height: 1rem;
}
@media (min-width: 768px) {
    .section-title { font-size: 3rem; }
    .card-grid { grid-template-columns: repeat(3, 1fr); }
}
"#;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
