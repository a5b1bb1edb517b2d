use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::Reveal;

const BACKGROUND_URL: &str =
    "https://images.unsplash.com/photo-1560750588-73207b1ef5b8?auto=format&fit=crop&q=80";

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-backdrop">
                <img src={BACKGROUND_URL} alt="Spa background" />
                <div class="hero-shade"></div>
            </div>

            <div class="container hero-body">
                <Reveal class="hero-copy">
                    <span class="hero-badge">{"Premium Medical Aesthetics"}</span>
                    <h1>
                        {"Reveal Your Most "}<br />
                        <span class="hero-accent">{"Radiant Self"}</span>
                    </h1>
                    <p class="hero-lead">
                        {"Experience the perfect blend of medical expertise and luxury wellness. At Aashiswa, we specialize in advanced skin rejuvenation and non-surgical enhancements."}
                    </p>
                    <div class="hero-actions">
                        <button class="btn-primary btn-large hero-consult">
                            {"Schedule Consultation"}
                            <Icon kind={IconKind::ChevronRight} class="nudge" />
                        </button>
                        <button class="btn-glass btn-large">{"View Services"}</button>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    min-height: 700px;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .hero-backdrop img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, rgba(15, 23, 42, 0.7), rgba(15, 23, 42, 0.4), transparent);
                }
                .hero-body {
                    position: relative;
                    z-index: 10;
                    width: 100%;
                }
                .hero-copy { max-width: 42rem; }
                .reveal {
                    opacity: 0;
                    transform: translateX(-30px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .reveal.visible {
                    opacity: 1;
                    transform: translateX(0);
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.375rem 1rem;
                    background: rgba(244, 63, 94, 0.2);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(244, 63, 94, 0.3);
                    color: #fecdd3;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 1.5rem;
                }
                .hero h1 {
                    font-family: 'Playfair Display', serif;
                    font-weight: 400;
                    font-size: 3rem;
                    line-height: 1.25;
                    color: #ffffff;
                    margin: 0 0 1.5rem;
                }
                .hero-accent {
                    font-style: italic;
                    color: #fda4af;
                }
                .hero-lead {
                    font-size: 1.125rem;
                    color: #e2e8f0;
                    margin-bottom: 2.5rem;
                    max-width: 32rem;
                    line-height: 1.625;
                }
                .hero-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .hero-consult .nudge { transition: transform 0.2s; }
                .hero-consult:hover .nudge { transform: translateX(4px); }
                @media (min-width: 640px) {
                    .hero-actions { flex-direction: row; }
                }
                @media (min-width: 768px) {
                    .hero h1 { font-size: 4.5rem; }
                    .hero-lead { font-size: 1.25rem; }
                }
                "#}
            </style>
        </section>
    }
}
