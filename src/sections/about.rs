use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::PHILOSOPHY_POINTS;

const PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1515377905703-c4788e51af15?auto=format&fit=crop&q=80";

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="container about-grid">
                <div class="about-media">
                    <div class="about-photo">
                        <img src={PHOTO_URL} alt="Treatment room" />
                    </div>
                    <div class="about-quote">
                        <p>{"\"Beauty is being comfortable in your own skin.\""}</p>
                    </div>
                </div>

                <div>
                    <h2 class="eyebrow">{"Our Philosophy"}</h2>
                    <h3 class="section-title">{"Science-Backed Beauty, Artfully Delivered"}</h3>
                    <p class="about-lead">
                        {"At Aashiswa, we believe that medical aesthetics should enhance your natural features, not mask them. Our team of board-certified professionals combines the latest clinical innovations with a personalized, artistic approach."}
                    </p>
                    <ul class="checklist">
                        {
                            PHILOSOPHY_POINTS.iter().map(|point| html! {
                                <li key={*point}>
                                    <span class="check">
                                        <Icon kind={IconKind::CheckCircle} />
                                    </span>
                                    {*point}
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                    <button class="btn-dark btn-large">{"Meet Our Specialists"}</button>
                </div>
            </div>

            <style>
                {r#"
                .about { padding: 6rem 0; }
                .about-grid {
                    display: grid;
                    gap: 4rem;
                    align-items: center;
                }
                .about-media { position: relative; }
                .about-photo {
                    aspect-ratio: 4 / 5;
                    border-radius: 1.5rem;
                    overflow: hidden;
                }
                .about-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .about-quote {
                    display: none;
                    position: absolute;
                    bottom: -2rem;
                    right: -2rem;
                    max-width: 240px;
                    background: #f43f5e;
                    color: #ffffff;
                    padding: 2rem;
                    border-radius: 1.5rem;
                }
                .about-quote p {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.5rem;
                    margin: 0 0 0.5rem;
                }
                .about-lead {
                    color: #475569;
                    font-size: 1.125rem;
                    line-height: 1.625;
                    margin-bottom: 2rem;
                }
                .checklist {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .checklist li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #334155;
                    font-weight: 500;
                }
                .check {
                    width: 1.5rem;
                    height: 1.5rem;
                    background: #ffe4e6;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #f43f5e;
                }
                .check .icon {
                    width: 1rem;
                    height: 1rem;
                }
                @media (min-width: 768px) {
                    .about-grid { grid-template-columns: repeat(2, 1fr); }
                    .about-quote { display: block; }
                }
                "#}
            </style>
        </section>
    }
}
