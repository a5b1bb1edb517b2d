use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{Testimonial, RATING_LABEL, RATING_STARS, TESTIMONIALS};

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = &props.testimonial;

    html! {
        <div class="testimonial">
            <p class="testimonial-quote">{format!("\"{}\"", t.quote)}</p>
            <div class="testimonial-author">
                <img src={t.avatar_url} alt={t.name} />
                <div>
                    <h5>{t.name}</h5>
                    <p>{t.role}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="reviews" class="testimonials">
            <div class="container">
                <div class="testimonials-head">
                    <div class="testimonials-intro">
                        <h2 class="eyebrow">{"Testimonials"}</h2>
                        <h3 class="section-title">{"What our clients say about their experience"}</h3>
                    </div>
                    <div class="rating">
                        <div class="stars">
                            { for (0..RATING_STARS).map(|_| html! { <Icon kind={IconKind::Star} /> }) }
                        </div>
                        <span>{RATING_LABEL}</span>
                    </div>
                </div>

                <div class="card-grid">
                    {
                        TESTIMONIALS.iter().map(|t| html! {
                            <TestimonialCard key={t.name} testimonial={*t} />
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .testimonials {
                    padding: 6rem 0;
                    background: #ffffff;
                    overflow: hidden;
                }
                .testimonials-head {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: flex-start;
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                }
                .testimonials-intro { max-width: 36rem; }
                .rating {
                    display: flex;
                    gap: 0.5rem;
                    font-weight: 700;
                    color: #0f172a;
                }
                .stars {
                    display: flex;
                    color: #facc15;
                }
                .testimonial {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: #f8fafc;
                    border: 1px solid #f1f5f9;
                }
                .testimonial-quote {
                    color: #475569;
                    font-style: italic;
                    line-height: 1.625;
                    margin-bottom: 2rem;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .testimonial-author img {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    object-fit: cover;
                }
                .testimonial-author h5 {
                    font-weight: 700;
                    color: #0f172a;
                    margin: 0;
                }
                .testimonial-author p {
                    font-size: 0.875rem;
                    color: #64748b;
                    margin: 0;
                }
                @media (min-width: 768px) {
                    .testimonials-head {
                        flex-direction: row;
                        align-items: flex-end;
                    }
                }
                "#}
            </style>
        </section>
    }
}
