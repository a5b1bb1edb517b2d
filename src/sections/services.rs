use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{Service, SERVICES};

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;

    html! {
        <div class="service-card">
            <div class="service-photo">
                <img src={service.image_url} alt={service.title} />
            </div>
            <div class="service-body">
                <div class="service-icon">
                    <Icon kind={service.icon} />
                </div>
                <h4>{service.title}</h4>
                <p>{service.description}</p>
                <button class="text-link">
                    {"Learn More "}
                    <Icon kind={IconKind::ChevronRight} />
                </button>
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-heading centered">
                    <h2 class="eyebrow">{"Our Expertise"}</h2>
                    <h3 class="section-title">{"Curated Treatments"}</h3>
                </div>

                <div class="card-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <ServiceCard key={service.title} service={*service} />
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .services {
                    padding: 6rem 0;
                    background: #f8fafc;
                }
                .service-card {
                    background: #ffffff;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                    border: 1px solid #f1f5f9;
                    transition: transform 0.3s ease;
                }
                .service-card:hover { transform: translateY(-10px); }
                .service-photo {
                    height: 16rem;
                    overflow: hidden;
                }
                .service-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s;
                }
                .service-card:hover .service-photo img { transform: scale(1.1); }
                .service-body { padding: 2rem; }
                .service-icon {
                    width: 3rem;
                    height: 3rem;
                    background: #fff1f2;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #f43f5e;
                    margin-bottom: 1.5rem;
                }
                .service-body h4 {
                    font-family: 'Playfair Display', serif;
                    font-weight: 400;
                    font-size: 1.5rem;
                    color: #0f172a;
                    margin: 0 0 0.75rem;
                }
                .service-body p {
                    color: #475569;
                    line-height: 1.625;
                    margin-bottom: 1.5rem;
                }
                "#}
            </style>
        </section>
    }
}
