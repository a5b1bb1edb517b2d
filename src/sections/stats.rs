use yew::prelude::*;

use crate::content::STATS;

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section class="stats">
            <div class="container stats-grid">
                {
                    STATS.iter().map(|stat| html! {
                        <div key={stat.label} class="stat">
                            <div class="stat-value">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }).collect::<Html>()
                }
            </div>

            <style>
                {r#"
                .stats {
                    background: #0f172a;
                    padding: 5rem 0;
                }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 3rem;
                    text-align: center;
                }
                .stat-value {
                    font-family: 'Playfair Display', serif;
                    font-size: 2.25rem;
                    color: #fb7185;
                    margin-bottom: 0.5rem;
                }
                .stat-label {
                    color: #94a3b8;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                @media (min-width: 768px) {
                    .stats-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
