use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::PHONE;

#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section class="cta">
            <div class="container">
                <div class="cta-panel">
                    <div class="cta-glow top-left"></div>
                    <div class="cta-glow bottom-right"></div>

                    <div class="cta-body">
                        <h2 class="section-title">{"Ready to start your glow-up journey?"}</h2>
                        <p>
                            {"Book your complimentary consultation today and receive a customized skin analysis from our experts."}
                        </p>
                        <div class="cta-actions">
                            <button class="btn-primary btn-large cta-book">
                                <Icon kind={IconKind::Calendar} />
                                {"Book Now"}
                            </button>
                            <button class="btn-light btn-large">{format!("Call {}", PHONE)}</button>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .cta { padding: 6rem 0; }
                .cta-panel {
                    position: relative;
                    overflow: hidden;
                    background: #fff1f2;
                    border-radius: 3rem;
                    padding: 3rem;
                    text-align: center;
                }
                .cta-glow {
                    position: absolute;
                    width: 16rem;
                    height: 16rem;
                    border-radius: 9999px;
                    filter: blur(64px);
                }
                .cta-glow.top-left {
                    top: 0;
                    left: 0;
                    background: rgba(255, 228, 230, 0.5);
                    transform: translate(-50%, -50%);
                }
                .cta-glow.bottom-right {
                    bottom: 0;
                    right: 0;
                    background: rgba(254, 205, 211, 0.3);
                    transform: translate(50%, 50%);
                }
                .cta-body {
                    position: relative;
                    z-index: 10;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .cta-body p {
                    color: #475569;
                    font-size: 1.125rem;
                    margin-bottom: 2.5rem;
                }
                .cta-actions {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    gap: 1rem;
                }
                .cta-book {
                    font-weight: 700;
                    box-shadow: 0 20px 25px -5px #fecdd3;
                }
                @media (min-width: 640px) {
                    .cta-actions { flex-direction: row; }
                }
                @media (min-width: 768px) {
                    .cta-panel { padding: 5rem; }
                }
                "#}
            </style>
        </section>
    }
}
