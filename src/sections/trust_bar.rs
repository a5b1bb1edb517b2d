use yew::prelude::*;

use crate::content::PRESS_LOGOS;

#[function_component(TrustBar)]
pub fn trust_bar() -> Html {
    html! {
        <div class="trust-bar">
            <div class="container trust-logos">
                {
                    PRESS_LOGOS.iter().map(|logo| html! {
                        <img key={logo.name} src={logo.image_url} alt={logo.name} />
                    }).collect::<Html>()
                }
            </div>

            <style>
                {r#"
                .trust-bar {
                    background: #ffffff;
                    padding: 3rem 0;
                    border-bottom: 1px solid #f1f5f9;
                }
                .trust-logos {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    align-items: center;
                    gap: 2rem;
                    opacity: 0.5;
                    filter: grayscale(100%);
                }
                @media (min-width: 768px) {
                    .trust-logos { gap: 5rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn shows_every_press_logo() {
        let html = ServerRenderer::<TrustBar>::new().render().await;

        assert_eq!(html.matches("<img").count(), PRESS_LOGOS.len());
        for logo in PRESS_LOGOS {
            assert!(html.contains(&format!("alt=\"{}\"", logo.name)));
        }
    }
}
