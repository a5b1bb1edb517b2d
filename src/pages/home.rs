use yew::prelude::*;

use crate::components::nav::NavigationBar;
use crate::sections::{
    about::About, cta::Cta, footer::Footer, hero::Hero, services::Services, stats::Stats,
    testimonials::Testimonials, trust_bar::TrustBar,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page">
            <NavigationBar />
            <Hero />
            <TrustBar />
            <Services />
            <About />
            <Stats />
            <Cta />
            <Testimonials />
            <Footer />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn sections_render_in_page_order() {
        let html = ServerRenderer::<Home>::new().render().await;

        let markers = [
            "class=\"site-nav transparent\"",
            "class=\"hero\"",
            "class=\"trust-bar\"",
            "id=\"services\"",
            "id=\"about\"",
            "class=\"stats\"",
            "class=\"cta\"",
            "id=\"reviews\"",
            "class=\"site-footer\"",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|m| html.find(m).unwrap_or_else(|| panic!("{m} missing")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[tokio::test]
    async fn results_anchor_has_no_section() {
        let html = ServerRenderer::<Home>::new().render().await;

        assert!(html.contains("href=\"#results\""));
        assert!(!html.contains("id=\"results\""));
    }
}
