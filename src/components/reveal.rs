use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Fired once, when the entrance animation starts.
    #[prop_or_default]
    pub on_reveal: Callback<()>,
    pub children: Children,
}

/// Plays a one-shot fade/slide-in shortly after mount. Children render in
/// full from the start; only the `visible` class arrives late.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        let on_reveal = props.on_reveal.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::REVEAL_DELAY_MS, move || {
                    visible.set(true);
                    on_reveal.emit(());
                });
                // Dropping the handle cancels the timer if we unmount first.
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <div class={classes!("reveal", (*visible).then(|| "visible"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::test_support::mount_point;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn counting_props(hits: &Rc<Cell<u32>>) -> RevealProps {
        let hits = hits.clone();
        RevealProps {
            class: Classes::new(),
            on_reveal: Callback::from(move |_| hits.set(hits.get() + 1)),
            children: Children::default(),
        }
    }

    #[wasm_bindgen_test]
    async fn reveals_once_after_the_delay() {
        let hits = Rc::new(Cell::new(0));
        let root = mount_point();
        let app = yew::Renderer::<Reveal>::with_root_and_props(root.clone(), counting_props(&hits))
            .render();

        TimeoutFuture::new(config::REVEAL_DELAY_MS * 4).await;
        assert_eq!(hits.get(), 1);
        let class = root
            .query_selector(".reveal")
            .ok()
            .flatten()
            .map(|el| el.class_name())
            .unwrap_or_default();
        assert!(class.contains("visible"), "{class}");

        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn unmounting_early_cancels_the_timer() {
        let hits = Rc::new(Cell::new(0));
        let root = mount_point();
        let app = yew::Renderer::<Reveal>::with_root_and_props(root.clone(), counting_props(&hits))
            .render();

        // Long enough to mount and arm the timer, well short of the delay.
        TimeoutFuture::new(config::REVEAL_DELAY_MS / 6).await;
        assert!(root.query_selector(".reveal").ok().flatten().is_some());
        app.destroy();

        TimeoutFuture::new(config::REVEAL_DELAY_MS * 4).await;
        assert_eq!(hits.get(), 0);
        root.remove();
    }
}
