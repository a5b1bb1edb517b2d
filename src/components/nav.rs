//! Fixed header: scroll-dependent chrome plus the mobile disclosure menu.

use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::content::{BRAND_NAME, NAV_LINKS};
use crate::scroll::{self, ScrollListener};

pub fn is_scrolled(offset: f64) -> bool {
    offset > config::SCROLL_THRESHOLD_PX
}

/// The two header flags. Each one moves independently of the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    /// Window reported this vertical offset.
    Scrolled(f64),
    ToggleMenu,
    /// A link inside the mobile panel was followed.
    FollowLink,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::Scrolled(offset) => NavState {
                scrolled: is_scrolled(offset),
                ..*self
            },
            NavAction::ToggleMenu => NavState {
                menu_open: !self.menu_open,
                ..*self
            },
            NavAction::FollowLink => NavState {
                menu_open: false,
                ..*self
            },
        };

        if next == *self {
            return self;
        }
        debug!("Navigation state {:?} -> {:?}", *self, next);
        Rc::new(next)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderVariant {
    /// Over the hero image: no background, roomy padding.
    Transparent,
    /// Opaque blurred background with a shadow.
    Solid,
}

impl HeaderVariant {
    pub fn class(self) -> &'static str {
        match self {
            HeaderVariant::Transparent => "transparent",
            HeaderVariant::Solid => "solid",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Light,
    Dark,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Light => "tone-light",
            Tone::Dark => "tone-dark",
        }
    }
}

/// Everything about the header's look that depends on state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavAppearance {
    pub header: HeaderVariant,
    /// Brand, desktop links and the menu glyph.
    pub tone: Tone,
    pub toggle_icon: IconKind,
}

impl NavState {
    pub fn appearance(&self) -> NavAppearance {
        let (header, tone) = if self.scrolled {
            (HeaderVariant::Solid, Tone::Dark)
        } else {
            (HeaderVariant::Transparent, Tone::Light)
        };
        let toggle_icon = if self.menu_open { IconKind::X } else { IconKind::Menu };

        NavAppearance {
            header,
            tone,
            toggle_icon,
        }
    }
}

#[function_component(NavigationBar)]
pub fn navigation_bar() -> Html {
    let state = use_reducer_eq(NavState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                // Sample once so a restored mid-page load starts in the right variant.
                state.dispatch(NavAction::Scrolled(scroll::scroll_offset()));

                let dispatcher = state.dispatcher();
                let listener = ScrollListener::attach(move || {
                    dispatcher.dispatch(NavAction::Scrolled(scroll::scroll_offset()));
                });

                move || drop(listener)
            },
            (),
        );
    }

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::ToggleMenu))
    };

    let on_follow_link = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::FollowLink))
    };

    html! {
        <>
            <NavView state={*state} on_toggle={on_toggle} on_follow_link={on_follow_link} />
            <style>
                {NAV_STYLE}
            </style>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavViewProps {
    pub state: NavState,
    pub on_toggle: Callback<MouseEvent>,
    pub on_follow_link: Callback<MouseEvent>,
}

#[function_component(NavView)]
pub fn nav_view(props: &NavViewProps) -> Html {
    let NavViewProps {
        state,
        on_toggle,
        on_follow_link,
    } = props;
    let look = state.appearance();

    html! {
        <nav class={classes!("site-nav", look.header.class())}>
            <div class="nav-inner">
                <a href="#" class="brand">
                    <span class="brand-mark">
                        <Icon kind={IconKind::Sparkles} />
                    </span>
                    <span class={classes!("brand-name", look.tone.class())}>{BRAND_NAME}</span>
                </a>

                <div class="nav-desktop">
                    {
                        NAV_LINKS.iter().map(|link| html! {
                            <a key={link.label} href={link.anchor} class={classes!("nav-link", look.tone.class())}>
                                {link.label}
                            </a>
                        }).collect::<Html>()
                    }
                    <button class="btn-primary nav-book">{"Book Appointment"}</button>
                </div>

                <button class={classes!("nav-toggle", look.tone.class())} onclick={on_toggle.clone()}>
                    <Icon kind={look.toggle_icon} />
                </button>
            </div>

            {
                if state.menu_open {
                    html! { <MobileMenu on_follow_link={on_follow_link.clone()} /> }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

const NAV_STYLE: &str = r#"
.site-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    transition: all 0.3s ease;
}
.site-nav.transparent {
    background: transparent;
    padding: 1.25rem 0;
}
.site-nav.solid {
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(12px);
    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.06);
    padding: 0.75rem 0;
}
.nav-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    text-decoration: none;
}
.brand-mark {
    width: 2.5rem;
    height: 2.5rem;
    background: #ffe4e6;
    color: #f43f5e;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
}
.brand-name {
    font-family: 'Playfair Display', serif;
    font-size: 1.5rem;
    font-weight: 700;
    letter-spacing: -0.025em;
}
.brand-name.tone-light { color: #ffffff; }
.brand-name.tone-dark { color: #0f172a; }
.nav-desktop {
    display: none;
    align-items: center;
    gap: 2rem;
}
.nav-link {
    font-size: 0.875rem;
    font-weight: 500;
    text-decoration: none;
    transition: color 0.2s;
}
.nav-link.tone-light { color: rgba(255, 255, 255, 0.9); }
.nav-link.tone-dark { color: #475569; }
.nav-link:hover { color: #f43f5e; }
.nav-book {
    padding: 0.625rem 1.5rem;
    font-size: 0.875rem;
    box-shadow: 0 10px 15px -3px #fecdd3;
}
.nav-toggle {
    background: none;
    border: none;
    cursor: pointer;
}
.nav-toggle.tone-light { color: #ffffff; }
.nav-toggle.tone-dark { color: #0f172a; }
.mobile-panel {
    position: absolute;
    top: 100%;
    left: 0;
    width: 100%;
    background: #ffffff;
    box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.1);
    padding: 1.5rem;
    box-sizing: border-box;
    display: flex;
    flex-direction: column;
    gap: 1rem;
    animation: panel-in 0.2s ease-out;
}
.mobile-link {
    color: #475569;
    font-weight: 500;
    padding: 0.5rem 0;
    border-bottom: 1px solid #f8fafc;
    text-decoration: none;
}
.mobile-cta {
    padding: 0.75rem;
    border-radius: 0.75rem;
}
@keyframes panel-in {
    from { opacity: 0; transform: translateY(-20px); }
    to { opacity: 1; transform: translateY(0); }
}
@media (min-width: 768px) {
    .nav-desktop { display: flex; }
    .nav-toggle, .mobile-panel { display: none; }
}
"#;

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub on_follow_link: Callback<MouseEvent>,
}

/// Disclosure panel for narrow viewports. Only mounted while open.
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    html! {
        <div class="mobile-panel">
            {
                NAV_LINKS.iter().map(|link| html! {
                    <a
                        key={link.label}
                        href={link.anchor}
                        class="mobile-link"
                        onclick={props.on_follow_link.clone()}
                    >
                        {link.label}
                    </a>
                }).collect::<Html>()
            }
            <button class="btn-primary mobile-cta">{"Book Now"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(super) fn apply(state: NavState, actions: &[NavAction]) -> NavState {
        *actions
            .iter()
            .fold(Rc::new(state), |s, a| s.reduce(*a))
    }

    #[test]
    fn scroll_threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(19.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(21.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn starts_transparent_and_closed() {
        let state = NavState::default();
        assert!(!state.scrolled);
        assert!(!state.menu_open);
        assert_eq!(state.appearance().header, HeaderVariant::Transparent);
        assert_eq!(state.appearance().toggle_icon, IconKind::Menu);
    }

    #[test]
    fn toggle_parity() {
        for n in 0..7 {
            let actions = vec![NavAction::ToggleMenu; n];
            let state = apply(NavState::default(), &actions);
            assert_eq!(state.menu_open, n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn following_a_link_closes_the_menu_idempotently() {
        let open = apply(NavState::default(), &[NavAction::ToggleMenu]);
        assert!(open.menu_open);

        let closed = apply(open, &[NavAction::FollowLink]);
        assert!(!closed.menu_open);

        let still_closed = apply(closed, &[NavAction::FollowLink]);
        assert!(!still_closed.menu_open);
    }

    #[test]
    fn flags_are_independent() {
        let state = apply(
            NavState::default(),
            &[NavAction::ToggleMenu, NavAction::Scrolled(100.0)],
        );
        assert_eq!(state, NavState { scrolled: true, menu_open: true });

        let state = apply(state, &[NavAction::FollowLink]);
        assert!(state.scrolled);

        let state = apply(state, &[NavAction::Scrolled(0.0)]);
        assert_eq!(state, NavState::default());
    }

    #[test]
    fn header_variant_follows_scroll_round_trip() {
        let mut state = NavState::default();
        let mut seen = Vec::new();
        for offset in [0.0, 100.0, 0.0] {
            state = apply(state, &[NavAction::Scrolled(offset)]);
            seen.push(state.appearance().header);
        }
        assert_eq!(
            seen,
            vec![
                HeaderVariant::Transparent,
                HeaderVariant::Solid,
                HeaderVariant::Transparent
            ]
        );
    }

    #[test]
    fn unchanged_state_keeps_the_same_allocation() {
        let state = Rc::new(NavState::default());
        let next = state.clone().reduce(NavAction::Scrolled(5.0));
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(NavAction::FollowLink);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn appearance_covers_all_four_combinations() {
        let look = |scrolled, menu_open| NavState { scrolled, menu_open }.appearance();

        assert_eq!(
            look(false, false),
            NavAppearance {
                header: HeaderVariant::Transparent,
                tone: Tone::Light,
                toggle_icon: IconKind::Menu
            }
        );
        assert_eq!(look(false, true).toggle_icon, IconKind::X);
        assert_eq!(look(false, true).tone, Tone::Light);
        assert_eq!(look(true, false).header, HeaderVariant::Solid);
        assert_eq!(look(true, false).tone, Tone::Dark);
        assert_eq!(look(true, true).toggle_icon, IconKind::X);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod render_tests {
    use super::tests::apply;
    use super::*;
    use yew::ServerRenderer;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        state: NavState,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <NavView
                state={props.state}
                on_toggle={Callback::from(|_: MouseEvent| ())}
                on_follow_link={Callback::from(|_: MouseEvent| ())}
            />
        }
    }

    async fn render(state: NavState) -> String {
        ServerRenderer::<Harness>::with_props(move || HarnessProps { state })
            .render()
            .await
    }

    fn label_positions(html: &str) -> Vec<usize> {
        NAV_LINKS
            .iter()
            .map(|link| {
                html.find(&format!(">{}<", link.label))
                    .unwrap_or_else(|| panic!("{} missing", link.label))
            })
            .collect()
    }

    #[tokio::test]
    async fn labels_render_in_order_in_every_state() {
        for scrolled in [false, true] {
            for menu_open in [false, true] {
                let html = render(NavState { scrolled, menu_open }).await;
                let positions = label_positions(&html);
                assert!(positions.windows(2).all(|w| w[0] < w[1]), "{html}");
                for link in NAV_LINKS {
                    assert!(html.contains(&format!("href=\"{}\"", link.anchor)));
                }
            }
        }
    }

    #[tokio::test]
    async fn header_class_tracks_scroll() {
        let html = render(NavState::default()).await;
        assert!(html.contains("site-nav transparent"));

        let html = render(NavState { scrolled: true, menu_open: false }).await;
        assert!(html.contains("site-nav solid"));
    }

    #[tokio::test]
    async fn mobile_panel_shows_four_links_and_one_button_only_when_open() {
        let closed = render(NavState::default()).await;
        assert!(!closed.contains("mobile-panel"));

        let open = render(NavState { scrolled: false, menu_open: true }).await;
        assert!(open.contains("mobile-panel"));
        assert_eq!(open.matches("mobile-link").count(), 4);
        assert_eq!(open.matches("mobile-cta").count(), 1);
        assert!(open.contains("Book Now"));

        let after_link = apply(
            NavState { scrolled: false, menu_open: true },
            &[NavAction::FollowLink],
        );
        assert!(!render(after_link).await.contains("mobile-panel"));
    }
}
