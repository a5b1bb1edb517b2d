use yew::prelude::*;

/// Line icons drawn inline; strokes use `currentColor` so the surrounding
/// text colour applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Sparkles,
    Heart,
    CheckCircle,
    ChevronRight,
    Star,
    Menu,
    X,
    MapPin,
    Phone,
    Clock,
    Calendar,
    Instagram,
    Facebook,
}

impl IconKind {
    fn paths(self) -> Html {
        match self {
            IconKind::Sparkles => html! {
                <>
                    <path d="M12 3l1.9 5.8L20 10.5l-6.1 1.7L12 18l-1.9-5.8L4 10.5l6.1-1.7z" />
                    <path d="M5 3v4M3 5h4M19 17v4M17 19h4" />
                </>
            },
            IconKind::Heart => html! {
                <path d="M19 14c1.5-1.5 3-3.2 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.8 0-3 .5-4.5 2-1.5-1.5-2.7-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4 3 5.5l7 7z" />
            },
            IconKind::CheckCircle => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <path d="M9 12l2 2 4-4" />
                </>
            },
            IconKind::ChevronRight => html! { <path d="M9 18l6-6-6-6" /> },
            IconKind::Star => html! {
                <path d="M12 2l3.1 6.3 6.9 1-5 4.9 1.2 6.8L12 17.8 5.8 21l1.2-6.8-5-4.9 6.9-1z" />
            },
            IconKind::Menu => html! { <path d="M4 6h16M4 12h16M4 18h16" /> },
            IconKind::X => html! { <path d="M18 6L6 18M6 6l12 12" /> },
            IconKind::MapPin => html! {
                <>
                    <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z" />
                    <circle cx="12" cy="10" r="3" />
                </>
            },
            IconKind::Phone => html! {
                <path d="M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7c.1.9.4 1.8.7 2.7a2 2 0 0 1-.5 2.1L8 9.8a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4c.9.3 1.8.6 2.7.7a2 2 0 0 1 1.7 2z" />
            },
            IconKind::Clock => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 6v6l4 2" />
                </>
            },
            IconKind::Calendar => html! {
                <>
                    <rect x="3" y="4" width="18" height="18" rx="2" />
                    <path d="M16 2v4M8 2v4M3 10h18" />
                </>
            },
            IconKind::Instagram => html! {
                <>
                    <rect x="2" y="2" width="20" height="20" rx="5" />
                    <path d="M16 11.4A4 4 0 1 1 12.6 8 4 4 0 0 1 16 11.4zM17.5 6.5h.01" />
                </>
            },
            IconKind::Facebook => html! {
                <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" />
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    // Filled star is the only solid glyph.
    let fill = if props.kind == IconKind::Star { "currentColor" } else { "none" };

    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            { props.kind.paths() }
        </svg>
    }
}
