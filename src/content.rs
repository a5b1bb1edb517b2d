//! Copy, imagery and links shown on the page.
//!
//! Everything here is plain `'static` data. Sections only read these lists,
//! so swapping copy never touches layout code.

use crate::components::icons::IconKind;

pub const BRAND_NAME: &str = "AASHISWA";
pub const BUSINESS_NAME: &str = "Aashiswa Med Spa";
pub const PHONE: &str = "(555) 123-4567";
pub const RATING_LABEL: &str = "4.9/5 Rating";
pub const RATING_STARS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

// `#results` has no matching section; following it is a silent no-op.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Services", anchor: "#services" },
    NavLink { label: "About", anchor: "#about" },
    NavLink { label: "Results", anchor: "#results" },
    NavLink { label: "Reviews", anchor: "#reviews" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
    pub image_url: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Facial Rejuvenation",
        description: "Customized medical-grade facials and chemical peels for a glowing complexion.",
        icon: IconKind::Sparkles,
        image_url: "https://images.unsplash.com/photo-1570172619644-dfd03ed5d881?auto=format&fit=crop&q=80",
    },
    Service {
        title: "Injectables & Fillers",
        description: "Expertly administered Botox and dermal fillers for natural-looking results.",
        icon: IconKind::Heart,
        image_url: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?auto=format&fit=crop&q=80",
    },
    Service {
        title: "Laser Treatments",
        description: "Advanced laser technology for hair removal, skin tightening, and pigmentation.",
        icon: IconKind::CheckCircle,
        image_url: "https://images.unsplash.com/photo-1512290923902-8a9f81dc236c?auto=format&fit=crop&q=80",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "5,000+", label: "Happy Clients" },
    Stat { value: "12+", label: "Years Experience" },
    Stat { value: "15", label: "Specialists" },
    Stat { value: "24", label: "Awards Won" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub avatar_url: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Jenkins",
        role: "Regular Client",
        quote: "The atmosphere at Aashiswa is incredibly calming. My skin has never looked better after their signature facial series.",
        avatar_url: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&q=80",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Patient",
        quote: "Professional, clean, and the results are subtle yet transformative. The staff really takes time to explain every procedure.",
        avatar_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80",
    },
    Testimonial {
        name: "Elena Rodriguez",
        role: "Patient",
        quote: "I was nervous about injectables, but the team made me feel so comfortable. I look refreshed and natural. Highly recommend!",
        avatar_url: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&q=80",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PressLogo {
    pub name: &'static str,
    pub image_url: &'static str,
}

pub const PRESS_LOGOS: &[PressLogo] = &[
    PressLogo { name: "Vogue", image_url: "https://placehold.co/120x40/transparent/64748b?text=VOGUE" },
    PressLogo { name: "Elle", image_url: "https://placehold.co/120x40/transparent/64748b?text=ELLE" },
    PressLogo { name: "Allure", image_url: "https://placehold.co/120x40/transparent/64748b?text=ALLURE" },
    PressLogo { name: "Bazaar", image_url: "https://placehold.co/120x40/transparent/64748b?text=BAZAAR" },
];

pub const PHILOSOPHY_POINTS: &[&str] = &[
    "Board-certified medical practitioners",
    "FDA-approved premium products",
    "Personalized treatment plans",
    "State-of-the-art clinical facility",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const QUICK_LINKS: &[FooterLink] = &[
    FooterLink { label: "Our Services", href: "#" },
    FooterLink { label: "Before & After", href: "#" },
    FooterLink { label: "Membership", href: "#" },
    FooterLink { label: "Gift Cards", href: "#" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: IconKind,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: IconKind::Instagram, href: "#" },
    SocialLink { icon: IconKind::Facebook, href: "#" },
];

/// One row of the footer contact column; multi-line entries break per line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLine {
    pub icon: IconKind,
    pub lines: &'static [&'static str],
}

pub const CONTACT_LINES: &[ContactLine] = &[
    ContactLine {
        icon: IconKind::MapPin,
        lines: &["123 Aesthetic Way, Suite 100", "Beverly Hills, CA 90210"],
    },
    ContactLine { icon: IconKind::Phone, lines: &[PHONE] },
    ContactLine { icon: IconKind::Clock, lines: &["Mon - Sat: 9am - 7pm"] },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_point_at_lowercase_anchors() {
        for link in NAV_LINKS {
            assert_eq!(link.anchor, format!("#{}", link.label.to_lowercase()));
        }
    }

    #[test]
    fn image_urls_are_absolute() {
        let urls = SERVICES
            .iter()
            .map(|s| s.image_url)
            .chain(TESTIMONIALS.iter().map(|t| t.avatar_url))
            .chain(PRESS_LOGOS.iter().map(|p| p.image_url));
        for url in urls {
            assert!(url.starts_with("https://"), "{url}");
        }
    }

    #[test]
    fn contact_block_lists_the_phone_number() {
        assert!(CONTACT_LINES.iter().any(|c| c.lines.contains(&PHONE)));
    }
}
