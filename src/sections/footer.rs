use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{BRAND_NAME, BUSINESS_NAME, CONTACT_LINES, QUICK_LINKS, SOCIAL_LINKS};

fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, BUSINESS_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <span class="footer-mark">
                                <Icon kind={IconKind::Sparkles} />
                            </span>
                            <span class="footer-name">{BRAND_NAME}</span>
                        </div>
                        <p class="footer-blurb">
                            {"Elevating beauty through science and art. Your destination for premium medical aesthetic treatments."}
                        </p>
                        <div class="socials">
                            {
                                SOCIAL_LINKS.iter().enumerate().map(|(i, social)| html! {
                                    <a key={i} href={social.href} class="social">
                                        <Icon kind={social.icon} />
                                    </a>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div>
                        <h6>{"Quick Links"}</h6>
                        <ul class="footer-list">
                            {
                                QUICK_LINKS.iter().map(|link| html! {
                                    <li key={link.label}>
                                        <a href={link.href}>{link.label}</a>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>

                    <div>
                        <h6>{"Contact Us"}</h6>
                        <ul class="footer-list">
                            {
                                CONTACT_LINES.iter().enumerate().map(|(i, contact)| html! {
                                    <li key={i} class="contact-line">
                                        <Icon kind={contact.icon} class="contact-icon" />
                                        <span>
                                            {
                                                contact.lines.iter().enumerate().map(|(n, line)| html! {
                                                    <>
                                                        { if n > 0 { html! { <br /> } } else { html! {} } }
                                                        {*line}
                                                    </>
                                                }).collect::<Html>()
                                            }
                                        </span>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>

                    <div>
                        <h6>{"Newsletter"}</h6>
                        <p class="footer-note">{"Subscribe for exclusive offers and beauty tips."}</p>
                        // Display only: no submission is wired up.
                        <div class="newsletter">
                            <input type="email" placeholder="Your email" />
                            <button type="button">{"Join"}</button>
                        </div>
                    </div>
                </div>

                <div class="copyright">
                    <p>{copyright_line(year)}</p>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #f8fafc;
                    padding: 5rem 0 2.5rem;
                    border-top: 1px solid #e2e8f0;
                }
                .footer-grid {
                    display: grid;
                    gap: 3rem;
                    margin-bottom: 4rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .footer-mark {
                    width: 2rem;
                    height: 2rem;
                    background: #f43f5e;
                    color: #ffffff;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .footer-mark .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                }
                .footer-name {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #0f172a;
                }
                .footer-blurb, .footer-list, .footer-note { color: #64748b; }
                .footer-blurb {
                    line-height: 1.625;
                    margin-bottom: 1.5rem;
                }
                .socials {
                    display: flex;
                    gap: 1rem;
                }
                .social {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: #ffffff;
                    border: 1px solid #e2e8f0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #475569;
                    transition: all 0.2s;
                }
                .social:hover {
                    background: #f43f5e;
                    color: #ffffff;
                }
                .site-footer h6 {
                    font-size: 1rem;
                    font-weight: 700;
                    color: #0f172a;
                    margin: 0 0 1.5rem;
                }
                .footer-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .footer-list a {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .footer-list a:hover { color: #f43f5e; }
                .contact-line {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                }
                .contact-icon {
                    color: #f43f5e;
                    flex-shrink: 0;
                }
                .footer-note {
                    font-size: 0.875rem;
                    margin-bottom: 1rem;
                }
                .newsletter {
                    display: flex;
                    gap: 0.5rem;
                }
                .newsletter input {
                    width: 100%;
                    background: #ffffff;
                    border: 1px solid #e2e8f0;
                    border-radius: 0.5rem;
                    padding: 0.5rem 1rem;
                }
                .newsletter input:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px rgba(244, 63, 94, 0.2);
                }
                .newsletter button {
                    background: #0f172a;
                    color: #ffffff;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                }
                .newsletter button:hover { background: #1e293b; }
                .copyright {
                    padding-top: 2rem;
                    border-top: 1px solid #e2e8f0;
                    text-align: center;
                    color: #94a3b8;
                    font-size: 0.875rem;
                }
                @media (min-width: 768px) {
                    .footer-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[test]
    fn copyright_uses_the_symbol() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Aashiswa Med Spa. All rights reserved."
        );
    }

    #[tokio::test]
    async fn newsletter_is_display_only() {
        let html = ServerRenderer::<Footer>::new().render().await;

        assert!(html.contains("type=\"email\""));
        assert!(html.contains("type=\"button\""));
        assert!(html.contains(">Join<"));
        assert!(!html.contains("<form"));
    }

    #[tokio::test]
    async fn lists_links_and_contact_details() {
        let html = ServerRenderer::<Footer>::new().render().await;

        for link in QUICK_LINKS {
            let escaped = link.label.replace('&', "&amp;");
            assert!(html.contains(&format!(">{}<", escaped)), "{}", link.label);
        }
        assert!(html.contains(">Before &amp; After<"));
        assert_eq!(html.matches("class=\"contact-line\"").count(), CONTACT_LINES.len());
        assert_eq!(html.matches("class=\"social\"").count(), SOCIAL_LINKS.len());
        assert!(html.contains("Beverly Hills, CA 90210"));
        assert!(html.contains(&Local::now().year().to_string()));
    }
}
