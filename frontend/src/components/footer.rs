use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::{config, Route, NAV_LINKS};

const SOCIAL_LINKS: [&str; 4] = ["Facebook", "Twitter", "Instagram", "YouTube"];

const RESOURCES: [&str; 5] = [
    "Coral Research",
    "Conservation Efforts",
    "Educational Materials",
    "Volunteer Opportunities",
    "Donation Programs",
];

const POLICY_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];

// Footer quick links read "About Us" where the nav says "About".
fn quick_link_label(route: Route, nav_label: &'static str) -> &'static str {
    match route {
        Route::About => "About Us",
        _ => nav_label,
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    // Newsletter signup is client-side only.
    let on_subscribe = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        log::info!("Newsletter signup submitted");
    });

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3 class="footer-brand">{config::BRAND_NAME}</h3>
                    <p class="footer-text">
                        {"Dedicated to the conservation and protection of coral reef ecosystems worldwide through education, research, and community engagement."}
                    </p>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|name| html! {
                            <a href="#" class="footer-link" aria-label={*name}>{*name}</a>
                        }) }
                    </div>
                </div>

                <div>
                    <h3 class="footer-heading">{"Quick Links"}</h3>
                    <ul class="footer-list">
                        { for NAV_LINKS.iter().map(|(route, label)| html! {
                            <li>
                                <Link<Route> to={*route} classes="footer-link">
                                    {quick_link_label(*route, *label)}
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h3 class="footer-heading">{"Resources"}</h3>
                    <ul class="footer-list">
                        { for RESOURCES.iter().map(|item| html! {
                            <li><a href="#" class="footer-link">{*item}</a></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h3 class="footer-heading">{"Newsletter"}</h3>
                    <p class="footer-text">
                        {"Subscribe to our newsletter for updates on our conservation efforts and upcoming events."}
                    </p>
                    <form class="newsletter-form" onsubmit={on_subscribe}>
                        <input type="email" placeholder="Your email" required=true />
                        <button type="submit" aria-label="Subscribe">{"✉"}</button>
                    </form>
                    <p class="footer-fineprint">
                        {"By subscribing, you agree to our Privacy Policy and consent to receive updates from our organization."}
                    </p>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, config::BRAND_NAME)}</p>
                <div class="footer-policies">
                    { for POLICY_LINKS.iter().map(|item| html! {
                        <a href="#" class="footer-link">{*item}</a>
                    }) }
                </div>
                <div class="footer-love">
                    <span>{"Made with"}</span>
                    <span class="footer-heart">{"♥"}</span>
                    <span>{"for our oceans"}</span>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid #1f2937;
                    background: #000;
                    color: #fff;
                    padding: 3rem 1rem;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    gap: 2rem;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                }
                .footer-brand {
                    color: #2dd4bf;
                    font-size: 1.125rem;
                    margin-bottom: 1rem;
                }
                .footer-heading {
                    font-size: 1.125rem;
                    margin-bottom: 1rem;
                }
                .footer-text {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    margin-bottom: 1rem;
                }
                .footer-list {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                }
                .footer-social {
                    display: flex;
                    gap: 1rem;
                    font-size: 0.875rem;
                }
                .footer-link {
                    color: #9ca3af;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .footer-link:hover {
                    color: #2dd4bf;
                }
                .newsletter-form {
                    display: flex;
                    margin-bottom: 1rem;
                }
                .newsletter-form input {
                    flex: 1;
                    border: 1px solid #374151;
                    border-radius: 6px 0 0 6px;
                    background: #111827;
                    color: #fff;
                    padding: 0.5rem 0.75rem;
                }
                .newsletter-form button {
                    border: none;
                    border-radius: 0 6px 6px 0;
                    background: #0d9488;
                    color: #fff;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                }
                .footer-fineprint {
                    color: #6b7280;
                    font-size: 0.75rem;
                }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 2rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid #1f2937;
                    text-align: center;
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                .footer-policies {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 0.5rem;
                    font-size: 0.75rem;
                }
                .footer-love {
                    display: flex;
                    justify-content: center;
                    gap: 0.25rem;
                    margin-top: 1rem;
                    font-size: 0.75rem;
                }
                .footer-heart {
                    color: #ef4444;
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_links_rename_about_only() {
        let labels: Vec<&str> = NAV_LINKS
            .iter()
            .map(|(route, label)| quick_link_label(*route, *label))
            .collect();
        assert_eq!(labels, ["Home", "Quiz", "3D Gallery", "About Us", "Contact"]);
    }
}
