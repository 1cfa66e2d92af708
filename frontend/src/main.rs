use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};
use web_sys::window;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod counter;
mod quiz;
mod simulated;
mod components {
    pub mod fact_card;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod about;
    pub mod contact;
    pub mod gallery;
    pub mod quiz;
    pub mod not_found;
}

use components::footer::Footer;
use pages::{
    home::Home,
    about::About,
    contact::Contact,
    gallery::Gallery,
    quiz::QuizPage,
    not_found::NotFound,
};


#[derive(Debug, Clone, Copy, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/quiz")]
    Quiz,
    #[at("/gallery")]
    Gallery,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

// Shared by the nav bar and the footer's quick links.
pub const NAV_LINKS: [(Route, &str); 5] = [
    (Route::Home, "Home"),
    (Route::Quiz, "Quiz"),
    (Route::Gallery, "3D Gallery"),
    (Route::About, "About"),
    (Route::Contact, "Contact"),
];


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Quiz => {
            info!("Rendering Quiz page");
            html! { <QuizPage /> }
        },
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <Gallery /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = window().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 16.0);
                }) as Box<dyn FnMut()>);

                if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    warn!("Failed to attach scroll listener: {:?}", e);
                }
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::BRAND_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    {
                        if *menu_open {
                            html! { <span class="burger-close">{"✕"}</span> }
                        } else {
                            html! {
                                <>
                                    <span></span>
                                    <span></span>
                                    <span></span>
                                </>
                            }
                        }
                    }
                </button>
                <nav class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|(route, label)| {
                            html! {
                                <div onclick={close_menu.clone()}>
                                    <Link<Route> to={*route} classes="nav-link">
                                        {*label}
                                    </Link<Route>>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                    <button class="nav-donate-button" onclick={close_menu.clone()}>
                        {"Donate Now"}
                    </button>
                </nav>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #1f2937;
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(0, 0, 0, 0.95);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    height: 64px;
                    padding: 0 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #2dd4bf;
                    text-decoration: none;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #e5e7eb;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-link:hover {
                    color: #2dd4bf;
                }
                .nav-donate-button {
                    background: #0d9488;
                    color: #fff;
                    border: none;
                    border-radius: 6px;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                }
                .nav-donate-button:hover {
                    background: #0f766e;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                .burger-menu .burger-close {
                    width: auto;
                    height: auto;
                    background: none;
                    color: #fff;
                    font-size: 1.5rem;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                        z-index: 60;
                    }
                    .nav-links {
                        display: none;
                    }
                    .nav-links.mobile-menu-open {
                        display: flex;
                        position: fixed;
                        inset: 0;
                        flex-direction: column;
                        justify-content: center;
                        background: #000;
                        gap: 1.5rem;
                    }
                    .nav-links.mobile-menu-open .nav-link {
                        font-size: 1.5rem;
                        color: #fff;
                    }
                }
                "#}
            </style>
        </header>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="site-shell">
                <Nav />
                <Switch<Route> render={switch} />
                <Footer />
            </div>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
