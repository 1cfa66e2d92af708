use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="page not-found">
            <div class="page-intro">
                <h1>{"404"}</h1>
                <p>{"This stretch of reef hasn't been mapped yet. The page you're looking for doesn't exist."}</p>
            </div>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to Home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 60vh;
                    text-align: center;
                }
                .not-found-link {
                    display: inline-block;
                    border-radius: 6px;
                    background: #0d9488;
                    color: #fff;
                    padding: 0.75rem 1.5rem;
                    text-decoration: none;
                }
                .not-found-link:hover { background: #0f766e; }
                "#}
            </style>
        </main>
    }
}
