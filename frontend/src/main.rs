use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod assessment;
mod browser;
mod config;
mod nav;
mod reveal;
mod storage;
mod theme;
mod trackers {
    pub mod fitness;
    pub mod meditation;
    pub mod routine;
    pub mod sleep;
    pub mod sobriety;
}
mod components {
    pub mod calendar;
    pub mod carousel;
    pub mod filter;
    pub mod modal;
    pub mod notification;
    pub mod tabs;
}
mod forms {
    pub mod catalog;
    pub mod form;
    pub mod validation;
}
mod pages {
    pub mod addiction;
    pub mod contact;
    pub mod events;
    pub mod faq;
    pub mod fitness;
    pub mod get_involved;
    pub mod home;
    pub mod login;
    pub mod mental;
    pub mod not_found;
    pub mod nutrition;
    pub mod sleep;
}

use nav::Nav;
use pages::{
    addiction::Addiction,
    contact::Contact,
    events::Events,
    faq::Faq,
    fitness::Fitness,
    get_involved::GetInvolved,
    home::Home,
    login::Login,
    mental::MentalHealth,
    not_found::NotFound,
    nutrition::Nutrition,
    sleep::Sleep,
};
use reveal::RevealOnScroll;
use theme::ThemeStyles;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/fitness")]
    Fitness,
    #[at("/nutrition")]
    Nutrition,
    #[at("/mental-health")]
    MentalHealth,
    #[at("/sleep")]
    Sleep,
    #[at("/addiction")]
    Addiction,
    #[at("/events")]
    Events,
    #[at("/faq")]
    Faq,
    #[at("/get-involved")]
    GetInvolved,
    #[at("/contact")]
    Contact,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Fitness => {
            info!("Rendering Fitness page");
            html! { <Fitness /> }
        },
        Route::Nutrition => {
            info!("Rendering Nutrition page");
            html! { <Nutrition /> }
        },
        Route::MentalHealth => {
            info!("Rendering Mental Health page");
            html! { <MentalHealth /> }
        },
        Route::Sleep => {
            info!("Rendering Sleep page");
            html! { <Sleep /> }
        },
        Route::Addiction => {
            info!("Rendering Recovery page");
            html! { <Addiction /> }
        },
        Route::Events => {
            info!("Rendering Events page");
            html! { <Events /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::GetInvolved => {
            info!("Rendering Get Involved page");
            html! { <GetInvolved /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ThemeStyles />
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <RevealOnScroll />
            <footer class="site-footer">
                <p>{"Campus Wellness Hub · Health Services Building · (555) 123-4567"}</p>
                <p>{"In crisis? Call or text 988, any time."}</p>
            </footer>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting Campus Wellness Hub");
    yew::Renderer::<App>::new().render();

    if let Some(ms) = browser::page_load_time_ms() {
        info!("Page load time: {:.0}ms", ms);
    }
}
