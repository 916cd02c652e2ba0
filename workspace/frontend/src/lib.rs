use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod auth;
pub mod scheduler;
pub mod settings;
pub mod status;
pub mod storage;

use auth::AuthProvider;
use components::auth::{ForgotPassword, Login, Signup};
use components::dashboard::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Login => html! { <Login /> },
        Route::Signup => html! { <Signup /> },
        Route::ForgotPassword => html! { <ForgotPassword /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <div class="min-h-screen flex items-center justify-center bg-base-200">
                    <h1 class="text-2xl font-bold">{"404 Not Found"}</h1>
                </div>
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </AuthProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Settings feed the logger level, so they come up first.
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== SkyWatch Weather Dashboard Starting ===");
    log::debug!("API base URL: {}", settings.api_base);
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
