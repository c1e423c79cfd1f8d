use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod media;
pub mod registration;
pub mod components {
    pub mod media_overlay;
    pub mod registration_form;
}
pub mod pages {
    pub mod landing;
    pub mod not_found;
}
pub mod utils {
    pub mod api;
    pub mod notify;
}

use pages::landing::Landing;
use pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <Landing /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
