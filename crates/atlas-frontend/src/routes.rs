use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{CountriesPage, CountryPage};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/country/:name")]
    CountryDetail { name: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    atlas::debug!("Rendering route {:?}", route);
    match route {
        Route::Home => html! { <CountriesPage /> },
        Route::CountryDetail { name } => html! { <CountryPage name={name} /> },
        // Unknown URLs fall back to the list view.
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}
