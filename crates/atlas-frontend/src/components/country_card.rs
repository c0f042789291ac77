use yew::prelude::*;
use yew_router::prelude::*;

use atlas::data::Country;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct CountryCardProps {
    pub country: Country,
}

#[function_component(CountryCard)]
pub fn country_card(props: &CountryCardProps) -> Html {
    let country = &props.country;
    let route = Route::CountryDetail {
        name: country.common_name().to_string(),
    };
    let alt = country
        .flags
        .alt
        .clone()
        .unwrap_or_else(|| format!("Flag of {}", country.common_name()));

    html! {
        <Link<Route> to={route} classes={classes!("block", "rounded-md", "overflow-hidden", "shadow-md", "bg-white", "dark:bg-slate-700", "hover:scale-105", "transition-transform")}>
            <img class="w-full h-40 object-cover" src={country.flags.png.clone()} alt={alt} loading="lazy" />
            <div class="p-6 text-sm text-gray-900 dark:text-white">
                <h2 class="text-lg font-extrabold mb-4">{ country.common_name() }</h2>
                <p><span class="font-semibold">{ "Population: " }</span>{ country.population_display() }</p>
                <p><span class="font-semibold">{ "Region: " }</span>{ &country.region }</p>
                <p><span class="font-semibold">{ "Capital: " }</span>{ country.capital_display() }</p>
            </div>
        </Link<Route>>
    }
}
