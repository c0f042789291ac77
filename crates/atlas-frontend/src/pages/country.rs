use yew::prelude::*;
use yew_router::prelude::*;

use atlas::data::{Country, CountryRef};
use atlas::{info, warn};

use crate::components::{ErrorMessage, Loading};
use crate::providers::{api, use_config};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct CountryProps {
    /// Country name as it appears in the URL
    pub name: String,
}

#[derive(Clone, PartialEq)]
enum LoadError {
    NotFound,
    Failed(String),
}

#[function_component(CountryPage)]
pub fn country_page(props: &CountryProps) -> Html {
    let config = use_config();
    let api = use_memo(config, |config| api::create(config));
    let country = use_state(|| None::<Country>);
    let borders = use_state(Vec::<CountryRef>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<LoadError>);
    let reload = use_state(|| 0u32);

    use_effect_with((props.name.clone(), *reload), {
        let api = api.clone();
        let country = country.clone();
        let borders = borders.clone();
        let loading = loading.clone();
        let error = error.clone();

        move |(name, _): &(String, u32)| {
            let name = name.clone();

            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                error.set(None);
                borders.set(Vec::new());

                match api.fetch_country(&name).await {
                    Ok(found) => {
                        info!("Country loaded: {}", found.common_name());
                        match api.fetch_border_names(&found.borders).await {
                            Ok(names) => borders.set(names),
                            Err(err) => warn!("Border lookup for {name} failed: {err}"),
                        }
                        country.set(Some(found));
                    }
                    Err(err) if err.is_not_found() => {
                        country.set(None);
                        error.set(Some(LoadError::NotFound));
                    }
                    Err(err) => {
                        country.set(None);
                        error.set(Some(LoadError::Failed(format!("Failed to load {name}: {err}"))));
                    }
                }
                loading.set(false);
            });
        }
    });

    let on_retry = {
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| reload.set(*reload + 1))
    };

    let body = if *loading {
        html! { <Loading label="Loading country..." /> }
    } else if let Some(err) = error.as_ref() {
        match err {
            LoadError::NotFound => html! {
                <ErrorMessage
                    title="Country not found"
                    message={format!("There is no country named \"{}\".", props.name)}
                />
            },
            LoadError::Failed(message) => html! {
                <ErrorMessage title="Error Loading Country" message={message.clone()} on_retry={on_retry} />
            },
        }
    } else if let Some(country) = country.as_ref() {
        render_country(country, &borders)
    } else {
        html! {}
    };

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-8 py-10">
            <Link<Route> to={Route::Home} classes={classes!("inline-flex", "items-center", "px-8", "py-2", "mb-16", "rounded-md", "shadow-md", "bg-white", "dark:bg-slate-700", "text-gray-900", "dark:text-white")}>
                { "← Back" }
            </Link<Route>>
            { body }
        </div>
    }
}

fn render_country(country: &Country, borders: &[CountryRef]) -> Html {
    let fact = |label: &'static str, value: String| {
        html! {
            <p class="mb-2"><span class="font-semibold">{ label }</span>{ value }</p>
        }
    };

    html! {
        <div class="grid gap-12 lg:grid-cols-2 items-center text-gray-900 dark:text-white">
            <img
                class="w-full shadow-lg"
                src={country.flags.svg.clone()}
                alt={country.flags.alt.clone().unwrap_or_else(|| format!("Flag of {}", country.common_name()))}
            />
            <div>
                <h1 class="text-3xl font-extrabold mb-8">{ country.common_name() }</h1>
                <div class="grid gap-8 sm:grid-cols-2 text-sm">
                    <div>
                        { fact("Native Name: ", country.native_name().to_string()) }
                        { fact("Population: ", country.population_display()) }
                        { fact("Region: ", country.region.clone()) }
                        { fact("Sub Region: ", country.subregion.clone().unwrap_or_else(|| "-".to_string())) }
                        { fact("Capital: ", country.capital_display()) }
                    </div>
                    <div>
                        { fact("Top Level Domain: ", country.tld_display()) }
                        { fact("Currencies: ", country.currencies_display()) }
                        { fact("Languages: ", country.languages_display()) }
                    </div>
                </div>
                <div class="mt-10 flex flex-wrap items-center gap-2 text-sm">
                    <span class="font-semibold mr-2">{ "Border Countries:" }</span>
                    {
                        if borders.is_empty() {
                            html! { <span>{ "None" }</span> }
                        } else {
                            borders.iter().map(|border| {
                                let route = Route::CountryDetail { name: border.name.common.clone() };
                                html! {
                                    <Link<Route> to={route} classes={classes!("px-6", "py-1", "rounded-sm", "shadow", "bg-white", "dark:bg-slate-700")}>
                                        { border.name.common.clone() }
                                    </Link<Route>>
                                }
                            }).collect::<Html>()
                        }
                    }
                </div>
            </div>
        </div>
    }
}
