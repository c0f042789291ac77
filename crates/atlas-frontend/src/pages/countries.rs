use yew::prelude::*;

use atlas::data::{Country, CountryFilter, Region};
use atlas::info;

use crate::components::{CountryCard, ErrorMessage, Loading, RegionFilter, SearchBar};
use crate::providers::{api, use_config};

#[function_component(CountriesPage)]
pub fn countries_page() -> Html {
    let config = use_config();
    let api = use_memo(config, |config| api::create(config));
    let countries = use_state(Vec::<Country>::new);
    let loading = use_state(|| true);
    let error_msg = use_state(|| None::<String>);
    let filter = use_state(CountryFilter::default);
    let reload = use_state(|| 0u32);

    use_effect_with(*reload, {
        let api = api.clone();
        let countries = countries.clone();
        let loading = loading.clone();
        let error_msg = error_msg.clone();

        move |_: &u32| {
            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                error_msg.set(None);

                match api.fetch_countries().await {
                    Ok(list) => {
                        info!("Loaded {} countries", list.len());
                        countries.set(list);
                    }
                    Err(err) => {
                        error_msg.set(Some(format!("Failed to load countries: {err}")));
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

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |query: String| {
            filter.set(CountryFilter {
                query,
                region: filter.region,
            });
        })
    };

    let on_region = {
        let filter = filter.clone();
        Callback::from(move |region: Option<Region>| {
            filter.set(CountryFilter {
                query: filter.query.clone(),
                region,
            });
        })
    };

    let body = if *loading {
        html! { <Loading label="Loading countries..." /> }
    } else if let Some(error) = error_msg.as_ref() {
        html! {
            <ErrorMessage title="Could not load countries" message={error.clone()} on_retry={on_retry} />
        }
    } else {
        let visible = filter.apply(&countries);
        if visible.is_empty() {
            html! {
                <p class="py-12 text-center text-gray-600 dark:text-gray-300">{ "No countries match your search." }</p>
            }
        } else {
            html! {
                <div class="grid gap-10 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4">
                    {
                        visible.into_iter().map(|country| {
                            html! { <CountryCard key={country.cca3.clone()} country={country.clone()} /> }
                        }).collect::<Html>()
                    }
                </div>
            }
        }
    };

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-8 py-8">
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-8 mb-10">
                <SearchBar value={filter.query.clone()} on_change={on_search} />
                <RegionFilter value={filter.region} on_change={on_region} />
            </div>
            { body }
        </div>
    }
}
