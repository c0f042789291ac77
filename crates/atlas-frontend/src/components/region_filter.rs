use web_sys::HtmlSelectElement;
use yew::prelude::*;

use atlas::data::Region;

#[derive(Properties, PartialEq)]
pub struct RegionFilterProps {
    pub value: Option<Region>,
    pub on_change: Callback<Option<Region>>,
}

#[function_component(RegionFilter)]
pub fn region_filter(props: &RegionFilterProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                // The empty option clears the filter.
                on_change.emit(select.value().parse::<Region>().ok());
            }
        })
    };

    html! {
        <select
            class="w-52 px-6 py-4 rounded-md shadow-md bg-white dark:bg-slate-700 text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-blue-500"
            aria-label="Filter by Region"
            {onchange}
        >
            <option value="" selected={props.value.is_none()}>{ "Filter by Region" }</option>
            {
                Region::ALL.iter().map(|region| {
                    html! {
                        <option value={region.as_str()} selected={props.value == Some(*region)}>
                            { region.as_str() }
                        </option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
