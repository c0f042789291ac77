use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ThemeToggle;
use crate::routes::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="bg-white dark:bg-slate-700 shadow-md transition-colors">
            <div class="max-w-7xl mx-auto px-4 sm:px-8 py-5 flex items-center justify-between">
                <Link<Route> to={Route::Home} classes={classes!("text-lg", "sm:text-2xl", "font-extrabold", "text-gray-900", "dark:text-white")}>
                    { "Where in the world?" }
                </Link<Route>>
                <ThemeToggle />
            </div>
        </header>
    }
}
