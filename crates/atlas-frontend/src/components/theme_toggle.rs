use yew::prelude::*;

use atlas::theme::Theme;

use crate::providers::use_theme;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();

    let onclick = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    // Label names the mode the button switches to.
    let (icon, label) = match theme.theme {
        Theme::Dark => ("☀", "Light Mode"),
        Theme::Light => ("☾", "Dark Mode"),
    };

    html! {
        <button
            type="button"
            class="flex items-center space-x-2 px-3 py-1.5 text-sm font-semibold rounded-md text-gray-900 dark:text-white hover:bg-gray-100 dark:hover:bg-slate-600 focus:outline-none focus:ring-2 focus:ring-blue-500 transition-colors"
            aria-pressed={theme.theme.is_dark().to_string()}
            {onclick}
        >
            <span aria-hidden="true">{ icon }</span>
            <span>{ label }</span>
        </button>
    }
}
