mod components;
mod pages;
mod providers;
mod routes;

use yew::prelude::*;
use yew_router::prelude::*;

use atlas::config::Config;

use components::Header;
use providers::ThemeProvider;
use routes::{Route, switch};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Config,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Config> context={props.config.clone()}>
            <BrowserRouter>
                <ThemeProvider>
                    <div class="min-h-screen bg-gray-50 dark:bg-slate-800 transition-colors">
                        <Header />
                        <main>
                            <Switch<Route> render={switch} />
                        </main>
                    </div>
                </ThemeProvider>
            </BrowserRouter>
        </ContextProvider<Config>>
    }
}

/// The element the app is mounted on, or `<body>` when the page lacks it.
fn mount_point(config: &Config) -> Option<web_sys::Element> {
    let document = web_sys::window()?.document()?;
    match document.get_element_by_id(&config.mount_id) {
        Some(root) => Some(root),
        None => {
            atlas::error!("No element with id #{}, mounting on <body>", config.mount_id);
            document.body().map(Into::into)
        }
    }
}

fn main() {
    atlas::log::setup().expect("Failed to setup logging");

    let config = Config::load();
    atlas::info!("Starting atlas against {}", config.api_base_url);

    let root = mount_point(&config).expect("No document to mount on");
    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
