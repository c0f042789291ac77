use std::cell::RefCell;

use gloo_storage::{LocalStorage, Storage};
use web_sys::window;
use yew::prelude::*;

use atlas::errors::StorageError;
use atlas::theme::{ClassList, ColorSchemeProbe, DARK_SCHEME_QUERY, Theme, ThemeState, ThemeStorage};

/// `localStorage`, read and written as raw strings.
pub struct BrowserStorage;

impl ThemeStorage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StorageError::WriteFailed {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

/// The class list of `<html>`.
pub struct DocumentRoot;

impl DocumentRoot {
    fn class_list() -> Option<web_sys::DomTokenList> {
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|html| html.class_list())
    }
}

impl ClassList for DocumentRoot {
    fn add(&self, class: &str) {
        if let Some(list) = Self::class_list() {
            list.add_1(class).ok();
        }
    }

    fn remove(&self, class: &str) {
        if let Some(list) = Self::class_list() {
            list.remove_1(class).ok();
        }
    }
}

pub struct SystemPreference;

impl ColorSchemeProbe for SystemPreference {
    fn prefers_dark(&self) -> bool {
        window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }
}

pub type BrowserTheme = ThemeState<BrowserStorage, DocumentRoot>;

thread_local! {
    static THEME: RefCell<BrowserTheme> = RefCell::new(ThemeState::new(BrowserStorage, DocumentRoot));
}

/// Runs `f` against the page-wide theme holder.
pub fn with_theme<R>(f: impl FnOnce(&mut BrowserTheme) -> R) -> R {
    THEME.with_borrow_mut(f)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

/// Mirrors the theme holder into Yew context so consumers re-render on toggle.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| with_theme(|state| state.theme()));

    {
        let theme = theme.clone();
        use_effect_with((), move |_| {
            theme.set(with_theme(|state| state.init(&SystemPreference)));
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            theme.set(with_theme(|state| state.toggle()));
        })
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeProvider")
}
