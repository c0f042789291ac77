use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    pub label: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex items-center justify-center py-12">
            <div class="flex items-center space-x-2">
                <svg class="animate-spin h-6 w-6 text-blue-600" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                    <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                    <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
                </svg>
                <span class="text-gray-600 dark:text-gray-300">{ props.label.clone() }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub title: AttrValue,
    pub message: AttrValue,
    /// Shows a retry button when set
    #[prop_or_default]
    pub on_retry: Option<Callback<MouseEvent>>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    html! {
        <div class="bg-red-50 dark:bg-red-900/30 border border-red-200 dark:border-red-800 rounded-lg p-6">
            <h2 class="text-lg font-medium text-red-800 dark:text-red-200 mb-2">{ props.title.clone() }</h2>
            <p class="text-red-700 dark:text-red-300 mb-4">{ props.message.clone() }</p>
            {
                if let Some(on_retry) = props.on_retry.clone() {
                    html! {
                        <button
                            class="px-4 py-2 bg-red-600 text-white rounded-md hover:bg-red-700 focus:outline-none focus:ring-2 focus:ring-red-500"
                            onclick={on_retry}
                        >
                            { "Retry" }
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
