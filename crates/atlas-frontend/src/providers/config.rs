use yew::prelude::*;

use atlas::config::Config;

#[hook]
pub fn use_config() -> Config {
    use_context::<Config>().expect("use_config must be used within a Config context")
}
