mod api;

use dioxus::prelude::*;

use ui::{ApiProvider, ClientConfig, Console};

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The web client is always served next to its API.
    let config = use_context_provider(ClientConfig::default);

    // provide the api in context for all child elements
    use_context_provider(|| ApiProvider::new(api::WebApi::new(config.api_base.clone())));

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }

        Console {}
    }
}
