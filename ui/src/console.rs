//! The routed console shell: a summary page and the device details page.
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api::{ApiError, ApiProvider};
use crate::config::ClientConfig;
use crate::details::{DeviceDetailsView, StatusDot};
use crate::node::NodeData;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/details")]
    Details {},
}

#[component]
pub fn Console() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        main {
            id: "console",
            class: "mx-auto max-w-2xl p-8",
            Router::<Route> {}
        }
    }
}

fn use_node_data() -> Resource<Result<NodeData, ApiError>> {
    let api = use_context::<ApiProvider>();
    use_resource(move || {
        let api = api.clone();
        async move {
            let result = api.node_data().await;
            if let Err(e) = &result {
                tracing::error!("Failed to load node data: {e}");
            }
            result
        }
    })
}

#[component]
fn Home() -> Element {
    let node = use_node_data();

    match &*node.read_unchecked() {
        Some(Ok(node)) => rsx! {
            div {
                class: "-mx-5 card",
                div {
                    class: "flex items-center gap-2",
                    h1 { "{node.device_name}" }
                    StatusDot { running: node.is_running() }
                }
                p { class: "text-sm text-gray-500", "{node.tailnet_name}" }
                Link {
                    to: Route::Details {},
                    class: "link text-sm",
                    "View device details →"
                }
            }
        },
        Some(Err(e)) => rsx! { LoadError { message: e.to_string() } },
        None => rsx! { p { class: "text-gray-500", "Loading…" } },
    }
}

#[component]
fn Details() -> Element {
    let config = use_context::<ClientConfig>();
    let navigator = use_navigator();
    let node = use_node_data();

    let on_navigate = move |path: String| match path.parse::<Route>() {
        Ok(route) => {
            navigator.push(route);
        }
        Err(e) => tracing::warn!("Cannot navigate to {path}: {e}"),
    };

    match &*node.read_unchecked() {
        Some(Ok(node)) => rsx! {
            DeviceDetailsView { readonly: config.readonly, node: node.clone(), on_navigate }
        },
        Some(Err(e)) => rsx! { LoadError { message: e.to_string() } },
        None => rsx! { p { class: "text-gray-500", "Loading…" } },
    }
}

#[component]
fn LoadError(message: String) -> Element {
    rsx! {
        div {
            class: "p-2 bg-red-100 text-red-800 rounded text-sm",
            "Could not load device: {message}"
        }
    }
}
