//! Device details view.
//!
//! Renders a snapshot of the node record as an identity card, the general
//! info and address tables, and a footer. Unless the view is read-only it also
//! offers a disconnect action that logs the device out of the local client.
mod controls;

pub use controls::{
    AclTag, AdminContainer, AdminLink, NiceIp, QuickCopy, StatusDot, UpdateAvailableNotification,
};

use chrono::{Datelike as _, Local};
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api::ApiProvider;
use crate::node::{NodeData, Ownership};
use controls::js_string;

/// Where the view goes once the device has been logged out.
pub const ROOT_PATH: &str = "/";

pub const PRIVACY_POLICY_URL: &str = "https://tailscale.com/privacy-policy/";
pub const TERMS_URL: &str = "https://tailscale.com/terms/";

/// Side effects of the disconnect action.
pub trait DisconnectEffects {
    fn navigate(&self, path: &str);
    fn alert(&self, message: &str);
}

/// Logs the device out, then navigates home on success or alerts on failure.
///
/// Nothing guards against overlapping calls: every click issues its own request.
pub async fn disconnect(api: &ApiProvider, effects: &impl DisconnectEffects) {
    match api.logout().await {
        Ok(()) => {
            tracing::info!("Logged out, returning to {ROOT_PATH}");
            effects.navigate(ROOT_PATH);
        }
        Err(e) => {
            tracing::error!("Logout failed: {e}");
            effects.alert(&format!("Logout failed: {e}"));
        }
    }
}

struct ViewEffects {
    on_navigate: EventHandler<String>,
}

impl DisconnectEffects for ViewEffects {
    fn navigate(&self, path: &str) {
        self.on_navigate.call(path.to_string());
    }

    fn alert(&self, message: &str) {
        let _ = document::eval(&format!("alert({});", js_string(message)));
    }
}

#[component]
pub fn DeviceDetailsView(
    readonly: bool,
    node: NodeData,
    on_navigate: EventHandler<String>,
) -> Element {
    let api = use_context::<ApiProvider>();

    let handle_disconnect = move |_| {
        let api = api.clone();
        let effects = ViewEffects { on_navigate };
        spawn(async move {
            disconnect(&api, &effects).await;
        });
    };

    let update = node.update_available(readonly).cloned();
    let key_expiry = node.key_expiry_label(&Local);
    let full_domain = node.full_domain();
    let admin_path = node.admin_machine_path();
    let year = Local::now().year();

    rsx! {
        h1 { class: "mb-10", "Device details" }
        div {
            class: "flex flex-col gap-4",
            div {
                class: "-mx-5 card",
                div {
                    class: "flex items-center justify-between",
                    div {
                        class: "flex items-center gap-2",
                        h1 { "{node.device_name}" }
                        StatusDot { running: node.is_running() }
                    }
                    if !readonly {
                        button {
                            class: "button button-small",
                            onclick: handle_disconnect,
                            "Disconnect…"
                        }
                    }
                }
            }
            if let Some(details) = update {
                UpdateAvailableNotification { details }
            }
            div {
                class: "-mx-5 card",
                h2 { class: "mb-2", "General" }
                table {
                    tbody {
                        tr {
                            class: "flex",
                            td { "Managed by" }
                            td {
                                class: "flex gap-1 flex-wrap",
                                match node.ownership() {
                                    Ownership::Tags(tags) => rsx! {
                                        for tag in tags.iter() {
                                            AclTag { key: "{tag}", tag: tag.clone() }
                                        }
                                    },
                                    Ownership::Profile(name) => {
                                        let name = name.unwrap_or_default();
                                        rsx! { "{name}" }
                                    }
                                }
                            }
                        }
                        tr {
                            td { "Machine name" }
                            td {
                                QuickCopy {
                                    primary_action_value: node.device_name.clone(),
                                    primary_action_subject: "machine name",
                                    "{node.device_name}"
                                }
                            }
                        }
                        tr {
                            td { "OS" }
                            td { "{node.os}" }
                        }
                        tr {
                            td { "ID" }
                            td {
                                QuickCopy {
                                    primary_action_value: node.id.clone(),
                                    primary_action_subject: "ID",
                                    "{node.id}"
                                }
                            }
                        }
                        tr {
                            td { "Tailscale version" }
                            td { "{node.ipn_version}" }
                        }
                        tr {
                            td { "Key expiry" }
                            // TODO: show relative expiry, e.g. "5 months from now"
                            td { "{key_expiry}" }
                        }
                    }
                }
            }
            div {
                class: "-mx-5 card",
                h2 { class: "mb-2", "Addresses" }
                table {
                    tbody {
                        tr {
                            td { "Tailscale IPv4" }
                            td {
                                QuickCopy {
                                    primary_action_value: node.ipv4.clone(),
                                    primary_action_subject: "IPv4 address",
                                    "{node.ipv4}"
                                }
                            }
                        }
                        tr {
                            td { "Tailscale IPv6" }
                            td {
                                QuickCopy {
                                    primary_action_value: node.ipv6.clone(),
                                    primary_action_subject: "IPv6 address",
                                    NiceIp { ip: node.ipv6.clone() }
                                }
                            }
                        }
                        tr {
                            td { "Short domain" }
                            td {
                                QuickCopy {
                                    primary_action_value: node.device_name.clone(),
                                    primary_action_subject: "short domain",
                                    "{node.device_name}"
                                }
                            }
                        }
                        tr {
                            td { "Full domain" }
                            td {
                                QuickCopy {
                                    primary_action_value: full_domain.clone(),
                                    primary_action_subject: "full domain",
                                    "{full_domain}"
                                }
                            }
                        }
                    }
                }
            }
            footer {
                class: "text-gray-500 text-sm leading-tight text-center",
                AdminContainer {
                    node: node.clone(),
                    "Want even more details? Visit "
                    AdminLink { node: node.clone(), path: admin_path, "this device’s page" }
                    " in the admin console."
                }
                p {
                    class: "mt-12",
                    a {
                        class: "link",
                        href: "{node.licenses_url}",
                        target: "_blank",
                        rel: "noreferrer",
                        "Acknowledgements"
                    }
                    " · "
                    a {
                        class: "link",
                        href: PRIVACY_POLICY_URL,
                        target: "_blank",
                        rel: "noreferrer",
                        "Privacy Policy"
                    }
                    " · "
                    a {
                        class: "link",
                        href: TERMS_URL,
                        target: "_blank",
                        rel: "noreferrer",
                        "Terms of Service"
                    }
                }
                p { class: "my-2", "WireGuard is a registered trademark of Jason A. Donenfeld." }
                p {
                    "© {year} Tailscale Inc. All rights reserved. Tailscale is a registered trademark of Tailscale Inc."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, LocalApi};
    use crate::node::{ClientVersion, UserProfile, AUTO_UPDATE_FEATURE, RUNNING};
    use futures::future::LocalBoxFuture;
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct ScriptedApi {
        logout: Result<(), ApiError>,
        calls: Arc<AtomicUsize>,
    }

    impl ScriptedApi {
        fn new(logout: Result<(), ApiError>) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let api = Self {
                logout,
                calls: calls.clone(),
            };
            (api, calls)
        }
    }

    impl LocalApi for ScriptedApi {
        fn node_data(&self) -> LocalBoxFuture<'_, Result<NodeData, ApiError>> {
            Box::pin(std::future::ready(Ok(NodeData::default())))
        }

        fn logout(&self) -> LocalBoxFuture<'_, Result<(), ApiError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(std::future::ready(self.logout.clone()))
        }
    }

    #[derive(Default)]
    struct RecordingEffects {
        navigations: RefCell<Vec<String>>,
        alerts: RefCell<Vec<String>>,
    }

    impl DisconnectEffects for RecordingEffects {
        fn navigate(&self, path: &str) {
            self.navigations.borrow_mut().push(path.to_string());
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    #[tokio::test]
    async fn successful_logout_navigates_home() {
        let (api, calls) = ScriptedApi::new(Ok(()));
        let effects = RecordingEffects::default();

        disconnect(&ApiProvider::new(api), &effects).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*effects.navigations.borrow(), vec![ROOT_PATH.to_string()]);
        assert!(effects.alerts.borrow().is_empty());
    }

    #[tokio::test]
    async fn failed_logout_alerts_without_navigating() {
        let (api, _) = ScriptedApi::new(Err(ApiError::Transport("boom".into())));
        let effects = RecordingEffects::default();

        disconnect(&ApiProvider::new(api), &effects).await;

        assert!(effects.navigations.borrow().is_empty());
        let alerts = effects.alerts.borrow();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("boom"));
        assert_eq!(alerts[0], "Logout failed: boom");
    }

    #[tokio::test]
    async fn repeated_disconnects_each_issue_a_request() {
        let (api, calls) = ScriptedApi::new(Ok(()));
        let api = ApiProvider::new(api);
        let effects = RecordingEffects::default();

        disconnect(&api, &effects).await;
        disconnect(&api, &effects).await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(effects.navigations.borrow().len(), 2);
    }

    #[component]
    fn Harness(readonly: bool, node: NodeData) -> Element {
        use_context_provider(|| ApiProvider::new(ScriptedApi::new(Ok(())).0));
        rsx! {
            DeviceDetailsView { readonly, node, on_navigate: move |_| {} }
        }
    }

    fn render(readonly: bool, node: NodeData) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { readonly, node });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn node() -> NodeData {
        NodeData {
            device_name: "fox".into(),
            status: RUNNING.into(),
            profile: Some(UserProfile {
                display_name: "Alice".into(),
            }),
            os: "linux".into(),
            id: "nX1CNTRL".into(),
            ipn_version: "1.78.1".into(),
            key_expiry: "2025-01-01T00:00:00Z".into(),
            ipv4: "100.64.0.7".into(),
            ipv6: "fd7a:115c:a1e0::7".into(),
            tailnet_name: "tailnetXYZ".into(),
            licenses_url: "https://example.com/licenses".into(),
            ..Default::default()
        }
    }

    fn with_update(mut node: NodeData) -> NodeData {
        node.features.insert(AUTO_UPDATE_FEATURE.into(), true);
        node.client_version = Some(ClientVersion {
            running_latest: false,
            latest_version: Some("1.80.0".into()),
            ..Default::default()
        });
        node
    }

    #[test]
    fn status_dot_follows_running_state() {
        let html = render(false, node());
        assert!(html.contains("bg-emerald-500"));
        assert!(!html.contains("bg-gray-300"));

        let mut stopped = node();
        stopped.status = "Stopped".into();
        let html = render(false, stopped);
        assert!(html.contains("bg-gray-300"));
        assert!(!html.contains("bg-emerald-500"));
    }

    #[test]
    fn disconnect_only_when_writable() {
        assert!(render(false, node()).contains("Disconnect…"));
        assert!(!render(true, node()).contains("Disconnect…"));
        assert!(!render(true, with_update(node())).contains("Disconnect…"));
    }

    #[test]
    fn tagged_node_shows_tags_not_profile() {
        let mut node = node();
        node.is_tagged = true;
        node.tags = vec!["tag:alpha".into(), "tag:beta".into()];
        let html = render(false, node);
        assert!(html.contains("alpha"));
        assert!(html.contains("beta"));
        assert!(!html.contains("Alice"));
    }

    #[test]
    fn untagged_node_shows_profile_not_tags() {
        let mut node = node();
        node.tags = vec!["tag:alpha".into()];
        let html = render(false, node);
        assert!(html.contains("Alice"));
        assert!(!html.contains("alpha"));
    }

    #[test]
    fn missing_profile_renders_empty_owner() {
        let mut node = node();
        node.profile = None;
        let html = render(false, node);
        assert!(html.contains("Managed by"));
        assert!(!html.contains("Alice"));
    }

    #[test]
    fn expired_key_reads_expired() {
        let mut node = node();
        let live = node.key_expiry_label(&Local);
        node.key_expired = true;
        let html = render(false, node);
        assert!(html.contains("Expired"));
        assert!(!html.contains(&live));
    }

    #[test]
    fn live_key_shows_formatted_expiry() {
        let node = node();
        let expected = node.key_expiry_label(&Local);
        let html = render(false, node);
        assert!(html.contains(&expected));
        assert!(!html.contains("Expired"));
    }

    #[test]
    fn full_domain_is_rendered() {
        assert!(render(false, node()).contains("fox.tailnetXYZ"));
    }

    #[test]
    fn update_notice_needs_every_condition() {
        assert!(render(false, with_update(node())).contains("Update available"));
        assert!(render(false, with_update(node())).contains("1.80.0"));
        assert!(!render(true, with_update(node())).contains("Update available"));
        assert!(!render(false, node()).contains("Update available"));

        let mut latest = with_update(node());
        if let Some(cv) = latest.client_version.as_mut() {
            cv.running_latest = true;
        }
        assert!(!render(false, latest).contains("Update available"));

        let mut no_version = with_update(node());
        no_version.client_version = None;
        assert!(!render(false, no_version).contains("Update available"));

        let mut feature_off = with_update(node());
        feature_off.features.insert(AUTO_UPDATE_FEATURE.into(), false);
        assert!(!render(false, feature_off).contains("Update available"));
    }

    #[test]
    fn admin_link_only_for_admins() {
        let html = render(false, node());
        assert!(!html.contains("admin console"));

        let mut admin = node();
        admin.control_admin_url = "https://login.example.com/admin".into();
        let html = render(false, admin);
        assert!(html.contains("admin console"));
        assert!(html.contains("https://login.example.com/admin/machines/100.64.0.7"));
    }

    #[test]
    fn footer_links_are_present() {
        let html = render(true, node());
        assert!(html.contains("https://example.com/licenses"));
        assert!(html.contains(PRIVACY_POLICY_URL));
        assert!(html.contains(TERMS_URL));
    }
}
