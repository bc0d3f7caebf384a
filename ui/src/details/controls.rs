//! Small Dioxus controls used by the device details view.
//!
//! - `StatusDot` is green for a running device and gray otherwise.
//! - `AclTag` renders an ACL tag with its `tag:` prefix dimmed.
//! - `QuickCopy` shows a value next to a button that copies it to the clipboard.
//! - `NiceIp` dims the repetitive prefix of compressed IPv6 addresses.
//! - `AdminContainer` and `AdminLink` only show admin console content to admins.
//! - `UpdateAvailableNotification` advertises a newer client version.
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::node::{ClientVersion, NodeData};

const TAG_PREFIX: &str = "tag:";

/// Quotes `s` as a JavaScript string literal.
pub(crate) fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

#[component]
pub fn StatusDot(running: bool) -> Element {
    let color = if running { "bg-emerald-500" } else { "bg-gray-300" };
    rsx! {
        div { class: "w-2.5 h-2.5 rounded-full {color}" }
    }
}

#[component]
pub fn AclTag(tag: String) -> Element {
    let name = tag.strip_prefix(TAG_PREFIX);
    rsx! {
        span {
            class: "inline-flex items-center rounded-sm bg-gray-100 px-1 font-mono text-xs",
            if let Some(name) = name {
                span { class: "text-gray-500", "{TAG_PREFIX}" }
                span { "{name}" }
            } else {
                span { "{tag}" }
            }
        }
    }
}

#[component]
pub fn QuickCopy(
    primary_action_value: String,
    primary_action_subject: String,
    children: Element,
) -> Element {
    let mut copied = use_signal(|| false);

    let subject = primary_action_subject.clone();
    let handle_copy = move |_| {
        let script = format!(
            "await navigator.clipboard.writeText({}); return true;",
            js_string(&primary_action_value)
        );
        let subject = subject.clone();
        spawn(async move {
            let result = document::eval(&script).join::<bool>().await;
            if copy_succeeded(&subject, result) {
                copied.set(true);
            }
        });
    };

    rsx! {
        span {
            class: "inline-flex items-center gap-2",
            span { class: "break-all", {children} }
            button {
                class: "text-xs text-gray-500 hover:text-gray-800",
                title: "Copy {primary_action_subject}",
                onclick: handle_copy,
                if copied() { "Copied" } else { "Copy" }
            }
        }
    }
}

/// Logs the outcome of a clipboard write and reports whether it landed.
pub(crate) fn copy_succeeded<T, E>(subject: &str, result: Result<T, E>) -> bool
where
    E: std::fmt::Display,
{
    match result {
        Ok(_) => {
            tracing::debug!("Copied {subject} to clipboard");
            true
        }
        Err(e) => {
            tracing::warn!("Failed to copy {subject}: {e}");
            false
        }
    }
}

/// Splits a compressed IPv6 address after its `::` run.
pub(crate) fn split_ipv6(ip: &str) -> Option<(&str, &str)> {
    let idx = ip.find("::")?;
    Some(ip.split_at(idx + 2))
}

#[component]
pub fn NiceIp(ip: String) -> Element {
    match split_ipv6(&ip) {
        Some((prefix, suffix)) => rsx! {
            span {
                span { class: "text-gray-400", "{prefix}" }
                span { "{suffix}" }
            }
        },
        None => rsx! { span { "{ip}" } },
    }
}

#[component]
pub fn AdminContainer(node: NodeData, children: Element) -> Element {
    if !node.is_admin() {
        return rsx! {};
    }
    rsx! {
        p { {children} }
    }
}

#[component]
pub fn AdminLink(node: NodeData, path: String, children: Element) -> Element {
    let href = format!("{}{}", node.control_admin_url.trim_end_matches('/'), path);
    rsx! {
        a {
            class: "link",
            href: "{href}",
            target: "_blank",
            rel: "noreferrer",
            {children}
        }
    }
}

#[component]
pub fn UpdateAvailableNotification(details: ClientVersion) -> Element {
    let headline = match details.latest_version.as_deref() {
        Some(version) => format!("Version {version} is now available."),
        None => "A new version is now available.".to_string(),
    };
    rsx! {
        div {
            class: "-mx-5 card update-available",
            h2 { class: "mb-2", "Update available" }
            p { class: "text-sm", "{headline}" }
            if let Some(text) = details.notify_text.as_deref() {
                p { class: "text-sm text-gray-600", "{text}" }
            }
            if let Some(url) = details.notify_url.as_deref() {
                a {
                    class: "link text-sm",
                    href: "{url}",
                    target: "_blank",
                    rel: "noreferrer",
                    "Learn more"
                }
            }
        }
    }
}
