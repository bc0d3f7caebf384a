//! The node-status record served by the local web API.
//!
//! The record is read-only to the UI. Everything the details view decides
//! (status styling, ownership, key expiry, update notice) is derived here so
//! the components stay declarative.
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt::Display;

/// The backend state reported for a device that is online.
pub const RUNNING: &str = "Running";

/// Feature flag that enables in-place client updates.
pub const AUTO_UPDATE_FEATURE: &str = "auto-update";

/// Rendering of a timestamp that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NodeData {
    #[serde(rename = "DeviceName", default)]
    pub device_name: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "IsTagged", default)]
    pub is_tagged: bool,
    #[serde(rename = "Tags", default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(rename = "Profile", default)]
    pub profile: Option<UserProfile>,
    #[serde(rename = "OS", default)]
    pub os: String,
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "IPNVersion", default)]
    pub ipn_version: String,
    #[serde(rename = "KeyExpired", default)]
    pub key_expired: bool,
    #[serde(rename = "KeyExpiry", default)]
    pub key_expiry: String,
    #[serde(rename = "IPv4", default)]
    pub ipv4: String,
    #[serde(rename = "IPv6", default)]
    pub ipv6: String,
    #[serde(rename = "TailnetName", default)]
    pub tailnet_name: String,
    #[serde(rename = "Features", default, deserialize_with = "null_as_default")]
    pub features: HashMap<String, bool>,
    #[serde(rename = "ClientVersion", default)]
    pub client_version: Option<ClientVersion>,
    #[serde(rename = "LicensesURL", default)]
    pub licenses_url: String,
    /// Base URL of the admin console. Empty when the viewer is not an admin.
    #[serde(rename = "ControlAdminURL", default)]
    pub control_admin_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "DisplayName", default)]
    pub display_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ClientVersion {
    #[serde(rename = "RunningLatest", default)]
    pub running_latest: bool,
    #[serde(rename = "LatestVersion", default)]
    pub latest_version: Option<String>,
    #[serde(rename = "NotifyURL", default)]
    pub notify_url: Option<String>,
    #[serde(rename = "NotifyText", default)]
    pub notify_text: Option<String>,
}

/// Who manages a device: a set of ACL tags or a single user profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ownership<'a> {
    Tags(&'a [String]),
    Profile(Option<&'a str>),
}

impl NodeData {
    pub fn is_running(&self) -> bool {
        self.status == RUNNING
    }

    pub fn ownership(&self) -> Ownership<'_> {
        if self.is_tagged {
            Ownership::Tags(&self.tags)
        } else {
            Ownership::Profile(self.profile.as_ref().map(|p| p.display_name.as_str()))
        }
    }

    /// "Expired", or the key expiry rendered in `tz`.
    pub fn key_expiry_label<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if self.key_expired {
            return "Expired".to_string();
        }
        format_timestamp(&self.key_expiry, tz)
    }

    pub fn full_domain(&self) -> String {
        format!("{}.{}", self.device_name, self.tailnet_name)
    }

    /// The client version to advertise an update for, if one should be shown.
    pub fn update_available(&self, readonly: bool) -> Option<&ClientVersion> {
        let auto_update = self
            .features
            .get(AUTO_UPDATE_FEATURE)
            .copied()
            .unwrap_or(false);
        if !auto_update || readonly {
            return None;
        }
        self.client_version.as_ref().filter(|cv| !cv.running_latest)
    }

    pub fn admin_machine_path(&self) -> String {
        format!("/machines/{}", self.ipv4)
    }

    pub fn is_admin(&self) -> bool {
        !self.control_admin_url.is_empty()
    }
}

/// Renders an RFC 3339 timestamp as `M/D/Y, h:mm:ss AM` in `tz`, with no padding.
pub fn format_timestamp<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts
            .with_timezone(tz)
            .format("%-m/%-d/%-Y, %-I:%M:%S %p")
            .to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}

// Go marshals nil slices and maps as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
