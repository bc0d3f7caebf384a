//! This crate contains all shared UI for the workspace.

pub mod api;
pub use api::{ApiError, ApiProvider, LocalApi};

pub mod config;
pub use config::{ClientConfig, ConfigError};

pub mod node;
pub use node::{ClientVersion, NodeData, Ownership, UserProfile};

mod details;
pub use details::{
    disconnect, AclTag, AdminContainer, AdminLink, DeviceDetailsView, DisconnectEffects, NiceIp,
    QuickCopy, StatusDot, UpdateAvailableNotification, ROOT_PATH,
};

mod console;
pub use console::{Console, Route};
