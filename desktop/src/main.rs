//! DESKTOP
mod api;
mod error;

use error::Error;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use ui::{ApiProvider, ClientConfig, Console};

fn main() -> Result<(), Error> {
    let config = ClientConfig::from_env()?;
    let api = api::DesktopApi::new(config.api_base.clone())?;

    dioxus::LaunchBuilder::new()
        .with_cfg(desktop! {
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title("Device details")
                    .with_inner_size(LogicalSize::new(700.0, 900.0)),
            )
        })
        .with_context(config)
        .with_context(ApiProvider::new(api))
        .launch(App);

    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        Console {}
    }
}
