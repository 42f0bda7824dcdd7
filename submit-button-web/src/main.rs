use leptos::{mount_to_body, view};
use submit_button_web::app::App;
use submit_button_web::DemoConfig;

pub fn main() {
    console_error_panic_hook::set_once();

    let config = DemoConfig::embedded();
    let level = config
        .as_ref()
        .map(|config| config.log_level())
        .unwrap_or(log::Level::Info);
    _ = console_log::init_with_level(level);

    let config = config.unwrap_or_else(|err| {
        log::error!("{}, using defaults", err);
        DemoConfig::default()
    });
    log::info!("submit delay set to {:?}", config.submit_delay());

    mount_to_body(move || view! { <App config=config.clone() /> })
}
