use dioxus::prelude::*;
use std::env;
use std::process;
use std::sync::OnceLock;

mod ui;

use newsletter_composer_config::{Config, Launch};
use ui::App;
use ui::components::ErrorScreen;

static LAUNCH: OnceLock<Launch> = OnceLock::new();

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("newsletter-composer starting up!");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "newsletter-composer".to_string());
    let args: Vec<String> = env::args().skip(1).collect();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {program_name} [store-directory]");
            process::exit(1);
        }
    };

    let launch = match Launch::resolve(&args, config) {
        Ok(launch) => launch,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program_name} [store-directory]");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    };

    if launch.store_path.exists() && !launch.store_path.is_dir() {
        let source = if launch.from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Store path '{}'{source} is not a directory",
            launch.store_path.display()
        );
        process::exit(1);
    }

    log::info!(
        "Editing templates for '{}' in {}",
        launch.owner,
        launch.store_path.display()
    );
    // Only set once, before launch
    let _ = LAUNCH.set(launch);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    let Some(launch) = LAUNCH.get() else {
        return rsx! {
            ErrorScreen {
                title: "Startup error",
                message: "The composer was started without a template store",
                details: None,
            }
        };
    };

    rsx! {
        App {
            store_path: launch.store_path.clone(),
            owner: launch.owner.clone(),
            template_name: launch.template_name.clone(),
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("Newsletter Composer")
        .with_inner_size(LogicalSize::new(1280.0, 860.0))
        .with_always_on_top(false);

    Config::default().with_window(window)
}
