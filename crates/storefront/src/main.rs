use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::utils::init_logger;
use std::sync::Arc;
use storefront::{
    config::Config,
    domain::response::{Notification, ViewState},
    service::ChannelNotifier,
    state::AppState,
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::{mpsc::UnboundedReceiver, watch},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let _log_guard = init_logger("storefront", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    let (notifier, notifications) = ChannelNotifier::new();
    let state = AppState::new(&config, Arc::new(notifier)).context("Failed to create AppState")?;

    info!("Storefront client started against {}", config.endpoint);

    let render_handle = spawn_renderer(state.view.subscribe(), notifications);

    state.catalog.load_catalog().await;

    read_search_input(&state)
        .await
        .context("Failed to read search input")?;

    info!("Shutting down storefront client...");

    state.debouncer.cancel();
    render_handle.abort();

    debug!("Request metrics:\n{}", state.encode_metrics()?);

    Ok(())
}

/// Each stdin line is the full content of the search box after a keystroke.
async fn read_search_input(state: &AppState) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(text) => state.debouncer.on_input(text),
                None => {
                    info!("Input closed, press Ctrl+C to exit");
                    (&mut shutdown).await?;
                    break;
                }
            },
            result = &mut shutdown => {
                result?;
                info!("Received Ctrl+C, shutting down");
                break;
            }
        }
    }

    Ok(())
}

fn spawn_renderer(
    mut view: watch::Receiver<ViewState>,
    mut notifications: UnboundedReceiver<Notification>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                changed = view.changed() => {
                    if changed.is_err() {
                        warn!("View state closed");
                        break;
                    }
                    let state = view.borrow_and_update().clone();
                    print_view(&state);
                }
                Some(notification) = notifications.recv() => {
                    eprintln!("[{:?}] {}", notification.variant, notification.message);
                }
            }
        }
    })
}

fn print_view(state: &ViewState) {
    match state {
        ViewState::Loading => println!("Loading Products..."),
        ViewState::Loaded(list) if list.is_not_found() => println!("No products found"),
        ViewState::Loaded(list) => {
            println!("{} products", list.products().len());
            for product in list.products() {
                println!(
                    "  {:<32} {:<12} {:>8.2}  {}/5",
                    product.name, product.category, product.cost, product.rating
                );
            }
        }
    }
}
