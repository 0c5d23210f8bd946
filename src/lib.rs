//! A shopping list kept over chat.
//!
//! Messages such as "שני תפוחים" or "קניתי חלב" are sent to a webhook, parsed
//! line by line into commands, and applied to a shopping list stored in
//! SQLite. The reply confirms each change and shows the updated list grouped
//! by supermarket department.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod command;
mod db;
mod endpoints;
mod error;
mod inventory;
mod item;
mod listing;
mod logging;
mod message;
mod quantity;
mod routing;
mod twiml;
mod webhook;

pub use app_state::AppState;
pub use command::{Command, parse_line};
pub use db::initialize as initialize_db;
pub use error::Error;
pub use inventory::{DepartmentItems, Inventory};
pub use item::{Department, Item, ItemId, ItemStore, NewItem, classify, normalize_name};
pub use listing::render_listing;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use message::{HELP_TEXT, handle_message, reply_to_message};
pub use quantity::{DEFAULT_QUANTITY, resolve_quantity};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
