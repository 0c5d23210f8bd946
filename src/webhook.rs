//! The webhook that receives chat messages and replies with the updated list.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, message::reply_to_message, twiml::TwimlMessage};

/// The state needed for replying to messages.
#[derive(Debug, Clone)]
pub struct WebhookState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for WebhookState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The fields of an incoming message that the webhook uses.
///
/// The messaging provider sends many more fields (sender, media, etc.), these
/// are ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// The text of the message.
    #[serde(rename = "Body", default)]
    pub body: String,
}

/// Apply an incoming message to the shopping list and reply with the result.
pub async fn receive_message(
    State(state): State<WebhookState>,
    Form(message): Form<IncomingMessage>,
) -> Response {
    let mut connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    let start_time = std::time::Instant::now();

    match reply_to_message(&message.body, &mut connection) {
        Ok(reply) => {
            tracing::info!(
                "Handled message with {} lines in {}ms",
                message.body.lines().count(),
                start_time.elapsed().as_millis()
            );

            TwimlMessage::new(&reply).into_response()
        }
        Err(error) => {
            tracing::error!("An unexpected error occurred while handling a message: {error}");

            error.into_response()
        }
    }
}

#[cfg(test)]
mod webhook_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde::Serialize;

    use crate::{AppState, build_router, endpoints, item::ItemStore};

    use super::IncomingMessage;

    #[derive(Serialize)]
    struct ProviderForm<'a> {
        #[serde(rename = "From")]
        from: &'a str,
        #[serde(rename = "Body")]
        body: &'a str,
    }

    fn get_test_server() -> (TestServer, AppState) {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        let state = AppState::new(connection).expect("Could not create app state");
        let app = build_router(state.clone());
        let server = TestServer::new(app).expect("Could not create test server.");

        (server, state)
    }

    fn quantity_of(state: &AppState, name: &str) -> Option<i64> {
        state
            .db_connection
            .lock()
            .unwrap()
            .find_by_name(name)
            .expect("Could not query item")
            .map(|item| item.quantity)
    }

    #[tokio::test]
    async fn adds_item_and_replies_with_twiml() {
        let (server, state) = get_test_server();

        let response = server
            .post(endpoints::WHATSAPP_WEBHOOK)
            .form(&IncomingMessage {
                body: "תפוח, 3".to_owned(),
            })
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.header("content-type").to_str().unwrap(),
            "application/xml"
        );
        let text = response.text();
        assert!(text.starts_with("<?xml"), "response: {text}");
        assert!(text.contains("<Message>הוספתי 3 מ&apos;תפוח&apos;."));
        assert!(text.ends_with("</Message></Response>"));
        assert_eq!(quantity_of(&state, "תפוח"), Some(3));
    }

    #[tokio::test]
    async fn ignores_other_provider_fields() {
        let (server, state) = get_test_server();

        server
            .post(endpoints::WHATSAPP_WEBHOOK)
            .form(&ProviderForm {
                from: "whatsapp:+972500000000",
                body: "שני תפוחים\nקניתי תפוח",
            })
            .await
            .assert_status_ok();

        assert_eq!(quantity_of(&state, "תפוח"), Some(1));
    }

    #[tokio::test]
    async fn missing_body_replies_with_listing() {
        let (server, _) = get_test_server();

        let response = server
            .post(endpoints::WHATSAPP_WEBHOOK)
            .form(&[("From", "whatsapp:+972500000000")])
            .await;

        response.assert_status_ok();
        assert!(response.text().contains("רשימת הקניות ריקה."));
    }

    #[tokio::test]
    async fn help_replies_with_instructions() {
        let (server, _) = get_test_server();

        let response = server
            .post(endpoints::WHATSAPP_WEBHOOK)
            .form(&IncomingMessage {
                body: "עזרה".to_owned(),
            })
            .await;

        response.assert_status_ok();
        assert!(response.text().contains("אפשרויות המערכת"));
    }

    #[tokio::test]
    async fn health_check_succeeds() {
        let (server, _) = get_test_server();

        let response = server.get(endpoints::HEALTH).await;

        assert_eq!(response.status_code(), StatusCode::OK);
    }
}
