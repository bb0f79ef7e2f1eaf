// SPDX-License-Identifier: MPL-2.0
use parking_lot::Mutex;
use portal_client::api::{ApiError, CookieJar};
use portal_client::app::api_panel::messages;
use portal_client::app::config::{self, Config};
use portal_client::app::{ApiPanel, AppContext, LocalStorage};
use portal_client::application::port::{
    Transport, TransportError, TransportRequest, TransportResponse,
};
use portal_client::domain::Method;
use portal_client::ui::notifications::NotificationKind;
use portal_client::ui::theming::{DARK_CLASS, THEME_KEY};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

/// Backend double routing on method and path.
#[derive(Clone, Default)]
struct FakeBackend {
    seen: Arc<Mutex<Vec<TransportRequest>>>,
}

impl FakeBackend {
    fn seen(&self) -> Vec<TransportRequest> {
        self.seen.lock().clone()
    }
}

impl Transport for FakeBackend {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.seen.lock().push(request.clone());
        let response = match (request.method, request.path.as_str()) {
            (Method::Get, "/api/v1/dashboard/stats/") => {
                TransportResponse::new(200, r#"{"users":12,"contacts":3}"#)
            }
            (Method::Post, "/api/v1/contacts/") => {
                let body = request.body.unwrap_or_default();
                if body.contains("\"email\"") {
                    TransportResponse::new(201, r#"{"id":1}"#)
                } else {
                    TransportResponse::new(400, r#"{"email":["This field is required."]}"#)
                }
            }
            (Method::Delete, path) if path.starts_with("/api/v1/contacts/") => {
                TransportResponse::new(204, "")
            }
            (Method::Get, "/api/v1/offline/") => {
                return Err(TransportError::Network("connection refused".into()))
            }
            _ => TransportResponse::new(404, r#"{"detail":"Not found."}"#),
        };
        Ok(response)
    }
}

fn context(backend: FakeBackend) -> AppContext<FakeBackend> {
    let mut config = Config::default();
    config.api.cookie = Some("sessionid=abc; csrftoken=tok%3D1".to_string());
    AppContext::new(&config, backend, LocalStorage::in_memory(), Some(false))
}

#[tokio::test(start_paused = true)]
async fn contact_form_round_trip_with_notifications() {
    let backend = FakeBackend::default();
    let ctx = context(backend.clone());
    let panel = ApiPanel::new();

    let created = panel
        .submit_contact(
            &ctx.api,
            &ctx.notifications,
            &json!({"name": "Taro", "email": "taro@example.com"}),
        )
        .await
        .expect("contact accepted");
    assert_eq!(created, json!({"id": 1}));

    let rejected = panel
        .submit_contact(&ctx.api, &ctx.notifications, &json!({"name": "Taro"}))
        .await
        .unwrap_err();
    // field errors carry no `detail`
    assert_eq!(rejected.status(), Some(400));
    assert_eq!(rejected.message(), portal_client::api::FALLBACK_MESSAGE);

    let kinds: Vec<_> = ctx
        .notifications
        .items()
        .iter()
        .map(|n| (n.kind(), n.message().to_string()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (NotificationKind::Success, messages::CONTACT_SENT.to_string()),
            (NotificationKind::Error, messages::CONTACT_FAILED.to_string()),
        ]
    );

    let sent = backend.seen();
    assert_eq!(sent[0].headers.get("X-CSRFToken"), Some("tok=1"));
    assert_eq!(sent[0].headers.get("content-type"), Some("application/json"));

    tokio::time::sleep(Duration::from_secs(5) + Duration::from_millis(1)).await;
    assert!(ctx.notifications.is_empty());
}

#[tokio::test]
async fn stats_panel_and_error_shapes() {
    let ctx = context(FakeBackend::default());
    let mut panel = ApiPanel::new();

    panel.init(&ctx.api).await;
    assert_eq!(panel.stats(), Some(&json!({"users": 12, "contacts": 3})));

    let not_found = ctx.api.get("/missing/", [("page", 2)]).await.unwrap_err();
    assert_eq!(not_found.message(), "Not found.");
    assert_eq!(not_found.status(), Some(404));

    let offline = ctx
        .api
        .get("/offline/", Vec::<(&str, &str)>::new())
        .await
        .unwrap_err();
    assert!(matches!(offline, ApiError::Transport(_)));

    // a 204 has no JSON document to decode
    let no_content = ctx.api.delete("/contacts/1/").await.unwrap_err();
    assert!(matches!(no_content, ApiError::Decode(_)));
}

#[test]
fn theme_choice_survives_restart() {
    let dir = tempdir().expect("failed to create temp dir");
    let data_dir = Some(dir.path().to_path_buf());

    let (storage, warning) = LocalStorage::load_from(data_dir.clone());
    assert!(warning.is_none());
    let mut ctx = AppContext::new(&Config::default(), FakeBackend::default(), storage, Some(false));
    assert!(!ctx.document.has_root_class(DARK_CLASS));
    ctx.toggle_theme();

    let (storage, _) = LocalStorage::load_from(data_dir);
    assert_eq!(storage.get(THEME_KEY), Some("dark"));
    let restarted = AppContext::new(
        &Config::default(),
        FakeBackend::default(),
        storage,
        Some(false),
    );
    assert!(restarted.theme.is_on());
    assert!(restarted.document.has_root_class(DARK_CLASS));
}

#[test]
fn config_feeds_client_and_queue() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut saved = Config::default();
    saved.api.base_path = "/api/v2/".to_string();
    saved.api.cookie = Some("csrftoken=xyz".to_string());
    saved.notifications.lifetime_secs = Some(10);
    config::save_with_override(&saved, Some(dir.path().to_path_buf())).expect("save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let ctx = AppContext::new(&loaded, FakeBackend::default(), LocalStorage::in_memory(), None);
    assert_eq!(ctx.api.base_path(), "/api/v2");
    assert_eq!(ctx.api.csrf_token(), Some("xyz"));
    assert_eq!(ctx.notifications.lifetime(), Duration::from_secs(10));
    assert_eq!(CookieJar::parse("csrftoken=xyz").csrf_token().as_deref(), Some("xyz"));
}
