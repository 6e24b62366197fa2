use super::cookies::Cookies;
use super::guard::{Access, GuardOutcome, LoadGuard, Redirect, Session};
use crate::config::Config;
use crate::http::ApiClient;

/// Result of a guarded page load
#[derive(Debug, Clone, PartialEq)]
pub enum PageLoad<T> {
    Render(T),
    Redirect(Redirect),
}

/// Loads the `/user` page, open to validated regular users only.
///
/// Visitors without an `id` cookie, with a session the backend rejects, or
/// with a superuser session are sent to the landing page.
pub async fn load(client: &ApiClient, config: &Config, cookies: &Cookies) -> PageLoad<Session> {
    match LoadGuard::new(client, config)
        .check(Access::Member, cookies)
        .await
    {
        GuardOutcome::Continue(session) => PageLoad::Render(session),
        GuardOutcome::Redirect(redirect) => PageLoad::Redirect(redirect),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::guard::VALIDATE_PATH;
    use crate::testing::{config_for, spawn_backend};
    use axum::{Json, Router, extract::State, routing::get};
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn setup(is_superuser: bool) -> (ApiClient, Config, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let router = Router::new()
            .route(
                VALIDATE_PATH,
                get(move |State(hits): State<Arc<AtomicUsize>>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(json!({ "isSuperuser": is_superuser }))
                }),
            )
            .with_state(hits.clone());
        let base = spawn_backend(router).await;
        let config = config_for(&base);
        let client = ApiClient::new(&config).unwrap();
        (client, config, hits)
    }

    #[tokio::test]
    async fn anonymous_visitor_is_redirected_before_validation() {
        let (client, config, hits) = setup(false).await;

        let page = load(&client, &config, &Cookies::parse("")).await;

        assert_eq!(
            page,
            PageLoad::Redirect(Redirect {
                status: 301,
                location: "/".to_string(),
            })
        );
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn regular_user_sees_the_page() {
        let (client, config, hits) = setup(false).await;

        let page = load(&client, &config, &Cookies::parse("id=42")).await;

        assert_eq!(
            page,
            PageLoad::Render(Session {
                user_id: "42".to_string(),
                is_superuser: false,
            })
        );
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn superuser_is_sent_to_landing() {
        let (client, config, _) = setup(true).await;

        let page = load(&client, &config, &Cookies::parse("id=1")).await;

        assert_eq!(page, PageLoad::Redirect(Redirect::to("/")));
    }
}
