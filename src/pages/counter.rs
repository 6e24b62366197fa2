use nexis_api::{AddNumBody, ApiPayload, CustomError};

use crate::error::ClientError;
use crate::http::{ApiClient, Fetched, RequestBody};

pub const NUM_PATH: &str = "/get-num/";
pub const ADD_NUM_PATH: &str = "/add-num/";

/// Data the counter page renders with
#[derive(Debug, Clone, PartialEq)]
pub struct CounterData {
    pub initial_value: Option<f64>,
    pub errors: Vec<CustomError>,
}

impl From<Fetched<f64>> for CounterData {
    fn from(fetched: Fetched<f64>) -> Self {
        Self {
            initial_value: fetched.value,
            errors: fetched.errors,
        }
    }
}

/// Loads the counter page. Open to every visitor.
pub async fn load(client: &ApiClient) -> CounterData {
    let result = client.get(NUM_PATH).await.and_then(number_of);
    if let Err(e) = &result {
        tracing::warn!(error = %e, "Initial value unavailable");
    }
    Fetched::from(result).into()
}

/// POST /add-num/, returns the counter after the addition
pub async fn add_num(client: &ApiClient, number: i32) -> CounterData {
    let result = async {
        let body = RequestBody::json(&AddNumBody { number })?;
        number_of(client.post(ADD_NUM_PATH, body).await?)
    }
    .await;
    if let Err(e) = &result {
        tracing::warn!(number, error = %e, "Number could not be added");
    }
    Fetched::from(result).into()
}

fn number_of(payload: ApiPayload) -> Result<f64, ClientError> {
    let actual = payload.kind();
    payload
        .into_num()
        .map(|num| num.number)
        .ok_or(ClientError::UnexpectedPayload { actual })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::client_for;
    use axum::{
        Json, Router,
        extract::State,
        http::StatusCode,
        routing::{get, post},
    };
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn initial_value_comes_from_number_field() {
        let router = Router::new().route(
            NUM_PATH,
            get(|| async { Json(json!({ "number": 5, "status": "ok" })) }),
        );
        let client = client_for(router).await;

        let data = load(&client).await;

        assert_eq!(data.initial_value, Some(5.0));
        assert!(data.errors.is_empty());
    }

    #[tokio::test]
    async fn anonymous_visitor_gets_initial_value() {
        let router = Router::new().route(NUM_PATH, get(|| async { Json(json!(3)) }));
        let client = client_for(router).await;

        let data = load(&client).await;

        assert_eq!(
            data,
            CounterData {
                initial_value: Some(3.0),
                errors: Vec::new(),
            }
        );
    }

    #[tokio::test]
    async fn not_found_yields_error_list_and_no_value() {
        let router = Router::new().route(
            NUM_PATH,
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "not found" })),
                )
            }),
        );
        let client = client_for(router).await;

        let data = load(&client).await;

        assert_eq!(data.initial_value, None);
        assert_eq!(data.errors, vec![CustomError::new("not found", 0)]);
    }

    #[tokio::test]
    async fn message_body_is_an_unexpected_payload() {
        let router = Router::new().route(
            NUM_PATH,
            get(|| async { Json(json!({ "message": "maintenance" })) }),
        );
        let client = client_for(router).await;

        let data = load(&client).await;

        assert_eq!(data.initial_value, None);
        assert_eq!(data.errors[0].message(), "Unexpected message response");
    }

    async fn add(State(total): State<Arc<Mutex<i64>>>, Json(body): Json<Value>) -> Json<Value> {
        let mut total = total.lock().unwrap();
        *total += body["number"].as_i64().unwrap_or_default();
        Json(json!(*total))
    }

    #[tokio::test]
    async fn add_num_posts_number_and_returns_new_total() {
        let total = Arc::new(Mutex::new(10));
        let router = Router::new()
            .route(ADD_NUM_PATH, post(add))
            .with_state(total.clone());
        let client = client_for(router).await;

        let first = add_num(&client, 5).await;
        let second = add_num(&client, -3).await;

        assert_eq!(first.initial_value, Some(15.0));
        assert!(first.errors.is_empty());
        assert_eq!(second.initial_value, Some(12.0));
        assert_eq!(*total.lock().unwrap(), 12);
    }

    #[tokio::test]
    async fn add_num_failure_is_reported() {
        let router = Router::new().route(
            ADD_NUM_PATH,
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": "number must be an integer" })),
                )
            }),
        );
        let client = client_for(router).await;

        let data = add_num(&client, 1).await;

        assert_eq!(data.initial_value, None);
        assert_eq!(data.errors, vec![CustomError::new("number must be an integer", 0)]);
    }
}
