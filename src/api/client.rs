use crate::{
    api::{ApiAction, ApiResponse, ErrorBody, StudentsApi},
    config::ApiConfig,
    data::student::{NewStudent, RollNo, Student, StudentPatch},
    error::{
        BuildHttpClientSnafu, DecodeResponseSnafu, DirectoryError, DirectoryResult, TransportSnafu,
    },
};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use std::sync::Arc;

/// reqwest backed access to the remote students collection.
#[derive(Clone, Debug)]
pub struct StudentsClient {
    http: Client,
    config: Arc<ApiConfig>,
}

impl StudentsClient {
    pub fn new(config: Arc<ApiConfig>) -> DirectoryResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context(BuildHttpClientSnafu)?;

        Ok(Self { http, config })
    }

    /// Sends the request once and turns any non-success status into a typed error,
    /// using the body's `message` when there is one.
    async fn send(&self, action: ApiAction, request: RequestBuilder) -> DirectoryResult<Response> {
        let response = request.send().await.context(TransportSnafu { action })?;
        let status = response.status();
        debug!(%action, %status, "student service responded");

        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty());

        warn!(%action, %status, ?message, "student service refused request");
        Err(match message {
            Some(message) => DirectoryError::Rejected {
                action,
                status,
                message,
            },
            None => DirectoryError::Unsuccessful { action, status },
        })
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        action: ApiAction,
        response: Response,
    ) -> DirectoryResult<T> {
        let ApiResponse {
            data,
            status_code,
            status,
            message,
            timestamp,
        } = response
            .json::<ApiResponse<T>>()
            .await
            .context(DecodeResponseSnafu { action })?;

        trace!(%action, ?status_code, ?status, ?message, ?timestamp, "unwrapped envelope");
        Ok(data)
    }
}

impl StudentsApi for StudentsClient {
    async fn list_all(&self) -> DirectoryResult<Vec<Student>> {
        let action = ApiAction::ListAll;
        let response = self
            .send(action, self.http.get(self.config.students_url()))
            .await?;
        Self::unwrap_envelope(action, response).await
    }

    async fn get_one(&self, roll_no: RollNo) -> DirectoryResult<Student> {
        let action = ApiAction::GetOne;
        let response = self
            .send(action, self.http.get(self.config.student_url(roll_no)))
            .await?;
        Self::unwrap_envelope(action, response).await
    }

    async fn create(&self, student: &NewStudent) -> DirectoryResult<Student> {
        let action = ApiAction::Create;
        let response = self
            .send(
                action,
                self.http.post(self.config.students_url()).json(student),
            )
            .await?;
        Self::unwrap_envelope(action, response).await
    }

    async fn update(&self, roll_no: RollNo, patch: &StudentPatch) -> DirectoryResult<Student> {
        let action = ApiAction::Update;
        let response = self
            .send(
                action,
                self.http.put(self.config.student_url(roll_no)).json(patch),
            )
            .await?;
        Self::unwrap_envelope(action, response).await
    }

    async fn delete(&self, roll_no: RollNo) -> DirectoryResult<()> {
        self.send(
            ApiAction::Delete,
            self.http.delete(self.config.student_url(roll_no)),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::Path,
        http::StatusCode,
        routing::get,
    };
    use jiff::civil::date;
    use serde_json::{Value, json};
    use std::time::Duration;
    use tokio::net::TcpListener;

    fn student_json(roll_no: RollNo, name: &str) -> Value {
        json!({
            "roll_no": roll_no,
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "dateOfBirth": "2002-02-20",
            "section": "2023A",
            "course": "Computer Science",
        })
    }

    fn envelope(data: Value) -> Value {
        json!({
            "timestamp": "2025-01-01T00:00:00.000Z",
            "statusCode": 200,
            "status": "success",
            "message": "ok",
            "data": data,
        })
    }

    async fn serve(router: Router) -> StudentsClient {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let config =
            ApiConfig::from_parts(&format!("http://{addr}/api/v2"), Duration::from_secs(5))
                .unwrap();
        StudentsClient::new(Arc::new(config)).unwrap()
    }

    fn new_student() -> NewStudent {
        NewStudent {
            name: "Linus".into(),
            email: "linus@example.com".into(),
            date_of_birth: date(1969, 12, 28),
            section: "K".into(),
            course: "Kernels".into(),
        }
    }

    #[tokio::test]
    async fn list_all_unwraps_the_envelope() {
        let client = serve(Router::new().route(
            "/api/v2/students",
            get(|| async {
                Json(envelope(json!([student_json(1, "Ada"), student_json(2, "Grace")])))
            }),
        ))
        .await;

        let students = client.list_all().await.unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[1].name, "Grace");
        assert_eq!(students[0].date_of_birth, date(2002, 2, 20));
    }

    #[tokio::test]
    async fn get_one_targets_the_roll_no() {
        let client = serve(Router::new().route(
            "/api/v2/students/{roll_no}",
            get(|Path(roll_no): Path<RollNo>| async move {
                Json(envelope(student_json(roll_no, "Ada")))
            }),
        ))
        .await;

        assert_eq!(client.get_one(41).await.unwrap().roll_no, 41);
    }

    #[tokio::test]
    async fn read_failures_parse_the_error_body_too() {
        let client = serve(Router::new().route(
            "/api/v2/students/{roll_no}",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({"message": "Student with roll_no 9 not found"})),
                )
            }),
        ))
        .await;

        let err = client.get_one(9).await.unwrap_err();
        assert_eq!(err.to_string(), "Student with roll_no 9 not found");
        assert_eq!(err.remote_status(), Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn create_posts_a_body_without_roll_no() {
        let client = serve(Router::new().route(
            "/api/v2/students",
            axum::routing::post(|Json(body): Json<Value>| async move {
                assert!(body.get("roll_no").is_none());
                assert_eq!(body["dateOfBirth"], "1969-12-28");
                let mut created = body;
                created["roll_no"] = json!(77);
                (StatusCode::CREATED, Json(envelope(created)))
            }),
        ))
        .await;

        let created = client.create(&new_student()).await.unwrap();
        assert_eq!(created.roll_no, 77);
        assert_eq!(created.name, "Linus");
    }

    #[tokio::test]
    async fn create_surfaces_the_server_message() {
        let client = serve(Router::new().route(
            "/api/v2/students",
            axum::routing::post(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({"statusCode": 409, "message": "Email already exists"})),
                )
            }),
        ))
        .await;

        let err = client.create(&new_student()).await.unwrap_err();
        assert!(matches!(err, DirectoryError::Rejected { .. }));
        assert_eq!(err.to_string(), "Email already exists");
    }

    #[tokio::test]
    async fn falls_back_to_a_generic_message() {
        let client = serve(
            Router::new()
                .route(
                    "/api/v2/students",
                    get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
                )
                .route(
                    "/api/v2/students/{roll_no}",
                    axum::routing::put(|| async { (StatusCode::BAD_GATEWAY, "<html>oops</html>") })
                        .delete(|| async {
                            (StatusCode::BAD_REQUEST, Json(json!({"message": ""})))
                        }),
                ),
        )
        .await;

        assert_eq!(
            client.list_all().await.unwrap_err().to_string(),
            "Failed to fetch students"
        );
        assert_eq!(
            client
                .update(3, &StudentPatch::default())
                .await
                .unwrap_err()
                .to_string(),
            "Failed to update student"
        );
        assert_eq!(
            client.delete(3).await.unwrap_err().to_string(),
            "Failed to delete student"
        );
    }

    #[tokio::test]
    async fn update_puts_only_the_patch() {
        let client = serve(Router::new().route(
            "/api/v2/students/{roll_no}",
            axum::routing::put(
                |Path(roll_no): Path<RollNo>, Json(body): Json<Value>| async move {
                    assert_eq!(body, json!({"course": "Physics"}));
                    let mut updated = student_json(roll_no, "Ada");
                    updated["course"] = json!("Physics");
                    Json(envelope(updated))
                },
            ),
        ))
        .await;

        let patch = StudentPatch {
            course: Some("Physics".into()),
            ..StudentPatch::default()
        };
        let updated = client.update(5, &patch).await.unwrap();
        assert_eq!(updated.roll_no, 5);
        assert_eq!(updated.course, "Physics");
    }

    #[tokio::test]
    async fn delete_ignores_the_success_body() {
        let client = serve(Router::new().route(
            "/api/v2/students/{roll_no}",
            axum::routing::delete(|| async { StatusCode::NO_CONTENT }),
        ))
        .await;

        client.delete(5).await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_servers_are_transport_errors() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config =
            ApiConfig::from_parts(&format!("http://{addr}"), Duration::from_secs(2)).unwrap();
        let client = StudentsClient::new(Arc::new(config)).unwrap();

        let err = client.list_all().await.unwrap_err();
        assert!(matches!(err, DirectoryError::Transport { .. }));
        assert_eq!(err.remote_status(), None);
    }

    #[tokio::test]
    async fn malformed_envelopes_are_decode_errors() {
        let client = serve(Router::new().route(
            "/api/v2/students",
            get(|| async { Json(json!({"students": []})) }),
        ))
        .await;

        assert!(matches!(
            client.list_all().await.unwrap_err(),
            DirectoryError::DecodeResponse { .. }
        ));
    }
}
