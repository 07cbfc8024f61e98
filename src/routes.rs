use crate::{
    routes::{
        index::get_index_route,
        students::{
            internal_delete_student, internal_get_directory, internal_get_directory_view,
            internal_get_edit_student_form, internal_get_new_student_form,
            internal_post_cancel_student_form, internal_post_student,
        },
    },
    state::DirectoryState,
};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub mod index;
pub mod students;

pub fn router(state: DirectoryState) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route("/internal/directory", get(internal_get_directory))
        .route("/internal/directory/view", get(internal_get_directory_view))
        .route(
            "/internal/students",
            post(internal_post_student).delete(internal_delete_student),
        )
        .route(
            "/internal/students/new_form",
            get(internal_get_new_student_form),
        )
        .route(
            "/internal/students/edit_form",
            get(internal_get_edit_student_form),
        )
        .route(
            "/internal/students/cancel",
            post(internal_post_cancel_student_form),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
