use crate::{
    components::directory_view::directory_view,
    data::{RollNoQuery, student::StudentForm},
    error::DirectoryResult,
    state::DirectoryState,
};
use axum::{
    Form,
    extract::{Query, State},
};
use maud::Markup;

async fn current_view(state: &DirectoryState) -> DirectoryResult<Markup> {
    directory_view(&state.page().await, &state.dates())
}

/// Mount: re-fetches the collection and renders it.
pub async fn internal_get_directory(
    State(state): State<DirectoryState>,
) -> DirectoryResult<Markup> {
    state.refresh().await;
    current_view(&state).await
}

pub async fn internal_get_directory_view(
    State(state): State<DirectoryState>,
) -> DirectoryResult<Markup> {
    current_view(&state).await
}

pub async fn internal_get_new_student_form(
    State(state): State<DirectoryState>,
) -> DirectoryResult<Markup> {
    state.open_add().await;
    current_view(&state).await
}

pub async fn internal_get_edit_student_form(
    State(state): State<DirectoryState>,
    Query(RollNoQuery { roll_no }): Query<RollNoQuery>,
) -> DirectoryResult<Markup> {
    state.open_edit(roll_no).await;
    current_view(&state).await
}

pub async fn internal_post_cancel_student_form(
    State(state): State<DirectoryState>,
) -> DirectoryResult<Markup> {
    state.cancel().await;
    current_view(&state).await
}

pub async fn internal_post_student(
    State(state): State<DirectoryState>,
    Form(form): Form<StudentForm>,
) -> DirectoryResult<Markup> {
    state.submit(form.into()).await;
    current_view(&state).await
}

pub async fn internal_delete_student(
    State(state): State<DirectoryState>,
    Query(RollNoQuery { roll_no }): Query<RollNoQuery>,
) -> DirectoryResult<Markup> {
    state.delete(roll_no).await;
    current_view(&state).await
}
