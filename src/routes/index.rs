use crate::{components::directory_view::mounting_directory, state::DirectoryState};
use axum::extract::State;
use maud::Markup;

pub async fn get_index_route(State(state): State<DirectoryState>) -> Markup {
    state.render(mounting_directory())
}
