use axum::{debug_handler, extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use serde::Deserialize;

use crate::{board::{Board, Message}, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub(crate) struct NewMessage {
    username: Option<String>,
    text: Option<String>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn post_message(
    State(board): State<Board>,
    payload: Result<Json<NewMessage>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Message>)> {
    let Json(NewMessage { username, text }) = payload?;

    let message = board
        .append(username.unwrap_or_default(), text.unwrap_or_default())
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}
