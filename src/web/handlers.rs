use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};
use chrono::Local;
use std::sync::Arc;

use crate::models::{Entry, EntryView};
use crate::{Error, Result};

use super::{AppState, EntryForm};

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    entries: Vec<EntryView>,
}

pub async fn home(State(state): State<Arc<AppState>>) -> Result<Response> {
    render_home(&state).await
}

pub async fn submit_entry(
    State(state): State<Arc<AppState>>,
    form: Option<Form<EntryForm>>,
) -> Result<Response> {
    // A missing or malformed form body counts as an empty entry, not an error.
    let content = form.and_then(|Form(form)| form.content).unwrap_or_default();
    let today = Local::now().date_naive();

    state.store.insert(&Entry::new(content, today)).await?;

    render_home(&state).await
}

async fn render_home(state: &AppState) -> Result<Response> {
    let entries = state
        .store
        .find_all()
        .await?
        .into_iter()
        .map(EntryView::from_entry)
        .collect::<Result<Vec<_>>>()?;

    let template = HomeTemplate { entries };
    Ok(Html(template.render().map_err(|e| {
        Error::Internal(format!("Template error: {}", e))
    })?)
    .into_response())
}
