use std::sync::Arc;

use axum::{extract::State, Form};
use chrono::{Datelike, Local};
use maud::Markup;

use crate::{
    client::RsvpClient,
    form::{self, FormState},
    page,
};

pub type PageState = Arc<dyn RsvpClient>;

// GET / - Event page with an empty form
pub async fn show_page() -> Markup {
    page::render(&FormState::default(), current_year())
}

// POST / - Form post from the page; submit it and render the outcome
pub async fn submit_form(
    State(client): State<PageState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Markup {
    let state = FormState::from_fields(fields);
    let state = form::submit(state, client.as_ref()).await;

    page::render(&state, current_year())
}

fn current_year() -> i32 {
    Local::now().year()
}
