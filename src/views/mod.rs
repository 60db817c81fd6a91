pub mod contact;
pub mod home;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(home::index))
        .route("/contact", get(contact::show).post(contact::submit))
}
