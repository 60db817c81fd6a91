use askama::Template;
use axum::extract::Query;
use axum::response::{Html, IntoResponse};
use serde::Deserialize;

use crate::error::AppError;

pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICE_CARDS: [ServiceCard; 4] = [
    ServiceCard {
        title: "AI Chat Assistant",
        description: "Build intelligent conversational agents that enhance customer engagement and support.",
    },
    ServiceCard {
        title: "AI Workflow Automation",
        description: "Reduce manual work and eliminate repetitive tasks with efficient, personalised automation.",
    },
    ServiceCard {
        title: "Strategic Consultancy",
        description: "Expert guidance on understanding AI\u{2019}s potential for your business and how to strategically implement tailored solutions.",
    },
    ServiceCard {
        title: "AI Website Development",
        description: "Create smart, responsive websites powered by cutting-edge AI technology.",
    },
];

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    menu_open: bool,
    services: &'static [ServiceCard],
}

#[derive(Deserialize)]
pub struct HomeParams {
    pub menu: Option<String>,
}

pub async fn index(Query(params): Query<HomeParams>) -> Result<impl IntoResponse, AppError> {
    let template = HomeTemplate {
        menu_open: params.menu.as_deref() == Some("open"),
        services: &SERVICE_CARDS,
    };
    Ok(Html(template.render()?))
}
