use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use log::info;
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub const SUCCESS: &str = "success";
pub const REQUEST_ID_HEADER: &str = "requestId";

const SEED_QUOTES: [&str; 12] = [
    "Working with Spring Boot is like pair-programming with the Spring developers.",
    "With Boot you deploy everywhere you can find a JVM basically.",
    "Spring has come quite a ways in addressing developer enjoyment and ease of use since the last time I built an application using it.",
    "Previous to Spring Boot, I remember XML hell, confusing set up, and many hours of frustration.",
    "Spring Boot solves this problem. It gets rid of XML and wires up common components for me, so I don't have to spend hours scratching my head just to figure out how it's all pieced together.",
    "It embraces convention over configuration, providing an experience on par with frameworks that excel at early stage development, such as Ruby on Rails.",
    "The real benefit of Boot, however, is that it's just Spring. That means any direction the code takes, regardless of complexity, I know it's a safe bet.",
    "I don't worry about my code scaling. Boot allows the developer to peel back the layers and customize when it's appropriate while keeping the conventions that just work.",
    "So easy it is to switch container in #springboot.",
    "Really loving Spring Boot, makes stand alone Spring apps easy.",
    "I have two hours today to build an app from scratch. @springboot to the rescue!",
    "@springboot with @springframework is pure productivity! Who said in #java one has to write double the code than in other langs? #newFavLib",
];

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Value {
    pub id: Option<i64>,
    pub quote: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Option<Value>,
}

impl Quote {
    fn stored(id: i64, text: &str) -> Self {
        Self {
            kind: SUCCESS.to_string(),
            value: Some(Value {
                id: Some(id),
                quote: text.to_string(),
            }),
        }
    }
}

#[derive(Deserialize)]
pub struct IdParam {
    pub id: i64,
}

pub type Db = Arc<RwLock<BTreeMap<i64, String>>>;

/// Store pre-filled with ids `1..=12`.
pub fn seeded_db() -> Db {
    let quotes: BTreeMap<i64, String> = (1..)
        .zip(SEED_QUOTES)
        .map(|(id, text)| (id, text.to_string()))
        .collect();
    Arc::new(RwLock::new(quotes))
}

pub fn app() -> Router {
    app_with_db(seeded_db())
}

pub fn app_with_db(db: Db) -> Router {
    Router::new()
        .route("/api", get(list_quotes))
        .route("/api/random", get(random_quote))
        .route("/api/{id}", get(get_quote))
        .route("/api/quote", post(create_quote))
        .route("/api/quote/{id}", delete(delete_quote))
        .route("/apiWithRequestParam", get(get_with_request_param))
        .route("/apiWithHeader", get(get_with_header))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn all_quotes(db: &Db) -> Vec<Quote> {
    db.read()
        .await
        .iter()
        .map(|(id, text)| Quote::stored(*id, text))
        .collect()
}

async fn find_quote(db: &Db, id: i64) -> Result<Json<Quote>, StatusCode> {
    let quotes = db.read().await;
    quotes
        .get(&id)
        .map(|text| Json(Quote::stored(id, text)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_quotes(State(db): State<Db>) -> Json<Vec<Quote>> {
    Json(all_quotes(&db).await)
}

async fn get_quote(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Quote>, StatusCode> {
    find_quote(&db, id).await
}

async fn random_quote(State(db): State<Db>) -> Result<Json<Quote>, StatusCode> {
    let quotes = db.read().await;
    let picked = quotes.iter().choose(&mut rand::rng());
    picked
        .map(|(id, text)| Json(Quote::stored(*id, text)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn get_with_request_param(
    State(db): State<Db>,
    Query(param): Query<IdParam>,
) -> Result<Json<Quote>, StatusCode> {
    find_quote(&db, param.id).await
}

async fn get_with_header(
    State(db): State<Db>,
    headers: HeaderMap,
) -> Result<Json<Vec<Quote>>, StatusCode> {
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::BAD_REQUEST)?;
    info!("apiWithHeader called with requestId={request_id}");
    Ok(Json(all_quotes(&db).await))
}

async fn create_quote(
    State(db): State<Db>,
    Json(input): Json<Quote>,
) -> Result<(StatusCode, Json<Quote>), StatusCode> {
    let value = input.value.ok_or(StatusCode::UNPROCESSABLE_ENTITY)?;
    let mut quotes = db.write().await;
    let id = quotes.keys().next_back().map_or(1, |max| max + 1);
    quotes.insert(id, value.quote.clone());
    info!("created quote {id}");
    Ok((StatusCode::CREATED, Json(Quote::stored(id, &value.quote))))
}

async fn delete_quote(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Quote>, StatusCode> {
    let mut quotes = db.write().await;
    let text = quotes.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    info!("deleted quote {id}");
    Ok(Json(Quote::stored(id, &text)))
}
