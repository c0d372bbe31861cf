use crate::chart::ChartKind;
use crate::dashboard::{Dashboard, Event};
use crate::page;
use crate::quiz::{Answer, InvestorLevel, Question, QUESTIONS};
use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use coinboard_data::{Crypto, PriceRow, ALL};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};

#[derive(OpenApi)]
#[openapi(paths(cryptos, chart_kinds, quiz, figure, investor_level, prices))]
pub struct ApiDoc;

/// An entry of a dashboard dropdown.
#[derive(Deserialize, Serialize, ToSchema, Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

lazy_static! {
    /// Ticker dropdown: every coin at once, then each coin on its own.
    pub static ref CRYPTO_OPTIONS: Vec<SelectOption> = std::iter::once(SelectOption {
        value: ALL.to_string(),
        label: "All coins".to_string(),
        color: None,
    })
    .chain(Crypto::ALL.iter().map(|crypto| SelectOption {
        value: crypto.symbol().to_string(),
        label: crypto.name().to_string(),
        color: Some(crypto.color().to_string()),
    }))
    .collect();

    /// Chart kind dropdown.
    pub static ref CHART_KIND_OPTIONS: Vec<SelectOption> = ChartKind::ALL
        .iter()
        .map(|kind| SelectOption {
            value: kind.value().to_string(),
            label: kind.label().to_string(),
            color: None,
        })
        .collect();
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[get("/")]
pub async fn index(dashboard: web::Data<Dashboard>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page::render(dashboard.window()))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Options of the ticker dropdown
///
/// ```json
/// [
///     { "value": "ALL", "label": "All coins" },
///     { "value": "BTC-USD", "label": "Bitcoin", "color": "blue" },
///     // ...
/// ]
/// ```
#[utoipa::path(
    get,
    path = "/api/cryptos",
    responses(
        (status = 200, description = "The `ALL` sentinel followed by every tracked coin", body = [SelectOption])
    )
)]
#[get("/api/cryptos")]
pub async fn cryptos() -> impl Responder {
    HttpResponse::Ok().json(&*CRYPTO_OPTIONS)
}

#[utoipa::path(
    get,
    path = "/api/chart-kinds",
    responses(
        (status = 200, description = "Chart types the figure endpoint accepts", body = [SelectOption])
    )
)]
#[get("/api/chart-kinds")]
pub async fn chart_kinds() -> impl Responder {
    HttpResponse::Ok().json(&*CHART_KIND_OPTIONS)
}

#[utoipa::path(
    get,
    path = "/api/quiz",
    responses(
        (status = 200, description = "Investor profile questions", body = [Question])
    )
)]
#[get("/api/quiz")]
pub async fn quiz() -> impl Responder {
    HttpResponse::Ok().json(&*QUESTIONS)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct FigureQuery {
    /// Ticker symbol, or `ALL`; omitted means no coin is selected.
    pub crypto: Option<String>,
    /// Chart type; defaults to `line`.
    #[serde(default)]
    pub kind: ChartKind,
}

/// Plotly figure for the selected coin & chart type
///
/// ```json
/// {
///     "data": [
///         { "type": "scatter", "mode": "lines", "name": "BTC-USD", "x": ["2024-06-01"], "y": [67760.805], ... }
///     ],
///     "layout": { "title": { "text": "Adjusted closing price over time!", ... }, ... }
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/figure",
    params(FigureQuery),
    responses(
        (status = 200, description = "Plotly figure; an empty figure titled with a message when nothing can be drawn"),
        (status = 400, description = "Unknown chart type")
    )
)]
#[get("/api/figure")]
pub async fn figure(
    query: web::Query<FigureQuery>,
    dashboard: web::Data<Dashboard>,
) -> impl Responder {
    let event = Event::Chart {
        crypto: query.crypto.as_deref(),
        kind: query.kind,
    };
    HttpResponse::Ok().json(dashboard.dispatch(event))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct QuizQuery {
    /// Experience with cryptocurrencies, 1-3.
    #[param(value_type = u8, minimum = 1, maximum = 3)]
    pub experience: Answer,
    /// Investment strategy, 1-3.
    #[param(value_type = u8, minimum = 1, maximum = 3)]
    pub strategy: Answer,
    /// Handling of volatility, 1-3.
    #[param(value_type = u8, minimum = 1, maximum = 3)]
    pub volatility: Answer,
}

/// Investor level for a set of quiz answers
///
/// ```json
/// {
///     "level": "BEGINNER",
///     "message": "Based on your answers your level is: BEGINNER"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/investor-level",
    params(QuizQuery),
    responses(
        (status = 200, description = "Investor tier derived from the mean answer", body = InvestorLevel),
        (status = 400, description = "Missing answer, or an answer outside 1-3")
    )
)]
#[get("/api/investor-level")]
pub async fn investor_level(
    query: web::Query<QuizQuery>,
    dashboard: web::Data<Dashboard>,
) -> impl Responder {
    let event = Event::Quiz {
        experience: query.experience,
        strategy: query.strategy,
        volatility: query.volatility,
    };
    HttpResponse::Ok().json(dashboard.dispatch(event))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct PricesQuery {
    /// Ticker symbol; omitted or `ALL` returns every coin.
    pub crypto: Option<String>,
}

/// Loaded price rows
///
/// ```json
/// [
///     {
///         "date": "2024-06-01",
///         "crypto": "BTC-USD",
///         "adj_close": 67760.805,
///         "month": 6,
///         "percent": null
///     },
///     // ...
/// ]
/// ```
#[utoipa::path(
    get,
    path = "/api/prices",
    params(PricesQuery),
    responses(
        (status = 200, description = "Daily adjusted closes with their day-over-day change, in fetch order")
    )
)]
#[get("/api/prices")]
pub async fn prices(
    query: web::Query<PricesQuery>,
    dashboard: web::Data<Dashboard>,
) -> impl Responder {
    let rows: Vec<&PriceRow> = match query.crypto.as_deref() {
        None | Some(ALL) => dashboard.frame().rows().iter().collect(),
        Some(symbol) => dashboard
            .frame()
            .rows()
            .iter()
            .filter(|row| row.crypto.symbol() == symbol)
            .collect(),
    };
    HttpResponse::Ok().json(rows)
}
