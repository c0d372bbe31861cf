use actix_web::{http::StatusCode, test, web, App};
use chrono::NaiveDate;
use coinboard_data::{Crypto, DailyClose, PriceFrame, Window, START_DATE};
use coinboard_web::{configure, Dashboard};
use serde_json::Value;

fn dashboard() -> Dashboard {
    let close = |d, adj_close| DailyClose {
        date: NaiveDate::from_ymd_opt(2024, 6, d).unwrap(),
        adj_close,
    };
    let frame = PriceFrame::build(vec![
        (Crypto::Bitcoin, close(1, 100.0)),
        (Crypto::Bitcoin, close(2, 102.0)),
        (Crypto::Dogecoin, close(1, 0.16)),
        (Crypto::Dogecoin, close(2, 0.12)),
    ]);
    Dashboard::new(frame, Window::since(START_DATE))
}

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(dashboard()))
                .configure(configure),
        )
        .await
    };
}

#[actix_web::test]
async fn page_is_served() {
    let app = app!();
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("crypto-dropdown"));
    assert!(html.contains("Period 01/06/2024 -- Today"));
}

#[actix_web::test]
async fn ticker_dropdown_lists_all_then_every_coin() {
    let app = app!();
    let req = test::TestRequest::get().uri("/api/cryptos").to_request();
    let options: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(options.len(), 10);
    assert_eq!(options[0]["value"], "ALL");
    assert_eq!(options[1]["value"], "BTC-USD");
    assert_eq!(options[1]["color"], "blue");
    assert_eq!(options[9]["label"], "Ripple");
}

#[actix_web::test]
async fn chart_kind_dropdown_has_six_entries() {
    let app = app!();
    let req = test::TestRequest::get().uri("/api/chart-kinds").to_request();
    let options: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    let values: Vec<&str> = options.iter().filter_map(|o| o["value"].as_str()).collect();
    assert_eq!(values, ["line", "bar", "scatter", "box", "line-pct", "bar-pct"]);
}

#[actix_web::test]
async fn figure_for_all_coins() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/api/figure?crypto=ALL&kind=line")
        .to_request();
    let fig: Value = test::call_and_read_body_json(&app, req).await;

    let names: Vec<&str> = fig["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|trace| trace["name"].as_str())
        .collect();
    assert_eq!(names, ["BTC-USD", "DOGE-USD"]);
    assert_eq!(fig["data"][1]["line"]["color"], "red");
}

#[actix_web::test]
async fn figure_for_one_coin() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/api/figure?crypto=DOGE-USD&kind=line-pct")
        .to_request();
    let fig: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(fig["data"].as_array().unwrap().len(), 1);
    assert_eq!(fig["data"][0]["name"], "DOGE-USD");
    assert_eq!(fig["data"][0]["y"][0], Value::Null);
    let pct = fig["data"][0]["y"][1].as_f64().unwrap();
    assert!((pct + 25.0).abs() < 1e-9);
}

#[actix_web::test]
async fn figure_placeholders() {
    let app = app!();

    let req = test::TestRequest::get().uri("/api/figure").to_request();
    let fig: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fig["layout"]["title"]["text"], "No coin selected.");
    assert_eq!(fig["data"].as_array().unwrap().len(), 0);

    let req = test::TestRequest::get()
        .uri("/api/figure?crypto=XMR-USD&kind=box")
        .to_request();
    let fig: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fig["layout"]["title"]["text"], "No data available to plot.");
}

#[actix_web::test]
async fn unknown_chart_kind_is_rejected() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/api/figure?crypto=ALL&kind=pie")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn investor_level_from_answers() {
    let app = app!();
    for (query, level) in [
        ("experience=1&strategy=1&volatility=1", "BEGINNER"),
        ("experience=2&strategy=2&volatility=2", "INTERMEDIATE"),
        ("experience=3&strategy=3&volatility=3", "ADVANCED"),
    ] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/investor-level?{query}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["level"], level);
        assert_eq!(
            body["message"],
            format!("Based on your answers your level is: {level}")
        );
    }
}

#[actix_web::test]
async fn out_of_range_answers_are_rejected() {
    let app = app!();
    for query in [
        "experience=4&strategy=1&volatility=1",
        "experience=0&strategy=1&volatility=1",
        "experience=1&strategy=1",
    ] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/investor-level?{query}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{query}");
    }
}

#[actix_web::test]
async fn quiz_has_three_questions() {
    let app = app!();
    let req = test::TestRequest::get().uri("/api/quiz").to_request();
    let questions: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    let ids: Vec<&str> = questions.iter().filter_map(|q| q["id"].as_str()).collect();
    assert_eq!(ids, ["experience", "strategy", "volatility"]);
}

#[actix_web::test]
async fn prices_filter_by_coin() {
    let app = app!();

    let req = test::TestRequest::get().uri("/api/prices").to_request();
    let rows: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rows.len(), 4);

    let req = test::TestRequest::get()
        .uri("/api/prices?crypto=BTC-USD")
        .to_request();
    let rows: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["date"], "2024-06-01");
    assert_eq!(rows[0]["percent"], Value::Null);
    assert_eq!(rows[1]["adj_close"], 102.0);
}

#[actix_web::test]
async fn api_documentation_is_served() {
    let app = app!();
    let req = test::TestRequest::get().uri("/redoc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
