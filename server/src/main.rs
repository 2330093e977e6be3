use axum::Json;
use axum::{
    extract::Path,
    http::{HeaderValue, Method, StatusCode},
    response::Html,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;

use beamcube::scramble;
use beamcube::solver::{self, SolveResult};

#[tokio::main]
async fn main() {
    // build our application with a route
    let cors = CorsLayer::new()
        .allow_origin("http://127.0.0.1:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET]);
    let app = Router::new()
        .route("/", get(index))
        .route("/solve/:puzzle", get(move |p| solve(p)))
        .route("/scramble", get(scramble))
        .layer(cors);

    let app = app.fallback(index);

    // run it
    let listener = tokio::net::TcpListener::bind("127.0.0.1:32125")
        .await
        .unwrap();
    println!("listening on http://{}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}

async fn index() -> Html<&'static str> {
    Html("<p>Solve a cube: http://localhost:32125/solve/<Facelet String></p>
    Example: <a href=\"http://localhost:32125/solve/RWOWWWBWWYYYYYYYYYRRRRRRWRBROOOOOOOOBBGBBBBBWWGGGGGGGG\">http://localhost:32125/solve/RWOWWWBWWYYYYYYYYYRRRRRRWRBROOOOOOOOBBGBBBBBWWGGGGGGGG</a>
    <p>Get a scramble: <a href=\"http://localhost:32125/scramble\">http://localhost:32125/scramble</a></p>")
}

async fn scramble() -> String {
    let ss = scramble::gen_scramble(25);
    format!("Scramble: {}", scramble::scramble_to_str(&ss))
}

async fn solve(Path(puzzle): Path<String>) -> Result<Json<SolveResult>, (StatusCode, String)> {
    match solver::solve(&puzzle) {
        Ok(result) => Ok(Json(result)),
        Err(error) => Err((StatusCode::BAD_REQUEST, error.to_string())),
    }
}
