use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    board::{
        admin::{
            admin_page, do_add_points, do_add_team, do_clear_points,
            do_delete_team,
        },
        public::{chart_data, leaderboard_page},
    },
    state::DbPool,
};

pub fn create_app(pool: DbPool) -> Router {
    Router::new()
        .route("/", get(leaderboard_page))
        .route("/admin", get(admin_page))
        .route("/add/:team_id", post(do_add_points))
        .route("/add_team", post(do_add_team))
        .route("/clear_points", post(do_clear_points))
        .route("/delete_team/:team_id", post(do_delete_team))
        .route("/data", get(chart_data))
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
