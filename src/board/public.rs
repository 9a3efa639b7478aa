use axum::Json;
use hypertext::{Raw, prelude::*};
use serde::Serialize;

use crate::{
    state::Conn,
    teams::{Team, TeamOrder},
    template::Page,
    util_resp::{FailureResponse, StandardResponse, success},
};

pub async fn leaderboard_page(mut conn: Conn) -> StandardResponse {
    let teams = Team::all(TeamOrder::PointsDesc, &mut *conn)
        .map_err(FailureResponse::from)?;

    success(
        Page::new()
            .extra_head(maud! {
                script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.3/dist/chart.umd.min.js" crossorigin="anonymous" {}
            })
            .body(maud! {
                div class="container p-3" {
                    h1 { "Leaderboard" }

                    table class="table table-striped" {
                        thead {
                            tr {
                                th scope="col" { "#" }
                                th scope="col" { "Team" }
                                th scope="col" { "Points" }
                            }
                        }
                        tbody {
                            @for (i, team) in teams.iter().enumerate() {
                                tr {
                                    th scope="row" { (i + 1) }
                                    td { (team.name) }
                                    td { (team.points) }
                                }
                            }
                        }
                    }

                    canvas id="points-chart" class="mt-4" {}
                    script {
                        (Raw::dangerously_create(include_str!("chart.js")))
                    }
                }
            })
            .render(),
    )
}

#[derive(Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub points: Vec<i64>,
}

/// Feeds the leaderboard's bar chart. Teams are listed alphabetically so
/// that the bars do not jump around as scores change.
pub async fn chart_data(
    mut conn: Conn,
) -> Result<Json<ChartData>, FailureResponse> {
    let teams = Team::all(TeamOrder::NameAsc, &mut *conn)
        .map_err(FailureResponse::from)?;

    let (labels, points) =
        teams.into_iter().map(|t| (t.name, t.points)).unzip();

    Ok(Json(ChartData { labels, points }))
}
