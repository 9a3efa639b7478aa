use axum::{Form, extract::Path, response::Redirect};
use hypertext::prelude::*;
use serde::Deserialize;

use crate::{
    state::Conn,
    teams::{Team, TeamOrder},
    template::Page,
    util_resp::{
        FailureResponse, StandardResponse, bad_request, see_other_ok, success,
    },
    widgets::FormError,
};

pub async fn admin_page(mut conn: Conn) -> StandardResponse {
    let teams = Team::all(TeamOrder::IdAsc, &mut *conn)
        .map_err(FailureResponse::from)?;

    success(
        Page::new()
            .body(maud! {
                div class="container p-3" {
                    h1 { "Manage teams" }

                    div class="card mb-4" {
                        div class="card-body bg-light" {
                            form action="/add_team" method="post" class="row g-3 align-items-end" {
                                div class="col-md-9" {
                                    label for="name" class="form-label" { "Team name" }
                                    input type="text" class="form-control" name="name" required;
                                }
                                div class="col-md-3" {
                                    button type="submit" class="btn btn-primary w-100" { "Add team" }
                                }
                            }
                        }
                    }

                    div class="table-responsive border rounded" {
                        table class="table table-hover mb-0" {
                            thead class="bg-light" {
                                tr {
                                    th { "#" }
                                    th { "Team" }
                                    th { "Points" }
                                    th { "Award points" }
                                    th class="text-end" { "Actions" }
                                }
                            }
                            tbody {
                                @for team in &teams {
                                    tr {
                                        th scope="row" { (team.id) }
                                        td class="fw-medium" { (team.name) }
                                        td { (team.points) }
                                        td {
                                            form action=(format!("/add/{}", team.id)) method="post" class="d-flex gap-2" {
                                                input type="number" class="form-control form-control-sm" name="points" value="1" style="max-width: 6rem;";
                                                button type="submit" class="btn btn-sm btn-outline-primary" { "Add" }
                                            }
                                        }
                                        td class="text-end" {
                                            form action=(format!("/delete_team/{}", team.id)) method="post"
                                                onsubmit="return confirm('Are you sure? This cannot be undone.');" {
                                                button type="submit" class="btn btn-sm btn-link text-danger text-decoration-none" { "Delete" }
                                            }
                                        }
                                    }
                                }
                                @if teams.is_empty() {
                                    tr {
                                        td colspan="5" class="text-center text-muted py-4" { "No teams yet." }
                                    }
                                }
                            }
                        }
                    }

                    form action="/clear_points" method="post" class="mt-4"
                        onsubmit="return confirm('Reset every score to zero?');" {
                        button type="submit" class="btn btn-outline-danger" { "Reset all scores" }
                    }
                }
            })
            .render(),
    )
}

#[derive(Deserialize)]
pub struct AddPointsForm {
    points: Option<String>,
}

pub async fn do_add_points(
    Path(team_id): Path<i64>,
    mut conn: Conn,
    Form(form): Form<AddPointsForm>,
) -> StandardResponse {
    // An omitted field means "one point"; anything submitted must parse.
    let delta = match &form.points {
        None => 1,
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(n) => n,
            Err(_) => {
                return bad_request(
                    Page::new()
                        .body(FormError {
                            msg: "Error: points must be a whole number.",
                        })
                        .render(),
                );
            }
        },
    };

    let n = Team::adjust_points(team_id, delta, &mut *conn)
        .map_err(FailureResponse::from)?;
    if n == 0 {
        tracing::debug!("no team with id {team_id}, points unchanged");
    }

    see_other_ok(Redirect::to("/admin"))
}

#[derive(Deserialize)]
pub struct AddTeamForm {
    name: Option<String>,
}

pub async fn do_add_team(
    mut conn: Conn,
    Form(form): Form<AddTeamForm>,
) -> StandardResponse {
    let name = match form.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            return bad_request(
                Page::new()
                    .body(FormError {
                        msg: "Error: the team needs a name.",
                    })
                    .render(),
            );
        }
    };

    let inserted = Team::insert_if_absent(&name, &mut *conn)
        .map_err(FailureResponse::from)?;
    if !inserted {
        tracing::debug!("a team called {name:?} already exists, skipping");
    }

    see_other_ok(Redirect::to("/admin"))
}

pub async fn do_clear_points(mut conn: Conn) -> StandardResponse {
    Team::clear_points(&mut *conn).map_err(FailureResponse::from)?;

    see_other_ok(Redirect::to("/admin"))
}

pub async fn do_delete_team(
    Path(team_id): Path<i64>,
    mut conn: Conn,
) -> StandardResponse {
    let n =
        Team::delete(team_id, &mut *conn).map_err(FailureResponse::from)?;
    if n == 0 {
        tracing::debug!("no team with id {team_id}, nothing to delete");
    }

    see_other_ok(Redirect::to("/admin"))
}
