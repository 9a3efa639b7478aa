use diesel::prelude::*;
use diesel_migrations::MigrationHarness;

use crate::schema::kids_points;

/// The teams every fresh database starts out with.
pub const DEFAULT_TEAMS: [&str; 6] = [
    "🦒 Ark Adventurers",
    "🔥 Fiery Furnace Friends",
    "🚗💨 Flaming Chariots",
    "🍞 Manna Munchers",
    "🏰 Jericho Jumpers",
    "🪨 Goliath Smashers",
];

#[derive(Queryable, Clone, Debug)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub points: i64,
}

/// The three orders the team list is served in, one per view.
#[derive(Clone, Copy, Debug)]
pub enum TeamOrder {
    /// Highest score first, for the leaderboard.
    PointsDesc,
    /// Insertion order, for the admin table.
    IdAsc,
    /// Alphabetical, for the chart feed.
    NameAsc,
}

impl Team {
    pub fn all(
        order: TeamOrder,
        conn: &mut SqliteConnection,
    ) -> QueryResult<Vec<Team>> {
        let query = kids_points::table.into_boxed();

        let query = match order {
            TeamOrder::PointsDesc => {
                query.order_by(kids_points::points.desc())
            }
            TeamOrder::IdAsc => query.order_by(kids_points::id.asc()),
            TeamOrder::NameAsc => query.order_by(kids_points::name.asc()),
        };

        query.load::<Team>(conn)
    }

    /// Inserts a new team with zero points. Names are unique, so if a team
    /// of this name already exists the insert is skipped and the existing
    /// row is left untouched. Returns whether a row was inserted.
    pub fn insert_if_absent(
        name: &str,
        conn: &mut SqliteConnection,
    ) -> QueryResult<bool> {
        let n = conn.transaction(|conn| {
            diesel::insert_or_ignore_into(kids_points::table)
                .values((kids_points::name.eq(name), kids_points::points.eq(0)))
                .execute(conn)
        })?;

        Ok(n == 1)
    }

    /// Adds `delta` (which may be negative) to the team's score. An unknown
    /// id touches no rows. Returns the number of rows updated.
    pub fn adjust_points(
        team_id: i64,
        delta: i64,
        conn: &mut SqliteConnection,
    ) -> QueryResult<usize> {
        conn.transaction(|conn| {
            diesel::update(
                kids_points::table.filter(kids_points::id.eq(team_id)),
            )
            .set(kids_points::points.eq(kids_points::points + delta))
            .execute(conn)
        })
    }

    /// Resets every team's score to zero.
    pub fn clear_points(conn: &mut SqliteConnection) -> QueryResult<usize> {
        conn.transaction(|conn| {
            diesel::update(kids_points::table)
                .set(kids_points::points.eq(0))
                .execute(conn)
        })
    }

    /// Removes the team row. An unknown id touches no rows. Returns the
    /// number of rows deleted.
    pub fn delete(
        team_id: i64,
        conn: &mut SqliteConnection,
    ) -> QueryResult<usize> {
        conn.transaction(|conn| {
            diesel::delete(
                kids_points::table.filter(kids_points::id.eq(team_id)),
            )
            .execute(conn)
        })
    }
}

/// Brings the schema up to date and seeds [`DEFAULT_TEAMS`], skipping any
/// team that already exists. Runs on every boot; existing scores are never
/// touched.
pub fn initialize(conn: &mut SqliteConnection) {
    conn.run_pending_migrations(crate::MIGRATIONS)
        .expect("failed to run migrations");

    for name in DEFAULT_TEAMS {
        Team::insert_if_absent(name, conn)
            .expect("failed to seed default teams");
    }
}
