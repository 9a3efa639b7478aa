use std::ops::{Deref, DerefMut};

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use diesel::{
    SqliteConnection,
    r2d2::{ConnectionManager, Pool, PooledConnection},
};

use crate::util_resp::FailureResponse;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// A database connection checked out of the pool for the duration of one
/// request, returned when the guard drops.
pub struct Conn {
    inner: PooledConnection<ConnectionManager<SqliteConnection>>,
}

impl Deref for Conn {
    type Target = PooledConnection<ConnectionManager<SqliteConnection>>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Conn {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Conn
where
    S: Send + Sync,
    DbPool: FromRef<S>,
{
    type Rejection = FailureResponse;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let pool = DbPool::from_ref(state);

        let inner = tokio::task::spawn_blocking(move || pool.get())
            .await
            .map_err(|_| FailureResponse::ServerError(()))?
            .map_err(|e| {
                tracing::error!("could not check a connection out of the pool: {e}");
                FailureResponse::ServerError(())
            })?;

        Ok(Conn { inner })
    }
}
