//! One prepared statement shared by concurrent callers.
//!
//! The statement is prepared once against the pool and handed to every task
//! behind an `Arc`. Each task reports its failure on a buffered channel so no
//! task ever blocks on a slow reader; the first reported error is returned
//! after all tasks have been joined.

use crate::error::{OpContext, TourError, TourResult};
use crate::models::Artist;
use sqlx::{Executor, SqlitePool, Statement};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::info;

pub const SELECT_ARTIST: &str = "SELECT ArtistId, Name FROM artists WHERE ArtistId = ?";

/// Number of concurrent callers; caller `n` looks up artist `n`.
pub const CALLERS: i64 = 10;

pub async fn run(pool: &SqlitePool) -> TourResult<Vec<Artist>> {
    let statement = Arc::new(pool.prepare(SELECT_ARTIST).await.op("db.prepare")?);
    let (errors_tx, mut errors_rx) = mpsc::channel::<TourError>(CALLERS as usize);
    let mut callers = JoinSet::new();

    for id in 1..=CALLERS {
        let statement = Arc::clone(&statement);
        let pool = pool.clone();
        let errors = errors_tx.clone();

        callers.spawn(async move {
            let result = statement
                .query_as::<Artist>()
                .bind(id)
                .fetch_one(&pool)
                .await;

            match result {
                Ok(artist) => {
                    info!("id={}\tname={}", artist.id, artist.name);
                    Some(artist)
                }
                Err(e) => {
                    let err = match e {
                        sqlx::Error::RowNotFound => TourError::NoRowsFor { id },
                        other => TourError::op("stmt.query_row", other),
                    };
                    let _ = errors.send(err).await;
                    None
                }
            }
        });
    }
    drop(errors_tx);

    let mut artists = Vec::new();
    while let Some(joined) = callers.join_next().await {
        if let Some(artist) = joined? {
            artists.push(artist);
        }
    }

    if let Ok(err) = errors_rx.try_recv() {
        return Err(err);
    }

    artists.sort_by_key(|artist| artist.id);
    Ok(artists)
}
