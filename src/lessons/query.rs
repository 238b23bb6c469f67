//! Multi-row query with positional column binding.

use crate::error::{OpContext, TourResult};
use crate::models::Artist;
use futures_util::TryStreamExt;
use sqlx::{Row, SqlitePool};
use tracing::info;

/// The five highest-numbered artists, newest first.
pub const QUERY: &str = "SELECT ArtistId, Name FROM artists ORDER BY ArtistId DESC LIMIT 5";

pub async fn run(pool: &SqlitePool) -> TourResult<Vec<Artist>> {
    let mut rows = sqlx::query(QUERY).fetch(pool);
    let mut artists = Vec::new();

    while let Some(row) = rows.try_next().await.op("rows.next")? {
        let artist = Artist {
            id: row.try_get(0).op("row.scan")?,
            name: row.try_get(1).op("row.scan")?,
        };
        info!("{artist}");
        artists.push(artist);
    }

    Ok(artists)
}
