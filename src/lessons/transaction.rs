//! Several writes committed as one unit.

use crate::error::{OpContext, TourError, TourResult};
use crate::lessons::{INSERT_ARTIST, TEST_IDS, test_name};
use sqlx::SqlitePool;
use tracing::info;

/// Insert every test artist inside one transaction and commit.
///
/// If any insert fails the transaction is dropped unfinished, which rolls it
/// back, so none of the staged rows become visible.
pub async fn run(pool: &SqlitePool) -> TourResult<u64> {
    let mut tx = pool.begin().await.op("db.begin")?;
    let mut inserted = 0;

    for id in TEST_IDS {
        let result = sqlx::query(INSERT_ARTIST)
            .bind(id)
            .bind(test_name(id))
            .execute(&mut *tx)
            .await
            .map_err(|e| TourError::staged("tx.exec", id, e))?;
        info!("staged id={id}\taffected={}", result.rows_affected());
        inserted += result.rows_affected();
    }

    tx.commit().await.op("tx.commit")?;
    info!("committed {inserted} rows");
    Ok(inserted)
}
