//! A statement prepared on a transaction's connection.

use crate::error::{OpContext, TourError, TourResult};
use crate::lessons::{INSERT_ARTIST, TEST_IDS, test_name};
use crate::models::ExecSummary;
use sqlx::{Executor, SqlitePool, Statement};
use tracing::info;

/// Prepare the insert inside a transaction, run it for every test id and
/// commit.
///
/// The statement lives only as long as the block that uses it, so it is gone
/// before the transaction finishes either way.
pub async fn run(pool: &SqlitePool) -> TourResult<Vec<ExecSummary>> {
    let mut tx = pool.begin().await.op("db.begin")?;

    let summaries = {
        let statement = (&mut *tx).prepare(INSERT_ARTIST).await.op("tx.prepare")?;
        let mut summaries = Vec::with_capacity(TEST_IDS.count());

        for id in TEST_IDS {
            let summary: ExecSummary = statement
                .query()
                .bind(id)
                .bind(test_name(id))
                .execute(&mut *tx)
                .await
                .map_err(|e| TourError::staged("stmt.exec", id, e))?
                .into();
            info!("id={}\taffected={}", summary.last_insert_id, summary.rows_affected);
            summaries.push(summary);
        }
        summaries
    };

    tx.commit().await.op("tx.commit")?;
    Ok(summaries)
}
