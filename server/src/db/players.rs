//! Database operations for the players table.

use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Row, Transaction};
use std::collections::BTreeMap;
use wicket_engine::{BatchAck, PlayerRecord, PlayerStore, PlayerUpsert, StatLine, StatsBatch};

const SELECT_COLUMNS: &str =
    "player_id, name, version, career_stats, tournament_stats, updated_at";

/// A stored player row from the database.
#[derive(Debug)]
pub struct StoredPlayer {
    pub player_id: String,
    pub name: String,
    pub version: i64,
    pub career_stats: StatLine,
    pub tournament_stats: BTreeMap<String, StatLine>,
    #[allow(dead_code)]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for StoredPlayer {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        let career: Json<StatLine> = row.try_get("career_stats")?;
        let tournaments: Json<BTreeMap<String, StatLine>> = row.try_get("tournament_stats")?;

        Ok(StoredPlayer {
            player_id: row.try_get("player_id")?,
            name: row.try_get("name")?,
            version: row.try_get("version")?,
            career_stats: career.0,
            tournament_stats: tournaments.0,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl StoredPlayer {
    /// Convert database row to a wicket-engine PlayerRecord.
    pub fn into_record(self) -> PlayerRecord {
        PlayerRecord {
            player_id: self.player_id,
            name: self.name,
            version: self.version as u64,
            career_stats: self.career_stats,
            tournament_stats: self.tournament_stats,
        }
    }
}

/// Player store backed by PostgreSQL.
///
/// A batch runs in a single transaction. Each upsert inserts a zeroed row if
/// the player is new, locks the row, applies the upsert in memory and writes
/// it back, so concurrent batches touching the same player serialize on the
/// row lock. Rows are always locked in player ID order.
#[derive(Debug, Clone)]
pub struct PgPlayerStore {
    pool: PgPool,
}

impl PgPlayerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check that the database answers.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Get a player record by ID.
    pub async fn get(&self, player_id: &str) -> Result<Option<PlayerRecord>, sqlx::Error> {
        let query = format!("SELECT {} FROM players WHERE player_id = $1", SELECT_COLUMNS);
        let stored = sqlx::query_as::<_, StoredPlayer>(&query)
            .bind(player_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(stored.map(StoredPlayer::into_record))
    }

    /// Players with the most runs in a tournament, highest first.
    pub async fn top_run_scorers(
        &self,
        tournament_id: &str,
        limit: i64,
    ) -> Result<Vec<PlayerRecord>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {}
            FROM players
            WHERE tournament_stats -> $1 IS NOT NULL
            ORDER BY COALESCE((tournament_stats -> $1 ->> 'runs')::BIGINT, 0) DESC,
                     player_id ASC
            LIMIT $2
            "#,
            SELECT_COLUMNS
        );

        let rows = sqlx::query_as::<_, StoredPlayer>(&query)
            .bind(tournament_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(StoredPlayer::into_record).collect())
    }
}

impl PlayerStore for PgPlayerStore {
    type Ack = BatchAck;
    type Error = sqlx::Error;

    /// Apply every upsert of `batch` in one transaction.
    async fn apply_batch(&mut self, batch: &StatsBatch) -> Result<BatchAck, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let mut ack = BatchAck::default();

        for op in lock_order(batch) {
            let created = apply_upsert(&mut tx, op, &mut ack).await?;
            if created {
                ack.created_players.push(op.player_id.clone());
            }
            ack.applied += 1;
        }

        tx.commit().await?;

        tracing::info!(
            applied = ack.applied,
            created = ack.created_players.len(),
            opened_tournaments = ack.opened_tournaments,
            tournament = batch.tournament_id.as_deref().unwrap_or("-"),
            "Applied stats batch"
        );

        Ok(ack)
    }
}

/// Upserts of `batch` sorted by player ID.
///
/// Upserts of the same player keep their batch order.
fn lock_order(batch: &StatsBatch) -> Vec<&PlayerUpsert> {
    let mut ops: Vec<&PlayerUpsert> = batch.iter().collect();
    ops.sort_by(|a, b| a.player_id.cmp(&b.player_id));
    ops
}

/// Apply one upsert inside `tx`. Returns whether the row was created.
async fn apply_upsert(
    tx: &mut Transaction<'_, Postgres>,
    op: &PlayerUpsert,
    ack: &mut BatchAck,
) -> Result<bool, sqlx::Error> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO players (player_id, name)
        VALUES ($1, $2)
        ON CONFLICT (player_id) DO NOTHING
        "#,
    )
    .bind(&op.player_id)
    .bind(op.name.as_deref().unwrap_or(""))
    .execute(&mut **tx)
    .await?;

    let query = format!(
        "SELECT {} FROM players WHERE player_id = $1 FOR UPDATE",
        SELECT_COLUMNS
    );
    let stored = sqlx::query_as::<_, StoredPlayer>(&query)
        .bind(&op.player_id)
        .fetch_one(&mut **tx)
        .await?;

    let mut record = stored.into_record();
    let outcome = record.apply(op);
    if outcome.opened_tournament {
        ack.opened_tournaments += 1;
    }

    sqlx::query(
        r#"
        UPDATE players SET
            name = $2,
            version = $3,
            career_stats = $4,
            tournament_stats = $5,
            updated_at = NOW()
        WHERE player_id = $1
        "#,
    )
    .bind(&record.player_id)
    .bind(&record.name)
    .bind(record.version as i64)
    .bind(Json(record.career_stats))
    .bind(Json(&record.tournament_stats))
    .execute(&mut **tx)
    .await?;

    Ok(inserted.rows_affected() == 1)
}
