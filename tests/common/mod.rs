//! Shared fixture: a small database with the Chinook layout for the tables
//! the lessons touch.

#![allow(dead_code)]

use chinook_tour::config::DatabaseConfig;
use chinook_tour::db;
use sqlx::SqlitePool;
use tempfile::TempDir;

pub const ARTISTS: &[(i64, &str)] = &[
    (1, "AC/DC"),
    (2, "Accept"),
    (3, "Aerosmith"),
    (4, "Alanis Morissette"),
    (5, "Alice In Chains"),
    (6, "Antônio Carlos Jobim"),
    (7, "Apocalyptica"),
    (8, "Audioslave"),
    (9, "BackBeat"),
    (10, "Billy Cobham"),
    (271, "Mela Tenenbaum, Pro Musica Prague & Richard Kapp"),
    (272, "Emerson String Quartet"),
    (
        273,
        "C. Monteverdi, Nigel Rogers - Chiaroscuro; London Baroque; London Cornett & Sackbu",
    ),
    (274, "Nash Ensemble"),
    (275, "Philip Glass Ensemble"),
];

const SCHEMA: &str = "
CREATE TABLE artists (
    ArtistId INTEGER PRIMARY KEY NOT NULL,
    Name NVARCHAR(120)
);
CREATE TABLE tracks (
    TrackId INTEGER PRIMARY KEY NOT NULL,
    Name NVARCHAR(200) NOT NULL,
    AlbumId INTEGER,
    MediaTypeId INTEGER NOT NULL,
    GenreId INTEGER,
    Composer NVARCHAR(220),
    Milliseconds INTEGER NOT NULL,
    Bytes INTEGER,
    UnitPrice NUMERIC(10,2) NOT NULL
);
INSERT INTO tracks VALUES
    (1, 'For Those About To Rock (We Salute You)', 1, 1, 1,
     'Angus Young, Malcolm Young, Brian Johnson', 343719, 11170334, 0.99),
    (2, 'Balls to the Wall', 2, 2, 1, NULL, 342562, 5510424, 0.99);
";

pub const TRACK_COLUMNS: &[&str] = &[
    "TrackId",
    "Name",
    "AlbumId",
    "MediaTypeId",
    "GenreId",
    "Composer",
    "Milliseconds",
    "Bytes",
    "UnitPrice",
];

/// A fixture database in a fresh temporary directory.
///
/// The directory must outlive the pool.
pub struct Fixture {
    pub pool: SqlitePool,
    pub config: DatabaseConfig,
    _dir: TempDir,
}

pub async fn setup_chinook_db() -> Fixture {
    let dir = TempDir::new().unwrap();
    let config = DatabaseConfig::new(dir.path().join("chinook.db")).with_create_if_missing(true);
    let pool = db::open(&config).await.unwrap();

    sqlx::raw_sql(SCHEMA).execute(&pool).await.unwrap();
    for &(id, name) in ARTISTS {
        sqlx::query("INSERT INTO artists (ArtistId, Name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(&pool)
            .await
            .unwrap();
    }

    Fixture {
        pool,
        config,
        _dir: dir,
    }
}

pub async fn artist_count(pool: &SqlitePool, low: i64, high: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM artists WHERE ArtistId BETWEEN ? AND ?")
        .bind(low)
        .bind(high)
        .fetch_one(pool)
        .await
        .unwrap()
}
