//! Temporary SQLite database with the forum schema applied.

use diesel::connection::SimpleConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_common::db::{DbPool, establish_connection_pool};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Three users, two categories and five topics. User 1 has read topic 1
/// before its last post and topic 3 after it, follows topics 1 and 3, and pages
/// two topics at a time. Topic 5 is deleted.
pub const FORUM_SEED: &str = r#"
INSERT INTO users (uid, username, is_admin, is_global_moderator) VALUES
    (1, 'alice', 0, 0),
    (2, 'moderator', 0, 1),
    (3, 'admin', 1, 0);

INSERT INTO user_settings (uid, topics_per_page, use_pagination) VALUES
    (1, 2, 1),
    (2, NULL, NULL);

INSERT INTO categories (cid, name, icon, bg_color) VALUES
    (1, 'General', 'fa-comments', '#fff'),
    (2, 'News', 'fa-newspaper-o', '#f00');

INSERT INTO topics (tid, cid, title, slug, post_count, last_post_at, deleted) VALUES
    (1, 1, 'Read before the last reply', '1/read-before', 3, '2025-01-01 10:00:00', 0),
    (2, 1, 'Never opened, no replies', '2/never-opened', 1, '2025-01-02 10:00:00', 0),
    (3, 2, 'Fully read', '3/fully-read', 5, '2025-01-03 10:00:00', 0),
    (4, 2, 'Never opened', '4/never-opened', 2, '2025-01-04 10:00:00', 0),
    (5, 1, 'Deleted', '5/deleted', 1, '2025-01-05 10:00:00', 1);

INSERT INTO topic_reads (uid, tid, read_at) VALUES
    (1, 1, '2025-01-01 09:00:00'),
    (1, 3, '2025-01-03 11:00:00');

INSERT INTO topic_follows (uid, tid) VALUES
    (1, 1),
    (1, 3);
"#;

pub struct TestDb {
    // Removes the database file when the test finishes.
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let database_url = path.to_str().expect("utf-8 path").to_string();

        let pool = establish_connection_pool(&database_url).expect("create pool");
        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn seed_forum(&self) {
        self.execute(FORUM_SEED);
    }

    pub fn execute(&self, sql: &str) {
        let mut conn = self.pool.get().expect("get connection");
        conn.batch_execute(sql).expect("execute sql");
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
