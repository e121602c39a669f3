// src/db/cache.rs
use rusqlite::{params, Connection, OptionalExtension};
use sha2::{Digest, Sha256};

use crate::errors::ServerError;

/// Cache key for one caller's view of one URL.
/// The raw token never reaches the database, only this digest.
pub fn cache_key(token: &str, url: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.update(b"\n");
    hasher.update(url.as_bytes());
    let out = hasher.finalize();
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    arr
}

/// Returns the cached body if it was fetched less than `ttl_secs` ago.
pub fn get_fresh(
    conn: &Connection,
    key: &[u8; 32],
    now: i64,
    ttl_secs: i64,
) -> Result<Option<String>, ServerError> {
    conn.query_row(
        "select body from api_cache where cache_key = ? and fetched_at > ?",
        params![key.as_slice(), now.saturating_sub(ttl_secs)],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("cache lookup failed: {e}")))
}

pub fn put(
    conn: &Connection,
    key: &[u8; 32],
    tag: &str,
    url: &str,
    body: &str,
    now: i64,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into api_cache (cache_key, tag, url, body, fetched_at)
        values (?, ?, ?, ?, ?)
        on conflict(cache_key) do update set
            tag = excluded.tag,
            body = excluded.body,
            fetched_at = excluded.fetched_at
        "#,
        params![key.as_slice(), tag, url, body, now],
    )
    .map_err(|e| ServerError::DbError(format!("cache store failed: {e}")))?;

    Ok(())
}

/// Drops every entry carrying `tag`, for all callers. Returns rows removed.
pub fn invalidate_tag(conn: &Connection, tag: &str) -> Result<usize, ServerError> {
    conn.execute("delete from api_cache where tag = ?", params![tag])
        .map_err(|e| ServerError::DbError(format!("cache invalidate failed: {e}")))
}

pub fn purge_expired(conn: &Connection, now: i64, ttl_secs: i64) -> Result<usize, ServerError> {
    conn.execute(
        "delete from api_cache where fetched_at <= ?",
        params![now.saturating_sub(ttl_secs)],
    )
    .map_err(|e| ServerError::DbError(format!("cache purge failed: {e}")))
}
