use diesel::{r2d2, PgConnection};
use diesel::r2d2::{ConnectionManager, PooledConnection};
use anyhow::{Result, anyhow};

pub fn get_conn(pool: r2d2::Pool<ConnectionManager<PgConnection>>)->Result<PooledConnection<ConnectionManager<PgConnection>>> {
    let conn = pool
        .get()
        .map_err(|e| anyhow!("store unavailable: {}", e))?;

    Ok(conn)
}
