//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `georemind_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use georemind_core::db::migrations::latest_version;
use georemind_core::db::open_db_in_memory;

fn main() {
    println!("georemind_core version={}", georemind_core::core_version());
    println!("georemind_core schema_version={}", latest_version());

    // A throwaway in-memory open proves the bundled SQLite and the
    // migration set are wired correctly.
    match open_db_in_memory() {
        Ok(_) => println!("georemind_core db=ok"),
        Err(err) => println!("georemind_core db=error {err}"),
    }
}
