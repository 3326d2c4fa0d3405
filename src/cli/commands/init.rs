use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite cache database and all pending migrations
///  - an empty offline queue file
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ PREPARA CONFIGURAZIONE
    //
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let mut cfg = Config::load();
    if let Some(custom) = &cli.db {
        cfg.database = custom.clone();
    }
    if let Some(custom) = &cli.queue {
        cfg.queue_file = custom.clone();
    }
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing rAttendance…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);
    println!("📦 Queue file  : {}", &cfg.queue_file);

    //
    // 2️⃣ APERTURA DB
    //
    let conn = Connection::open(&db_path)?;

    //
    // 3️⃣ INIZIALIZZAZIONE DB (tabelle + migrazioni)
    //
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    //
    // 4️⃣ QUEUE FILE (vuoto se assente)
    //
    let queue_path = Path::new(&cfg.queue_file);
    if !queue_path.exists() {
        if let Some(parent) = queue_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(queue_path, "[]")?;
        println!("✅ Queue file created at {}", queue_path.display());
    }

    //
    // 5️⃣ LOG INTERNO (non bloccante)
    //
    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 rAttendance initialization completed!");
    Ok(())
}
