//! CLI command implementations

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::{parse_params, SearchServer, ServerConfig};
use crate::index::{CallDocument, MemoryIndexStore};
use crate::observability::{Logger, Severity};
use crate::search::SearchEngine;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Dispatch one parsed command.
pub fn dispatch(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { seed, host, port } => serve(seed, host, port),
        Command::Search {
            seed,
            timestamp_from,
            timestamp_to,
            sentiment_who,
            sentiment_what,
            sentiment_direction,
            entity,
            language,
            job_name,
        } => {
            let mut query = HashMap::new();
            let pairs = [
                ("timestampFrom", timestamp_from),
                ("timestampTo", timestamp_to),
                ("sentimentWho", sentiment_who),
                ("sentimentWhat", sentiment_what),
                ("sentimentDirection", sentiment_direction),
                ("entity", entity),
                ("language", language),
                ("jobName", job_name),
            ];
            for (key, value) in pairs {
                if let Some(value) = value {
                    query.insert(key.to_string(), value);
                }
            }
            search(&seed, &query)
        }
    }
}

/// Load a seed file into an in-memory index store.
pub fn load_store(path: &Path) -> CliResult<MemoryIndexStore> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    let documents: Vec<CallDocument> =
        serde_json::from_str(&contents).map_err(|source| CliError::SeedParse {
            path: path.to_path_buf(),
            source,
        })?;

    let store = MemoryIndexStore::new();
    for document in &documents {
        let records = document.fan_out().map_err(|source| CliError::SeedParse {
            path: path.to_path_buf(),
            source,
        })?;
        store.extend(records);
    }

    Logger::log(
        Severity::Info,
        "seed_loaded",
        &[
            ("documents", &documents.len().to_string()),
            ("records", &store.len().to_string()),
        ],
    );
    Ok(store)
}

fn serve(seed: Option<PathBuf>, host: String, port: u16) -> CliResult<()> {
    let store = match seed {
        Some(path) => load_store(&path)?,
        None => MemoryIndexStore::new(),
    };

    let config = ServerConfig { host, port };
    let server = SearchServer::with_config(Arc::new(store), config);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

fn search(seed: &Path, query: &HashMap<String, String>) -> CliResult<()> {
    let store = load_store(seed)?;
    let params = parse_params(query)?;
    let engine = SearchEngine::new(&store);
    let bodies = engine.search(&params)?;

    // Results to stdout as one JSON array, pretty printed.
    match serde_json::to_string_pretty(&bodies) {
        Ok(rendered) => println!("{}", rendered),
        Err(_) => println!("[]"),
    }
    Ok(())
}
