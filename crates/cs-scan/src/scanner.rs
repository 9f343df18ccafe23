//! Parallel source scan over the frontend and backend roots

use crate::discover::discover_files;
use crate::error::ScanResult;
use crate::model::SourceScan;
use crate::patterns::ScanPatterns;
use cs_core::{Config, ProjectLayout};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// Which patterns apply to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Role {
    Frontend,
    Backend,
}

/// Scan every source root of `layout`.
///
/// Files are read on at most `config.scan.threads` blocking workers. Results
/// are merged under one lock once every worker has finished and then sorted
/// by (file, line, column). Unreadable files are skipped with a warning.
pub async fn scan_sources(layout: &ProjectLayout, config: &Config) -> ScanResult<SourceScan> {
    let patterns = Arc::new(ScanPatterns::new(
        &config.scan,
        &config.contracts.endpoint_table,
    )?);
    let exclude = &config.layout.exclude_dirs;

    let mut jobs: BTreeSet<(PathBuf, Role)> = BTreeSet::new();
    for path in discover_files(&layout.frontend_roots, &config.scan.frontend_extensions, exclude) {
        jobs.insert((path, Role::Frontend));
    }
    for path in discover_files(&layout.backend_roots, &config.scan.backend_extensions, exclude) {
        jobs.insert((path, Role::Backend));
    }

    log::debug!(
        "Scanning {} source file(s) with {} worker(s)",
        jobs.len(),
        config.scan.threads
    );

    let semaphore = Arc::new(Semaphore::new(config.scan.threads.max(1)));
    let merged = Arc::new(Mutex::new(SourceScan::default()));
    let mut handles = Vec::with_capacity(jobs.len());

    for (path, role) in jobs {
        let display = layout.display_path(&path);
        let semaphore = Arc::clone(&semaphore);
        let merged = Arc::clone(&merged);
        let patterns = Arc::clone(&patterns);

        let handle = tokio::spawn(async move {
            let Ok(_permit) = semaphore.acquire().await else {
                return;
            };

            let scanned = tokio::task::spawn_blocking(move || {
                let text = match std::fs::read_to_string(&path) {
                    Ok(text) => text,
                    Err(e) => {
                        log::warn!("Skipping unreadable file {}: {}", display, e);
                        return None;
                    }
                };
                let mut found = SourceScan {
                    files_scanned: 1,
                    ..SourceScan::default()
                };
                match role {
                    Role::Frontend => found.calls = patterns.find_calls(&text, &display),
                    Role::Backend => found.routes = patterns.find_routes(&text, &display),
                }
                Some(found)
            })
            .await;

            match scanned {
                Ok(Some(found)) => merged
                    .lock()
                    .unwrap_or_else(|p| p.into_inner())
                    .merge(found),
                Ok(None) => {}
                Err(e) => log::warn!("Scan worker failed: {}", e),
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        if let Err(e) = handle.await {
            log::warn!("Scan task join error: {}", e);
        }
    }

    let mut scan = std::mem::take(&mut *merged.lock().unwrap_or_else(|p| p.into_inner()));
    scan.sort();
    log::debug!(
        "Found {} call site(s) and {} route(s) in {} file(s)",
        scan.calls.len(),
        scan.routes.len(),
        scan.files_scanned
    );
    Ok(scan)
}

#[cfg(test)]
#[path = "scanner_test.rs"]
mod tests;
