//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to drive the bridge end-to-end:
//!   snapshot JSON in, one `fieldset<TAB>summary` line out per fieldset.
//! - Keep output deterministic for quick local sanity checks.

use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (snapshot_path, catalog_path) = match args.as_slice() {
        [snapshot] => (snapshot.as_str(), None),
        [snapshot, catalog] => (snapshot.as_str(), Some(catalog.as_str())),
        _ => {
            eprintln!("usage: pointsadmin_cli <snapshot.json> [catalog.txt]");
            return ExitCode::from(2);
        }
    };

    println!("pointsadmin_core ping={}", pointsadmin_core::ping());
    println!("pointsadmin_core version={}", pointsadmin_core::core_version());

    if let Some(catalog_path) = catalog_path {
        let catalog_text = match std::fs::read_to_string(catalog_path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("failed to read catalog `{catalog_path}`: {err}");
                return ExitCode::from(2);
            }
        };
        let error = pointsadmin_bridge::load_catalog(catalog_text);
        if !error.is_empty() {
            eprintln!("failed to load catalog `{catalog_path}`: {error}");
            return ExitCode::FAILURE;
        }
    }

    let form_json = match std::fs::read_to_string(snapshot_path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("failed to read snapshot `{snapshot_path}`: {err}");
            return ExitCode::from(2);
        }
    };

    let response = pointsadmin_bridge::fieldset_summaries(form_json);
    if !response.ok {
        eprintln!("{}", response.message);
        return ExitCode::FAILURE;
    }
    for item in response.items {
        println!("{}\t{}", item.fieldset, item.summary);
    }
    ExitCode::SUCCESS
}
