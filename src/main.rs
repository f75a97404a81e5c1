use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;

use hitbase::config::{AppPaths, BuildMode};
use hitbase::runtime::Deployment;
use hitbase::storage::models::{Hit, HitsExport};
use hitbase::storage::{self, HitStore};
use hitbase::textarea::parse_textarea;

#[derive(Parser)]
#[command(name = "hits", version, about = "A local-or-remote store for hit records")]
struct Cli {
    /// Output results as JSON
    #[arg(short = 'j', long = "json", global = true)]
    json: bool,

    /// Send every operation to a remote API server instead of the local database
    #[arg(long, global = true, value_name = "URL")]
    server: Option<String>,

    /// Path of the local database file
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse textarea-format lines and insert them
    Import {
        /// File to read; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Show stored hits
    List,

    /// Write every stored hit to a JSON export
    Export {
        /// Destination file; stdout when omitted
        file: Option<PathBuf>,
    },

    /// Insert hits from an export file
    Restore {
        /// Export file produced by `hits export`
        file: PathBuf,
    },

    /// Delete every stored hit
    Clean,
}

#[derive(Serialize)]
struct StatusResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(e) = run(cli) {
        if json {
            eprintln!("{}", serde_json::json!({"error": e.to_string()}));
        } else {
            eprintln!("error: {}", e);
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> hitbase::errors::Result<()> {
    let json = cli.json;
    let deployment = Deployment::detect(cli.server.as_deref());
    let paths = match cli.db {
        Some(db_path) => AppPaths::from_db_path(db_path),
        None => AppPaths::resolve(BuildMode::current())?,
    };

    let mut store = storage::from_deployment(&deployment, &paths)?;
    store.open_database()?;
    store.init_tables()?;

    let result = match cli.command {
        None | Some(Commands::List) => cmd_list(store.as_ref(), json),
        Some(Commands::Import { file }) => cmd_import(store.as_ref(), file.as_deref(), json),
        Some(Commands::Export { file }) => cmd_export(store.as_ref(), file.as_deref(), json),
        Some(Commands::Restore { file }) => cmd_restore(store.as_ref(), &file, json),
        Some(Commands::Clean) => cmd_clean(store.as_ref(), json),
    };

    if let Err(e) = store.close_database() {
        eprintln!("hitbase: close error: {}", e);
    }
    result
}

fn cmd_import(store: &dyn HitStore, file: Option<&Path>, json: bool) -> hitbase::errors::Result<()> {
    let input = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let hits = parse_textarea(&input);
    let count = hits.len();
    let success = store.insert_hits_from_textarea(&hits);
    let message = if success {
        format!("Imported {} hit(s).", count)
    } else {
        format!("Import finished with errors; attempted {} hit(s).", count)
    };
    print_status(json, success, message, Some(count));
    Ok(())
}

fn cmd_list(store: &dyn HitStore, json: bool) -> hitbase::errors::Result<()> {
    let hits = store.get_hits();

    if json {
        println!("{}", serde_json::to_string(&hits).unwrap());
        return Ok(());
    }

    if hits.is_empty() {
        println!("No hits stored.");
        return Ok(());
    }

    for hit in &hits {
        print_hit_row(hit);
    }
    Ok(())
}

fn cmd_export(store: &dyn HitStore, file: Option<&Path>, json: bool) -> hitbase::errors::Result<()> {
    let hits = store.get_hits();
    let count = hits.len();
    let export = HitsExport {
        exported_at: Some(Utc::now()),
        hits,
    };
    let body = serde_json::to_string_pretty(&export).unwrap();

    match file {
        Some(path) => {
            fs::write(path, &body)?;
            print_status(
                json,
                true,
                format!("Exported {} hit(s) to {}.", count, path.display()),
                Some(count),
            );
        }
        None => println!("{}", body),
    }
    Ok(())
}

fn cmd_restore(store: &dyn HitStore, file: &Path, json: bool) -> hitbase::errors::Result<()> {
    let content = fs::read_to_string(file)?;
    let export: HitsExport = serde_json::from_str(&content).map_err(|e| {
        hitbase::errors::StoreError::InvalidInput(format!("{}: {}", file.display(), e))
    })?;

    let count = export.hits.len();
    let success = store.insert_hits_from_display(&export.hits);
    let message = if success {
        format!("Restored {} hit(s).", count)
    } else {
        "Restore aborted on a failed record.".to_string()
    };
    print_status(json, success, message, Some(count));
    Ok(())
}

fn cmd_clean(store: &dyn HitStore, json: bool) -> hitbase::errors::Result<()> {
    let success = store.clean_hits();
    let message = if success {
        "Removed all hits."
    } else {
        "Clean failed."
    };
    print_status(json, success, message.to_string(), None);
    Ok(())
}

fn print_status(json: bool, success: bool, message: String, count: Option<usize>) {
    if json {
        println!(
            "{}",
            serde_json::to_string(&StatusResponse {
                success,
                message,
                count,
            })
            .unwrap()
        );
    } else {
        println!("{}", message);
    }
}

fn print_hit_row(hit: &Hit) {
    let marker = if hit.original { "O" } else { "C" };
    let index = match hit.original_index {
        Some(i) => i.to_string(),
        None => "-".to_string(),
    };
    let title = hit.title.as_deref().unwrap_or("");

    let text = hit.text.as_deref().unwrap_or("");
    let oneline = text.replace('\n', "\\n");
    let preview = if oneline.chars().count() > 60 {
        let head: String = oneline.chars().take(57).collect();
        format!("{}...", head)
    } else {
        oneline
    };

    println!("{:>4} {} {:<12} {}", index, marker, title, preview);
}
