use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use devhub_core::demo;
use devhub_core::{
    default_log_level, init_logging, DragConfig, DragEnd, DragGesture, KeyOutcome,
    KeyStroke, PaletteConfig, PaletteController, PaletteIntent, SearchResults,
};
use log::info;
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, Commands, PaletteArgs, ReorderArgs, SearchArgs};

/// On-disk CLI configuration. Missing sections fall back to defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CliConfig {
    pub palette: PaletteConfig,
    pub drag: DragConfig,
}

#[derive(Debug, Serialize)]
pub(crate) struct PaletteReport {
    pub query: String,
    pub is_open: bool,
    pub active_index: usize,
    pub active_record: Option<String>,
    pub result_count: usize,
    pub intents: Vec<PaletteIntent>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReorderReport {
    pub committed: bool,
    pub items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled: Option<String>,
}

pub(crate) fn run(cli: Cli) -> Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let dir = log_dir
            .to_str()
            .with_context(|| format!("log dir is not valid UTF-8: {}", log_dir.display()))?;
        init_logging(level, dir).context("failed to start logging")?;
    }
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Ping => {
            println!("devhub_core ping={}", devhub_core::ping());
            println!("devhub_core version={}", devhub_core::core_version());
        }
        Commands::Search(args) => run_search(&config.palette, &args)?,
        Commands::Palette(args) => {
            let report = run_palette(config.palette, &args)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Reorder(args) => {
            let report = run_reorder(config.drag, &args);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

pub(crate) fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: CliConfig = serde_json::from_str(&raw)
        .with_context(|| format!("invalid config json in {}", path.display()))?;
    config.palette.validate()?;
    config.drag.validate()?;
    Ok(config)
}

fn run_search(config: &PaletteConfig, args: &SearchArgs) -> Result<()> {
    let index = demo::dashboard().build_index();

    if args.scores {
        let hits = index.matches(&args.query, config.threshold);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&hits)?);
            return Ok(());
        }
        for hit in hits {
            println!(
                "{:.3}  {:<8}  {}  ({})",
                hit.score,
                hit.record.kind.label(),
                hit.record.title,
                hit.record.id
            );
        }
        return Ok(());
    }

    let results = index.search(&args.query, config);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", render_groups(&results));
    }
    Ok(())
}

fn render_groups(results: &SearchResults) -> String {
    if results.is_empty() {
        return "No results found.\n".to_string();
    }
    let mut out = String::new();
    for group in &results.groups {
        out.push_str(&group.title);
        out.push('\n');
        for record in &group.items {
            out.push_str(&format!("  {:<8}  {}", record.kind.label(), record.title));
            if let Some(subtitle) = record.subtitle.as_deref() {
                out.push_str(&format!("  - {subtitle}"));
            }
            out.push('\n');
        }
    }
    out
}

pub(crate) fn run_palette(config: PaletteConfig, args: &PaletteArgs) -> Result<PaletteReport> {
    let strokes = args
        .keys
        .iter()
        .map(|name| {
            name.parse::<KeyStroke>()
                .with_context(|| format!("bad --keys entry `{name}`"))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut palette = PaletteController::new(demo::dashboard().build_index(), config);
    let _ = palette.open();
    palette.set_query(args.query.as_str());

    let mut intents = Vec::new();
    for stroke in &strokes {
        if let KeyOutcome::Confirmed(intent) = palette.handle_key(stroke) {
            intents.push(intent);
        }
    }

    Ok(PaletteReport {
        query: palette.state().query.clone(),
        is_open: palette.is_open(),
        active_index: palette.state().active_index,
        active_record: palette.active_record().map(|record| record.id.clone()),
        result_count: palette.results().flattened_len(),
        intents,
    })
}

pub(crate) fn run_reorder(config: DragConfig, args: &ReorderArgs) -> ReorderReport {
    let mut gesture: DragGesture<String> = DragGesture::new(config);
    if gesture.keyboard_activate(args.from.clone()).is_err() {
        return ReorderReport {
            committed: false,
            items: args.items.clone(),
            cancelled: Some("already_active".to_string()),
        };
    }

    match gesture.drop_keyed(Some(args.to.as_str()), &args.items) {
        DragEnd::Committed { plan, items } => {
            info!(
                "event=cli_reorder module=cli status=ok from_index={} to_index={}",
                plan.from_index, plan.to_index
            );
            ReorderReport {
                committed: true,
                items,
                cancelled: None,
            }
        }
        DragEnd::Cancelled(reason) => ReorderReport {
            committed: false,
            items: args.items.clone(),
            cancelled: Some(format!("{reason:?}")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn palette_keys_walk_to_confirmation() {
        let args = PaletteArgs {
            query: "projects".to_string(),
            keys: vec!["enter".to_string()],
        };
        let report = run_palette(PaletteConfig::default(), &args).expect("palette run");
        assert!(!report.is_open);
        assert_eq!(
            report.intents,
            vec![PaletteIntent::Navigate {
                path: "/projects".to_string(),
                focus: None
            }]
        );
    }

    #[test]
    fn unknown_key_name_is_an_error() {
        let args = PaletteArgs {
            query: String::new(),
            keys: vec!["pagedown".to_string()],
        };
        assert!(run_palette(PaletteConfig::default(), &args).is_err());
    }

    #[test]
    fn reorder_reports_new_order() {
        let args = ReorderArgs {
            items: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            from: "a".to_string(),
            to: "b".to_string(),
        };
        let report = run_reorder(DragConfig::default(), &args);
        assert!(report.committed);
        assert_eq!(report.items, vec!["b", "a", "c"]);
    }

    #[test]
    fn reorder_with_missing_key_is_cancelled() {
        let args = ReorderArgs {
            items: vec!["a".to_string(), "b".to_string()],
            from: "a".to_string(),
            to: "z".to_string(),
        };
        let report = run_reorder(DragConfig::default(), &args);
        assert!(!report.committed);
        assert_eq!(report.items, vec!["a", "b"]);
        assert!(report.cancelled.is_some());
    }

    #[test]
    fn config_file_is_validated() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"palette":{{"threshold":1.5}}}}"#).expect("write config");
        assert!(load_config(Some(file.path())).is_err());

        let mut good = tempfile::NamedTempFile::new().expect("temp file");
        write!(good, r#"{{"palette":{{"recent_projects":5}}}}"#).expect("write config");
        let config = load_config(Some(good.path())).expect("valid config");
        assert_eq!(config.palette.recent_projects, 5);
        assert_eq!(config.drag, DragConfig::default());
    }

    #[test]
    fn empty_results_render_placeholder() {
        assert_eq!(render_groups(&SearchResults::default()), "No results found.\n");
    }
}
