//! The `classtree` command line.
//!
//! Every invocation builds the stock school layout in memory, attaches a
//! seeded roster and runs one command against it. Nothing is persisted.

pub mod commands;
pub mod paths;
pub mod seeder;

use std::io::Write;

use clap::{Parser, Subcommand, ValueEnum};
use classtree_config::{SeedConfig, StoreConfig};
use classtree_core::{AppError, PaginationParams};
use classtree_models::ClassFilterParams;
use classtree_observability::MetricsHandle;

use crate::modules::cascade::Roster;
use crate::store::ClassesStore;
use paths::{TargetKind, resolve_grade, resolve_level};

#[derive(Parser)]
#[command(name = "classtree")]
#[command(about = "classtree - Class hierarchy and derivation engine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Any hierarchy node that can be named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NodeKind {
    Level,
    Grade,
    SubGrade,
    Combination,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print levels, grades, sub-grades and combinations in display order
    Tree,
    /// List derived classes
    Classes {
        /// Only classes of this level
        #[arg(short = 'l', long)]
        level: Option<String>,

        /// Only classes of this grade (requires --level)
        #[arg(short = 'g', long, requires = "level")]
        grade: Option<String>,

        /// Case-insensitive substring of the class name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Classes per page (1-100)
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Page number, starting at 1
        #[arg(short = 'p', long)]
        page: Option<usize>,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show hierarchy totals
    Stats {
        /// Also print the Prometheus metrics rendering
        #[arg(long)]
        metrics: bool,
    },
    /// Show what deleting a node would remove
    Cascade {
        kind: TargetKind,
        /// Slash-separated names, e.g. "O-Level/S1"
        path: String,
    },
    /// Delete a node and regenerate the derived classes
    Delete {
        kind: TargetKind,
        /// Slash-separated names, e.g. "Primary/P1/A"
        path: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Check whether a name is free for a new node
    CheckName {
        kind: NodeKind,
        name: String,

        /// Parent path: a level for grades, LEVEL/GRADE for sub-grades and combinations
        #[arg(long)]
        parent: Option<String>,
    },
    /// Print the store as JSON
    Export,
}

/// State shared by every command of one invocation.
pub struct CliContext {
    pub store: ClassesStore,
    pub roster: Roster,
    pub metrics: Option<MetricsHandle>,
}

impl CliContext {
    /// The stock layout with a roster drawn from `seed_config`.
    pub fn seeded(
        store_config: &StoreConfig,
        seed_config: &SeedConfig,
        metrics: Option<MetricsHandle>,
    ) -> Self {
        let store = seeder::demo_store(store_config);
        let roster = seeder::seed_roster(&store, seed_config);
        Self {
            store,
            roster,
            metrics,
        }
    }
}

fn class_filters(
    store: &ClassesStore,
    level: Option<&str>,
    grade: Option<&str>,
    name: Option<String>,
    limit: usize,
    page: Option<usize>,
) -> Result<ClassFilterParams, AppError> {
    let level = level.map(|path| resolve_level(store, path)).transpose()?;
    let grade_id = match (level, grade) {
        (Some(level), Some(grade)) => {
            Some(resolve_grade(store, &format!("{}/{}", level.name, grade))?.id)
        }
        _ => None,
    };
    let pagination = match page {
        Some(page) => PaginationParams::page(limit, page),
        None => PaginationParams {
            limit: Some(limit),
            ..PaginationParams::default()
        },
    };

    Ok(ClassFilterParams {
        level_id: level.map(|l| l.id),
        grade_id,
        name,
        pagination,
    })
}

pub fn run<W: Write>(command: Commands, ctx: &mut CliContext, out: &mut W) -> Result<(), AppError> {
    match command {
        Commands::Tree => commands::tree(&ctx.store, out),
        Commands::Classes {
            level,
            grade,
            name,
            limit,
            page,
            json,
        } => {
            let filters = class_filters(
                &ctx.store,
                level.as_deref(),
                grade.as_deref(),
                name,
                limit,
                page,
            )?;
            commands::classes(&ctx.store, &filters, json, out)
        }
        Commands::Stats { metrics } => {
            let handle = if metrics { ctx.metrics.as_ref() } else { None };
            commands::stats(&ctx.store, handle, out)
        }
        Commands::Cascade { kind, path } => {
            commands::cascade(&ctx.store, &ctx.roster, kind, &path, out)
        }
        Commands::Delete { kind, path, yes } => {
            commands::delete(&mut ctx.store, &ctx.roster, kind, &path, yes, out).map(|_| ())
        }
        Commands::CheckName { kind, name, parent } => {
            commands::check_name(&ctx.store, kind, &name, parent.as_deref(), out)
        }
        Commands::Export => commands::export(&ctx.store, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classtree_config::IdStrategy;

    fn context() -> CliContext {
        let store_config = StoreConfig {
            id_strategy: IdStrategy::Sequential,
            ..StoreConfig::default()
        };
        CliContext::seeded(&store_config, &SeedConfig::default(), None)
    }

    fn run_args(ctx: &mut CliContext, args: &[&str]) -> Result<String, AppError> {
        let cli = Cli::try_parse_from(std::iter::once("classtree").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(cli.command, ctx, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_classes_filtered_by_grade() {
        let mut ctx = context();
        let text = run_args(&mut ctx, &["classes", "--level", "a-level", "--grade", "s5"]).unwrap();
        assert!(text.starts_with("S5 MCB"));
        assert!(text.contains("-- 5 of 5 classes"));
    }

    #[test]
    fn test_classes_json_page() {
        let mut ctx = context();
        let text = run_args(&mut ctx, &["classes", "--limit", "5", "--page", "2", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["meta"]["total"], 37);
        assert_eq!(value["meta"]["page"], 2);
        assert_eq!(value["data"][0]["name"], "P2 A");
    }

    #[test]
    fn test_grade_filter_requires_level() {
        let mut ctx = context();
        assert!(run_args(&mut ctx, &["classes", "--grade", "S5"]).is_err());
    }

    #[test]
    fn test_delete_sub_grade_via_cli() {
        let mut ctx = context();
        let text = run_args(&mut ctx, &["delete", "sub-grade", "Primary/P1/A", "--yes"]).unwrap();
        assert!(text.contains("Derived classes: 37 -> 36"));
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let mut ctx = context();
        let err = run_args(&mut ctx, &["cascade", "grade", "Primary/P9"]).unwrap_err();
        assert_eq!(err.kind, classtree_core::ErrorKind::NotFound);
    }
}
