use clap::Parser;
use classtree::cli::seeder::{demo_store, seed_roster};
use classtree::cli::{Cli, CliContext, run};
use classtree::{ClassService, StudentCounts};
use classtree_config::{IdStrategy, SeedConfig, StoreConfig};
use classtree_core::{AppError, ErrorKind};

fn store_config() -> StoreConfig {
    StoreConfig {
        id_strategy: IdStrategy::Sequential,
        ..StoreConfig::default()
    }
}

fn run_args(ctx: &mut CliContext, args: &[&str]) -> Result<String, AppError> {
    let cli = Cli::try_parse_from(std::iter::once("classtree").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    run(cli.command, ctx, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_demo_store_is_deterministic() {
    let first = demo_store(&store_config());
    let second = demo_store(&store_config());

    assert_eq!(first.derived_classes(), second.derived_classes());
    assert_eq!(
        ClassService::fingerprint(&first),
        ClassService::fingerprint(&second)
    );
}

#[test]
fn test_cascade_command_uses_seeded_roster() {
    let seed = SeedConfig::default().with_students(30, 30);
    let mut ctx = CliContext::seeded(&store_config(), &seed, None);

    let text = run_args(&mut ctx, &["cascade", "grade", "o-level/s1"]).unwrap();
    assert!(text.contains("sub-grades: 3"));
    assert!(text.contains("students:   90"));

    let text = run_args(&mut ctx, &["cascade", "level", "A-Level"]).unwrap();
    assert!(text.contains("grades:     2"));
    assert!(text.contains("sub-grades: 0"));
    assert!(text.contains("students:   300"));
}

#[test]
fn test_seeded_roster_respects_bounds() {
    let store = demo_store(&store_config());
    let config = SeedConfig::default().with_students(10, 12);
    let roster = seed_roster(&store, &config);

    for class in store.derived_classes() {
        let size = roster.student_count_for(class.id.into_inner());
        assert!((10..=12).contains(&size), "{} has {}", class.name, size);
    }
}

#[test]
fn test_export_then_delete() {
    let mut ctx = CliContext::seeded(&store_config(), &SeedConfig::default(), None);

    let json = run_args(&mut ctx, &["export"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["stats"]["derived_classes"], 37);
    assert_eq!(value["levels"].as_array().map(Vec::len), Some(4));

    run_args(&mut ctx, &["delete", "grade", "A-Level/S6", "-y"]).unwrap();
    let text = run_args(&mut ctx, &["stats"]).unwrap();
    assert!(text.contains("derived classes: 32"));
}

#[test]
fn test_check_name_exit_kinds() {
    let mut ctx = CliContext::seeded(&store_config(), &SeedConfig::default(), None);

    let err = run_args(&mut ctx, &["check-name", "sub-grade", "a", "--parent", "Primary/P1"])
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(err.kind.exit_code(), 5);

    let err = run_args(&mut ctx, &["check-name", "grade", "P1", "--parent", "Secondary"])
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    let result = run_args(&mut ctx, &["check-name", "combination", "MCB", "--parent", "A-Level/S6"]);
    assert!(result.is_err());

    let text = run_args(&mut ctx, &["check-name", "sub-grade", "A", "--parent", "A-Level/S5"])
        .unwrap();
    assert!(text.contains("note: S5 already has combinations"));
    assert!(text.contains("'A' is available in S5"));
}
