mod common;

use std::sync::atomic::Ordering;

use common::{Harness, tokens};
use routekit::application::ports::Repository;
use routekit::application::routing::error::{EXIT_BINDING, EXIT_HANDLER, EXIT_OK, EXIT_RESOLUTION};
use routekit::domain::logging::{LogVerbosity, Severity};
use routekit::interface::composition::{HostMode, build_host};

#[tokio::test]
async fn api_runs_execute_handler() {
    let harness = Harness::new();
    let host = build_host(harness.services(), harness.logger(), HostMode::Cli).expect("build");

    assert_eq!(host.parse(&tokens(&["api"])).await.code, EXIT_OK);
    assert!(harness.logger.messages(Severity::Error).is_empty());
}

#[tokio::test]
async fn api_log_uses_requested_severity() {
    let harness = Harness::new();
    let host = build_host(harness.services(), harness.logger(), HostMode::Cli).expect("build");

    assert_eq!(host.parse_line("api log --logLevel Warning").await.code, EXIT_OK);
    assert_eq!(harness.logger.messages(Severity::Warning), ["Warning"]);

    assert_eq!(host.parse_line("api log").await.code, EXIT_OK);
    assert_eq!(harness.logger.messages(Severity::Information), ["Information."]);
}

#[tokio::test]
async fn invalid_choice_is_a_binding_error() {
    let harness = Harness::new();
    let host = build_host(harness.services(), harness.logger(), HostMode::Cli).expect("build");

    assert_eq!(host.parse_line("api log --logLevel Loud").await.code, EXIT_BINDING);
    let errors = harness.logger.messages(Severity::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Loud"));
}

#[tokio::test]
async fn logging_configure_changes_shared_verbosity() {
    let harness = Harness::new();
    let host = build_host(harness.services(), harness.logger(), HostMode::Cli).expect("build");

    assert_eq!(
        host.parse_line("logging configure --verbosity Verbose").await.code,
        EXIT_OK
    );
    assert_eq!(harness.context.verbosity.get(), LogVerbosity::Verbose);

    assert_eq!(host.parse_line("logging configure").await.code, EXIT_OK);
    assert_eq!(harness.context.verbosity.get(), LogVerbosity::Minimal);
}

#[tokio::test]
async fn unknown_command_reports_resolution_error() {
    let harness = Harness::new();
    let host = build_host(harness.services(), harness.logger(), HostMode::Cli).expect("build");

    assert_eq!(host.parse_line("bogus").await.code, EXIT_RESOLUTION);
    assert_eq!(host.parse(&[]).await.code, EXIT_RESOLUTION);

    let errors = harness.logger.entries();
    assert!(errors.iter().all(|entry| entry.system == "commands"));
    assert!(errors[0].message.contains("bogus"));
}

#[tokio::test]
async fn shell_commands_exist_only_in_repl_mode() {
    let harness = Harness::new();
    let cli = build_host(harness.services(), harness.logger(), HostMode::Cli).expect("build");
    assert_eq!(cli.parse_line("clear").await.code, EXIT_RESOLUTION);

    let repl = build_host(harness.services(), harness.logger(), HostMode::Repl).expect("build");
    assert_eq!(repl.parse_line("clear").await.code, EXIT_OK);
    assert_eq!(harness.screen.0.load(Ordering::SeqCst), 1);
}

#[test]
fn rebuilding_yields_the_same_tree() {
    let harness = Harness::new();
    let first = build_host(harness.services(), harness.logger(), HostMode::Repl).expect("build");
    let second = build_host(harness.services(), harness.logger(), HostMode::Repl).expect("build");

    let outline = first.tree().expect("built").outline();
    assert_eq!(outline, second.tree().expect("built").outline());
    for expected in ["api", "position", "config", "logging", "exit", "clear"] {
        assert!(
            outline.iter().any(|line| line.starts_with(expected)),
            "missing {expected} in {outline:?}"
        );
    }
}

#[tokio::test]
async fn repeated_dispatch_is_idempotent() {
    let harness = Harness::new();
    let host = build_host(harness.services(), harness.logger(), HostMode::Cli).expect("build");

    for _ in 0..3 {
        assert_eq!(host.parse_line("api log --logLevel Error").await.code, EXIT_OK);
    }
    assert_eq!(harness.logger.messages(Severity::Error), ["Error", "Error", "Error"]);
}

#[tokio::test]
async fn position_lifecycle_goes_through_the_repository() {
    let harness = Harness::new();
    let host = build_host(harness.services(), harness.logger(), HostMode::Cli).expect("build");

    assert_eq!(host.parse_line("position add 3 -4").await.code, EXIT_OK);
    let stored = harness.repository.get_all();
    assert_eq!(stored.len(), 1);
    assert_eq!((stored[0].x, stored[0].y), (3, -4));
    let id = stored[0].id.clone();

    assert_eq!(host.parse_line(&format!("position get {}", id.to_uppercase())).await.code, EXIT_OK);
    assert_eq!(host.parse_line(&format!("position move {id} 7 8")).await.code, EXIT_OK);
    let moved = harness.repository.get_by_id(&id).expect("still stored");
    assert_eq!((moved.x, moved.y), (7, 8));

    assert_eq!(host.parse_line(&format!("position remove {id}")).await.code, EXIT_OK);
    assert!(harness.repository.get_all().is_empty());
    assert_eq!(host.parse_line(&format!("position get {id}")).await.code, EXIT_HANDLER);
}

#[tokio::test]
async fn position_add_requires_both_coordinates() {
    let harness = Harness::new();
    let host = build_host(harness.services(), harness.logger(), HostMode::Cli).expect("build");

    assert_eq!(host.parse_line("position add 1").await.code, EXIT_BINDING);
    assert_eq!(host.parse_line("position add one 2").await.code, EXIT_BINDING);
    assert!(harness.repository.get_all().is_empty());
}

#[tokio::test]
async fn storage_failure_surfaces_as_handler_error() {
    let harness = Harness::new();
    let host = build_host(harness.services(), harness.logger(), HostMode::Cli).expect("build");
    harness.repository.set_simulate_write_error(true);

    assert_eq!(host.parse_line("position add 1 2").await.code, EXIT_HANDLER);
    let errors = harness.logger.messages(Severity::Error);
    assert!(errors[0].contains("failed to store position"));
}

#[tokio::test]
async fn help_flags_do_not_hide_routing_errors() {
    let harness = Harness::new();
    let host = build_host(harness.services(), harness.logger(), HostMode::Cli).expect("build");

    assert_eq!(host.parse_line("bogus --help").await.code, EXIT_RESOLUTION);
    assert_eq!(host.parse_line("api nope -?").await.code, EXIT_RESOLUTION);
    assert_eq!(host.parse_line("api log --logLevel -h").await.code, EXIT_BINDING);

    let report = host.parse_line("api log --help").await;
    assert_eq!(report.code, EXIT_OK);
    assert!(report.help.expect("help text").contains("--logLevel"));
}
