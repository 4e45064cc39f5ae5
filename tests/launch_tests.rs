//! Tests for the service launcher.
//!
//! A stub runtime script stands in for the wrapped service: it records the
//! arguments it was invoked with and exits with a chosen code.

mod helpers;

use std::fs;

use corkbuild::config::ExecutionMode;
use corkbuild::error::PipelineError;
use corkbuild::launch::{launch, Invocation};
use corkbuild::materialize::{materialize, ConfigStrategy, RenderParams};
use helpers::{create_stub_runtime, TestEnv};

fn materialize_config(env: &TestEnv) {
    let strategy = ConfigStrategy::Rendered(RenderParams::default());
    materialize(&strategy, &env.private_config()).unwrap();
}

#[test]
fn launcher_passes_mode_then_module() {
    let env = TestEnv::new();
    materialize_config(&env);
    let stub = create_stub_runtime(&env.service_dir, 0);

    let invocation = Invocation::new(
        &stub.to_string_lossy(),
        ExecutionMode::Dev,
        "main.py",
    );
    let code = launch(&env.service_dir, &invocation).unwrap();

    assert_eq!(code, 0);
    let recorded = fs::read_to_string(env.service_dir.join("args.txt")).unwrap();
    assert_eq!(recorded.trim(), "dev main.py");
}

#[test]
fn launcher_forwards_nonzero_exit_code() {
    let env = TestEnv::new();
    materialize_config(&env);
    let stub = create_stub_runtime(&env.service_dir, 42);

    let invocation = Invocation::new(
        &stub.to_string_lossy(),
        ExecutionMode::Run,
        "main.py",
    );
    let code = launch(&env.service_dir, &invocation).unwrap();

    assert_eq!(code, 42);
}

#[test]
fn launcher_fails_fast_without_private_config() {
    let env = TestEnv::new();
    let stub = create_stub_runtime(&env.service_dir, 0);

    let invocation = Invocation::new(
        &stub.to_string_lossy(),
        ExecutionMode::Run,
        "main.py",
    );
    let err = launch(&env.service_dir, &invocation).unwrap_err();

    let pipeline_err = err.downcast_ref::<PipelineError>().unwrap();
    assert!(matches!(pipeline_err, PipelineError::ConfigNotFound { .. }));
    // The stub was never invoked.
    assert!(!env.service_dir.join("args.txt").exists());
}

#[test]
fn launcher_reports_missing_runtime() {
    let env = TestEnv::new();
    materialize_config(&env);

    let invocation = Invocation::new(
        "nonexistent_runtime_12345",
        ExecutionMode::Run,
        "main.py",
    );
    let err = launch(&env.service_dir, &invocation).unwrap_err();

    assert!(err.to_string().contains("Failed to execute"));
}

// End-to-end: materialize from explicit parameters, then launch in dev mode.
#[test]
fn build_then_launch_dev() {
    let env = TestEnv::new();
    let strategy = ConfigStrategy::Rendered(RenderParams {
        baseurl: "http://example.com".to_string(),
        port: "9090".to_string(),
        datadir: "/data".to_string(),
    });
    materialize(&strategy, &env.private_config()).unwrap();

    let content = fs::read_to_string(env.private_config()).unwrap();
    assert_eq!(
        content,
        "base_url = \"http://example.com:9090\"\ndata_dir = \"/data\"\n"
    );

    let stub = create_stub_runtime(&env.service_dir, 0);
    let invocation = Invocation::new(
        &stub.to_string_lossy(),
        ExecutionMode::Dev,
        "main.py",
    );
    let code = launch(&env.service_dir, &invocation).unwrap();

    assert_eq!(code, 0);
    let recorded = fs::read_to_string(env.service_dir.join("args.txt")).unwrap();
    assert_eq!(recorded.trim(), "dev main.py");
}
