use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use golden_age_core::{AbilityPermissions, Cursor};
use golden_age_runtime::{
    GoldenAge, LifecycleKind, ProgramMetadata, Runtime, RuntimeConfig, RuntimeError, Shared,
    State2BitValue,
};

const METADATA: &str = r#"(
    core_principles: ["determinism"],
    injection_points: {"startup": "bootstrap"},
    assets: ["icon.png"],
    academics: ["arithmetic"],
    abilities: ["fly", "scan"],
    services: ["sync", "render"],
)"#;

fn metadata_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(METADATA.as_bytes()).unwrap();
    file
}

#[test]
fn runtime_loads_metadata_from_config_path() {
    let file = metadata_file();
    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            metadata_path: Some(file.path().to_path_buf()),
            ..RuntimeConfig::default()
        })
        .build()
        .unwrap();

    let program = runtime.program();
    assert_eq!(program.core_principles().to_vec(), vec!["determinism"]);
    assert_eq!(program.assets().to_vec(), vec!["icon.png"]);
    assert_eq!(program.academics().to_vec(), vec!["arithmetic"]);
    assert_eq!(program.abilities().len(), 2);
    assert_eq!(program.services().len(), 2);
    assert_eq!(
        program.injection_points().get("startup").map(String::as_str),
        Some("bootstrap")
    );
}

#[test]
fn missing_metadata_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = Runtime::builder()
        .config(RuntimeConfig {
            metadata_path: Some(dir.path().join("absent.ron")),
            ..RuntimeConfig::default()
        })
        .build()
        .unwrap_err();

    assert!(matches!(err, RuntimeError::ReadMetadata { .. }));
}

#[test]
fn abilities_follow_shared_permissions() {
    let permissions = Shared::new(AbilityPermissions::new());
    let file = metadata_file();
    let mut runtime = Runtime::builder()
        .config(RuntimeConfig {
            metadata_path: Some(file.path().to_path_buf()),
            ..RuntimeConfig::default()
        })
        .permissions(permissions.clone())
        .build()
        .unwrap();

    let program = runtime.program_mut();
    assert!(matches!(
        program.start_ability("fly"),
        Err(RuntimeError::AbilityNotPermitted(_))
    ));

    permissions.with(|p| p.grant_permission("fly")).unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    program
        .start_ability("fly")
        .unwrap()
        .observe(move |value| sink.borrow_mut().push(*value));
    assert_eq!(
        program.registry().state(LifecycleKind::Ability, "fly"),
        Some(State2BitValue::RUNNING)
    );

    // Revoking later does not stop an ability that is already running.
    permissions.with(|p| p.revoke_permission("fly")).unwrap();
    program.end_ability("fly").unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![State2BitValue::RUNNING, State2BitValue::IDLE]
    );
}

#[test]
fn services_and_tasks_run_side_by_side() {
    let file = metadata_file();
    let mut runtime = Runtime::builder()
        .config(RuntimeConfig {
            metadata_path: Some(file.path().to_path_buf()),
            ..RuntimeConfig::default()
        })
        .build()
        .unwrap();

    let program = runtime.program_mut();
    program.start_service("render").unwrap();
    program.start_service("sync").unwrap();
    program.begin_task("index").unwrap();

    let services: Vec<_> = program.registry().active(LifecycleKind::Service).collect();
    assert_eq!(services, ["render", "sync"]);

    program.end_service("render").unwrap();
    assert!(program.end_service("render").is_err());
    program.end_task("index").unwrap();
    assert_eq!(program.registry().active(LifecycleKind::Task).count(), 0);
}

#[test]
fn shared_cursor_is_reset_by_build() {
    let cursor = Shared::new(Cursor::with_sequence_size(3));
    cursor.with(|c| c.move_forward(2)).unwrap();

    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            sequence_size: 5,
            ..RuntimeConfig::default()
        })
        .cursor(cursor.clone())
        .build()
        .unwrap();

    runtime.cursor().with(|c| c.move_forward(100)).unwrap();
    assert_eq!(cursor.snapshot().unwrap().position(), 4);
    runtime.cursor().with(|c| c.move_backward(100)).unwrap();
    assert_eq!(cursor.snapshot().unwrap().position(), 0);
}

#[test]
fn counter_reports_every_click() {
    let mut runtime = Runtime::builder().build().unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = runtime
        .counter_mut()
        .count_mut()
        .observe(move |count| sink.borrow_mut().push(*count));

    for _ in 0..3 {
        runtime.counter_mut().increment();
    }
    assert!(runtime.counter_mut().count_mut().unsubscribe(subscription));
    runtime.counter_mut().increment();

    assert_eq!(*seen.borrow(), vec![0, 1, 2, 3]);
    assert_eq!(runtime.counter().value(), 4);
}
