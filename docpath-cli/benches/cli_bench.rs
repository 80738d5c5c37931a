use std::process::Command;

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

fn docpath(work_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("docpath").expect("failed to locate docpath binary");
    cmd.current_dir(work_dir.path())
        .env("HOME", work_dir.path())
        .env_remove("DOCPATH_CONFIG")
        .env_remove("DOCPATH_DEFAULT_PROVIDER")
        .env_remove("DOCPATH_ROOTS")
        .env_remove("DOCPATH_OUTPUT_FORMAT");
    cmd
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("docpath").expect("failed to locate docpath binary");
            let output = cmd.arg("--version").output().expect("failed to run docpath");
            black_box(output);
        });
    });
}

fn bench_cli_normalize(c: &mut Criterion) {
    let work_dir = TempDir::new().expect("failed to create temp dir");

    c.bench_function("cli_normalize", |b| {
        b.iter(|| {
            let output = docpath(&work_dir)
                .args(["normalize", r"c:\assets\shaders\..\textures\"])
                .output()
                .expect("failed to run docpath normalize");
            assert!(output.status.success());
            black_box(output);
        });
    });
}

fn bench_cli_combine_with_config(c: &mut Criterion) {
    let work_dir = TempDir::new().expect("failed to create temp dir");
    std::fs::write(
        work_dir.path().join("docpath.yaml"),
        "default_provider: input\nroots:\n  - separator\n  - drive\n",
    )
    .expect("failed to write config");

    c.bench_function("cli_combine_file_with_config", |b| {
        b.iter(|| {
            let output = docpath(&work_dir)
                .args(["--format", "json", "combine-file", "/site", "posts/first.md"])
                .output()
                .expect("failed to run docpath combine-file");
            assert!(output.status.success());
            black_box(output);
        });
    });
}

criterion_group!(
    benches,
    bench_cli_startup,
    bench_cli_normalize,
    bench_cli_combine_with_config
);
criterion_main!(benches);
