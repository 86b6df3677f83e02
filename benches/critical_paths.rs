//! Criterion benchmarks for Pixelplay critical paths
//!
//! Benchmarks the operations run on every preview refresh:
//! - Extraction: collider fitting from a sprite image
//! - Scene builder: authoring snapshot to clamped scene
//! - Design compiler: entity list to scene
//! - Manifest: scene to deterministic game files

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use image::{Rgba, RgbaImage};
use pixelplay::extract::collider_from_image;
use pixelplay::manifest::{generate_manifest, to_canonical_json};
use pixelplay::models::{
    AbilitiesDraft, AuthoringSnapshot, BackgroundDraft, CharacterDraft, DesignDocument, Entity,
    EntityKind, Platform, Target, TargetKind,
};
use pixelplay::scene::{ensure_scene, to_scene_from_snapshot};

// =============================================================================
// Test Data Generators
// =============================================================================

/// Generate a square sprite with an opaque block in the middle
fn make_sprite(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    for y in size / 4..size * 3 / 4 {
        for x in size / 3..size * 2 / 3 {
            img.put_pixel(x, y, Rgba([200, 80, 40, 255]));
        }
    }
    img
}

/// Generate an authoring snapshot with `n` platforms and `n` coins
fn make_snapshot(n: usize) -> AuthoringSnapshot {
    let targets = (0..n)
        .map(|i| Target {
            x: (i * 40) as f64,
            y: 400.0,
            w: 28.0,
            h: 28.0,
            kind: TargetKind::Coin,
            props: None,
        })
        .collect();

    AuthoringSnapshot {
        characters: vec![CharacterDraft {
            name: Some("Hero".to_string()),
            abilities: Some(AbilitiesDraft { move_speed: Some(50_000.0), ..Default::default() }),
            ..Default::default()
        }],
        platforms: (0..n).map(|i| Platform::new((i * 64) as f64, 600.0, 64.0, 16.0)).collect(),
        background: Some(BackgroundDraft { targets: Some(targets), ..Default::default() }),
        ..Default::default()
    }
}

/// Generate a design document with `n` entities of mixed kinds
fn make_design(n: usize) -> DesignDocument {
    let kinds = [EntityKind::Platform, EntityKind::Coin, EntityKind::Hazard, EntityKind::Enemy];
    DesignDocument {
        entities: (0..n)
            .map(|i| {
                let mut entity = Entity::at(kinds[i % kinds.len()], (i * 30) as f64, 500.0);
                entity.w = Some(30.0);
                entity.h = Some(12.0);
                entity
            })
            .collect(),
        ..Default::default()
    }
}

// =============================================================================
// Extraction Benchmarks
// =============================================================================

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for size in [32u32, 128, 512] {
        let sprite = make_sprite(size);
        group.throughput(Throughput::Elements(u64::from(size * size)));
        group.bench_with_input(BenchmarkId::new("collider_from_image", size), &sprite, |b, img| {
            b.iter(|| collider_from_image(black_box(img)))
        });
    }

    group.finish();
}

// =============================================================================
// Scene Benchmarks
// =============================================================================

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene");

    for n in [10usize, 100, 1000] {
        let snapshot = make_snapshot(n);
        group.bench_with_input(BenchmarkId::new("to_scene", n), &snapshot, |b, snapshot| {
            b.iter(|| to_scene_from_snapshot(black_box(snapshot)))
        });

        let design = make_design(n);
        group.bench_with_input(BenchmarkId::new("ensure_scene", n), &design, |b, design| {
            b.iter(|| ensure_scene(black_box(design)))
        });
    }

    group.finish();
}

// =============================================================================
// Manifest Benchmarks
// =============================================================================

fn bench_manifest(c: &mut Criterion) {
    let mut group = c.benchmark_group("manifest");

    for n in [10usize, 100, 1000] {
        let scene = to_scene_from_snapshot(&make_snapshot(n));
        group.bench_with_input(BenchmarkId::new("canonical_json", n), &scene, |b, scene| {
            b.iter(|| to_canonical_json(black_box(scene)))
        });
        group.bench_with_input(BenchmarkId::new("generate_manifest", n), &scene, |b, scene| {
            b.iter(|| generate_manifest(black_box(scene)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract, bench_scene, bench_manifest);
criterion_main!(benches);
