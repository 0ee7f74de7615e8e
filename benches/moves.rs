use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use tmlvm::Vm;

const RIGHT: u8 = 1;
const RIGHT_N: u8 = 3;
const WRITE_VAL: u8 = 5;
const FINAL_STATE: u8 = 14;
const OTHER: u8 = 18;

fn header(entry: u32) -> Vec<u8> {
    let mut image = vec![0u8, 0u8];
    image.extend_from_slice(&entry.to_le_bytes());
    image
}

/// A self-looping rule that steps the head right by one and re-enters
/// itself: the cheapest possible move, dominated by dispatch overhead.
fn stepping_image() -> Vec<u8> {
    let entry = 6u32;
    let mut image = header(entry);
    image.push(OTHER);
    image.push(RIGHT);
    image.push(FINAL_STATE);
    image.extend_from_slice(&entry.to_le_bytes());
    image
}

/// A self-looping rule that writes a non-zero symbol 256 cells further
/// right every move, forcing repeated tape growth.
fn growing_image() -> Vec<u8> {
    let entry = 6u32;
    let mut image = header(entry);
    image.push(OTHER);
    image.push(RIGHT_N);
    image.push(255);
    image.push(WRITE_VAL);
    image.extend_from_slice(&7u16.to_le_bytes());
    image.push(FINAL_STATE);
    image.extend_from_slice(&entry.to_le_bytes());
    image
}

fn moves_benchmark(c: &mut Criterion) {
    let _ = env_logger::builder().try_init();

    let mut group = c.benchmark_group("moves");
    group.measurement_time(Duration::new(10, 0));

    let step_image = stepping_image();
    group.bench_function("ten_thousand_right_steps", |b| {
        b.iter(|| {
            let mut vm = Vm::init_tape(&[0]);
            vm.run(&step_image, 10_000).unwrap();
        })
    });

    let growth_image = growing_image();
    group.bench_function("one_thousand_growing_writes", |b| {
        b.iter(|| {
            let mut vm = Vm::init_tape(&[]);
            vm.run(&growth_image, 1_000).unwrap();
        })
    });

    group.finish();
}

criterion_group![
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = moves_benchmark
];
criterion_main!(benches);
