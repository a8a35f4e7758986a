//! Merge throughput over synthetic sorted inputs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::Rng;

use logmerge::{merge_logs, NullProgress};

/// Writes one sorted input of `records` log lines with random
/// interarrival gaps, returning its path and byte size.
fn generate_input(dir: &tempfile::TempDir, index: usize, records: usize) -> (PathBuf, u64) {
    let mut rng = rand::thread_rng();
    let path = dir.path().join(format!("input_{index}.json"));
    let mut writer = BufWriter::new(File::create(&path).unwrap());
    let mut ts = rng.gen_range(0u64..1_000);
    let mut bytes = 0u64;
    for seq in 0..records {
        ts += rng.gen_range(1u64..50);
        let line = format!(
            "{{\"timestamp\": \"{ts:012}\", \"source\": \"bench-{index}\", \"seq\": \"{seq}\"}}\n"
        );
        writer.write_all(line.as_bytes()).unwrap();
        bytes += line.len() as u64;
    }
    writer.flush().unwrap();
    (path, bytes)
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for (fan_in, records) in [(2usize, 20_000usize), (8, 5_000), (32, 1_250)] {
        let dir = tempfile::tempdir().unwrap();
        let mut inputs = Vec::with_capacity(fan_in);
        let mut total_bytes = 0u64;
        for index in 0..fan_in {
            let (path, bytes) = generate_input(&dir, index, records);
            inputs.push(path);
            total_bytes += bytes;
        }
        let output = dir.path().join("merged.json");

        group.throughput(Throughput::Bytes(total_bytes));
        group.bench_function(format!("{fan_in}x{records}"), |b| {
            b.iter(|| merge_logs(&inputs, &output, &mut NullProgress).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
