//! Criterion benchmarks for channel_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use channel_logger::prelude::*;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// Message Building Benchmarks
// ============================================================================

fn bench_message_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_building");
    group.throughput(Throughput::Elements(1));

    let system = LoggerSystem::new();
    system.set_min_priority(Priority::Error);

    group.bench_function("filtered", |b| {
        let mut logger = Logger::on(&system);
        b.iter(|| {
            logger
                .push(black_box("request "))
                .push(black_box(42))
                .push(end());
        });
    });

    group.bench_function("reset", |b| {
        let mut logger = Logger::on(&system);
        b.iter(|| {
            logger.push(black_box("discarded text")).push(reset());
        });
    });

    group.finish();
}

// ============================================================================
// Submission Benchmarks
// ============================================================================

fn bench_submission(c: &mut Criterion) {
    let mut group = c.benchmark_group("submission");
    group.throughput(Throughput::Elements(1));

    let system = LoggerSystem::new();
    system.set_period(Duration::from_millis(1)).unwrap();
    let sink = Arc::new(Mutex::new(MemorySink::new()));
    system.set_output("bench", Output::shared(&sink));
    system.start();

    group.bench_function("single_channel", |b| {
        let mut logger = Logger::builder().channel("bench").build_on(&system);
        b.iter(|| {
            logger.push(black_box("Info message")).push(end());
        });
        sink.lock().take();
    });

    group.bench_function("unbound_channel", |b| {
        let mut logger = Logger::builder().channel("nowhere").build_on(&system);
        b.iter(|| {
            logger.push(black_box("Dropped message")).push(end());
        });
    });

    group.finish();
    system.stop();
}

fn bench_concurrent_submission(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_submission");

    let system = Arc::new(LoggerSystem::new());
    system
        .configure(LoggerConfig::new(Priority::Info, Duration::from_millis(1), 4))
        .unwrap();
    for i in 0..4 {
        system.set_output(format!("ch{}", i), Output::owned(MemorySink::new()));
    }
    system.start();

    group.bench_function("multi_thread_4", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let system = Arc::clone(&system);
                    std::thread::spawn(move || {
                        let mut logger = Logger::builder()
                            .channel(format!("ch{}", i))
                            .build_on(&system);
                        for _ in 0..100 {
                            logger.push(black_box("Concurrent message")).push(end());
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
    system.stop();
}

// ============================================================================
// Drain Benchmarks
// ============================================================================

fn bench_stop_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("stop_drain");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("1000_messages", |b| {
        let system = LoggerSystem::new();
        system.set_period(Duration::from_secs(3600)).unwrap();
        system.set_output("drain", Output::owned(WriterSink::new(std::io::sink())));
        b.iter(|| {
            system.start();
            let mut logger = Logger::builder().channel("drain").build_on(&system);
            for i in 0..1000 {
                logger.push("message ").push(i).push(end());
            }
            black_box(system.stop())
        });
    });

    group.finish();
}

fn bench_format_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_line");
    group.throughput(Throughput::Elements(1));

    let message = Message::new("bench", Priority::Warning, "disk usage at 93%");
    group.bench_function("plain", |b| {
        b.iter(|| black_box(message.format_line()));
    });

    let message = Message::new("bench", Priority::Warning, "line one\nline two\tcol");
    group.bench_function("escaped", |b| {
        b.iter(|| black_box(message.format_line()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_message_building,
    bench_submission,
    bench_concurrent_submission,
    bench_stop_drain,
    bench_format_line,
);
criterion_main!(benches);
