//! Event Bus Benchmarks
//!
//! Measures publish fan-out cost as the registry grows, contended publishing
//! from several threads, and register/unregister churn.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use eventbus::bus::{EventBus, Subscriber};
use eventbus::events::{Event, EventCode};

/// Counts deliveries and nothing else
#[derive(Default)]
struct Sink {
    delivered: AtomicUsize,
}

impl Subscriber for Sink {
    fn receive(&self, _event: &Event) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }
}

fn quiet_bus() -> Arc<EventBus> {
    Arc::new(EventBus::with_observer(Arc::new(|_: &Event| {})))
}

fn populated_bus(subscribers: usize) -> Arc<EventBus> {
    let bus = quiet_bus();
    for _ in 0..subscribers {
        bus.register(Arc::new(Sink::default()));
    }
    bus
}

/// Single publisher, growing fan-out
fn bench_publish_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("publish_fan_out");
    let event = Event::new(EventCode::StatusHealthy, "bench");

    for subscribers in [1, 8, 64, 256] {
        let bus = populated_bus(subscribers);
        group.throughput(Throughput::Elements(subscribers as u64));
        group.bench_with_input(BenchmarkId::from_parameter(subscribers), &subscribers, |b, _| {
            b.iter(|| bus.publish(event.clone()));
        });
    }
    group.finish();
}

/// Several threads publishing into the same registry
fn bench_contended_publish(c: &mut Criterion) {
    const EVENTS_PER_THREAD: usize = 1000;
    let mut group = c.benchmark_group("contended_publish");

    for threads in [2, 4, 8] {
        let bus = populated_bus(16);
        group.throughput(Throughput::Elements((threads * EVENTS_PER_THREAD) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter(|| {
                thread::scope(|scope| {
                    for _ in 0..threads {
                        scope.spawn(|| {
                            for _ in 0..EVENTS_PER_THREAD {
                                bus.publish(Event::from_static(EventCode::StatusChanged, "bench"));
                            }
                        });
                    }
                });
            });
        });
    }
    group.finish();
}

/// Register followed by unregister of one subscriber beside a stable population
fn bench_membership_churn(c: &mut Criterion) {
    let bus = populated_bus(32);
    let transient = Arc::new(Sink::default());

    c.bench_function("register_unregister", |b| {
        b.iter(|| {
            bus.register(transient.clone());
            bus.unregister(&transient);
        });
    });
}

criterion_group!(
    bus_benches,
    bench_publish_fan_out,
    bench_contended_publish,
    bench_membership_churn
);
criterion_main!(bus_benches);
