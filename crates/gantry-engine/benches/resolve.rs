use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use gantry_engine::{
    builtins, Assembly, GuestValue, HostEnvironment, HostType, HostTypeBuilder, Projector,
    Resolver, TypeCache, TypeIdentity, TypeInfo,
};

struct BenchInfo {
    identity: TypeIdentity,
}

impl TypeInfo for BenchInfo {
    fn identity(&self) -> TypeIdentity {
        self.identity
    }

    fn name(&self) -> String {
        "IStream".to_string()
    }

    fn library(&self) -> String {
        "StreamLib".to_string()
    }
}

fn target_identity() -> TypeIdentity {
    let mut bytes = [0u8; 16];
    bytes[0] = 0xAA;
    TypeIdentity::from_bytes(bytes)
}

fn padding_identity(index: usize) -> TypeIdentity {
    let mut bytes = [0u8; 16];
    bytes[8..].copy_from_slice(&(index as u64).to_be_bytes());
    TypeIdentity::from_bytes(bytes)
}

/// Environment with `assemblies` assemblies of `types_each` exported
/// interfaces; the match sits in the last slot of the last assembly.
fn populated_env(assemblies: usize, types_each: usize) -> Arc<HostEnvironment> {
    let env = HostEnvironment::new();
    for a in 0..assemblies {
        let mut types = Vec::with_capacity(types_each);
        for t in 0..types_each {
            let last = a == assemblies - 1 && t == types_each - 1;
            let identity = if last {
                target_identity()
            } else {
                padding_identity(a * types_each + t + 1)
            };
            types.push(
                HostTypeBuilder::new(&format!("IPadding{}_{}", a, t))
                    .namespace("Bench")
                    .interface()
                    .identity(identity)
                    .imported()
                    .build(),
            );
        }
        env.register_assembly(&Assembly::new(&format!("bench.pack{}", a), types));
    }
    Arc::new(env)
}

fn bench_cached_resolution(c: &mut Criterion) {
    let env = populated_env(8, 32);
    let resolver = Resolver::with_cache(env, Arc::new(TypeCache::new()));
    let info = BenchInfo {
        identity: target_identity(),
    };
    resolver.resolve(&info);

    c.bench_function("resolve_cached", |b| {
        b.iter(|| resolver.resolve(black_box(&info)));
    });
}

fn bench_first_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_resolution");

    for assemblies in [1usize, 8, 32] {
        let env = populated_env(assemblies, 32);
        group.bench_with_input(
            BenchmarkId::new("scan", format!("{}x32", assemblies)),
            &env,
            |b, env| {
                b.iter_batched(
                    || Resolver::with_cache(env.clone(), Arc::new(TypeCache::new())),
                    |resolver| {
                        resolver.resolve(black_box(&BenchInfo {
                            identity: target_identity(),
                        }))
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    let empty = Arc::new(HostEnvironment::new());
    group.bench_with_input(
        BenchmarkId::new("synthesis", "empty_env"),
        &empty,
        |b, env| {
            b.iter_batched(
                || Resolver::with_cache(env.clone(), Arc::new(TypeCache::new())),
                |resolver| {
                    resolver.resolve(black_box(&BenchInfo {
                        identity: target_identity(),
                    }))
                },
                BatchSize::SmallInput,
            );
        },
    );

    group.finish();
}

fn bench_type_subscript(c: &mut Criterion) {
    let env = HostEnvironment::new();
    let pair = HostTypeBuilder::new("Pair`2")
        .namespace("Bench")
        .generic_definition(2)
        .build();
    env.register_type(&pair);
    let projector = Projector::with_private_cache(Arc::new(env));

    let array_index = GuestValue::Type(builtins::int64());
    c.bench_function("subscript_array", |b| {
        b.iter(|| {
            projector
                .type_subscript(&HostType::array_root(), black_box(&array_index))
                .unwrap()
        });
    });

    let plain = HostTypeBuilder::new("Pair").namespace("Bench").build();
    let pair_index = GuestValue::tuple(vec![
        GuestValue::Type(builtins::int64()),
        GuestValue::Type(builtins::text()),
    ]);
    c.bench_function("subscript_generic_delegated", |b| {
        b.iter(|| {
            projector
                .type_subscript(black_box(&plain), black_box(&pair_index))
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_cached_resolution,
    bench_first_resolution,
    bench_type_subscript
);

criterion_main!(benches);
