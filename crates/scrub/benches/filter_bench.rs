use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;
use scrub::{FilterPolicy, normalize_response};
use serde_json::{Map, Value, json};

fn json_paginated(rows: usize) -> Value {
    let mut rng = rand::rng();
    let mut arr = Vec::with_capacity(rows);
    for i in 0..rows {
        arr.push(json!({
            "id": i as i64,
            "name": format!("contact-{}", rng.random_range(0..1_000_000)),
            "avatar_url": format!("https://cdn.example/{}.png", i),
            "phone": format!("+55{}", rng.random_range(10_000_000..100_000_000i64)),
            "meta": { "score": rng.random_range(0..100) }
        }));
    }
    json!({
        "data": arr,
        "links": { "next": "https://api/x?page=2", "prev": null },
        "meta": { "total": rows, "per_page": rows },
        "current_page": 1,
        "last_page": 1
    })
}

fn json_nested(depth: usize, breadth: usize) -> Value {
    fn rec(d: usize, b: usize) -> Value {
        if d == 0 {
            return json!({ "id": 1, "url": "https://leaf" });
        }
        let mut m = Map::new();
        for i in 0..b {
            m.insert(format!("k{}", i), rec(d - 1, b));
        }
        m.insert("next_page_url".into(), Value::Null);
        Value::Object(m)
    }
    rec(depth, breadth)
}

fn bench_paginated(c: &mut Criterion) {
    let policy = FilterPolicy::default();
    let mut group = c.benchmark_group("normalize_paginated");
    for rows in [100usize, 1000] {
        let payload = json_paginated(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_function(format!("rows_{}", rows), |b| {
            b.iter(|| normalize_response(black_box(&payload), true, &policy));
        });
    }
    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let policy = FilterPolicy::default();
    let payload = json_nested(6, 4);
    c.bench_function("filter_nested_6x4", |b| {
        b.iter(|| normalize_response(black_box(&payload), false, &policy));
    });
}

fn bench_allow_list(c: &mut Criterion) {
    let mut policy = FilterPolicy::default();
    policy.fields_to_keep.insert("id".into());
    policy.fields_to_keep.insert("name".into());
    policy.fields_to_keep.insert("data".into());
    let payload = json_paginated(1000);
    c.bench_function("normalize_allow_list_1k", |b| {
        b.iter(|| normalize_response(black_box(&payload), true, &policy));
    });
}

criterion_group!(benches, bench_paginated, bench_nested, bench_allow_list);
criterion_main!(benches);
