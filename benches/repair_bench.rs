use criterion::{Criterion, criterion_group, criterion_main};
use jsonmend::{Options, locate, repair_to_string};

fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair");
    let cases = vec![
        r#"{a:1}"#,
        r#"// comment
        {'a': 1, /*b*/ "b": 2,}
        "#,
        r#"callback({"items": [1, 2, 3,]});"#,
        r#"{"_id": ObjectId("507f1f77bcf86cd799439011"), d: ISODate('2012-12-19')}"#,
        "{\u{201C}quoted\u{201D}: \u{2018}smart\u{2019}}",
        r#"{"text": "The quick brown fox, \n jumps""#,
    ];
    let opts = Options::default();
    for (i, s) in cases.into_iter().enumerate() {
        group.bench_function(format!("case_{}", i), |b| {
            b.iter(|| {
                let out = repair_to_string(std::hint::black_box(s), &opts);
                std::hint::black_box(out);
            })
        });
    }
    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");
    let text = r#"{"users": [{"name": "a", "tags": [1, 2]}, {"name": "b", "tags": []}]}"#;
    let expressions = [".users[0].name", ".users[1].tags", ".users[0].tags[1]"];
    group.bench_function("three_expressions", |b| {
        b.iter(|| {
            let out = locate(std::hint::black_box(text), &expressions);
            std::hint::black_box(out);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_repair, bench_locate);
criterion_main!(benches);
