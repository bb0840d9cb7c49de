use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqltpl::{QueryTemplate, SqlValue, format_value};

/// Build a template with `n` placeholders and `n` bound parameters:
/// SELECT * FROM t WHERE col0 = {p0} AND col1 = {p1} ...
fn build_template(n: usize) -> QueryTemplate {
    let mut text = String::from("SELECT * FROM t WHERE ");
    for i in 0..n {
        if i > 0 {
            text.push_str(" AND ");
        }
        text.push_str(&format!("col{i} = {{p{i}}}"));
    }

    let mut q = QueryTemplate::new(text).unwrap();
    for i in 0..n {
        q.add_parameter(format!("p{i}"), i as i64).unwrap();
    }
    q
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("template/build");

    for n in [1, 5, 10, 50] {
        let q = build_template(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(q.build().unwrap()));
        });
    }

    group.finish();
}

fn bench_format_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("template/format_value");

    let cases: Vec<(&str, SqlValue)> = vec![
        ("null", SqlValue::Null),
        ("int", SqlValue::Int(123_456)),
        ("text", SqlValue::Text("O'Reilly & Sons, publisher".into())),
        ("bytes", SqlValue::Bytes(vec![0xAB; 64])),
    ];

    for (name, value) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |b, value| {
            b.iter(|| black_box(format_value(value.clone())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_format_value);
criterion_main!(benches);
