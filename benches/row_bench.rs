use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use mvtype::{DataType, IntType, LongType, ReadCursor, RowType, StringType, Value, WriteBuffer, row};

fn schema() -> RowType {
    RowType::new(vec![Arc::new(IntType), Arc::new(StringType), Arc::new(LongType)])
}

fn bench_write(c: &mut Criterion) {
    let rt = schema();
    let value = Value::Row(row![42, "customer-000042", 1i64 << 40]);
    let mut sink = WriteBuffer::with_capacity(64);

    c.bench_function("row_write", |b| {
        b.iter(|| {
            sink.clear();
            rt.write(&mut sink, black_box(&value)).unwrap();
        })
    });
}

fn bench_read(c: &mut Criterion) {
    let rt = schema();
    let mut sink = WriteBuffer::new();
    rt.write(&mut sink, &Value::Row(row![42, "customer-000042", 1i64 << 40]))
        .unwrap();
    let bytes = sink.into_vec();

    c.bench_function("row_read", |b| {
        b.iter(|| {
            let mut cursor = ReadCursor::new(black_box(&bytes));
            rt.read(&mut cursor).unwrap()
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let rt = schema();
    let a = Value::Row(row![42, "customer-000042", 1i64]);
    let b = Value::Row(row![42, "customer-000042", 2i64]);

    c.bench_function("row_compare", |bench| {
        bench.iter(|| rt.compare(black_box(&a), black_box(&b)))
    });
    c.bench_function("row_compare_identity", |bench| {
        bench.iter(|| rt.compare(black_box(&a), black_box(&a)))
    });
}

criterion_group!(benches, bench_write, bench_read, bench_compare);
criterion_main!(benches);
