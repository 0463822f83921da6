use bitforge::field::Field;
use bitforge::schema::{FieldValues, Schema};
use bitforge::value::Value;
use criterion::{Criterion, criterion_group, criterion_main};

fn gen_fields(field_count: usize) -> Vec<Field> {
    let mut fields = Vec::with_capacity(field_count);

    for i in 0..field_count {
        fields.push(Field::flag(format!("f{}", i)));
    }

    fields
}

fn gen_values(field_count: usize) -> FieldValues {
    let mut values = FieldValues::new();

    // Deterministic but non-uniform pattern
    for i in 0..field_count {
        values.insert(format!("f{}", i), Value::Flag(i % 3 == 0));
    }

    values
}

fn bench_compile(c: &mut Criterion) {
    for &field_count in &[1usize, 10, 50] {
        let fields = gen_fields(field_count);

        c.bench_function(&format!("compile_{}_fields", field_count), |b| {
            b.iter(|| {
                let _ = Schema::compile(&fields).unwrap();
            })
        });
    }
}

fn bench_encode(c: &mut Criterion) {
    for &field_count in &[1usize, 10, 50] {
        let schema = Schema::compile(&gen_fields(field_count)).unwrap();
        let values = gen_values(field_count);

        c.bench_function(&format!("encode_{}_fields", field_count), |b| {
            b.iter(|| {
                let _ = schema.encode(&values).unwrap();
            })
        });
    }
}

fn bench_decode(c: &mut Criterion) {
    for &field_count in &[1usize, 10, 50] {
        let schema = Schema::compile(&gen_fields(field_count)).unwrap();
        let packed = schema.encode(&gen_values(field_count)).unwrap();

        c.bench_function(&format!("decode_{}_fields", field_count), |b| {
            b.iter(|| {
                let _ = schema.decode(packed).unwrap();
            })
        });
    }
}

criterion_group!(benches, bench_compile, bench_encode, bench_decode);
criterion_main!(benches);
