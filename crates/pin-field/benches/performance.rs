use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use pin_field::{KeyInput, MemorySlots, PinField, PinFieldConfig, Validator};

fn numeric_field(length: usize) -> PinField<MemorySlots> {
    let config = PinFieldConfig::new(length)
        .unwrap()
        .with_validator(Validator::numeric());
    PinField::new(config, MemorySlots::new(length)).unwrap()
}

fn bench_typing_full_code(c: &mut Criterion) {
    c.bench_function("typing/6_digits", |b| {
        b.iter_batched(
            || numeric_field(6),
            |mut field| {
                for (idx, ch) in "123456".chars().enumerate() {
                    field.handle_key_down(idx, KeyInput::new(ch)).unwrap();
                }
                black_box(field.code());
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_paste_long_field(c: &mut Criterion) {
    let code: String = (0..256).map(|i| char::from(b'0' + (i % 10) as u8)).collect();
    c.bench_function("paste/256_cells", |b| {
        b.iter_batched(
            || numeric_field(256),
            |mut field| {
                field.handle_paste(0, black_box(&code)).unwrap();
                black_box(field.is_complete());
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_rejected_paste(c: &mut Criterion) {
    let mut field = numeric_field(8);
    c.bench_function("paste/rejected", |b| {
        b.iter(|| {
            field.handle_paste(0, black_box("1234abcd")).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_typing_full_code,
    bench_paste_long_field,
    bench_rejected_paste
);
criterion_main!(benches);
