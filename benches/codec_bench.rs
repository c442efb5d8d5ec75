//! Benchmarks for kvwire encode/decode paths

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kvwire::{
    decode_record, encode_record, pack, unpack, CommandOption, KeyValue, Packet,
};

fn codec_benchmarks(c: &mut Criterion) {
    let record = KeyValue::set(vec![0xAB; 16], vec![0xCD; 256]);
    let frame = encode_record(&record);

    c.bench_function("encode_record_16b_key_256b_value", |b| {
        b.iter(|| encode_record(black_box(&record)))
    });

    c.bench_function("decode_record_16b_key_256b_value", |b| {
        b.iter(|| decode_record(black_box(&frame)).unwrap())
    });

    let packets: Vec<Packet> = (0..64)
        .map(|i| {
            if i % 8 == 0 {
                Packet::Option(CommandOption::flush())
            } else {
                Packet::Record(KeyValue::set(vec![i as u8; 16], vec![i as u8; 128]))
            }
        })
        .collect();
    let packed = pack(&packets);

    c.bench_function("pack_64_items", |b| b.iter(|| pack(black_box(&packets))));

    c.bench_function("unpack_64_items", |b| {
        b.iter(|| unpack(black_box(&packed)).unwrap())
    });
}

criterion_group!(benches, codec_benchmarks);
criterion_main!(benches);
