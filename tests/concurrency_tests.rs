//! Concurrency Tests
//!
//! The codec is stateless; every operation must be callable from many
//! threads at once over shared inputs.

use kvwire::{
    decode_option, decode_record, encode_option, encode_record, pack, unpack, CommandOption,
    KeyValue, Packet,
};

#[test]
fn test_concurrent_encode_decode() {
    let record = KeyValue::set(b"shared-key".to_vec(), vec![0x5A; 1024]);
    let option = CommandOption::batch(vec![0xA5; 1024]);
    let record_frame = encode_record(&record);
    let option_frame = encode_option(&option);

    crossbeam::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|_| {
                for _ in 0..100 {
                    assert_eq!(decode_record(&record_frame).unwrap(), record);
                    assert_eq!(decode_option(&option_frame).unwrap(), option);
                    assert_eq!(encode_record(&record), record_frame);
                    assert_eq!(encode_option(&option), option_frame);
                }
            });
        }
    })
    .unwrap();
}

#[test]
fn test_concurrent_pack_unpack() {
    let packets = vec![
        Packet::Record(KeyValue::set(b"k".to_vec(), b"v".to_vec())),
        Packet::Option(CommandOption::flush()),
        Packet::Record(KeyValue::get(b"k".to_vec())),
    ];
    let packed = pack(&packets);

    crossbeam::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|_| {
                for _ in 0..100 {
                    assert_eq!(unpack(&packed).unwrap(), packets);
                    assert_eq!(pack(&packets), packed);
                }
            });
        }
    })
    .unwrap();
}
