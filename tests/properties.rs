use proptest::prelude::*;

use seekbuf::{read_int, write_int, ByteBuffer, ByteBufferExts, Whence};

#[derive(Debug, Clone)]
enum Op {
    Put(Vec<u8>),
    Get(usize),
    Seekg(i64, Whence),
    Seekp(i64, Whence),
}

fn whence() -> impl Strategy<Value = Whence> {
    prop_oneof![Just(Whence::Beg), Just(Whence::Cur), Just(Whence::End)]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..32).prop_map(Op::Put),
        (0usize..24).prop_map(Op::Get),
        (-16i64..16, whence()).prop_map(|(o, w)| Op::Seekg(o, w)),
        (-16i64..16, whence()).prop_map(|(o, w)| Op::Seekp(o, w)),
    ]
}

fn assert_cursor_order(buf: &ByteBuffer) {
    assert!(buf.tellg() <= buf.tellp());
    assert!(buf.tellp() <= buf.capacity());
    assert_eq!(buf.size(), buf.tellp() - buf.tellg());
}

proptest! {
    #[test]
    fn codec_round_trip(
        width in 1usize..=4,
        value in any::<u32>(),
        index in 0usize..4,
        big_endian in any::<bool>(),
    ) {
        let value = (value as u64) & ((1u64 << (width * 8)) - 1);
        let mut buf = vec![0u8; index + width];
        write_int(&mut buf, index, width, value, big_endian).unwrap();
        prop_assert_eq!(read_int(&buf, index, width, big_endian).unwrap(), value);
    }

    #[test]
    fn cursors_stay_ordered(initial in 0usize..16, ops in prop::collection::vec(op(), 0..64)) {
        let mut buf = ByteBuffer::new(initial);
        for op in ops {
            let before = buf.clone();
            let outcome = match op {
                Op::Put(bytes) => {
                    buf.put(&bytes);
                    prop_assert_eq!(buf.size(), before.size() + bytes.len());
                    Ok(())
                }
                Op::Get(n) => {
                    let result = buf.get(n).map(|_| ());
                    if result.is_ok() && n > 0 {
                        prop_assert_eq!(buf.size(), before.size() - n);
                    }
                    if result.is_ok() && n == 0 {
                        prop_assert_eq!(buf.tellg(), before.tellg());
                        prop_assert_eq!(buf.size(), before.size());
                    }
                    result
                }
                Op::Seekg(offset, whence) => buf.seekg(offset, whence),
                Op::Seekp(offset, whence) => buf.seekp(offset, whence),
            };
            if outcome.is_err() {
                prop_assert_eq!(&buf, &before);
            }
            assert_cursor_order(&buf);
        }
    }

    #[test]
    fn growth_keeps_unread_bytes(
        initial in prop::collection::vec(any::<u8>(), 0..32),
        consumed in 0usize..32,
        extra in prop::collection::vec(any::<u8>(), 1..64),
    ) {
        let mut buf = ByteBuffer::from(initial.clone());
        let consumed = consumed.min(initial.len());
        if consumed > 0 {
            buf.get(consumed).unwrap();
        }
        let unread = buf.peek(0).unwrap().to_vec();

        buf.put(&extra);

        let mut expected = unread;
        expected.extend_from_slice(&extra);
        prop_assert_eq!(buf.peek(0).unwrap(), &expected[..]);
    }

    #[test]
    fn peek_is_idempotent(data in prop::collection::vec(any::<u8>(), 1..32), n in 0usize..32) {
        let buf = ByteBuffer::from(data.clone());
        let n = n.min(data.len());
        let first = buf.peek(n).unwrap().to_vec();
        prop_assert_eq!(buf.peek(n).unwrap(), &first[..]);
        prop_assert_eq!(buf.tellg(), 0);
    }

    #[test]
    fn int32_round_trip(values in prop::collection::vec(any::<i32>(), 1..16), big_endian in any::<bool>()) {
        let mut buf = ByteBuffer::new(4).with_big_endian(big_endian);
        for v in &values {
            buf.put_int32(*v as i64).unwrap();
        }
        for v in &values {
            prop_assert_eq!(buf.get_int32().unwrap(), *v);
        }
        prop_assert!(buf.is_empty());
    }
}
