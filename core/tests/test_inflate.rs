#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::{write::DeflateEncoder, Compression};
    use inflate_core::{inflate_raw, DecodeError, RawInflater};
    use proptest::prelude::*;

    fn deflate(data: &[u8], level: u32) -> Vec<u8> {
        let mut enc = DeflateEncoder::new(Vec::new(), Compression::new(level));
        enc.write_all(data).unwrap();
        enc.finish().unwrap()
    }

    fn sample_text(len: usize) -> Vec<u8> {
        b"the quick brown fox jumps over the lazy dog; "
            .iter()
            .cycle()
            .take(len)
            .copied()
            .collect()
    }

    #[test]
    fn hello_world_round_trip() {
        let compressed = deflate(b"hello world", 6);
        assert_eq!(inflate_raw(&compressed).unwrap(), b"hello world");
    }

    #[test]
    fn empty_stream_from_encoder_decodes_empty() {
        let compressed = deflate(b"", 6);
        assert!(!compressed.is_empty());
        assert!(inflate_raw(&compressed).unwrap().is_empty());
    }

    #[test]
    fn stored_fixed_and_dynamic_blocks() {
        let data = sample_text(200_000);
        // level 0 = stored blocks, 1 = fast, 9 = dynamic huffman heavy
        for level in [0, 1, 6, 9] {
            let compressed = deflate(&data, level);
            assert_eq!(inflate_raw(&compressed).unwrap(), data, "level {level}");
        }
    }

    #[test]
    fn output_grows_past_initial_hint() {
        // ~1000x expansion, well beyond input.len() * 4
        let data = vec![0u8; 4 * 1024 * 1024];
        let compressed = deflate(&data, 9);
        assert!(compressed.len() * 4 < data.len());
        assert_eq!(inflate_raw(&compressed).unwrap(), data);
    }

    #[test]
    fn reserved_block_type_is_corrupt() {
        let mut compressed = deflate(b"hello world", 6);
        // BTYPE lives in bits 1..=2 of the first byte; 0b11 is reserved
        compressed[0] |= 0b0000_0110;
        let err = inflate_raw(&compressed).unwrap_err();
        assert!(matches!(err, DecodeError::Corrupt { .. }), "got {err:?}");
    }

    #[test]
    fn stored_len_nlen_mismatch_is_corrupt() {
        let bad = [0x01, 0x05, 0x00, 0x00, 0x00, b'h', b'e', b'l', b'l', b'o'];
        let err = inflate_raw(&bad).unwrap_err();
        assert!(matches!(err, DecodeError::Corrupt { .. }), "got {err:?}");
    }

    #[test]
    fn distance_before_first_output_byte_is_corrupt() {
        // BFINAL=1, BTYPE=01, length code 257 (len 3), distance code 0 (dist 1), EOB;
        // nothing has been decoded yet for the copy to read from
        let err = inflate_raw(&[0x03, 0x02, 0x00]).unwrap_err();
        assert!(matches!(err, DecodeError::Corrupt { .. }), "got {err:?}");
    }

    #[test]
    fn distance_past_produced_output_is_corrupt() {
        // stored "hi" (not final), then a fixed block copying len 3 from dist 3
        // BFINAL=1 BTYPE=01 | code 257 = 0000001 | dist code 2 = 00010 | EOB 0000000
        let input = [0x00, 0x02, 0x00, 0xfd, 0xff, b'h', b'i', 0x03, 0x22, 0x00, 0x00];
        let err = inflate_raw(&input).unwrap_err();
        assert!(matches!(err, DecodeError::Corrupt { .. }), "got {err:?}");
    }

    #[test]
    fn oversubscribed_code_length_code_is_corrupt() {
        // BFINAL=1 BTYPE=10, HLIT=0 HDIST=0 HCLEN=0 (4 entries), every entry
        // length 1: four 1-bit codes can't form a prefix code
        let input = [0x05, 0x00, 0x92, 0x04, 0x00, 0x00];
        let err = inflate_raw(&input).unwrap_err();
        assert!(matches!(err, DecodeError::Corrupt { .. }), "got {err:?}");
    }

    #[test]
    fn zlib_framed_input_is_rejected() {
        // 0x78 0x9c header reads as BFINAL=0, BTYPE=0b00, then a bogus LEN/NLEN
        let mut enc = flate2::write::ZlibEncoder::new(Vec::new(), Compression::default());
        enc.write_all(b"hello world").unwrap();
        let zlib = enc.finish().unwrap();
        assert!(inflate_raw(&zlib).is_err());
    }

    #[test]
    fn non_final_block_without_successor_is_truncated() {
        // BFINAL=0 stored block of "hi", stream ends before the next block header
        let partial = [0x00, 0x02, 0x00, 0xfd, 0xff, b'h', b'i'];
        let err = inflate_raw(&partial).unwrap_err();
        assert!(err.is_truncated(), "got {err:?}");
    }

    #[test]
    fn trailing_bytes_are_ignored_and_counted() {
        let compressed = deflate(b"hello world", 6);
        let mut input = compressed.clone();
        input.extend_from_slice(b"garbage");

        let mut out = Vec::new();
        let outcome = RawInflater::new().inflate(&input, &mut out).unwrap();

        assert_eq!(out, b"hello world");
        assert_eq!(outcome.consumed, compressed.len());
        assert_eq!(outcome.trailing, b"garbage".len());
        assert_eq!(outcome.produced, out.len());
    }

    #[test]
    fn truncated_error_reports_progress() {
        let data = sample_text(10_000);
        let compressed = deflate(&data, 0);
        let cut = &compressed[..compressed.len() / 2];

        match inflate_raw(cut).unwrap_err() {
            DecodeError::Truncated { consumed, produced } => {
                assert!(consumed > 0 && consumed <= cut.len() as u64);
                assert!(produced > 0 && produced < data.len() as u64);
            }
            other => panic!("expected truncation, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn prop_round_trip(data in prop::collection::vec(any::<u8>(), 0..8192), level in 0u32..=9) {
            let compressed = deflate(&data, level);
            prop_assert_eq!(inflate_raw(&compressed).unwrap(), data);
        }

        #[test]
        fn prop_proper_prefix_fails(
            data in prop::collection::vec(any::<u8>(), 0..4096),
            cut in any::<prop::sample::Index>(),
        ) {
            let compressed = deflate(&data, 6);
            // the final end-of-block code always ends in the last byte
            let keep = cut.index(compressed.len());
            prop_assert!(inflate_raw(&compressed[..keep]).is_err());
        }
    }
}
