macro_rules! test_cases {
    ($variant:ident) => {
        mod $variant {
            mod oneshot {
                use crate::utils::{
                    algos::$variant::{self as algo, sync},
                    random, Error, Level,
                };

                #[test]
                #[ntest::timeout(1000)]
                fn empty() {
                    let compressed = algo::compress(&[]).unwrap();
                    let output = sync::decompress(&compressed);

                    assert_eq!(output, &[][..]);
                }

                #[test]
                #[ntest::timeout(1000)]
                fn short() {
                    let compressed = algo::compress(&[1, 2, 3, 4, 5, 6]).unwrap();
                    let output = sync::decompress(&compressed);

                    assert_eq!(output, &[1, 2, 3, 4, 5, 6][..]);
                }

                #[test]
                #[ntest::timeout(5000)]
                fn long() {
                    let input = random(65_536);

                    let compressed = algo::compress(&input).unwrap();
                    let output = sync::decompress(&compressed);

                    assert_eq!(output, input);
                    assert!(compressed.len() <= algo::compress_bound(input.len()));
                }

                #[test]
                #[ntest::timeout(1000)]
                fn with_level_best() {
                    let compressed = algo::compress_with_level(&[1, 2, 3], Level::Best).unwrap();
                    let output = sync::decompress(&compressed);

                    assert_eq!(output, &[1, 2, 3][..]);
                }

                #[test]
                #[ntest::timeout(1000)]
                fn with_level_fastest() {
                    let compressed =
                        algo::compress_with_level(&[1, 2, 3], Level::Fastest).unwrap();
                    let output = sync::decompress(&compressed);

                    assert_eq!(output, &[1, 2, 3][..]);
                }

                #[test]
                #[ntest::timeout(1000)]
                fn with_level_out_of_range() {
                    let compressed =
                        algo::compress_with_level(&[1, 2, 3], Level::Precise(u32::MAX)).unwrap();
                    let output = sync::decompress(&compressed);

                    assert_eq!(output, &[1, 2, 3][..]);
                }

                #[test]
                #[ntest::timeout(1000)]
                fn decompress() {
                    let compressed = sync::compress(&[1, 2, 3, 4, 5, 6]);

                    let output = algo::decompress(&compressed).unwrap();

                    assert_eq!(output, &[1, 2, 3, 4, 5, 6][..]);
                }

                #[test]
                #[ntest::timeout(5000)]
                fn decompress_long() {
                    let input = random(65_536);
                    let compressed = sync::compress(&input);

                    let output = algo::decompress(&compressed).unwrap();

                    assert_eq!(output, input);
                }

                #[test]
                #[ntest::timeout(1000)]
                fn decompress_empty_input() {
                    let result = algo::decompress(&[]);

                    assert!(matches!(result, Err(Error::Data(_))), "{result:?}");
                }

                #[test]
                #[ntest::timeout(1000)]
                fn decompress_truncated() {
                    let compressed = sync::compress(&[1, 2, 3, 4, 5, 6]);

                    let result = algo::decompress(&compressed[..compressed.len() - 1]);

                    assert!(matches!(result, Err(Error::Data(_))), "{result:?}");
                }

                #[test]
                #[ntest::timeout(1000)]
                fn decompress_trailing_bytes() {
                    let mut compressed = sync::compress(&[1, 2, 3, 4, 5, 6]);
                    compressed.extend_from_slice(b"trailing");

                    let output = algo::decompress(&compressed).unwrap();

                    assert_eq!(output, &[1, 2, 3, 4, 5, 6][..]);
                }

                #[test]
                #[ntest::timeout(1000)]
                fn decompress_bound_exact() {
                    let compressed = sync::compress(&[1, 2, 3, 4, 5, 6]);

                    let output = algo::decompress_bound(&compressed, 6).unwrap();

                    assert_eq!(output, &[1, 2, 3, 4, 5, 6][..]);
                }

                #[test]
                #[ntest::timeout(1000)]
                fn decompress_bound_too_small() {
                    let compressed = sync::compress(&[1, 2, 3, 4, 5, 6]);

                    let result = algo::decompress_bound(&compressed, 5);

                    assert!(
                        matches!(result, Err(Error::BufferTooSmall { bound: 5 })),
                        "{result:?}"
                    );
                }

                #[test]
                #[ntest::timeout(1000)]
                fn decompress_bound_zero() {
                    let compressed = sync::compress(&[]);

                    let output = algo::decompress_bound(&compressed, 0).unwrap();

                    assert_eq!(output, &[][..]);
                }
            }

            mod step {
                use crate::utils::{
                    algos::$variant::{self as algo, sync},
                    compress_in_steps, decompress_in_steps, CompressionStatus, Error,
                    InputStream, Level, PartialBuffer, MIT,
                };

                #[test]
                #[ntest::timeout(1000)]
                fn empty_output() {
                    let mut compressor = algo::compressor(Level::Default);
                    let mut input = PartialBuffer::new(MIT);

                    let status = compressor
                        .compress(&mut input, &mut PartialBuffer::new(&mut [][..]))
                        .unwrap();

                    assert_eq!(status, CompressionStatus::NeedOutput);
                    assert!(input.written().is_empty());
                }

                #[test]
                #[ntest::timeout(1000)]
                fn empty_input() {
                    let mut compressor = algo::compressor(Level::Default);
                    let mut buffer = [0; 64];
                    let mut output = PartialBuffer::new(&mut buffer[..]);

                    let status = compressor
                        .compress(&mut PartialBuffer::new(&[][..]), &mut output)
                        .unwrap();

                    assert_eq!(status, CompressionStatus::NeedInput);
                    assert!(output.written().is_empty());
                }

                #[test]
                #[ntest::timeout(1000)]
                fn decompress_empty_output() {
                    let compressed = sync::compress(MIT);
                    let mut decompressor = algo::decompressor();
                    let mut input = PartialBuffer::new(&compressed[..]);

                    let status = decompressor
                        .decompress(&mut input, &mut PartialBuffer::new(&mut [][..]))
                        .unwrap();

                    assert_eq!(status, CompressionStatus::NeedOutput);
                    assert!(input.written().is_empty());
                }

                #[test]
                #[ntest::timeout(5000)]
                fn byte_windows() {
                    let input = InputStream::from(vec![MIT[..7].to_vec(), vec![], MIT[7..].to_vec()]);

                    let compressed = compress_in_steps(algo::compressor(Level::Default), &input, 1);

                    assert_eq!(sync::decompress(&compressed), MIT);
                    assert_eq!(compressed, algo::compress(MIT).unwrap());
                }

                #[test]
                #[ntest::timeout(5000)]
                fn decompress_byte_windows() {
                    let compressed = sync::compress(MIT);
                    let input = InputStream::from(Vec::from_iter(compressed.chunks(1).map(Vec::from)));

                    let output = decompress_in_steps(&mut algo::decompressor(), &input, 1);

                    assert_eq!(output, MIT);
                }

                fn compress_byte_windows(compressor: &mut algo::Compressor, input: &[u8], output: &mut Vec<u8>) {
                    let mut input = PartialBuffer::new(input);
                    let mut buffer = [0; 1];
                    loop {
                        let mut window = PartialBuffer::new(&mut buffer[..]);
                        let status = compressor.compress(&mut input, &mut window).unwrap();
                        output.extend_from_slice(window.written());
                        if status == CompressionStatus::NeedInput {
                            break;
                        }
                    }
                }

                #[test]
                #[ntest::timeout(5000)]
                fn checkpoint_byte_windows() {
                    let mut compressor = algo::compressor(Level::Default);
                    let mut compressed = vec![];
                    let mut buffer = [0; 1];

                    compress_byte_windows(&mut compressor, &MIT[..100], &mut compressed);
                    let mut calls = 0;
                    loop {
                        calls += 1;
                        let mut window = PartialBuffer::new(&mut buffer[..]);
                        let done = compressor.checkpoint(&mut window).unwrap();
                        compressed.extend_from_slice(window.written());
                        if done {
                            break;
                        }
                    }
                    assert!(calls < 1000, "{calls} calls to checkpoint");

                    compress_byte_windows(&mut compressor, &MIT[100..], &mut compressed);
                    loop {
                        let mut window = PartialBuffer::new(&mut buffer[..]);
                        let done = compressor.flush(&mut window).unwrap();
                        compressed.extend_from_slice(window.written());
                        if done {
                            break;
                        }
                    }

                    assert_eq!(sync::decompress(&compressed), MIT);
                }

                #[test]
                #[ntest::timeout(5000)]
                fn scheduled_checkpoint_byte_windows() {
                    let mut compressor = algo::compressor(Level::Default);
                    let mut compressed = vec![];

                    compress_byte_windows(&mut compressor, &MIT[..100], &mut compressed);
                    assert!(!compressor.flush(&mut PartialBuffer::new(&mut [][..])).unwrap());
                    compress_byte_windows(&mut compressor, &[], &mut compressed);
                    compress_byte_windows(&mut compressor, &MIT[100..], &mut compressed);

                    let mut buffer = [0; 64];
                    loop {
                        let mut output = PartialBuffer::new(&mut buffer[..]);
                        let done = compressor.flush(&mut output).unwrap();
                        compressed.extend_from_slice(output.written());
                        if done {
                            break;
                        }
                    }

                    assert_eq!(sync::decompress(&compressed), MIT);
                }

                #[test]
                #[ntest::timeout(1000)]
                fn eof_is_sticky() {
                    let compressed = sync::compress(&[1, 2, 3]);
                    let mut decompressor = algo::decompressor();
                    let input = InputStream::from(vec![compressed]);
                    decompress_in_steps(&mut decompressor, &input, 64);

                    let mut input = PartialBuffer::new(&[1, 2, 3][..]);
                    let mut buffer = [0; 64];
                    let status = decompressor
                        .decompress(&mut input, &mut PartialBuffer::new(&mut buffer[..]))
                        .unwrap();

                    assert_eq!(status, CompressionStatus::Eof);
                    assert!(input.written().is_empty());
                    assert!(decompressor.is_done());
                }

                #[test]
                #[ntest::timeout(1000)]
                fn reset() {
                    let first = sync::compress(&[1, 2, 3]);
                    let second = sync::compress(&[4, 5, 6]);
                    let mut decompressor = algo::decompressor();

                    let output = decompress_in_steps(&mut decompressor, &InputStream::from(vec![first]), 64);
                    assert_eq!(output, &[1, 2, 3][..]);

                    decompressor.reset().unwrap();
                    let output = decompress_in_steps(&mut decompressor, &InputStream::from(vec![second]), 64);
                    assert_eq!(output, &[4, 5, 6][..]);
                }

                #[test]
                #[ntest::timeout(1000)]
                fn closed() {
                    let mut compressor = algo::compressor(Level::Default);
                    compressor.close();
                    compressor.close();
                    let mut buffer = [0; 64];

                    let result = compressor.compress(
                        &mut PartialBuffer::new(&[1, 2, 3][..]),
                        &mut PartialBuffer::new(&mut buffer[..]),
                    );
                    assert!(matches!(result, Err(Error::Closed)));

                    let result = compressor.flush(&mut PartialBuffer::new(&mut buffer[..]));
                    assert!(matches!(result, Err(Error::Closed)));
                }

                #[test]
                #[ntest::timeout(1000)]
                fn drop_unfinished() {
                    let mut compressor = algo::compressor(Level::Default);
                    let mut buffer = [0; 16];
                    compressor
                        .compress(
                            &mut PartialBuffer::new(MIT),
                            &mut PartialBuffer::new(&mut buffer[..]),
                        )
                        .unwrap();
                    drop(compressor);

                    drop(algo::decompressor());
                }
            }

            mod io {
                use crate::utils::{
                    algos::$variant::{self as algo, sync},
                    random, read_to_vec, FilterConfig, InputStream, TrackFlushed, MIT,
                };
                use std::io::{BufRead, ErrorKind, Read, Write};

                fn tiny() -> FilterConfig {
                    FilterConfig::new().with_buffer_size(1)
                }

                #[test]
                #[ntest::timeout(5000)]
                fn read_decompress() {
                    let compressed = sync::compress(MIT);
                    let input = InputStream::from(Vec::from_iter(compressed.chunks(5).map(Vec::from)));

                    let output = read_to_vec(algo::reader(input.reader(), tiny()));

                    assert_eq!(output, MIT);
                }

                #[test]
                #[ntest::timeout(5000)]
                fn read_decompress_long() {
                    let input = random(65_536);
                    let compressed = sync::compress(&input);

                    let output = read_to_vec(algo::reader(&compressed[..], FilterConfig::default()));

                    assert_eq!(output, input);
                }

                #[test]
                #[ntest::timeout(5000)]
                fn read_compress() {
                    let input = InputStream::from(vec![MIT[..100].to_vec(), MIT[100..].to_vec()]);

                    let compressed = read_to_vec(algo::compress_reader(input.reader(), tiny()));

                    assert_eq!(sync::decompress(&compressed), MIT);
                }

                #[test]
                #[ntest::timeout(1000)]
                fn read_compress_empty() {
                    let compressed = read_to_vec(algo::compress_reader(&[][..], tiny()));

                    assert_eq!(sync::decompress(&compressed), &[][..]);
                }

                #[test]
                #[ntest::timeout(1000)]
                fn read_lines() {
                    let compressed = sync::compress(MIT);

                    let lines = algo::reader(&compressed[..], FilterConfig::new().with_buffer_size(16))
                        .lines()
                        .collect::<Result<Vec<_>, _>>()
                        .unwrap();

                    assert_eq!(lines.join("\n").as_bytes(), MIT.strip_suffix(b"\n").unwrap_or(MIT));
                }

                #[test]
                #[ntest::timeout(1000)]
                fn read_truncated() {
                    let compressed = sync::compress(MIT);

                    let mut output = vec![];
                    let err = algo::reader(&compressed[..compressed.len() - 1], tiny())
                        .read_to_end(&mut output)
                        .unwrap_err();

                    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
                }

                #[test]
                #[ntest::timeout(5000)]
                fn write_compress() {
                    let mut writer = algo::writer(Vec::new(), tiny());
                    for chunk in MIT.chunks(100) {
                        writer.write_all(chunk).unwrap();
                    }

                    let compressed = writer.into_inner().unwrap();

                    assert_eq!(sync::decompress(&compressed), MIT);
                }

                #[test]
                #[ntest::timeout(5000)]
                fn write_matches_oneshot() {
                    let mut writer = algo::writer(Vec::new(), tiny());
                    for byte in MIT {
                        writer.write_all(&[*byte]).unwrap();
                    }

                    assert_eq!(writer.into_inner().unwrap(), algo::compress(MIT).unwrap());
                }

                #[test]
                #[ntest::timeout(5000)]
                fn read_matches_oneshot() {
                    let input = InputStream::from(Vec::from_iter(MIT.chunks(1).map(Vec::from)));

                    let compressed = read_to_vec(algo::compress_reader(input.reader(), tiny()));

                    assert_eq!(compressed, algo::compress(MIT).unwrap());
                }

                #[test]
                #[ntest::timeout(5000)]
                fn flush_with_tiny_buffer() {
                    let mut writer = algo::writer(Vec::new(), tiny());
                    writer.write_all(&MIT[..100]).unwrap();
                    writer.flush().unwrap();
                    writer.flush().unwrap();
                    assert!(!writer.get_ref().is_empty());

                    writer.write_all(&MIT[100..]).unwrap();
                    let compressed = writer.into_inner().unwrap();

                    assert_eq!(sync::decompress(&compressed), MIT);
                }

                #[test]
                #[ntest::timeout(5000)]
                fn write_decompress() {
                    let compressed = sync::compress(MIT);
                    let mut writer = algo::decompress_writer(Vec::new(), tiny());
                    for chunk in compressed.chunks(3) {
                        writer.write_all(chunk).unwrap();
                    }

                    let output = writer.into_inner().unwrap();

                    assert_eq!(output, MIT);
                }

                #[test]
                #[ntest::timeout(1000)]
                fn write_decompress_truncated() {
                    let compressed = sync::compress(MIT);
                    let mut writer = algo::decompress_writer(Vec::new(), tiny());
                    writer.write_all(&compressed[..compressed.len() - 1]).unwrap();

                    let err = writer.finish().unwrap_err();

                    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
                }

                #[test]
                #[ntest::timeout(1000)]
                fn finish_on_drop() {
                    let mut compressed = Vec::new();
                    {
                        let mut writer = algo::writer(&mut compressed, FilterConfig::default());
                        writer.write_all(MIT).unwrap();
                    }

                    assert_eq!(sync::decompress(&compressed), MIT);
                }

                #[test]
                #[ntest::timeout(1000)]
                fn finish_flushes_sink() {
                    let mut writer = algo::writer(TrackFlushed::new(Vec::new()), tiny());
                    writer.write_all(&[1, 2, 3]).unwrap();
                    writer.finish().unwrap();
                    writer.finish().unwrap();

                    let sink = writer.into_inner().unwrap();
                    assert_eq!(sink.flushes(), 1);
                    assert_eq!(sync::decompress(&sink.into_inner()), &[1, 2, 3][..]);
                }

                #[test]
                #[ntest::timeout(1000)]
                fn write_after_finish() {
                    let mut writer = algo::writer(Vec::new(), tiny());
                    writer.finish().unwrap();

                    assert!(writer.write(&[1]).is_err());
                }
            }
        }
    };
}
