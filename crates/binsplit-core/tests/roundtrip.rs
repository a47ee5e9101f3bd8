//! End-to-end split/join behaviour over real directories.
//!
//! Run: cargo test -p binsplit-core --test roundtrip

use std::path::Path;

use binsplit_core::chunk::ChunkName;
use binsplit_core::{Splitter, join_file};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tempfile::TempDir;

fn generate_data(rng: &mut StdRng, size: usize) -> Vec<u8> {
    let mut data = vec![0u8; size];
    rng.fill_bytes(&mut data);
    data
}

fn write_source(dir: &Path, name: &str, data: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).unwrap();
    path
}

fn chunk_sizes(dir: &Path, base: &str) -> Vec<u64> {
    let mut sizes = Vec::new();
    for index in 0.. {
        let path = dir.join(ChunkName::new(base, index).to_os_string());
        match std::fs::metadata(&path) {
            Ok(meta) => sizes.push(meta.len()),
            Err(_) => break,
        }
    }
    sizes
}

#[test]
fn spec_example_120_bytes_by_50() {
    let tmp = TempDir::new().unwrap();
    let data: Vec<u8> = (0..120u8).collect();
    let src = write_source(tmp.path(), "sample.bin", &data);
    let chunks = tmp.path().join("chunks");
    let restored = tmp.path().join("restored");
    std::fs::create_dir(&restored).unwrap();

    let summary = Splitter::new(50).unwrap().split_file(&src, &chunks).unwrap();
    assert_eq!(summary.chunk_count(), 3);
    assert_eq!(chunk_sizes(&chunks, "sample.bin"), vec![50, 50, 20]);

    let joined = join_file(&chunks.join("sample.bin"), &restored).unwrap();
    assert_eq!(joined.total_bytes, 120);
    assert_eq!(std::fs::read(restored.join("sample.bin")).unwrap(), data);
}

#[test]
fn roundtrip_random_sizes() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..24 {
        let len = rng.gen_range(0..4096usize);
        let chunk_size = rng.gen_range(1..600u64);
        let data = generate_data(&mut rng, len);

        let tmp = TempDir::new().unwrap();
        let src = write_source(tmp.path(), "payload.dat", &data);
        let chunks = tmp.path().join("chunks");
        let restored = tmp.path().join("restored");
        std::fs::create_dir(&restored).unwrap();

        let summary = Splitter::new(chunk_size)
            .unwrap()
            .split_file(&src, &chunks)
            .unwrap();

        let expected_count = (len as u64).div_ceil(chunk_size);
        assert_eq!(summary.chunk_count() as u64, expected_count, "len={len} size={chunk_size}");

        let sizes = chunk_sizes(&chunks, "payload.dat");
        assert_eq!(sizes.len() as u64, expected_count);
        if let Some((last, full)) = sizes.split_last() {
            assert!(full.iter().all(|s| *s == chunk_size));
            let rem = len as u64 % chunk_size;
            assert_eq!(*last, if rem == 0 { chunk_size } else { rem });
        }

        join_file(&chunks.join("payload.dat"), &restored).unwrap();
        assert_eq!(std::fs::read(restored.join("payload.dat")).unwrap(), data);
    }
}

#[test]
fn empty_source_produces_no_chunks() {
    let tmp = TempDir::new().unwrap();
    let src = write_source(tmp.path(), "empty.bin", &[]);
    let chunks = tmp.path().join("chunks");

    let summary = Splitter::new(10).unwrap().split_file(&src, &chunks).unwrap();

    assert_eq!(summary.chunk_count(), 0);
    assert!(chunks.is_dir());
    assert_eq!(std::fs::read_dir(&chunks).unwrap().count(), 0);
}

#[test]
fn chunk_names_are_contiguous_and_unpadded() {
    let tmp = TempDir::new().unwrap();
    let src = write_source(tmp.path(), "n.bin", &[1u8; 115]);
    let chunks = tmp.path().join("chunks");

    Splitter::new(10).unwrap().split_file(&src, &chunks).unwrap();

    let mut names: Vec<String> = std::fs::read_dir(&chunks)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort_by_key(|n| n.rsplit('.').next().unwrap().parse::<u64>().unwrap());

    let expected: Vec<String> = (0..12).map(|i| format!("n.bin.{i}")).collect();
    assert_eq!(names, expected);
}

#[test]
fn join_stops_at_gap() {
    let tmp = TempDir::new().unwrap();
    let src = write_source(tmp.path(), "g.bin", b"aaaabbbbcc");
    let chunks = tmp.path().join("chunks");
    let restored = tmp.path().join("restored");
    std::fs::create_dir(&restored).unwrap();

    Splitter::new(4).unwrap().split_file(&src, &chunks).unwrap();
    std::fs::remove_file(chunks.join("g.bin.1")).unwrap();

    let summary = join_file(&chunks.join("g.bin"), &restored).unwrap();

    assert_eq!(std::fs::read(restored.join("g.bin")).unwrap(), b"aaaa");
    assert_eq!(summary.stray_chunks, vec![chunks.join("g.bin.2")]);
}

#[test]
fn resplit_is_byte_identical() {
    let mut rng = StdRng::seed_from_u64(7);
    let data = generate_data(&mut rng, 1000);
    let tmp = TempDir::new().unwrap();
    let src = write_source(tmp.path(), "r.bin", &data);
    let chunks = tmp.path().join("chunks");
    let splitter = Splitter::new(128).unwrap();

    splitter.split_file(&src, &chunks).unwrap();
    let first: Vec<Vec<u8>> = (0..8)
        .map(|i| std::fs::read(chunks.join(format!("r.bin.{i}"))).unwrap())
        .collect();

    splitter.split_file(&src, &chunks).unwrap();
    let second: Vec<Vec<u8>> = (0..8)
        .map(|i| std::fs::read(chunks.join(format!("r.bin.{i}"))).unwrap())
        .collect();

    assert_eq!(first, second);
    assert_eq!(first.concat(), data);
}

#[test]
fn stream_split_uses_given_name() {
    let tmp = TempDir::new().unwrap();
    let chunks = tmp.path().join("chunks");
    let restored = tmp.path().join("restored");
    std::fs::create_dir(&restored).unwrap();
    let data = b"streamed from somewhere that is not a file".to_vec();

    let summary = Splitter::new(16)
        .unwrap()
        .split_stream(
            std::io::Cursor::new(data.clone()),
            std::ffi::OsStr::new("piped.txt"),
            &chunks,
        )
        .unwrap();
    assert_eq!(summary.source_name, "piped.txt");
    assert_eq!(summary.chunk_count(), 3);

    join_file(&chunks.join("piped.txt"), &restored).unwrap();
    assert_eq!(std::fs::read(restored.join("piped.txt")).unwrap(), data);
}
