use dyno_verifier::{files_equal, DEFAULT_BLOCK_SIZE};
use std::path::PathBuf;

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn two_empty_files_are_equal() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.txt", b"");
    let b = write_file(&dir, "b.txt", b"");

    assert!(files_equal(&a, &b, DEFAULT_BLOCK_SIZE).unwrap());
}

#[test]
fn identical_contents_compare_equal() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.txt", b"4,0,2,5,9");
    let b = write_file(&dir, "b.txt", b"4,0,2,5,9");

    assert!(files_equal(&a, &b, DEFAULT_BLOCK_SIZE).unwrap());
}

#[test]
fn a_trailing_byte_difference_is_unequal() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.txt", b"4,0,2,5,9");
    let b = write_file(&dir, "b.txt", b"4,0,2,5,9\n");

    assert!(!files_equal(&a, &b, DEFAULT_BLOCK_SIZE).unwrap());
}

#[test]
fn comparison_is_reflexive() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.txt", b"self comparison");

    assert!(files_equal(&a, &a, DEFAULT_BLOCK_SIZE).unwrap());
}

#[test]
fn comparison_is_symmetric() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.txt", b"left");
    let b = write_file(&dir, "b.txt", b"right");

    assert_eq!(
        files_equal(&a, &b, DEFAULT_BLOCK_SIZE).unwrap(),
        files_equal(&b, &a, DEFAULT_BLOCK_SIZE).unwrap()
    );
}

#[test]
fn differences_past_the_first_block_are_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut contents_a = vec![7u8; 3 * 16 + 5];
    let contents_b = contents_a.clone();
    *contents_a.last_mut().unwrap() = 8;
    let a = write_file(&dir, "a.bin", &contents_a);
    let b = write_file(&dir, "b.bin", &contents_b);

    // Small block size so the difference sits several blocks in
    assert!(!files_equal(&a, &b, 16).unwrap());
    assert!(files_equal(&a, &a, 16).unwrap());
}

#[test]
fn a_file_that_is_a_prefix_of_the_other_is_unequal() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.bin", &[1u8; 40]);
    let b = write_file(&dir, "b.bin", &[1u8; 64]);

    assert!(!files_equal(&a, &b, 16).unwrap());
}

#[test]
fn a_missing_file_is_an_error_not_an_inequality() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.txt", b"present");
    let missing = dir.path().join("missing.txt");

    let result = files_equal(&a, &missing, DEFAULT_BLOCK_SIZE);
    assert!(result.is_err());
}
