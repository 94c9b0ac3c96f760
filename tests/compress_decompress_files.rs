use huffman_text_codec::{process_files, CLIParser, ErrorKind};
use std::path::PathBuf;
use std::{env, fs};

const SAMPLE_TEXT: &str = "Huffman coding assigns short code words to frequent symbols.\n\
It was published by David A. Huffman in 1952 ✓\n";

fn get_project_root_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn get_work_directory(name: &str) -> PathBuf {
    let mut path = get_project_root_path();
    path.push("tests");
    path.push(name);
    path
}

fn prepare(name: &str) -> PathBuf {
    cleanup(name);
    let work_directory = get_work_directory(name);
    fs::create_dir_all(work_directory.join("restored"))
        .expect("Creation of work directory failed");
    work_directory
}

fn cleanup(name: &str) {
    let work_directory = get_work_directory(name);
    if work_directory.exists() && work_directory.is_dir() {
        fs::remove_dir_all(work_directory).expect("Deletion of work directory failed");
    }
}

fn run(arguments: Vec<&str>) -> huffman_text_codec::Result<Vec<PathBuf>> {
    let mut cli_parser = CLIParser::new();
    let mut all_arguments = vec!["test"];
    all_arguments.extend(arguments);
    process_files(&cli_parser.parse(all_arguments))
}

#[test]
fn test_compress_and_decompress_files() {
    let work_directory = prepare("work_round_trip");
    let first_input = work_directory.join("first.txt");
    let second_input = work_directory.join("second.txt");
    fs::write(&first_input, SAMPLE_TEXT).unwrap();
    fs::write(&second_input, "aaaa").unwrap();

    let archives = run(vec![
        "compress",
        first_input.to_str().unwrap(),
        second_input.to_str().unwrap(),
        "-o",
        work_directory.to_str().unwrap(),
        "-t",
        "2",
    ])
    .expect("Compression failed");
    assert_eq!(
        archives,
        vec![
            work_directory.join("first.txt.huff"),
            work_directory.join("second.txt.huff")
        ]
    );
    assert!(
        fs::read(&archives[0]).unwrap().starts_with(b"HUF1"),
        "Archive signature missing"
    );

    let restored_directory = work_directory.join("restored");
    let mut arguments = vec!["decompress"];
    arguments.extend(archives.iter().map(|archive| archive.to_str().unwrap()));
    arguments.extend(["-o", restored_directory.to_str().unwrap()]);
    let restored = run(arguments).expect("Decompression failed");

    assert_eq!(restored[0], restored_directory.join("first.txt"));
    assert_eq!(fs::read_to_string(&restored[0]).unwrap(), SAMPLE_TEXT);
    assert_eq!(fs::read_to_string(&restored[1]).unwrap(), "aaaa");
    cleanup("work_round_trip");
}

#[test]
fn test_failures_are_counted() {
    let work_directory = prepare("work_failures");
    let valid_input = work_directory.join("valid.txt");
    let empty_input = work_directory.join("empty.txt");
    let missing_input = work_directory.join("missing.txt");
    fs::write(&valid_input, "some text").unwrap();
    fs::write(&empty_input, "").unwrap();

    let error = run(vec![
        "compress",
        valid_input.to_str().unwrap(),
        empty_input.to_str().unwrap(),
        missing_input.to_str().unwrap(),
        "-o",
        work_directory.to_str().unwrap(),
    ])
    .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Io);
    assert_eq!(error.to_string(), "2 file(s) could not be processed");
    assert!(work_directory.join("valid.txt.huff").exists());
    cleanup("work_failures");
}

#[test]
fn test_decompress_rejects_files_without_archive_extension() {
    let work_directory = prepare("work_extension");
    let input = work_directory.join("plain.txt");
    fs::write(&input, "not an archive").unwrap();

    let error = run(vec![
        "decompress",
        input.to_str().unwrap(),
        "-o",
        work_directory.to_str().unwrap(),
    ])
    .unwrap_err();
    assert_eq!(error.to_string(), "1 file(s) could not be processed");
    cleanup("work_extension");
}

#[test]
fn test_decompress_rejects_corrupted_archive() {
    let work_directory = prepare("work_corrupted");
    let input = work_directory.join("broken.txt.huff");
    fs::write(&input, b"HUF1\x00\x00").unwrap();

    let error = run(vec![
        "decompress",
        input.to_str().unwrap(),
        "-o",
        work_directory.to_str().unwrap(),
    ])
    .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Io);
    assert!(!work_directory.join("broken.txt").exists());
    cleanup("work_corrupted");
}

#[test]
fn test_inputs_with_same_file_name_do_not_overwrite_each_other() {
    let work_directory = prepare("work_same_file_name");
    let first_directory = work_directory.join("first");
    let second_directory = work_directory.join("second");
    fs::create_dir_all(&first_directory).unwrap();
    fs::create_dir_all(&second_directory).unwrap();
    let first_input = first_directory.join("x.txt");
    let second_input = second_directory.join("x.txt");
    let other_input = work_directory.join("other.txt");
    fs::write(&first_input, "first text").unwrap();
    fs::write(&second_input, "second text").unwrap();
    fs::write(&other_input, "other text").unwrap();

    let error = run(vec![
        "compress",
        first_input.to_str().unwrap(),
        second_input.to_str().unwrap(),
        other_input.to_str().unwrap(),
        "-o",
        work_directory.to_str().unwrap(),
        "-t",
        "2",
    ])
    .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Io);
    assert_eq!(error.to_string(), "2 file(s) could not be processed");
    assert!(!work_directory.join("x.txt.huff").exists());
    assert!(work_directory.join("other.txt.huff").exists());
    cleanup("work_same_file_name");
}
