use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use clap::builder::PossibleValue;
use clap::ValueEnum;
use threadpool::ThreadPool;

use crate::archive::Archive;
use crate::codec::{compress, decompress_bits};
use crate::error::Error;
use crate::{Arguments, Result};

pub const ARCHIVE_EXTENSION: &str = "huff";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

impl ValueEnum for Mode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Compress, Self::Decompress]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Compress => Some(PossibleValue::new("compress")),
            Self::Decompress => Some(PossibleValue::new("decompress")),
        }
    }
}

struct FileJob {
    mode: Mode,
    input_file: PathBuf,
    output_directory: PathBuf,
}

impl FileJob {
    fn execute(&self) -> Result<PathBuf> {
        let output_file = self.output_file()?;
        match self.mode {
            Mode::Compress => self.compress(&output_file)?,
            Mode::Decompress => self.decompress(&output_file)?,
        }
        Ok(output_file)
    }

    /// `x.txt` compresses to `<dir>/x.txt.huff`, `x.txt.huff` decompresses to `<dir>/x.txt`.
    fn output_file(&self) -> Result<PathBuf> {
        match self.mode {
            Mode::Compress => {
                let mut file_name = self.input_file_name()?;
                file_name.push(".");
                file_name.push(ARCHIVE_EXTENSION);
                Ok(self.output_directory.join(file_name))
            }
            Mode::Decompress => {
                if self.input_file.extension().and_then(|e| e.to_str()) != Some(ARCHIVE_EXTENSION)
                {
                    return Err(Error::MissingArchiveExtension(display_path(&self.input_file)));
                }
                let file_stem = self.input_file.file_stem().ok_or_else(|| {
                    Error::MissingArchiveExtension(display_path(&self.input_file))
                })?;
                Ok(self.output_directory.join(file_stem))
            }
        }
    }

    fn compress(&self, output_file: &Path) -> Result<()> {
        let bytes = read_input_file(&self.input_file)?;
        let text = String::from_utf8(bytes)
            .map_err(|_| Error::InputFileIsNotValidUtf8(display_path(&self.input_file)))?;
        let compression = compress(&text)?;
        let archive = Archive::try_from(&compression)?;
        write_output_file(output_file, |writer| archive.write_to(writer))?;
        log::info!(
            "Compressed '{}' to {}% of its size",
            display_path(&self.input_file),
            compression.compression_ratio
        );
        Ok(())
    }

    fn decompress(&self, output_file: &Path) -> Result<()> {
        let archive = Archive::from_bytes(&read_input_file(&self.input_file)?)?;
        let decompression = decompress_bits(&archive.encoded_bits, &archive.tree_representation)?;
        write_output_file(output_file, |writer| {
            writer.write_all(decompression.original_text.as_bytes())
        })?;
        log::info!("Decompressed '{}'", display_path(&self.input_file));
        Ok(())
    }

    fn input_file_name(&self) -> Result<std::ffi::OsString> {
        self.input_file
            .file_name()
            .map(|name| name.to_owned())
            .ok_or_else(|| {
                Error::UnableToOpenInputFileForReading(
                    display_path(&self.input_file),
                    std::io::Error::from(std::io::ErrorKind::InvalidInput),
                )
            })
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn read_input_file(file_path: &Path) -> Result<Vec<u8>> {
    fs::read(file_path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
            Error::UnableToOpenInputFileForReading(display_path(file_path), e)
        }
        _ => Error::FailedToReadInputFile(display_path(file_path), e),
    })
}

fn write_output_file<F>(file_path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<fs::File>) -> std::io::Result<()>,
{
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(display_path(file_path), e))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| Error::FailedToWriteOutputFile(display_path(file_path), e))
}

/// Counts how many jobs would write each output file.
fn count_output_files(jobs: &[FileJob]) -> HashMap<PathBuf, usize> {
    let mut counts = HashMap::new();
    for output_file in jobs.iter().filter_map(|job| job.output_file().ok()) {
        *counts.entry(output_file).or_insert(0) += 1;
    }
    counts
}

/// Runs one job per input file on a pool of `number_of_threads` workers and
/// reports the produced files in input order. Jobs whose output file would
/// also be written by another job fail without writing anything.
pub fn process_files(arguments: &Arguments) -> Result<Vec<PathBuf>> {
    let jobs: Vec<FileJob> = arguments
        .input_files
        .iter()
        .map(|input_file| FileJob {
            mode: arguments.mode,
            input_file: input_file.clone(),
            output_directory: arguments.output_directory.clone(),
        })
        .collect();
    let output_file_counts = count_output_files(&jobs);

    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    let (sender, receiver) = mpsc::channel();
    for (index, job) in jobs.into_iter().enumerate() {
        let clashing_output = job.output_file().ok().filter(|output_file| {
            output_file_counts
                .get(output_file)
                .is_some_and(|&count| count > 1)
        });
        if let Some(output_file) = clashing_output {
            let _ = sender.send((
                index,
                Err(Error::OutputFileClaimedByMultipleInputs(display_path(&output_file))),
            ));
            continue;
        }
        let sender = sender.clone();
        threadpool.execute(move || {
            // the receiver outlives the pool, sending can't fail
            let _ = sender.send((index, job.execute()));
        });
    }
    drop(sender);

    let mut results: Vec<(usize, Result<PathBuf>)> = receiver.iter().collect();
    results.sort_by_key(|(index, _)| *index);
    let mut output_files = Vec::with_capacity(results.len());
    let mut failed = 0;
    for (index, result) in results {
        match result {
            Ok(output_file) => output_files.push(output_file),
            Err(e) => {
                log::error!(
                    "Processing of '{}' failed: {}",
                    display_path(&arguments.input_files[index]),
                    e
                );
                failed += 1;
            }
        }
    }
    // jobs that panicked never reported back
    failed += arguments.input_files.len() - failed - output_files.len();
    if failed > 0 {
        return Err(Error::FailedToProcessFiles(failed));
    }
    Ok(output_files)
}
