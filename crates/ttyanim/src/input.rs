//! Discovery and parsing of recorded frame images.
//!
//! Frame images follow the naming convention `<order>_<delay>.<ext>`, eg. `00042_3500.xwd`: the
//! first number is the frame's position in the recording, the second one how long the previous
//! frame was displayed before this one replaced it.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use ttyanim_resample::{Frame, FrameSequence};

use crate::Config;

static FILE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)_(\d+)\.[a-zA-Z]+$").unwrap());

/// Returns the list of candidate input files for `config`.
///
/// Explicitly configured inputs are returned as-is, after checking that they exist. Otherwise the
/// search directory is scanned for files with the configured extension.
pub fn discover(config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let paths = if config.inputs.is_empty() {
        scan_dir(&config.search_dir, &config.extension)?
    } else {
        for path in &config.inputs {
            if !path.is_file() {
                bail!("input file '{}' does not exist", path.display());
            }
        }
        config.inputs.clone()
    };

    if paths.is_empty() {
        bail!("no input file");
    }
    Ok(paths)
}

fn scan_dir(dir: &Path, extension: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory '{}'", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().map_or(false, |ext| ext == extension) {
            paths.push(path);
        }
    }
    paths.sort();

    log::debug!(
        "found {} `*.{}` files in '{}'",
        paths.len(),
        extension,
        dir.display()
    );
    Ok(paths)
}

/// Parses `<order>_<delay>.<ext>` from the file name component of `path`.
///
/// Returns `None` if the name does not follow the convention or a number does not fit in a `u64`.
pub fn parse_file_name(path: &Path) -> Option<(u64, u64)> {
    let name = path.file_name()?.to_str()?;
    let caps = FILE_NAME.captures(name)?;
    let order = caps[1].parse().ok()?;
    let delay = caps[2].parse().ok()?;
    Some((order, delay))
}

/// A recorded frame image and the values parsed from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFrame {
    path: PathBuf,
    order: u64,
    delay: u64,
}

impl InputFrame {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn order(&self) -> u64 {
        self.order
    }

    /// Returns the delay encoded in the file name, in filename units.
    pub fn delay(&self) -> u64 {
        self.delay
    }
}

/// The frame images of one recording, sorted by their order number.
#[derive(Debug, Clone)]
pub struct InputSet {
    frames: Vec<InputFrame>,
    consecutive: bool,
}

impl InputSet {
    /// Parses and sorts a list of frame image paths.
    ///
    /// Paths not following the naming convention are skipped. Gaps or duplicates in the numbering
    /// are logged, and are reflected in [`InputSet::is_consecutive`], but are not an error.
    pub fn parse(paths: &[PathBuf]) -> anyhow::Result<Self> {
        let mut frames = Vec::with_capacity(paths.len());
        for path in paths {
            match parse_file_name(path) {
                Some((order, delay)) => frames.push(InputFrame {
                    path: path.clone(),
                    order,
                    delay,
                }),
                None => log::warn!(
                    "skipping '{}' (name does not match `<order>_<delay>.<ext>`)",
                    path.display()
                ),
            }
        }

        if frames.is_empty() {
            bail!(
                "none of the {} input files are named `<order>_<delay>.<ext>`",
                paths.len()
            );
        }

        frames.sort_by_key(|f| f.order);

        let mut consecutive = true;
        for (prev, next) in frames.iter().tuple_windows() {
            if prev.order.checked_add(1) != Some(next.order) {
                consecutive = false;
                log::warn!(
                    "file '{}' isn't immediately consecutive to '{}'",
                    next.path.display(),
                    prev.path.display()
                );
            }
        }

        Ok(Self {
            frames,
            consecutive,
        })
    }

    pub fn frames(&self) -> &[InputFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns whether the order numbers form a gapless run without duplicates.
    pub fn is_consecutive(&self) -> bool {
        self.consecutive
    }

    /// Builds the frame sequence, scaling filename delays by `delay_unit`.
    ///
    /// Fails if the total recording length does not fit in `u64` microseconds.
    pub fn to_sequence(&self, delay_unit: Duration) -> anyhow::Result<FrameSequence<PathBuf>> {
        let unit_us = u64::try_from(delay_unit.as_micros()).context("delay unit is too large")?;
        let mut total_us: u64 = 0;
        let mut seq = FrameSequence::new();
        for f in &self.frames {
            let scaled = f.delay.checked_mul(unit_us);
            let Some((delay_us, total)) =
                scaled.and_then(|us| Some((us, total_us.checked_add(us)?)))
            else {
                bail!(
                    "delay of '{}' makes the recording longer than {} microseconds",
                    f.path.display(),
                    u64::MAX
                );
            };
            total_us = total;
            seq.push(Frame::new(f.path.clone(), Duration::from_micros(delay_us)));
        }
        Ok(seq)
    }

    /// Deletes all frame images of this set.
    pub fn delete_files(&self) -> anyhow::Result<()> {
        for frame in &self.frames {
            fs::remove_file(&frame.path)
                .with_context(|| format!("failed to delete '{}'", frame.path.display()))?;
        }
        log::debug!("deleted {} input files", self.frames.len());
        Ok(())
    }
}
