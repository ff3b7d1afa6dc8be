//! Assembling the final GIF with an external compositor.
//!
//! The resampled frames are passed to an ImageMagick-compatible command line:
//!
//! ```text
//! convert <first> -delay <d1> <frame1> ... -layers Optimize -loop <n> <output>
//! ```

use std::{
    ffi::OsString,
    fmt,
    path::{Path, PathBuf},
    process::Command,
    time::Duration,
};

use anyhow::{bail, Context};
use itertools::Itertools;
use ttyanim_resample::EncodedFrame;

/// Configures how frames are handed to the compositor.
#[derive(Debug, Clone)]
pub struct GifEncoder {
    program: OsString,
    loop_count: u32,
    pause: Duration,
}

impl GifEncoder {
    /// Creates an encoder that runs `program`, looping forever without a final pause.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            loop_count: 0,
            pause: Duration::ZERO,
        }
    }

    /// Sets the number of times the animation plays. 0 loops forever.
    pub fn loop_count(mut self, loop_count: u32) -> Self {
        self.loop_count = loop_count;
        self
    }

    /// Sets how long the last frame is held before the animation restarts.
    pub fn pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Builds the compositor invocation for `frames`.
    ///
    /// A copy of the last frame is appended that is displayed for the configured pause, rounded
    /// to whole centiseconds.
    pub fn command(
        &self,
        mut frames: Vec<EncodedFrame<PathBuf>>,
        output: &Path,
    ) -> anyhow::Result<EncodeCommand> {
        let Some(last) = frames.last() else {
            bail!("cannot encode an animation without frames");
        };

        let mut pause_frame = last.clone();
        pause_frame.set_delay_centis((self.pause.as_secs_f64() * 100.0).round() as u32);
        frames.push(pause_frame);

        let mut args: Vec<OsString> = Vec::with_capacity(frames.len() * 3 + 5);
        let mut iter = frames.iter();
        if let Some(first) = iter.next() {
            args.push(first.id().into());
        }
        for frame in iter {
            args.push("-delay".into());
            args.push(frame.delay_centis().to_string().into());
            args.push(frame.id().into());
        }
        args.push("-layers".into());
        args.push("Optimize".into());
        args.push("-loop".into());
        args.push(self.loop_count.to_string().into());
        args.push(output.into());

        Ok(EncodeCommand {
            program: self.program.clone(),
            args,
            frame_count: frames.len(),
        })
    }
}

/// A ready-to-run compositor invocation.
///
/// Displays as the shell command line it corresponds to.
#[derive(Debug, Clone)]
pub struct EncodeCommand {
    program: OsString,
    args: Vec<OsString>,
    frame_count: usize,
}

impl EncodeCommand {
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Returns the number of frames in the animation, including the pause frame.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Runs the compositor and waits for it to exit.
    ///
    /// Returns an error if it could not be started or exited unsuccessfully.
    pub fn run(&self) -> anyhow::Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .with_context(|| format!("failed to run `{}`", self.program.to_string_lossy()))?;
        if !status.success() {
            bail!(
                "failed to convert images to GIF (`{}` {})",
                self.program.to_string_lossy(),
                status
            );
        }
        Ok(())
    }
}

impl fmt::Display for EncodeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.program.to_string_lossy(),
            self.args.iter().map(|arg| arg.to_string_lossy()).format(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(delays: &[(&str, u32)]) -> Vec<EncodedFrame<PathBuf>> {
        delays
            .iter()
            .map(|&(name, delay)| EncodedFrame::new(PathBuf::from(name), delay))
            .collect()
    }

    #[test]
    fn command_line() {
        let cmd = GifEncoder::new("convert")
            .pause(Duration::from_secs(2))
            .command(frames(&[("a.xwd", 0), ("b.xwd", 4), ("c.xwd", 8)]), "out.gif".as_ref())
            .unwrap();

        assert_eq!(cmd.frame_count(), 4);
        assert_eq!(
            cmd.to_string(),
            "convert a.xwd -delay 4 b.xwd -delay 8 c.xwd -delay 200 c.xwd \
             -layers Optimize -loop 0 out.gif"
        );
    }

    #[test]
    fn single_frame() {
        let cmd = GifEncoder::new("convert")
            .loop_count(3)
            .pause(Duration::from_millis(1234))
            .command(frames(&[("only.xwd", 0)]), "o.gif".as_ref())
            .unwrap();

        assert_eq!(cmd.frame_count(), 2);
        assert_eq!(
            cmd.args(),
            ["only.xwd", "-delay", "123", "only.xwd", "-layers", "Optimize", "-loop", "3", "o.gif"]
                .map(OsString::from)
        );
    }

    #[test]
    fn pause_is_rounded() {
        let delays = |pause| {
            let cmd = GifEncoder::new("convert")
                .pause(pause)
                .command(frames(&[("a", 0)]), "out.gif".as_ref())
                .unwrap();
            cmd.args()[2].clone()
        };
        assert_eq!(delays(Duration::from_millis(29)), "3");
        assert_eq!(delays(Duration::from_millis(24)), "2");
        assert_eq!(delays(Duration::from_micros(1500)), "0");
        assert_eq!(delays(Duration::from_micros(5000)), "1");
        assert_eq!(delays(Duration::ZERO), "0");
    }

    #[test]
    fn no_frames() {
        assert!(GifEncoder::new("convert")
            .command(Vec::new(), "out.gif".as_ref())
            .is_err());
    }

    #[cfg(unix)]
    #[test]
    fn exit_status() {
        let frames = frames(&[("a.xwd", 0)]);
        let ok = GifEncoder::new("true").command(frames.clone(), "out.gif".as_ref());
        ok.unwrap().run().unwrap();

        let failing = GifEncoder::new("false").command(frames.clone(), "out.gif".as_ref());
        assert!(failing.unwrap().run().is_err());

        let missing = GifEncoder::new("ttyanim-no-such-encoder");
        let missing = missing.command(frames, "out.gif".as_ref());
        assert!(missing.unwrap().run().is_err());
    }
}
