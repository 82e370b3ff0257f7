//! Rendering collaborators for finished lattice runs.
//!
//! Consumes the trajectory a simulation recorded and writes grayscale PNG
//! frames (two-dimensional runs), a space-time image (one-dimensional
//! runs), and the entropy sequence as CSV for downstream plotting. Video
//! encoding is deliberately left to external tooling.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use antlattice_core::Trajectory;

/// Errors surfaced while writing run artifacts.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
    #[error("png encoding failed: {0}")]
    Png(#[from] png::EncodingError),
    #[error("trajectory holds no records")]
    EmptyTrajectory,
    #[error("color plane of {len} cells does not match a {width}x{height} frame")]
    FrameShape {
        len: usize,
        width: usize,
        height: usize,
    },
}

fn encode_grayscale(path: &Path, width: usize, height: usize, pixels: &[u8]) -> Result<(), RenderError> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width as u32, height as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(pixels)?;
    Ok(())
}

/// Writes one 0/1 color plane as an 8-bit grayscale PNG; black cells render
/// black, white cells white.
pub fn write_color_png(
    path: &Path,
    width: usize,
    height: usize,
    colors: &[u8],
) -> Result<(), RenderError> {
    if colors.len() != width * height {
        return Err(RenderError::FrameShape {
            len: colors.len(),
            width,
            height,
        });
    }
    let pixels: Vec<u8> = colors
        .iter()
        .map(|&color| if color == 0 { 0xff } else { 0x00 })
        .collect();
    encode_grayscale(path, width, height, &pixels)
}

/// Writes numbered frames (`frame_000000.png`, ...) for every
/// `interval`-th record of a two-dimensional run, creating `dir` as
/// needed. Returns the number of frames written.
pub fn write_plane_frames(
    dir: &Path,
    width: usize,
    height: usize,
    trajectory: &Trajectory,
    interval: u64,
) -> Result<usize, RenderError> {
    fs::create_dir_all(dir)?;
    let interval = interval.max(1);
    let mut written = 0;
    for record in trajectory.records() {
        if record.step % interval != 0 {
            continue;
        }
        let path = dir.join(format!("frame_{:06}.png", record.step));
        write_color_png(&path, width, height, &record.colors)?;
        written += 1;
    }
    Ok(written)
}

/// Renders a one-dimensional run as a space-time image: space runs top to
/// bottom, time left to right, one column per recorded step.
pub fn write_line_history_png(
    path: &Path,
    width: usize,
    trajectory: &Trajectory,
) -> Result<(), RenderError> {
    let records = trajectory.records();
    if records.is_empty() {
        return Err(RenderError::EmptyTrajectory);
    }
    let steps = records.len();
    let mut pixels = vec![0xffu8; width * steps];
    for (time, record) in records.iter().enumerate() {
        if record.colors.len() != width {
            return Err(RenderError::FrameShape {
                len: record.colors.len(),
                width,
                height: 1,
            });
        }
        for (position, &color) in record.colors.iter().enumerate() {
            if color != 0 {
                pixels[position * steps + time] = 0x00;
            }
        }
    }
    encode_grayscale(path, steps, width, &pixels)
}

/// Dumps the entropy sequence as `step,direction,entropy` CSV. The
/// direction column carries the reversal marker for plotting collaborators.
pub fn write_entropy_csv(path: &Path, trajectory: &Trajectory) -> Result<(), RenderError> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "step,direction,entropy")?;
    for record in trajectory.records() {
        writeln!(
            out,
            "{},{},{:.12}",
            record.step,
            record.direction.label(),
            record.entropy,
        )?;
    }
    out.flush()?;
    Ok(())
}
