use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

use crate::entities::{Rect, SPInstance};

/// The instance source is structurally broken: the token stream ended early or
/// held a value that could not be interpreted.
#[derive(Clone, Debug, PartialEq)]
pub struct MalformedInput {
    pub detail: String,
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed input: {}", self.detail)
    }
}

impl Error for MalformedInput {}

fn malformed(detail: impl Into<String>) -> MalformedInput {
    MalformedInput {
        detail: detail.into(),
    }
}

/// Reads a rectangle list file, one `width height` pair per line.
pub fn read_rect_list(path: &Path) -> Result<Vec<Rect>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let rects = parse_rect_list(&content)
        .with_context(|| format!("could not parse instance file: {}", path.display()))?;
    Ok(rects)
}

/// Parses a rectangle list, one `width height` pair per line.
/// Empty lines are skipped; any fields beyond the first two are ignored.
pub fn parse_rect_list(content: &str) -> Result<Vec<Rect>, MalformedInput> {
    let mut rects = vec![];
    for (i, line) in content.lines().enumerate() {
        let mut fields = line.split_whitespace();
        let (width, height) = match (fields.next(), fields.next()) {
            (None, _) => continue,
            (Some(w), Some(h)) => (w, h),
            (Some(_), None) => {
                return Err(malformed(format!(
                    "line {}: expected \"width height\", got {:?}",
                    i + 1,
                    line.trim()
                )));
            }
        };
        let width: f32 = width
            .parse()
            .map_err(|_| malformed(format!("line {}: width {width:?} is not a number", i + 1)))?;
        let height: f32 = height
            .parse()
            .map_err(|_| malformed(format!("line {}: height {height:?} is not a number", i + 1)))?;
        let rect =
            Rect::try_new(width, height).map_err(|e| malformed(format!("line {}: {e}", i + 1)))?;
        rects.push(rect);
    }
    Ok(rects)
}

/// Identity carried in a labelled benchmark filename stem such as
/// `3_W1000_OPTH200`: the strip width and the known optimal height.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct StemLabel {
    pub strip_width: f32,
    pub opt_height: f32,
}

/// Recovers the strip width and known optimal height from a labelled filename stem.
pub fn parse_labelled_stem(stem: &str) -> Option<StemLabel> {
    let mut strip_width = None;
    let mut opt_height = None;
    for part in stem.split('_') {
        if let Some(v) = part.strip_prefix("OPTH") {
            opt_height = v.parse().ok();
        } else if let Some(v) = part.strip_prefix('W') {
            strip_width = v.parse().ok();
        }
    }
    Some(StemLabel {
        strip_width: strip_width?,
        opt_height: opt_height?,
    })
}

/// Reads a labelled benchmark file (`<i>_W<width>_OPTH<height>.txt`) into an
/// instance with its known optimal height attached.
pub fn read_labelled_instance(path: &Path) -> Result<SPInstance> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let label = parse_labelled_stem(&stem).ok_or_else(|| {
        malformed(format!(
            "filename {} carries no W<width>_OPTH<height> label",
            path.display()
        ))
    })?;
    let rects = read_rect_list(path)?;
    Ok(SPInstance::with_known_opt_height(
        rects,
        label.strip_width,
        label.opt_height,
    ))
}

/// One problem from an OR-Library stream: the dimensions of its (first)
/// declared container plus the fully expanded rectangle list.
#[derive(Debug, Clone)]
pub struct OrlibProblem {
    pub strip_width: f32,
    pub opt_height: f32,
    pub rects: Vec<Rect>,
}

impl OrlibProblem {
    pub fn to_instance(&self) -> SPInstance {
        SPInstance::with_known_opt_height(self.rects.clone(), self.strip_width, self.opt_height)
    }
}

/// Parses a whitespace-delimited OR-Library integer stream.
///
/// Layout: problem count; per problem a container count, per container its
/// width and height, a box-type count and per box-type its width, height, two
/// unused fields and a repetition count. Box types are expanded per their
/// repetition count, in input order.
///
/// Fails with [`MalformedInput`] if the stream is exhausted before all declared
/// fields are read; trailing unconsumed values only produce a warning.
pub fn parse_orlib(content: &str) -> Result<Vec<OrlibProblem>, MalformedInput> {
    let mut stream = IntStream::new(content);

    let n_problems = stream.next("problem count")?;
    let mut problems = Vec::with_capacity(n_problems as usize);

    for p in 1..=n_problems {
        let n_containers = stream.next(&format!("container count of problem {p}"))?;
        if n_containers == 0 {
            return Err(malformed(format!("problem {p} declares no containers")));
        }
        let strip_width = stream.next(&format!("container width of problem {p}"))?;
        let opt_height = stream.next(&format!("container height of problem {p}"))?;
        // additional containers carry no information for strip packing
        for _ in 1..n_containers {
            stream.next(&format!("container width of problem {p}"))?;
            stream.next(&format!("container height of problem {p}"))?;
        }

        let n_box_types = stream.next(&format!("box type count of problem {p}"))?;
        let mut rects = vec![];
        for _ in 0..n_box_types {
            let width = stream.next(&format!("box width of problem {p}"))?;
            let height = stream.next(&format!("box height of problem {p}"))?;
            stream.next(&format!("unused box field of problem {p}"))?;
            stream.next(&format!("unused box field of problem {p}"))?;
            let reps = stream.next(&format!("repetition count of problem {p}"))?;

            let rect = Rect::try_new(width as f32, height as f32)
                .map_err(|e| malformed(format!("problem {p}: {e}")))?;
            rects.extend(std::iter::repeat_n(rect, reps as usize));
        }

        problems.push(OrlibProblem {
            strip_width: strip_width as f32,
            opt_height: opt_height as f32,
            rects,
        });
    }

    let trailing = stream.remaining();
    if trailing > 0 {
        warn!("[IMPORT] {trailing} unconsumed values remain at the end of the stream");
    }

    Ok(problems)
}

struct IntStream<'a> {
    tokens: std::str::SplitWhitespace<'a>,
    consumed: usize,
}

impl<'a> IntStream<'a> {
    fn new(content: &'a str) -> Self {
        IntStream {
            tokens: content.split_whitespace(),
            consumed: 0,
        }
    }

    fn next(&mut self, what: &str) -> Result<u32, MalformedInput> {
        let token = self.tokens.next().ok_or_else(|| {
            malformed(format!(
                "stream exhausted after {} values, expected {what}",
                self.consumed
            ))
        })?;
        let value = token.parse().map_err(|_| {
            malformed(format!(
                "token {token:?} is not an unsigned integer ({what})"
            ))
        })?;
        self.consumed += 1;
        Ok(value)
    }

    fn remaining(self) -> usize {
        self.tokens.count()
    }
}
