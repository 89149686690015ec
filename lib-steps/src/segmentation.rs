//! Run length encoding of the stationary mask into labelled runs, and selection of the moving runs
//! that make up complete steps.

use alloc::vec::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind
{
    Stationary,
    Moving,
}

/// Maximal run of samples with the same classification, covering `start..end`.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment
{
    pub kind: SegmentKind,
    pub start: usize,
    pub end: usize,
}

impl Segment
{
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// One step: the device starts moving at `start` and is stationary again at `end`. Samples
/// `start..end` are moving, sample `end` is the first stationary one after them.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInterval
{
    pub start: usize,
    pub end: usize,
}

impl StepInterval
{
    /// Number of moving samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Splits the mask into consecutive runs. The runs alternate in kind, are ordered and together
/// cover every index of the mask exactly once.
/// 
pub fn segment(stationary: &[bool]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for (i, &is_stationary) in stationary.iter().enumerate() {
        let kind = if is_stationary { SegmentKind::Stationary } else { SegmentKind::Moving };
        match segments.last_mut() {
            Some(current) if current.kind == kind => current.end = i + 1,
            _ => segments.push(Segment { kind, start: i, end: i + 1 }),
        }
    }

    segments
}

/// Moving runs that have stationary samples on both sides. A run touching the start or the end of
/// the recording is an incomplete step and is left out.
/// 
pub fn step_intervals(stationary: &[bool]) -> Vec<StepInterval> {
    let segments = segment(stationary);
    let total = stationary.len();

    let mut intervals = Vec::new();
    for seg in segments.iter().filter(|s| s.kind == SegmentKind::Moving) {
        if seg.start == 0 || seg.end == total {
            log::warn!("Ignoring incomplete movement at samples {}..{}", seg.start, seg.end);
            continue;
        }
        intervals.push(StepInterval { start: seg.start, end: seg.end });
    }

    log::debug!("{} segments, {} complete steps", segments.len(), intervals.len());
    intervals
}
