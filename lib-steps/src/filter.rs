//! Zero-phase IIR filtering, the forward-backward technique known from MATLAB's and scipy's
//! `filtfilt`: the signal is padded with an odd reflection of itself at both ends, run through the
//! filter forward and then backward, each pass starting from the filter's steady state for the
//! first value it sees. The phase lag of the forward pass is cancelled by the backward pass.

use alloc::vec::Vec;
use crate::*;

/// Coefficients of a linear time invariant IIR filter:
/// `a[0] y[n] = b[0] x[n] + ... + b[M] x[n-M] - a[1] y[n-1] - ... - a[M] y[n-M]`.
/// 
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec
{
    /// Feedback coefficients.
    pub a: Vec<f64>,

    /// Feedforward coefficients.
    pub b: Vec<f64>,
}

impl FilterSpec
{
    pub fn new(a: &[f64], b: &[f64]) -> Self {
        FilterSpec { a: a.to_vec(), b: b.to_vec() }
    }

    /// Filter order, i.e. the number of delay elements.
    pub fn order(&self) -> usize {
        self.a.len().saturating_sub(1)
    }

    pub fn validate(&self) -> Result<(), ProcessingError> {
        if self.a.is_empty() || self.b.is_empty() {
            return Err(ProcessingError::InvalidFilterSpecification("empty coefficient vector"));
        }
        if self.a.len() != self.b.len() {
            return Err(ProcessingError::InvalidFilterSpecification("feedback and feedforward orders differ"));
        }
        if self.a.iter().chain(self.b.iter()).any(|c| !c.is_finite()) {
            return Err(ProcessingError::InvalidFilterSpecification("non-finite coefficient"));
        }
        if self.a[0] == 0.0 {
            return Err(ProcessingError::InvalidFilterSpecification("leading feedback coefficient is zero"));
        }
        Ok(())
    }
}

/// A filter ready to be applied, with coefficients normalized so `a[0] == 1` and the steady state
/// of its delay line for a unit step input precomputed.
/// 
#[derive(Debug, Clone)]
pub struct ZeroPhaseFilter
{
    a: Vec<f64>,
    b: Vec<f64>,

    /// Delay line contents when the filter has settled on a constant input of 1.
    zi: Vec<f64>,
}

impl ZeroPhaseFilter
{
    pub fn new(spec: &FilterSpec) -> Result<Self, ProcessingError> {
        spec.validate()?;

        let a0 = spec.a[0];
        let a: Vec<f64> = spec.a.iter().map(|c| c / a0).collect();
        let b: Vec<f64> = spec.b.iter().map(|c| c / a0).collect();
        let order = spec.order();

        // Solve zi = A zi + B for the companion form without a matrix, see scipy's `lfilter_zi`.
        let mut zi = Vec::with_capacity(order);
        if order > 0 {
            let a_sum: f64 = a.iter().sum();
            if libm::fabs(a_sum) < 1e-12 {
                return Err(ProcessingError::InvalidFilterSpecification("filter has no steady state"));
            }
            let b_sum: f64 = (1..=order).map(|k| b[k] - a[k] * b[0]).sum();
            let zi0 = b_sum / a_sum;
            zi.push(zi0);

            let mut asum = 1.0;
            let mut csum = 0.0;
            for k in 1..order {
                asum += a[k];
                csum += b[k] - a[k] * b[0];
                zi.push(asum * zi0 - csum);
            }
        }

        Ok(ZeroPhaseFilter { a, b, zi })
    }

    /// Number of samples added at either end before filtering.
    fn pad_length(&self, len: usize) -> usize {
        (3 * self.zi.len()).min(len.saturating_sub(1))
    }

    /// Filter `input` forward and backward. The output has the same length as the input and no
    /// phase shift relative to it.
    /// 
    pub fn apply(&self, input: &[f64]) -> Vec<f64> {
        if input.is_empty() {
            return Vec::new();
        }

        let pad = self.pad_length(input.len());
        let extended = odd_extension(input, pad);

        let mut forward = self.filter(&extended, extended[0]);
        forward.reverse();
        let initial = forward[0];
        let mut output = self.filter(&forward, initial);
        output.reverse();

        output.drain(..pad);
        output.truncate(input.len());
        output
    }

    /// One causal pass (direct form II transposed), starting from the steady state for `initial`.
    fn filter(&self, input: &[f64], initial: f64) -> Vec<f64> {
        let order = self.zi.len();
        let mut state: Vec<f64> = self.zi.iter().map(|z| z * initial).collect();

        input.iter().map(|&x| {
            let y = self.b[0] * x + state.first().copied().unwrap_or(0.0);
            for i in 0..order {
                let next = if i + 1 < order { state[i + 1] } else { 0.0 };
                state[i] = self.b[i + 1] * x + next - self.a[i + 1] * y;
            }
            y
        }).collect()
    }
}

/// Pads the signal at both ends with `pad` samples mirrored through its end points.
fn odd_extension(input: &[f64], pad: usize) -> Vec<f64> {
    let first = input[0];
    let last = input[input.len() - 1];

    let mut extended = Vec::with_capacity(input.len() + 2 * pad);
    extended.extend((1..=pad).rev().map(|i| 2.0 * first - input[i]));
    extended.extend_from_slice(input);
    extended.extend((1..=pad).map(|i| 2.0 * last - input[input.len() - 1 - i]));
    extended
}
