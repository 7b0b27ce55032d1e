use crate::error::{Error, Result};

/// Fixed-length input windows paired with single-step-ahead labels.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSet {
    pub inputs: Vec<Vec<f64>>,
    pub labels: Vec<f64>,
}

impl WindowSet {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Slices `values` into overlapping windows of `length`, each paired with
/// the value immediately following it.
///
/// For a series of length `n` with `n > length` this yields exactly
/// `n - length` windows, one per start offset: `inputs[i]` is
/// `values[i..i + length]` and `labels[i]` is `values[i + length]`.
/// Deterministic and pure: identical input always yields identical output.
pub fn make_windows(values: &[f64], length: usize) -> Result<WindowSet> {
    if length == 0 {
        return Err(Error::ZeroWindowLength);
    }
    if values.len() <= length {
        return Err(Error::InsufficientData {
            len: values.len(),
            length,
            required: length + 1,
        });
    }

    let count = values.len() - length;
    let mut inputs = Vec::with_capacity(count);
    let mut labels = Vec::with_capacity(count);
    for start in 0..count {
        inputs.push(values[start..start + length].to_vec());
        labels.push(values[start + length]);
    }

    Ok(WindowSet { inputs, labels })
}
