//! Equal-width binning of numeric rows

use crate::error::{Error, Result};

/// Upper bound on the number of bins a single call may create
pub const MAX_BINS: usize = 1 << 24;

/// Bin edges: `numbins + 1` evenly spaced points from `bin_min` to `bin_max`
pub fn bin_edges(bin_min: f64, bin_max: f64, numbins: usize) -> Vec<f64> {
    if numbins == 0 {
        return vec![bin_min];
    }
    let step = (bin_max - bin_min) / numbins as f64;
    let mut edges: Vec<f64> = (0..=numbins).map(|i| bin_min + i as f64 * step).collect();
    if let Some(last) = edges.last_mut() {
        *last = bin_max;
    }
    edges
}

/// Split rows into equal-width bins on the value in `column`.
///
/// There are `floor((bin_max - bin_min) / bin_width)` bins spanning
/// `[bin_min, bin_max]`; bin `i` holds the rows with
/// `edge[i] <= value < edge[i + 1]`. Rows outside the range (including a
/// value equal to `bin_max`, or NaN) are dropped. Every bin is returned,
/// empty or not, and rows keep their input order.
pub fn bin_rows<R>(
    rows: &[R],
    column: usize,
    bin_width: f64,
    bin_min: f64,
    bin_max: f64,
) -> Result<Vec<Vec<R>>>
where
    R: AsRef<[f64]> + Clone,
{
    if !(bin_width.is_finite() && bin_width > 0.0) {
        return Err(Error::InvalidArgument(format!(
            "bin width must be positive and finite, got {}",
            bin_width
        )));
    }
    if !(bin_min.is_finite() && bin_max.is_finite()) || bin_max < bin_min {
        return Err(Error::InvalidArgument(format!(
            "invalid bin range [{}, {}]",
            bin_min, bin_max
        )));
    }

    let quotient = ((bin_max - bin_min) / bin_width).floor();
    if !quotient.is_finite() || quotient > MAX_BINS as f64 {
        return Err(Error::InvalidArgument(format!(
            "bin width {} over [{}, {}] gives more than {} bins",
            bin_width, bin_min, bin_max, MAX_BINS
        )));
    }
    let numbins = quotient as usize;
    let mut bins: Vec<Vec<R>> = vec![Vec::new(); numbins];
    if numbins == 0 {
        return Ok(bins);
    }
    let edges = bin_edges(bin_min, bin_max, numbins);

    let mut dropped = 0usize;
    for (i, row) in rows.iter().enumerate() {
        let values = row.as_ref();
        let value = *values.get(column).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "row {} has {} columns, cannot bin on column {}",
                i,
                values.len(),
                column
            ))
        })?;

        // Number of edges at or below the value; 1..=numbins are real bins
        let idx = edges.partition_point(|&e| e <= value);
        if (1..=numbins).contains(&idx) {
            bins[idx - 1].push(row.clone());
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        log::debug!("{} rows outside [{}, {}) dropped", dropped, bin_min, bin_max);
    }
    log::debug!(
        "size of bins: {:?}",
        bins.iter().map(Vec::len).collect::<Vec<_>>()
    );

    Ok(bins)
}

/// Pull one column out of every bin
pub fn binned_column<R>(bins: &[Vec<R>], column: usize) -> Result<Vec<Vec<f64>>>
where
    R: AsRef<[f64]>,
{
    bins.iter()
        .map(|bin| {
            bin.iter()
                .map(|row| {
                    let values = row.as_ref();
                    values.get(column).copied().ok_or(Error::ColumnOutOfRange {
                        column,
                        width: values.len(),
                    })
                })
                .collect()
        })
        .collect()
}
