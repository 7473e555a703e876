/// linear interpolation of the value at `x` on the line through
/// `(x0, y0)` and `(x1, y1)`.
pub fn linear(x0: i32, y0: f64, x1: i32, y1: f64, x: i32) -> f64 {
    if x1 == x0 {
        return y0;
    }
    let t = f64::from(x - x0) / f64::from(x1 - x0);
    y0 + (y1 - y0) * t
}

/// fills missing entries of an evenly spaced sequence.
///
/// interior gaps are linearly interpolated between their nearest known
/// neighbors, trailing gaps repeat the last known value. a leading gap has
/// no left neighbor and is an error, as is a sequence with no known values.
///
/// # Arguments
///
/// * `values` - sequence with gaps as `None`
///
/// # Returns
///
/// the completed sequence, or the index of the first value that could not be filled
pub fn fill_gaps(values: &[Option<f64>]) -> Result<Vec<f64>, usize> {
    let first_known = values.iter().position(|v| v.is_some()).ok_or(0_usize)?;
    if first_known > 0 {
        return Err(0);
    }
    let mut out = Vec::with_capacity(values.len());
    let mut last_known: (usize, f64) = (0, 0.0);
    for (idx, value) in values.iter().enumerate() {
        match value {
            Some(v) => {
                last_known = (idx, *v);
                out.push(*v);
            }
            None => {
                let next = values[idx..]
                    .iter()
                    .enumerate()
                    .find_map(|(offset, v)| v.map(|v| (idx + offset, v)));
                let filled = match next {
                    Some((next_idx, next_value)) => linear(
                        last_known.0 as i32,
                        last_known.1,
                        next_idx as i32,
                        next_value,
                        idx as i32,
                    ),
                    None => last_known.1,
                };
                out.push(filled);
            }
        }
    }
    Ok(out)
}
