pub struct Accumulator {
    n_vals: usize,
    mean: f64,
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            n_vals: 0,
            mean: 0.0,
        }
    }

    pub fn add(&mut self, val: f64) {
        self.n_vals += 1;
        self.mean += (val - self.mean) / self.n_vals as f64;
    }

    pub fn mean(&self) -> f64 {
        if self.n_vals == 0 {
            return f64::NAN;
        }
        self.mean
    }
}

pub fn compute_mean(vals: &[f64]) -> f64 {
    if vals.is_empty() {
        return f64::NAN;
    }
    vals.iter().sum::<f64>() / vals.len() as f64
}

pub fn compute_var(vals: &[f64]) -> f64 {
    let n_vals = vals.len();
    if n_vals < 2 {
        return f64::NAN;
    }
    let mean = compute_mean(vals);
    vals.iter().map(|&val| (val - mean).powi(2)).sum::<f64>() / (n_vals - 1) as f64
}

pub fn compute_covar(vals_a: &[f64], vals_b: &[f64]) -> f64 {
    let n_vals = vals_a.len();
    if n_vals < 2 || vals_b.len() != n_vals {
        return f64::NAN;
    }
    let mean_a = compute_mean(vals_a);
    let mean_b = compute_mean(vals_b);
    vals_a
        .iter()
        .zip(vals_b)
        .map(|(&val_a, &val_b)| (val_a - mean_a) * (val_b - mean_b))
        .sum::<f64>()
        / (n_vals - 1) as f64
}

/// Compute the Pearson correlation coefficient over paired samples.
///
/// Returns `None` for fewer than two pairs or when either operand has zero
/// variance, so an undefined coefficient never surfaces as NaN.
pub fn compute_pearson(vals_a: &[f64], vals_b: &[f64]) -> Option<f64> {
    if vals_a.len() < 2 || vals_b.len() != vals_a.len() {
        return None;
    }

    let var_a = compute_var(vals_a);
    let var_b = compute_var(vals_b);
    if var_a == 0.0 || var_b == 0.0 {
        return None;
    }

    let coeff = compute_covar(vals_a, vals_b) / (var_a.sqrt() * var_b.sqrt());
    coeff.is_finite().then_some(coeff)
}
