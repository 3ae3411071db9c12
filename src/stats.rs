// Copyright (C) 2020-2026 Andy Kurnia.

// running summary of the samples seen so far, e.g. the word counts one
// exchange leads to over several simulated bags, or final game scores.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    count: u32,
    mean: f64,
    // sum of squared differences from the mean
    m2: f64,
    max: Option<f64>,
}

impl Stats {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    // https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Welford's_online_algorithm
    pub fn update(&mut self, sample: f64) {
        self.count += 1;
        let before = sample - self.mean;
        self.mean += before / self.count as f64;
        self.m2 += before * (sample - self.mean);
        self.max = Some(self.max.map_or(sample, |max| max.max(sample)));
    }

    // folds other in as if its samples had been added here one by one.
    pub fn update_bulk(&mut self, other: &Stats) {
        if other.count == 0 {
            return;
        }
        let (n_self, n_other) = (self.count as f64, other.count as f64);
        let n_total = n_self + n_other;
        let delta = other.mean - self.mean;
        self.mean += delta * n_other / n_total;
        self.m2 += other.m2 + delta * delta * n_self * n_other / n_total;
        self.count += other.count;
        self.max = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
    }

    #[inline(always)]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[inline(always)]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[inline(always)]
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    // sample variance; 0 until there are two samples.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    #[inline(always)]
    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_merge_matches_sequential() {
        let mut all = Stats::new();
        let mut lo = Stats::new();
        let mut hi = Stats::new();
        for (i, v) in [3.0, 5.0, 4.0, 8.0, 0.0, 10.0].into_iter().enumerate() {
            all.update(v);
            if i < 3 { lo.update(v) } else { hi.update(v) }
        }
        lo.update_bulk(&hi);
        assert_eq!(lo.count(), 6);
        assert_eq!(lo.max(), Some(10.0));
        assert!((lo.mean() - all.mean()).abs() < 1e-9);
        assert!((lo.variance() - all.variance()).abs() < 1e-9);
        assert!((all.mean() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn merging_into_empty_copies() {
        let mut empty = Stats::new();
        let mut some = Stats::new();
        some.update(2.0);
        some.update(4.0);
        empty.update_bulk(&some);
        assert_eq!(empty.count(), 2);
        assert!((empty.mean() - 3.0).abs() < 1e-9);
        assert!((empty.variance() - 2.0).abs() < 1e-9);
        Stats::new().update_bulk(&Stats::new());
    }
}
