//! Run-progress accounting.
//!
//! One tracker owns the whole weighting scheme so no call site carries
//! arithmetic of its own: crawling is worth 15 points split evenly across
//! category links (credited once per finished link, however many pages it
//! took), enrichment the remaining 85 split evenly across all discovered
//! products (credited per product attempted, success or failure alike).
//! Completion pins the value to exactly 100, which also covers the
//! zero-product run where the enrichment phase has nothing to credit.

/// One progress snapshot: the running 0–100 value and the human-readable
/// description of the current step.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    pub percent: f64,
    pub step: String,
}

/// Receiver of progress snapshots. Frontends implement this to surface
/// status; tests implement it to record the sequence.
pub trait ProgressSink {
    fn update(&mut self, update: ProgressUpdate);
}

/// A sink that discards every update.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn update(&mut self, _update: ProgressUpdate) {}
}

/// Accumulates run progress from discrete "category done" / "product done"
/// events. Monotonically non-decreasing; capped at 100.
#[derive(Debug)]
pub struct ProgressTracker {
    value: f64,
    step: String,
    category_share: f64,
    product_share: f64,
}

/// Portion of the run attributed to the crawling phase.
const CRAWL_POINTS: f64 = 15.0;
/// Portion of the run attributed to the enrichment phase.
const ENRICH_POINTS: f64 = 85.0;

impl ProgressTracker {
    /// Creates a tracker for a run over `category_count` links.
    #[must_use]
    pub fn new(category_count: usize) -> Self {
        let category_share = if category_count == 0 {
            0.0
        } else {
            CRAWL_POINTS / category_count as f64
        };
        Self {
            value: 0.0,
            step: String::new(),
            category_share,
            product_share: 0.0,
        }
    }

    /// Fixes the enrichment-phase share once crawling has discovered the
    /// total product count. With zero products the enrichment phase simply
    /// contributes nothing; [`ProgressTracker::complete`] still lands on 100.
    pub fn set_total_products(&mut self, total: usize) {
        self.product_share = if total == 0 {
            0.0
        } else {
            ENRICH_POINTS / total as f64
        };
    }

    /// Credits one finished category link.
    pub fn category_done(&mut self) {
        self.advance(self.category_share);
    }

    /// Credits one attempted product (failures advance progress too —
    /// progress tracks work attempted, not work succeeded).
    pub fn product_done(&mut self) {
        self.advance(self.product_share);
    }

    /// Updates the current-step description.
    pub fn set_step(&mut self, step: impl Into<String>) {
        self.step = step.into();
    }

    /// Marks the run finished: pins the value to exactly 100 and installs
    /// the terminal summary line.
    pub fn complete(&mut self, category_count: usize, product_count: usize) {
        self.value = 100.0;
        self.step = format!(
            "Количество категорий: {category_count}. Количество товаров: {product_count}."
        );
    }

    /// Current value and step as an emittable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> ProgressUpdate {
        ProgressUpdate {
            percent: self.value,
            step: self.step.clone(),
        }
    }

    fn advance(&mut self, share: f64) {
        // share is never negative, so the value never decreases.
        self.value = (self.value + share).min(100.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crawl_phase_totals_fifteen_points() {
        let mut tracker = ProgressTracker::new(3);
        for _ in 0..3 {
            tracker.category_done();
        }
        assert!((tracker.snapshot().percent - 15.0).abs() < 1e-9);
    }

    #[test]
    fn complete_pins_exactly_one_hundred() {
        let mut tracker = ProgressTracker::new(3);
        tracker.set_total_products(7);
        for _ in 0..3 {
            tracker.category_done();
        }
        for _ in 0..7 {
            tracker.product_done();
        }
        tracker.complete(3, 7);
        assert_eq!(tracker.snapshot().percent, 100.0);
    }

    #[test]
    fn progress_is_monotonic() {
        let mut tracker = ProgressTracker::new(2);
        tracker.set_total_products(5);
        let mut last = 0.0;
        tracker.category_done();
        for _ in 0..5 {
            tracker.product_done();
            let now = tracker.snapshot().percent;
            assert!(now >= last, "progress went backwards: {last} -> {now}");
            last = now;
        }
        tracker.category_done();
        assert!(tracker.snapshot().percent >= last);
    }

    #[test]
    fn zero_products_does_not_divide_by_zero() {
        let mut tracker = ProgressTracker::new(2);
        tracker.set_total_products(0);
        tracker.category_done();
        tracker.category_done();
        assert!((tracker.snapshot().percent - 15.0).abs() < 1e-9);
        tracker.product_done();
        assert!((tracker.snapshot().percent - 15.0).abs() < 1e-9);
        tracker.complete(2, 0);
        assert_eq!(tracker.snapshot().percent, 100.0);
    }

    #[test]
    fn value_never_exceeds_one_hundred() {
        let mut tracker = ProgressTracker::new(1);
        tracker.set_total_products(1);
        for _ in 0..10 {
            tracker.category_done();
            tracker.product_done();
        }
        assert!(tracker.snapshot().percent <= 100.0);
    }

    #[test]
    fn complete_installs_summary_step() {
        let mut tracker = ProgressTracker::new(2);
        tracker.complete(2, 31);
        assert_eq!(
            tracker.snapshot().step,
            "Количество категорий: 2. Количество товаров: 31."
        );
    }
}
