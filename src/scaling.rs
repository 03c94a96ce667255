use tracing::debug;

use crate::error::RecipeUiError;
use crate::quantity::{round_to_tenth, Quantity};

/// Serving counter plus the quantities it scales.
///
/// The baseline count and quantities are captured once and never change;
/// every displayed value is derived from them, so stepping up and down
/// any number of times can't accumulate rounding drift.
#[derive(Debug, Clone, PartialEq)]
pub struct ServingState {
    current: u32,
    baseline_servings: u32,
    baseline_quantities: Vec<Quantity>,
    /// Set by the first adjustment; until then the page keeps its own text.
    touched: bool,
}

impl ServingState {
    pub fn new(servings: u32, quantities: Vec<Quantity>) -> Result<Self, RecipeUiError> {
        if servings == 0 {
            return Err(RecipeUiError::ZeroServings);
        }
        Ok(Self {
            current: servings,
            baseline_servings: servings,
            baseline_quantities: quantities,
            touched: false,
        })
    }

    /// Build from the text the server rendered for the counter and labels.
    pub fn from_labels<S: AsRef<str>>(servings: &str, labels: &[S]) -> Result<Self, RecipeUiError> {
        let count = servings
            .trim()
            .parse::<u32>()
            .map_err(|_| RecipeUiError::InvalidServings(servings.trim().to_string()))?;
        let quantities = labels.iter().map(|l| Quantity::parse(l.as_ref())).collect();
        Self::new(count, quantities)
    }

    pub fn servings(&self) -> u32 {
        self.current
    }

    pub fn baseline_servings(&self) -> u32 {
        self.baseline_servings
    }

    pub fn ratio(&self) -> f64 {
        f64::from(self.current) / f64::from(self.baseline_servings)
    }

    pub fn increment(&mut self) {
        self.adjust(1);
    }

    /// Step down one serving. Does nothing at 1.
    pub fn decrement(&mut self) {
        if self.current > 1 {
            self.adjust(-1);
        }
    }

    /// Shift the counter by `delta`, never going below 1.
    pub fn adjust(&mut self, delta: i64) {
        let next = (i64::from(self.current) + delta).clamp(1, i64::from(u32::MAX));
        self.current = u32::try_from(next).unwrap_or(u32::MAX);
        self.touched = true;
        debug!(
            "Servings {} -> ratio {:.3} against baseline {}",
            self.current,
            self.ratio(),
            self.baseline_servings
        );
    }

    pub fn reset(&mut self) {
        self.current = self.baseline_servings;
        self.touched = true;
    }

    pub fn touched(&self) -> bool {
        self.touched
    }

    /// Scaled quantity for ingredient `index`, rounded to one decimal.
    pub fn scaled(&self, index: usize) -> Option<Quantity> {
        let base = self.baseline_quantities.get(index)?;
        let ratio = self.ratio();
        Some(Quantity {
            amount: base
                .amount
                .map(|a| round_to_tenth(a * ratio))
                .filter(|a| a.is_finite()),
            unit: base.unit.clone(),
        })
    }

    /// Label text for every ingredient, in display order. Labels whose
    /// amount isn't a number come out empty.
    pub fn labels(&self) -> Vec<String> {
        (0..self.baseline_quantities.len())
            .filter_map(|i| self.scaled(i))
            .map(|q| q.label())
            .collect()
    }

    /// Text for the quantity labels: `originals` (the page's own text)
    /// until the count is first adjusted, scaled labels from then on.
    pub fn display_labels(&self, originals: &[String]) -> Vec<String> {
        if self.touched {
            self.labels()
        } else {
            originals.to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Measurement;

    fn state(servings: u32, amounts: &[f64]) -> ServingState {
        let quantities = amounts.iter().map(|a| Quantity::new(*a, None)).collect();
        ServingState::new(servings, quantities).expect("valid servings")
    }

    fn amounts(state: &ServingState) -> Vec<Option<f64>> {
        (0..state.baseline_quantities.len())
            .map(|i| state.scaled(i).and_then(|q| q.amount))
            .collect()
    }

    #[test]
    fn test_two_increments_from_four() {
        let mut s = state(4, &[2.0, 1.0, 0.5]);
        s.increment();
        s.increment();

        assert_eq!(s.servings(), 6);
        assert_eq!(s.ratio(), 1.5);
        assert_eq!(amounts(&s), vec![Some(3.0), Some(1.5), Some(0.8)]);
        assert_eq!(s.labels(), vec!["3", "1.5", "0.8"]);
    }

    #[test]
    fn test_decrement_never_goes_below_one() {
        let mut s = state(2, &[1.0]);
        for _ in 0..10 {
            s.decrement();
            assert!(s.servings() >= 1, "servings dropped to {}", s.servings());
        }
        assert_eq!(s.servings(), 1);
        assert_eq!(amounts(&s), vec![Some(0.5)]);
    }

    #[test]
    fn test_adjust_clamps_large_negative_delta() {
        let mut s = state(3, &[1.0]);
        s.adjust(-50);
        assert_eq!(s.servings(), 1);
    }

    #[test]
    fn test_result_is_independent_of_path() {
        let baseline = [3.0, 0.7, 125.0, 1.0 / 3.0];

        // Wander around a lot, then land on 5
        let mut wandering = state(3, &baseline);
        for _ in 0..7 {
            wandering.increment();
        }
        for _ in 0..12 {
            wandering.decrement();
        }
        for _ in 0..4 {
            wandering.increment();
        }
        assert_eq!(wandering.servings(), 5);

        let mut direct = state(3, &baseline);
        direct.increment();
        direct.increment();

        assert_eq!(amounts(&wandering), amounts(&direct));
        for (i, base) in baseline.iter().enumerate() {
            let expected = round_to_tenth(base * (5.0 / 3.0));
            assert_eq!(
                wandering.scaled(i).and_then(|q| q.amount),
                Some(expected),
                "ingredient {} drifted",
                i
            );
        }
    }

    #[test]
    fn test_absent_amount_renders_empty() {
        let quantities = vec![Quantity::parse("a pinch"), Quantity::parse("2 ss")];
        let mut s = ServingState::new(2, quantities).unwrap();
        s.increment();

        assert_eq!(s.labels(), vec!["".to_string(), "3 tbsp".to_string()]);
        assert_eq!(
            s.scaled(1).and_then(|q| q.unit),
            Some(Measurement::Tablespoons)
        );
    }

    #[test]
    fn test_reset_returns_to_baseline() {
        let mut s = state(4, &[2.0]);
        s.increment();
        s.reset();
        assert_eq!(s.servings(), s.baseline_servings());
        assert_eq!(amounts(&s), vec![Some(2.0)]);
    }

    #[test]
    fn test_page_text_kept_until_first_adjustment() {
        let originals = vec!["0.25".to_string(), "etter smak".to_string()];
        let s = ServingState::from_labels("2", &originals).unwrap();
        assert!(!s.touched());
        assert_eq!(s.display_labels(&originals), originals);
    }

    #[test]
    fn test_round_trip_to_baseline_shows_scaled_labels() {
        let originals = vec!["0.25".to_string(), "etter smak".to_string(), "2.5dl".to_string()];
        let mut s = ServingState::from_labels("2", &originals).unwrap();
        s.increment();
        s.decrement();

        assert_eq!(s.servings(), s.baseline_servings());
        assert_eq!(
            s.display_labels(&originals),
            vec!["0.3", "", "2.5 dl"],
            "Back at the baseline the labels must still be the rounded values"
        );
    }

    #[test]
    fn test_reset_counts_as_adjustment() {
        let originals = vec!["salt".to_string()];
        let mut s = ServingState::from_labels("4", &originals).unwrap();
        s.reset();
        assert_eq!(s.display_labels(&originals), vec![""]);
    }

    #[test]
    fn test_from_labels_parses_counter() {
        let s = ServingState::from_labels(" 4\n", &["2", "1½", "salt"]).unwrap();
        assert_eq!(s.servings(), 4);
        assert_eq!(s.labels(), vec!["2", "1.5", ""]);
    }

    #[test]
    fn test_rejects_bad_counter() {
        assert!(matches!(
            ServingState::from_labels("0", &["1"]),
            Err(RecipeUiError::ZeroServings)
        ));
        assert!(matches!(
            ServingState::from_labels("four", &["1"]),
            Err(RecipeUiError::InvalidServings(text)) if text == "four"
        ));
    }

    #[test]
    fn test_out_of_range_index_is_none() {
        let s = state(1, &[1.0]);
        assert!(s.scaled(1).is_none());
    }
}
