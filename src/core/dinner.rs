use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_HEADLINE: &str = "What's for dinner?";
pub const DEFAULT_OPTIONS: [&str; 5] = ["Hamburger", "Pizza", "Mexican", "American", "Chinese"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DinnerDecider {
    options: Vec<String>,
    decided: Option<String>,
}

impl Default for DinnerDecider {
    fn default() -> Self {
        Self {
            options: DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect(),
            decided: None,
        }
    }
}

impl DinnerDecider {
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn headline(&self) -> &str {
        self.decided.as_deref().unwrap_or(DEFAULT_HEADLINE)
    }

    /// Adds a trimmed option. Blank input is ignored.
    pub fn add_food(&mut self, food: &str) -> bool {
        let food = food.trim();
        if food.is_empty() {
            return false;
        }
        self.options.push(food.to_string());
        true
    }

    pub fn decide<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&str> {
        let choice = self.options.choose(rng)?.clone();
        self.decided = Some(choice);
        self.decided.as_deref()
    }

    pub fn render(&self) -> String {
        format!(
            "Dinner Decider\n{}\nOptions: {}",
            self.headline(),
            self.options.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_defaults() {
        let decider = DinnerDecider::default();
        assert_eq!(decider.options().len(), 5);
        assert_eq!(decider.headline(), DEFAULT_HEADLINE);
        assert!(decider
            .render()
            .ends_with("Options: Hamburger, Pizza, Mexican, American, Chinese"));
    }

    #[test]
    fn test_add_food_trims_and_rejects_blank() {
        let mut decider = DinnerDecider::default();
        assert!(decider.add_food("  Thai "));
        assert!(!decider.add_food("   "));
        assert_eq!(decider.options().last().unwrap(), "Thai");
        assert_eq!(decider.options().len(), 6);
    }

    #[test]
    fn test_decide_picks_an_option() {
        let mut decider = DinnerDecider::default();
        let mut rng = StdRng::seed_from_u64(7);
        let picked = decider.decide(&mut rng).unwrap().to_string();
        assert!(decider.options().contains(&picked));
        assert_eq!(decider.headline(), picked);
    }

    #[test]
    fn test_decide_on_empty_list_keeps_headline() {
        let mut decider = DinnerDecider {
            options: Vec::new(),
            decided: None,
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(decider.decide(&mut rng).is_none());
        assert_eq!(decider.headline(), DEFAULT_HEADLINE);
    }
}
