use crate::club::Strength;
use rand::Rng;

/// Chances a team gets to score in one match.
pub const SCORING_OPPORTUNITIES: u8 = 5;

/// Extra per-opportunity probability for the home side.
pub const HOME_ADVANTAGE: f64 = 0.1;

/// Coarse goal model: each opportunity converts with probability
/// `strength / 10`, plus the home bonus. Strength 10 at home converts every
/// chance.
pub struct GoalGenerator;

impl GoalGenerator {
    pub fn scoring_probability(strength: Strength, is_home: bool) -> f64 {
        let home_factor = if is_home { HOME_ADVANTAGE } else { 0.0 };

        strength.value() as f64 / 10.0 + home_factor
    }

    pub fn goals<R: Rng + ?Sized>(strength: Strength, is_home: bool, rng: &mut R) -> u8 {
        let probability = Self::scoring_probability(strength, is_home);

        (0..SCORING_OPPORTUNITIES)
            .filter(|_| rng.random::<f64>() < probability)
            .count() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedRoll;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn strength(value: u8) -> Strength {
        Strength::new(value).unwrap()
    }

    #[test]
    fn test_scoring_probability() {
        assert!((GoalGenerator::scoring_probability(strength(5), false) - 0.5).abs() < 1e-9);
        assert!((GoalGenerator::scoring_probability(strength(5), true) - 0.6).abs() < 1e-9);
        assert!(GoalGenerator::scoring_probability(strength(10), true) > 1.0);
    }

    #[test]
    fn test_goals_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for value in 1..=10 {
            for is_home in [true, false] {
                for _ in 0..50 {
                    let goals = GoalGenerator::goals(strength(value), is_home, &mut rng);
                    assert!(goals <= SCORING_OPPORTUNITIES);
                }
            }
        }
    }

    #[test]
    fn test_fixed_draw_decides_every_opportunity() {
        let mut rng = FixedRoll::half();

        assert_eq!(GoalGenerator::goals(strength(10), true, &mut rng), 5);
        assert_eq!(GoalGenerator::goals(strength(1), false, &mut rng), 0);
        // 0.5 is not below 0.5
        assert_eq!(GoalGenerator::goals(strength(5), false, &mut rng), 0);
        assert_eq!(GoalGenerator::goals(strength(5), true, &mut rng), 5);
    }

    #[test]
    fn test_same_seed_same_goals() {
        let mut first = StdRng::seed_from_u64(7);
        let mut second = StdRng::seed_from_u64(7);

        let a: Vec<u8> = (0..20).map(|_| GoalGenerator::goals(strength(6), true, &mut first)).collect();
        let b: Vec<u8> = (0..20).map(|_| GoalGenerator::goals(strength(6), true, &mut second)).collect();

        assert_eq!(a, b);
    }

    #[test]
    fn test_stronger_side_scores_more_on_average() {
        let mut rng = StdRng::seed_from_u64(2024);

        let strong: u32 = (0..500)
            .map(|_| GoalGenerator::goals(strength(9), true, &mut rng) as u32)
            .sum();
        let weak: u32 = (0..500)
            .map(|_| GoalGenerator::goals(strength(2), false, &mut rng) as u32)
            .sum();

        assert!(strong > weak);
    }
}
