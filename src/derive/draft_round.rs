/// Round a pick would fall in if every draft had `teams_per_round` picks per
/// round. Raw rounds follow the league size of the draft's own era, so only
/// this value is comparable across eras.
pub fn normalized_round(overall_pick: u32, teams_per_round: u32) -> u32 {
    overall_pick.saturating_sub(1) / teams_per_round.max(1) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TEAMS_PER_ROUND;

    #[test]
    fn test_normalized_round() {
        assert_eq!(normalized_round(1, TEAMS_PER_ROUND), 1);
        assert_eq!(normalized_round(32, TEAMS_PER_ROUND), 1);
        assert_eq!(normalized_round(33, TEAMS_PER_ROUND), 2);
        assert_eq!(normalized_round(64, TEAMS_PER_ROUND), 2);
        assert_eq!(normalized_round(65, TEAMS_PER_ROUND), 3);
        assert_eq!(normalized_round(224, TEAMS_PER_ROUND), 7);
    }
}
