/// One contiguous severity bin of a point-sum system.
///
/// A band covers `[floor, next.floor)`; the last band is closed at the top of
/// the score range, so a score equal to a cutoff lands in the higher band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBand {
    pub floor: i32,
    pub name: &'static str,
    pub interpretation: &'static str,
    pub recommendation: &'static str,
}

/// Locate the band holding `score`. `bands` must be sorted by ascending floor;
/// scores below the first floor resolve to the first band.
pub fn band_for(bands: &'static [ScoreBand], score: i32) -> &'static ScoreBand {
    bands
        .iter()
        .rev()
        .find(|band| score >= band.floor)
        .unwrap_or(&bands[0])
}

/// Roman numeral for the small grades used in labels (1..=10).
pub fn roman(value: i64) -> &'static str {
    match value {
        1 => "I",
        2 => "II",
        3 => "III",
        4 => "IV",
        5 => "V",
        6 => "VI",
        7 => "VII",
        8 => "VIII",
        9 => "IX",
        10 => "X",
        _ => "0",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANDS: &[ScoreBand] = &[
        ScoreBand {
            floor: 0,
            name: "low",
            interpretation: "",
            recommendation: "",
        },
        ScoreBand {
            floor: 4,
            name: "middle",
            interpretation: "",
            recommendation: "",
        },
        ScoreBand {
            floor: 7,
            name: "high",
            interpretation: "",
            recommendation: "",
        },
    ];

    #[test]
    fn cutoff_scores_resolve_to_the_higher_band() {
        assert_eq!(band_for(BANDS, 3).name, "low");
        assert_eq!(band_for(BANDS, 4).name, "middle");
        assert_eq!(band_for(BANDS, 7).name, "high");
        assert_eq!(band_for(BANDS, 10).name, "high");
    }

    #[test]
    fn scores_below_first_floor_use_first_band() {
        assert_eq!(band_for(BANDS, -2).name, "low");
    }

    #[test]
    fn roman_covers_label_grades() {
        assert_eq!(roman(3), "III");
        assert_eq!(roman(8), "VIII");
    }
}
