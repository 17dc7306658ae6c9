use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropCategory {
    /// Graded against a numeric line
    OverUnder,
    /// Happens or doesn't
    YesNo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropScope {
    Player,
    Team,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropDefinition {
    pub phrase: &'static str,
    pub name: &'static str,
    pub category: PropCategory,
    pub scope: PropScope,
}

const fn prop(
    phrase: &'static str,
    name: &'static str,
    category: PropCategory,
    scope: PropScope,
) -> PropDefinition {
    PropDefinition {
        phrase,
        name,
        category,
        scope,
    }
}

use PropCategory::{OverUnder, YesNo};
use PropScope::{Player, Team};

const PROPS: &[PropDefinition] = &[
    prop("passing yards", "passing yards", OverUnder, Player),
    prop("pass yds", "passing yards", OverUnder, Player),
    prop("rushing yards", "rushing yards", OverUnder, Player),
    prop("rush yds", "rushing yards", OverUnder, Player),
    prop("receiving yards", "receiving yards", OverUnder, Player),
    prop("rec yds", "receiving yards", OverUnder, Player),
    prop("receptions", "receptions", OverUnder, Player),
    prop("passing tds", "passing touchdowns", OverUnder, Player),
    prop("pass tds", "passing touchdowns", OverUnder, Player),
    prop("completions", "completions", OverUnder, Player),
    prop("sacks", "sacks", OverUnder, Player),
    prop("tackles", "tackles", OverUnder, Player),
    prop("player points", "points", OverUnder, Player),
    prop("rebounds", "rebounds", OverUnder, Player),
    prop("assists", "assists", OverUnder, Player),
    prop("threes", "threes made", OverUnder, Player),
    prop("3pm", "threes made", OverUnder, Player),
    prop("pra", "points rebounds assists", OverUnder, Player),
    prop("strikeouts", "strikeouts", OverUnder, Player),
    prop("total bases", "total bases", OverUnder, Player),
    prop("hits allowed", "hits allowed", OverUnder, Player),
    prop("hits", "hits", OverUnder, Player),
    prop("rbis", "rbis", OverUnder, Player),
    prop("shots on goal", "shots on goal", OverUnder, Player),
    prop("sog", "shots on goal", OverUnder, Player),
    prop("saves", "saves", OverUnder, Player),
    prop("corners", "corners", OverUnder, Team),
    prop("bookings", "bookings", OverUnder, Team),
    prop("anytime td", "anytime touchdown", YesNo, Player),
    prop("anytime touchdown", "anytime touchdown", YesNo, Player),
    prop("anytime scorer", "anytime scorer", YesNo, Player),
    prop("anytime goal", "anytime scorer", YesNo, Player),
    prop("first td", "first touchdown", YesNo, Player),
    prop("to score", "to score", YesNo, Player),
    prop("double double", "double double", YesNo, Player),
    prop("triple double", "triple double", YesNo, Player),
    prop("to hit a home run", "home run", YesNo, Player),
    prop("home run", "home run", YesNo, Player),
    prop("first to score", "first to score", YesNo, Team),
    prop("score first", "first to score", YesNo, Team),
    prop("both teams to score", "both teams to score", YesNo, Team),
    prop("btts", "both teams to score", YesNo, Team),
    prop("overtime", "overtime", YesNo, Team),
    prop("coin toss", "coin toss", YesNo, Team),
];

/// Prop phrases split into words, longest phrase first so `first to score`
/// is tried before `to score`
static PROP_TABLE: LazyLock<Vec<(Vec<&'static str>, &'static PropDefinition)>> =
    LazyLock::new(|| {
        let mut table: Vec<_> = PROPS
            .iter()
            .map(|def| (def.phrase.split(' ').collect::<Vec<_>>(), def))
            .collect();
        table.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(b.1.phrase.len().cmp(&a.1.phrase.len())));
        table
    });

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropMatch {
    pub definition: &'static PropDefinition,
    /// Index of the first matched token
    pub start: usize,
    pub len: usize,
}

/// Find the longest known prop phrase in `tokens`
pub fn find_prop(tokens: &[&str]) -> Option<PropMatch> {
    let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

    PROP_TABLE.iter().find_map(|(words, definition)| {
        if words.len() > lowered.len() {
            return None;
        }
        (0..=lowered.len() - words.len())
            .find(|&start| {
                words
                    .iter()
                    .zip(&lowered[start..])
                    .all(|(word, token)| word == token)
            })
            .map(|start| PropMatch {
                definition,
                start,
                len: words.len(),
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_phrase_wins() {
        let tokens = ["Chiefs", "first", "to", "score", "yes"];
        let found = find_prop(&tokens).unwrap();
        assert_eq!(found.definition.name, "first to score");
        assert_eq!(found.definition.scope, PropScope::Team);
        assert_eq!((found.start, found.len), (1, 3));
    }

    #[test]
    fn test_player_prop() {
        let tokens = ["Mahomes", "Passing", "Yards", "o275.5"];
        let found = find_prop(&tokens).unwrap();
        assert_eq!(found.definition.name, "passing yards");
        assert_eq!(found.definition.category, PropCategory::OverUnder);
        assert_eq!(found.start, 1);
    }

    #[test]
    fn test_no_prop() {
        assert!(find_prop(&["Padres/Pirates", "u8.5"]).is_none());
        assert!(find_prop(&[]).is_none());
    }

    #[test]
    fn test_table_phrases_are_lowercase() {
        for def in PROPS {
            assert_eq!(def.phrase, def.phrase.to_lowercase());
        }
    }
}
