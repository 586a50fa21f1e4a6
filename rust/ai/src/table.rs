//! Strategy tables driving [`crate::basic::TablePolicy`].
//!
//! A table has three categories, consulted by hand shape: `pairs` (keyed by
//! the paired card's score), `ace` (two cards with an ace, keyed by the other
//! card's score) and `other` (keyed by hand total). Each entry is either a
//! single action or a ladder keyed by the lowest dealer up-card score it
//! applies to.
//!
//! Tables are written in TOML:
//!
//! ```toml
//! [pairs]
//! 8 = "split"
//! 9 = { 2 = "split", 7 = "stand", 8 = "split", 10 = "stand" }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use bjsim_engine::errors::EngineError;
use bjsim_engine::policy::Action;
use serde::Deserialize;

use crate::error::TableError;

const BASIC: &str = include_str!("../tables/basic.toml");
const BASIC_ALT: &str = include_str!("../tables/basic_alt.toml");

/// Lowest and highest dealer up-card scores.
const DEALER_SCORES: std::ops::RangeInclusive<u8> = 2..=11;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Category {
    Pairs,
    Ace,
    Other,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Pairs => "pairs",
            Category::Ace => "ace",
            Category::Other => "other",
        }
    }

    /// Keys a complete table must cover for this category.
    fn required_keys(self) -> std::ops::RangeInclusive<u8> {
        match self {
            Category::Pairs | Category::Ace => 2..=11,
            Category::Other => 4..=21,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Always(Action),
    /// Dealer score lower bound to action
    ByDealer(BTreeMap<u8, Action>),
}

impl Rule {
    /// Highest lower bound not above `dealer` wins.
    pub fn resolve(&self, dealer: u8) -> Option<Action> {
        match self {
            Rule::Always(a) => Some(*a),
            Rule::ByDealer(ladder) => ladder.range(..=dealer).next_back().map(|(_, a)| *a),
        }
    }

    /// Every action the rule can produce, across all ladder rungs.
    pub fn actions(&self) -> Box<dyn Iterator<Item = Action> + '_> {
        match self {
            Rule::Always(a) => Box::new(std::iter::once(*a)),
            Rule::ByDealer(ladder) => Box::new(ladder.values().copied()),
        }
    }
}

/// Immutable once loaded; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrategyTable {
    pairs: BTreeMap<u8, Rule>,
    ace: BTreeMap<u8, Rule>,
    other: BTreeMap<u8, Rule>,
}

#[derive(Debug, Deserialize)]
struct FileTable {
    #[serde(default)]
    pairs: BTreeMap<String, FileRule>,
    #[serde(default)]
    ace: BTreeMap<String, FileRule>,
    #[serde(default)]
    other: BTreeMap<String, FileRule>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FileRule {
    Always(Action),
    ByDealer(BTreeMap<String, Action>),
}

fn parse_key(category: Category, key: &str) -> Result<u8, TableError> {
    key.trim().parse().map_err(|_| TableError::InvalidKey {
        category: category.as_str(),
        key: key.to_string(),
    })
}

fn convert(
    category: Category,
    raw: BTreeMap<String, FileRule>,
) -> Result<BTreeMap<u8, Rule>, TableError> {
    let mut out = BTreeMap::new();
    for (key, rule) in raw {
        let rule = match rule {
            FileRule::Always(a) => Rule::Always(a),
            FileRule::ByDealer(ladder) => Rule::ByDealer(
                ladder
                    .into_iter()
                    .map(|(k, a)| Ok((parse_key(category, &k)?, a)))
                    .collect::<Result<_, TableError>>()?,
            ),
        };
        let key = parse_key(category, &key)?;
        if category != Category::Pairs && rule.actions().any(|a| a == Action::Split) {
            return Err(TableError::SplitOutsidePairs {
                category: category.as_str(),
                key,
            });
        }
        out.insert(key, rule);
    }
    Ok(out)
}

impl StrategyTable {
    pub fn from_toml_str(s: &str) -> Result<Self, TableError> {
        let raw: FileTable = toml::from_str(s)?;
        Ok(Self {
            pairs: convert(Category::Pairs, raw.pairs)?,
            ace: convert(Category::Ace, raw.ace)?,
            other: convert(Category::Other, raw.other)?,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let s = std::fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Built-in tables: `basic` and `basic-alt`.
    pub fn builtin(name: &str) -> Result<Self, TableError> {
        match name {
            "basic" => Self::from_toml_str(BASIC),
            "basic-alt" => Self::from_toml_str(BASIC_ALT),
            other => Err(TableError::UnknownStrategy(other.to_string())),
        }
    }

    fn category(&self, category: Category) -> &BTreeMap<u8, Rule> {
        match category {
            Category::Pairs => &self.pairs,
            Category::Ace => &self.ace,
            Category::Other => &self.other,
        }
    }

    pub fn len(&self, category: Category) -> usize {
        self.category(category).len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && self.ace.is_empty() && self.other.is_empty()
    }

    pub fn lookup(&self, category: Category, key: u8, dealer: u8) -> Result<Action, EngineError> {
        self.category(category)
            .get(&key)
            .and_then(|rule| rule.resolve(dealer))
            .ok_or(EngineError::MissingTableEntry {
                category: category.as_str(),
                key,
                dealer,
            })
    }

    /// Checks every key a hand can reach against every dealer up-card.
    pub fn check_complete(&self) -> Result<(), EngineError> {
        for category in [Category::Pairs, Category::Ace, Category::Other] {
            for key in category.required_keys() {
                for dealer in DEALER_SCORES {
                    self.lookup(category, key, dealer)?;
                }
            }
        }
        Ok(())
    }
}
