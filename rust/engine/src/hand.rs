use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

/// Strength of a 5-card hand.
///
/// Each variant has a fixed tie-break layout; [`HandScore::values`] flattens it
/// to `[category, tiebreak...]`, most significant first, and ordering is
/// lexicographic over that sequence. Ranks are the numeric values 2..=14.
/// Straights record their high card, so the wheel (A-2-3-4-5) has `high == 5`.
/// A royal flush is the straight flush with `high == 14`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum HandScore {
    /// `[0, r1, r2, r3, r4, r5]`
    HighCard([u8; 5]),
    /// `[1, pair, k1, k2, k3]`
    OnePair { pair: u8, kickers: [u8; 3] },
    /// `[2, high, low, kicker]`
    TwoPair { high: u8, low: u8, kicker: u8 },
    /// `[3, trips, k1, k2]`
    ThreeOfAKind { trips: u8, kickers: [u8; 2] },
    /// `[4, high]`
    Straight { high: u8 },
    /// `[5, r1, r2, r3, r4, r5]`
    Flush([u8; 5]),
    /// `[6, trips, pair]`
    FullHouse { trips: u8, pair: u8 },
    /// `[7, quads, kicker]`
    FourOfAKind { quads: u8, kicker: u8 },
    /// `[8, high]`
    StraightFlush { high: u8 },
}

impl HandScore {
    pub fn category(&self) -> Category {
        match self {
            HandScore::HighCard(_) => Category::HighCard,
            HandScore::OnePair { .. } => Category::OnePair,
            HandScore::TwoPair { .. } => Category::TwoPair,
            HandScore::ThreeOfAKind { .. } => Category::ThreeOfAKind,
            HandScore::Straight { .. } => Category::Straight,
            HandScore::Flush(_) => Category::Flush,
            HandScore::FullHouse { .. } => Category::FullHouse,
            HandScore::FourOfAKind { .. } => Category::FourOfAKind,
            HandScore::StraightFlush { .. } => Category::StraightFlush,
        }
    }

    pub fn values(&self) -> Vec<u8> {
        let mut v = vec![self.category().id()];
        match *self {
            HandScore::HighCard(r) | HandScore::Flush(r) => v.extend_from_slice(&r),
            HandScore::OnePair { pair, kickers } => {
                v.push(pair);
                v.extend_from_slice(&kickers);
            }
            HandScore::TwoPair { high, low, kicker } => v.extend_from_slice(&[high, low, kicker]),
            HandScore::ThreeOfAKind { trips, kickers } => {
                v.push(trips);
                v.extend_from_slice(&kickers);
            }
            HandScore::Straight { high } | HandScore::StraightFlush { high } => v.push(high),
            HandScore::FullHouse { trips, pair } => v.extend_from_slice(&[trips, pair]),
            HandScore::FourOfAKind { quads, kicker } => v.extend_from_slice(&[quads, kicker]),
        }
        v
    }
}

impl Ord for HandScore {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_values(&self.values(), &other.values())
    }
}

impl PartialOrd for HandScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic comparison of two score sequences; a missing trailing
/// element counts as 0.
pub fn compare_values(a: &[u8], b: &[u8]) -> Ordering {
    let n = a.len().max(b.len());
    (0..n)
        .map(|i| {
            let av = a.get(i).copied().unwrap_or(0);
            let bv = b.get(i).copied().unwrap_or(0);
            av.cmp(&bv)
        })
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

pub fn compare(a: &HandScore, b: &HandScore) -> Ordering {
    a.cmp(b)
}

/// The best 5-card hand found, with its descriptive label.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedHand {
    pub score: HandScore,
    pub name: String,
    /// The five cards that make up the hand, in the order they were chosen.
    pub cards: [Card; 5],
}

impl EvaluatedHand {
    pub fn category(&self) -> Category {
        self.score.category()
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

pub fn evaluate5(cards: &[Card; 5]) -> EvaluatedHand {
    let mut ranks: [u8; 5] = std::array::from_fn(|i| cards[i].rank.value());
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let mut rank_mask: u16 = 0;
    for &r in &ranks {
        rank_mask |= 1 << r;
    }
    let straight = if rank_mask.count_ones() == 5 {
        straight_high_from_mask(rank_mask)
    } else {
        None
    };
    let groups = rank_groups(&ranks);
    let (top, second) = (groups[0], groups.get(1).copied().unwrap_or((0, 0)));
    let kicker = |i: usize| groups.get(i).map_or(0, |g| g.1);

    let score = match (is_flush, straight) {
        (true, Some(high)) => HandScore::StraightFlush { high },
        _ if top.0 == 4 => HandScore::FourOfAKind {
            quads: top.1,
            kicker: second.1,
        },
        _ if top.0 == 3 && second.0 == 2 => HandScore::FullHouse {
            trips: top.1,
            pair: second.1,
        },
        (true, None) => HandScore::Flush(ranks),
        (false, Some(high)) => HandScore::Straight { high },
        _ if top.0 == 3 => HandScore::ThreeOfAKind {
            trips: top.1,
            kickers: [kicker(1), kicker(2)],
        },
        _ if top.0 == 2 && second.0 == 2 => HandScore::TwoPair {
            high: top.1,
            low: second.1,
            kicker: kicker(2),
        },
        _ if top.0 == 2 => HandScore::OnePair {
            pair: top.1,
            kickers: [kicker(1), kicker(2), kicker(3)],
        },
        _ => HandScore::HighCard(ranks),
    };

    EvaluatedHand {
        name: describe(&score),
        score,
        cards: *cards,
    }
}

/// Best hand from 5 to 7 cards, by brute force over every 5-card subset.
pub fn evaluate_best(cards: &[Card]) -> Result<EvaluatedHand, GameError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(GameError::InvalidCardCount {
            expected: "5 to 7",
            actual: cards.len(),
        });
    }
    five_card_subsets(cards)
        .map(|hand| evaluate5(&hand))
        .max_by(|a, b| a.score.cmp(&b.score))
        .ok_or(GameError::InvalidCardCount {
            expected: "5 to 7",
            actual: cards.len(),
        })
}

/// Every 5-card subset of `cards`, C(n, 5) in total.
pub fn five_card_subsets(cards: &[Card]) -> impl Iterator<Item = [Card; 5]> + '_ {
    let n = cards.len();
    (0..n).flat_map(move |a| {
        (a + 1..n).flat_map(move |b| {
            (b + 1..n).flat_map(move |c| {
                (c + 1..n).flat_map(move |d| {
                    (d + 1..n).map(move |e| [cards[a], cards[b], cards[c], cards[d], cards[e]])
                })
            })
        })
    })
}

/// `(count, rank)` pairs sorted by count, then rank, both descending.
fn rank_groups(desc_ranks: &[u8; 5]) -> Vec<(u8, u8)> {
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &r in desc_ranks {
        match groups.iter_mut().find(|g| g.1 == r) {
            Some(g) => g.0 += 1,
            None => groups.push((1, r)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

fn straight_high_from_mask(mask: u16) -> Option<u8> {
    // Ace also plays low
    let mut m = mask;
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    (5..=14u8).rev().find(|&high| {
        let window = 0b1_1111u16 << (high - 4);
        (m & window) == window
    })
}

fn describe(score: &HandScore) -> String {
    let cat = score.category().name();
    match *score {
        HandScore::StraightFlush { high } | HandScore::Straight { high } => {
            format!("{} ({})", cat, straight_span(high))
        }
        HandScore::FourOfAKind { quads: r, .. } | HandScore::ThreeOfAKind { trips: r, .. } => {
            format!("{} ({})", cat, plural(r))
        }
        HandScore::OnePair { pair, .. } => format!("{} ({})", cat, plural(pair)),
        HandScore::FullHouse { trips, pair } => {
            format!("{} ({} over {})", cat, plural(trips), plural(pair))
        }
        HandScore::TwoPair { high, low, .. } => {
            format!("{} ({} and {})", cat, plural(high), plural(low))
        }
        HandScore::Flush(r) => format!("{} ({} high)", cat, name(r[0])),
        HandScore::HighCard(r) => format!("{} ({})", cat, name(r[0])),
    }
}

fn straight_span(high: u8) -> String {
    if high == 5 {
        return "A-5".to_string();
    }
    format!("{}-{}", label(high - 4), label(high))
}

fn label(v: u8) -> char {
    Rank::from_u8(v).map_or('?', Rank::label)
}

fn name(v: u8) -> &'static str {
    Rank::from_u8(v).map_or("?", Rank::name)
}

fn plural(v: u8) -> &'static str {
    Rank::from_u8(v).map_or("?", Rank::plural)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn five(s: &str) -> [Card; 5] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn wheel_is_five_high() {
        let ev = evaluate5(&five("As 2d 3c 4h 5s"));
        assert_eq!(ev.score, HandScore::Straight { high: 5 });
        assert_eq!(ev.name, "Straight (A-5)");
    }

    #[test]
    fn broadway_is_ace_high() {
        let ev = evaluate5(&five("Ts Jd Qc Kh As"));
        assert_eq!(ev.score, HandScore::Straight { high: 14 });
        assert_eq!(ev.name, "Straight (T-A)");
    }

    #[test]
    fn ace_does_not_wrap_around() {
        let ev = evaluate5(&five("Qs Kd Ac 2h 3s"));
        assert_eq!(ev.category(), Category::HighCard);
    }

    #[test]
    fn values_follow_documented_layout() {
        let two_pair = evaluate5(&five("Ks Kd 4c 4h 9s"));
        assert_eq!(two_pair.score.values(), vec![2, 13, 4, 9]);
        let full = evaluate5(&five("3s 3d 3c Ah As"));
        assert_eq!(full.score.values(), vec![6, 3, 14]);
        assert_eq!(full.name, "Full House (Threes over Aces)");
        let pair = evaluate5(&five("7s 7d Kc 2h 9s"));
        assert_eq!(pair.score.values(), vec![1, 7, 13, 9, 2]);
    }

    #[test]
    fn compare_values_pads_with_zero() {
        assert_eq!(compare_values(&[4, 5], &[4, 5, 0, 0]), Ordering::Equal);
        assert_eq!(compare_values(&[4, 5, 1], &[4, 5]), Ordering::Greater);
        assert_eq!(compare_values(&[], &[0]), Ordering::Equal);
    }

    #[test]
    fn subsets_of_seven_count_twenty_one() {
        let cards = parse_cards("As Ks Qs Js Ts 2c 3d").unwrap();
        assert_eq!(five_card_subsets(&cards).count(), 21);
        assert_eq!(five_card_subsets(&cards[..5]).count(), 1);
    }

    #[test]
    fn evaluate_best_rejects_bad_sizes() {
        let cards = parse_cards("As Ks Qs Js").unwrap();
        assert!(matches!(
            evaluate_best(&cards),
            Err(GameError::InvalidCardCount { actual: 4, .. })
        ));
    }
}
