use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    /// Accepts both the ASCII letter (`s`, `h`, `d`, `c`, any case) and the symbol.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            's' | 'S' | '♠' => Some(Suit::Spades),
            'h' | 'H' | '♥' => Some(Suit::Hearts),
            'd' | 'D' | '♦' => Some(Suit::Diamonds),
            'c' | 'C' | '♣' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values 2..=14 are used directly in hand scores.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Short label used when printing cards: `2`..`9`, `T`, `J`, `Q`, `K`, `A`.
    pub fn label(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Rank::Two => "Twos",
            Rank::Three => "Threes",
            Rank::Four => "Fours",
            Rank::Five => "Fives",
            Rank::Six => "Sixes",
            Rank::Seven => "Sevens",
            Rank::Eight => "Eights",
            Rank::Nine => "Nines",
            Rank::Ten => "Tens",
            Rank::Jack => "Jacks",
            Rank::Queen => "Queens",
            Rank::King => "Kings",
            Rank::Ace => "Aces",
        }
    }

    fn from_label(s: &str) -> Option<Rank> {
        match s {
            "2" => Some(Rank::Two),
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "8" => Some(Rank::Eight),
            "9" => Some(Rank::Nine),
            "T" | "t" | "10" => Some(Rank::Ten),
            "J" | "j" => Some(Rank::Jack),
            "Q" | "q" => Some(Rank::Queen),
            "K" | "k" => Some(Rank::King),
            "A" | "a" => Some(Rank::Ace),
            _ => None,
        }
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are immutable values; two cards are equal iff both rank and suit match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = GameError;

    /// Parses `"As"`, `"td"`, `"10h"` or `"K♣"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s
            .chars()
            .last()
            .ok_or_else(|| GameError::ParseCard(s.to_string()))?;
        let suit = Suit::from_char(suit_char).ok_or_else(|| GameError::ParseCard(s.to_string()))?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];
        let rank = Rank::from_label(rank_part).ok_or_else(|| GameError::ParseCard(s.to_string()))?;
        Ok(Card { suit, rank })
    }
}

/// Bracketed, space-separated listing such as `[A♠ K♥ Q♦]`; `[]` when empty.
pub fn format_cards(cards: &[Card]) -> String {
    let parts: Vec<String> = cards.iter().map(Card::to_string).collect();
    format!("[{}]", parts.join(" "))
}

/// Parses a whitespace- or comma-separated list of cards.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, GameError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<Card>())
        .collect()
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// The 52-card universe in canonical (suit-major, rank-ascending) order.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
