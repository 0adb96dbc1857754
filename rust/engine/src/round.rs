//! Betting-round state machine for a single heads-up hand.
//!
//! A [`RoundState`] is created by [`start_hand`] (or [`start_hand_with_deck`]
//! for a known deal), mutated only through [`RoundState::apply`] /
//! [`apply_action`], and discarded when the next hand starts. Only chip totals
//! carry forward.
//!
//! Rules:
//! - the player acts first on every street; turns alternate after that;
//! - each actor may raise at most once per street, and a raise re-opens the
//!   action for the opponent;
//! - a street closes once both actors have acted and the street bets match;
//! - when a stack is empty and the bets match, the board is run out and the
//!   hand goes straight to showdown;
//! - a split pot gives the odd chip to the player.
//!
//! `player_chips + cpu_chips + pot` never changes until the pot is awarded.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::{format_cards, Card};
use crate::deck::{new_shuffled_deck, Deck};
use crate::errors::{GameError, InvalidAction};
use crate::hand::{evaluate_best, EvaluatedHand};
use crate::policy::DecisionContext;

/// One of the two seats. The player is the human side and acts first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Actor {
    Player,
    Cpu,
}

impl Actor {
    pub fn opponent(self) -> Actor {
        match self {
            Actor::Player => Actor::Cpu,
            Actor::Cpu => Actor::Player,
        }
    }

    /// `"You check."` / `"CPU checks."`
    fn says(self, verb: &str) -> String {
        match self {
            Actor::Player => format!("You {}", verb),
            Actor::Cpu => format!("CPU {}s", verb),
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Player => f.write_str("Player"),
            Actor::Cpu => f.write_str("CPU"),
        }
    }
}

/// A value kept once per seat.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PerActor<T> {
    pub player: T,
    pub cpu: T,
}

impl<T> PerActor<T> {
    pub fn new(player: T, cpu: T) -> Self {
        Self { player, cpu }
    }
}

impl<T> Index<Actor> for PerActor<T> {
    type Output = T;

    fn index(&self, actor: Actor) -> &T {
        match actor {
            Actor::Player => &self.player,
            Actor::Cpu => &self.cpu,
        }
    }
}

impl<T> IndexMut<Actor> for PerActor<T> {
    fn index_mut(&mut self, actor: Actor) -> &mut T {
        match actor {
            Actor::Player => &mut self.player,
            Actor::Cpu => &mut self.cpu,
        }
    }
}

/// Represents a betting street in Texas Hold'em poker.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
    /// Hands revealed, pot awarded
    Showdown,
}

impl Street {
    pub fn next(self) -> Street {
        match self {
            Street::Preflop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River | Street::Showdown => Street::Showdown,
        }
    }

    /// Community cards dealt when this street begins.
    pub fn cards_on_entry(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
            Street::Preflop | Street::Showdown => 0,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
            Street::Showdown => "Showdown",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Check when nothing is owed, otherwise call (all-in if short).
    CheckCall,
    /// Call whatever is owed, then add this many chips on top.
    Raise(u32),
    Fold,
}

/// How a finished hand ended.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum HandOutcome {
    /// Terminal state reached by a fold; no further cards were dealt.
    FoldedEarly { winner: Actor, pot: u32 },
    Showdown {
        player: EvaluatedHand,
        cpu: EvaluatedHand,
        /// `None` on a split.
        winner: Option<Actor>,
        pot: u32,
        awarded: PerActor<u32>,
    },
}

impl HandOutcome {
    pub fn winner(&self) -> Option<Actor> {
        match self {
            HandOutcome::FoldedEarly { winner, .. } => Some(*winner),
            HandOutcome::Showdown { winner, .. } => *winner,
        }
    }
}

/// Notices produced while applying an action, in the order they happened.
/// `Display` renders the text a presentation layer can show verbatim.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    Checked(Actor),
    Called { actor: Actor, amount: u32, all_in: bool },
    Raised { actor: Actor, called: u32, amount: u32, all_in: bool },
    Folded(Actor),
    UncalledReturned { actor: Actor, amount: u32 },
    StreetDealt { street: Street, cards: Vec<Card> },
    RunOut { cards: Vec<Card> },
    ShowdownHands { player: String, cpu: String },
    PotAwarded { actor: Actor, amount: u32 },
    PotSplit { player: u32, cpu: u32 },
}

impl fmt::Display for RoundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundEvent::Checked(a) => write!(f, "{}.", a.says("check")),
            RoundEvent::Called {
                actor,
                amount,
                all_in,
            } => {
                write!(f, "{} ${}", actor.says("call"), amount)?;
                if *all_in {
                    f.write_str(" (all-in)")?;
                }
                f.write_str(".")
            }
            RoundEvent::Raised {
                actor,
                called,
                amount,
                all_in,
            } => {
                if *called > 0 {
                    write!(
                        f,
                        "{} ${} and raise{} by ${}",
                        actor.says("call"),
                        called,
                        if *actor == Actor::Cpu { "s" } else { "" },
                        amount
                    )?;
                } else {
                    write!(f, "{} by ${}", actor.says("raise"), amount)?;
                }
                if *all_in {
                    f.write_str(" (all-in)")?;
                }
                f.write_str(".")
            }
            RoundEvent::Folded(a) => write!(f, "{}.", a.says("fold")),
            RoundEvent::UncalledReturned { actor, amount } => match actor {
                Actor::Player => write!(f, "Uncalled ${} returned to you.", amount),
                Actor::Cpu => write!(f, "Uncalled ${} returned to CPU.", amount),
            },
            RoundEvent::StreetDealt { street, cards } => {
                write!(f, "{} dealt: {}", street, format_cards(cards))
            }
            RoundEvent::RunOut { cards } => {
                write!(f, "All-in, running out the board: {}", format_cards(cards))
            }
            RoundEvent::ShowdownHands { player, cpu } => {
                write!(f, "Showdown: you have {}, CPU has {}.", player, cpu)
            }
            RoundEvent::PotAwarded { actor, amount } => {
                write!(f, "{} ${}.", actor.says("win"), amount)
            }
            RoundEvent::PotSplit { player, cpu } => {
                write!(f, "Split pot: you get ${}, CPU gets ${}.", player, cpu)
            }
        }
    }
}

/// State of one hand in progress (or just finished).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    deck: Deck,
    community: Vec<Card>,
    hole: PerActor<[Card; 2]>,
    pot: u32,
    stacks: PerActor<u32>,
    street: Street,
    street_bets: PerActor<u32>,
    acted: PerActor<bool>,
    raise_used: PerActor<bool>,
    to_act: Actor,
    in_hand: bool,
    hand_over: bool,
    outcome: Option<HandOutcome>,
}

/// Starts a hand from a freshly shuffled deck.
///
/// Fails with [`GameError::StacksTooLarge`] when the two stacks together
/// exceed `u32::MAX`.
pub fn start_hand(player_chips: u32, cpu_chips: u32) -> Result<RoundState, GameError> {
    start_hand_with_deck(new_shuffled_deck(), player_chips, cpu_chips)
}

/// Starts a hand from the given deck: the player's two hole cards are dealt
/// first, then the CPU's, then the board in street order.
pub fn start_hand_with_deck(
    deck: Deck,
    player_chips: u32,
    cpu_chips: u32,
) -> Result<RoundState, GameError> {
    // 2 + 2 hole cards and a 5-card board
    if deck.remaining() < 9 {
        return Err(GameError::DeckExhausted);
    }
    if player_chips.checked_add(cpu_chips).is_none() {
        return Err(GameError::StacksTooLarge {
            player: player_chips,
            cpu: cpu_chips,
        });
    }
    Ok(RoundState::deal(deck, player_chips, cpu_chips))
}

/// Applies an action to a copy of `state`; the original is never touched.
pub fn apply_action(
    state: &RoundState,
    actor: Actor,
    action: Action,
) -> Result<(RoundState, Vec<RoundEvent>), GameError> {
    let mut next = state.clone();
    let events = next.apply(actor, action)?;
    Ok((next, events))
}

pub fn is_hand_over(state: &RoundState) -> bool {
    state.is_hand_over()
}

pub fn current_to_call(state: &RoundState, actor: Actor) -> u32 {
    state.to_call(actor)
}

pub fn legal_raise_range(state: &RoundState, actor: Actor) -> Option<(u32, u32)> {
    state.legal_raise_range(actor)
}

/// Even split with the odd chip going to the player.
pub fn split_pot(pot: u32) -> PerActor<u32> {
    let half = pot / 2;
    PerActor::new(pot - half, half)
}

impl RoundState {
    fn deal(mut deck: Deck, player_chips: u32, cpu_chips: u32) -> Self {
        let player = [draw(&mut deck), draw(&mut deck)];
        let cpu = [draw(&mut deck), draw(&mut deck)];
        debug!(player_chips, cpu_chips, "hand started");
        Self {
            deck,
            community: Vec::with_capacity(5),
            hole: PerActor::new(player, cpu),
            pot: 0,
            stacks: PerActor::new(player_chips, cpu_chips),
            street: Street::Preflop,
            street_bets: PerActor::default(),
            acted: PerActor::default(),
            raise_used: PerActor::default(),
            to_act: Actor::Player,
            in_hand: true,
            hand_over: false,
            outcome: None,
        }
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn hole_cards(&self, actor: Actor) -> [Card; 2] {
        self.hole[actor]
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn chips(&self, actor: Actor) -> u32 {
        self.stacks[actor]
    }
    pub fn stacks(&self) -> PerActor<u32> {
        self.stacks
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn street_bet(&self, actor: Actor) -> u32 {
        self.street_bets[actor]
    }
    pub fn has_acted(&self, actor: Actor) -> bool {
        self.acted[actor]
    }
    pub fn raise_used(&self, actor: Actor) -> bool {
        self.raise_used[actor]
    }
    /// Whose turn it is. Meaningless once the hand is over.
    pub fn to_act(&self) -> Actor {
        self.to_act
    }
    pub fn in_hand(&self) -> bool {
        self.in_hand
    }
    pub fn is_hand_over(&self) -> bool {
        self.hand_over
    }
    pub fn outcome(&self) -> Option<&HandOutcome> {
        self.outcome.as_ref()
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// `player_chips + cpu_chips + pot`.
    pub fn chip_total(&self) -> u64 {
        u64::from(self.stacks.player) + u64::from(self.stacks.cpu) + u64::from(self.pot)
    }

    pub fn to_call(&self, actor: Actor) -> u32 {
        self.street_bets[actor.opponent()].saturating_sub(self.street_bets[actor])
    }

    /// Inclusive `(min, max)` raise amount on top of the call, or `None` when
    /// `actor` cannot raise right now.
    pub fn legal_raise_range(&self, actor: Actor) -> Option<(u32, u32)> {
        if !self.is_live() || self.to_act != actor || self.raise_used[actor] {
            return None;
        }
        if self.stacks[actor.opponent()] == 0 {
            return None;
        }
        let to_call = self.to_call(actor);
        let chips = self.stacks[actor];
        (chips > to_call).then(|| (1, chips - to_call))
    }

    /// What `actor` can see when deciding: its own cards, the board and the betting.
    pub fn decision_context(&self, actor: Actor) -> DecisionContext {
        let to_call = self.to_call(actor);
        let max_raise = self.legal_raise_range(actor).map_or(0, |(_, max)| max);
        DecisionContext {
            actor,
            street: self.street,
            hole: self.hole[actor],
            community: self.community.clone(),
            to_call,
            chips: self.stacks[actor],
            opponent_chips: self.stacks[actor.opponent()],
            pot: self.pot,
            can_raise: max_raise > 0,
            max_raise,
            opponent_hole: None,
        }
    }

    /// [`decision_context`](Self::decision_context) plus the opponent's hole cards.
    pub fn revealed_context(&self, actor: Actor) -> DecisionContext {
        DecisionContext {
            opponent_hole: Some(self.hole[actor.opponent()]),
            ..self.decision_context(actor)
        }
    }

    /// Applies one action. Rejected actions return [`GameError::InvalidAction`]
    /// and leave the state exactly as it was.
    ///
    /// # Panics
    ///
    /// Panics if the deck runs out while dealing, which a 52-card deck cannot
    /// do within one hand.
    pub fn apply(&mut self, actor: Actor, action: Action) -> Result<Vec<RoundEvent>, GameError> {
        self.check_turn(actor)?;
        if let Action::Raise(amount) = action {
            self.check_raise(actor, amount)?;
        }

        debug!(?actor, ?action, street = %self.street, pot = self.pot, "applying action");
        let mut events = Vec::new();
        match action {
            Action::Fold => {
                self.fold(actor, &mut events);
                return Ok(events);
            }
            Action::CheckCall => self.check_call(actor, &mut events),
            Action::Raise(amount) => self.raise(actor, amount, &mut events),
        }
        self.advance(actor, &mut events);
        Ok(events)
    }

    fn is_live(&self) -> bool {
        self.in_hand && !self.hand_over
    }

    fn check_turn(&self, actor: Actor) -> Result<(), InvalidAction> {
        if self.hand_over {
            return Err(InvalidAction::HandAlreadyComplete);
        }
        if !self.in_hand {
            return Err(InvalidAction::NoHandInProgress);
        }
        if self.to_act != actor {
            return Err(InvalidAction::NotYourTurn {
                expected: self.to_act,
                actual: actor,
            });
        }
        Ok(())
    }

    fn check_raise(&self, actor: Actor, amount: u32) -> Result<(), InvalidAction> {
        if self.raise_used[actor] {
            return Err(InvalidAction::RaiseAlreadyUsed(actor));
        }
        if amount == 0 {
            return Err(InvalidAction::ZeroRaise);
        }
        let opponent = actor.opponent();
        if self.stacks[opponent] == 0 {
            return Err(InvalidAction::OpponentAllIn(opponent));
        }
        let needed = self.to_call(actor).saturating_add(amount);
        if needed > self.stacks[actor] {
            return Err(InvalidAction::InsufficientChips {
                needed,
                available: self.stacks[actor],
            });
        }
        Ok(())
    }

    fn pay(&mut self, actor: Actor, amount: u32) -> u32 {
        let paid = amount.min(self.stacks[actor]);
        self.stacks[actor] -= paid;
        self.street_bets[actor] += paid;
        self.pot += paid;
        paid
    }

    fn check_call(&mut self, actor: Actor, events: &mut Vec<RoundEvent>) {
        let to_call = self.to_call(actor);
        if to_call == 0 {
            events.push(RoundEvent::Checked(actor));
        } else {
            let paid = self.pay(actor, to_call);
            if paid > 0 {
                events.push(RoundEvent::Called {
                    actor,
                    amount: paid,
                    all_in: self.stacks[actor] == 0,
                });
            }
            if paid < to_call {
                // Short all-in call: the part of the bet nobody can match goes back.
                let opponent = actor.opponent();
                let excess = to_call - paid;
                self.street_bets[opponent] -= excess;
                self.stacks[opponent] += excess;
                self.pot -= excess;
                events.push(RoundEvent::UncalledReturned {
                    actor: opponent,
                    amount: excess,
                });
            }
        }
        self.acted[actor] = true;
    }

    fn raise(&mut self, actor: Actor, amount: u32, events: &mut Vec<RoundEvent>) {
        let called = self.pay(actor, self.to_call(actor));
        self.pay(actor, amount);
        self.raise_used[actor] = true;
        self.acted[actor] = true;
        self.acted[actor.opponent()] = false;
        events.push(RoundEvent::Raised {
            actor,
            called,
            amount,
            all_in: self.stacks[actor] == 0,
        });
    }

    fn fold(&mut self, actor: Actor, events: &mut Vec<RoundEvent>) {
        let winner = actor.opponent();
        let pot = self.pot;
        self.stacks[winner] += pot;
        self.pot = 0;
        self.finish(HandOutcome::FoldedEarly { winner, pot });
        events.push(RoundEvent::Folded(actor));
        events.push(RoundEvent::PotAwarded {
            actor: winner,
            amount: pot,
        });
        info!(%winner, pot, "hand ended on a fold");
    }

    fn advance(&mut self, last: Actor, events: &mut Vec<RoundEvent>) {
        let bets_matched = self.street_bets.player == self.street_bets.cpu;
        if bets_matched && (self.stacks.player == 0 || self.stacks.cpu == 0) {
            let cards = self.run_out();
            if !cards.is_empty() {
                events.push(RoundEvent::RunOut { cards });
            }
            self.showdown(events);
            return;
        }
        if bets_matched && self.acted.player && self.acted.cpu {
            self.close_street(events);
        } else {
            self.to_act = last.opponent();
        }
    }

    fn close_street(&mut self, events: &mut Vec<RoundEvent>) {
        self.street = self.street.next();
        self.street_bets = PerActor::default();
        self.acted = PerActor::default();
        self.raise_used = PerActor::default();
        self.to_act = Actor::Player;
        debug!(street = %self.street, pot = self.pot, "street closed");

        if self.street == Street::Showdown {
            self.showdown(events);
            return;
        }
        let cards: Vec<Card> = (0..self.street.cards_on_entry())
            .map(|_| draw(&mut self.deck))
            .collect();
        self.community.extend_from_slice(&cards);
        events.push(RoundEvent::StreetDealt {
            street: self.street,
            cards,
        });
    }

    /// Deals the board out to five cards and returns what was dealt.
    fn run_out(&mut self) -> Vec<Card> {
        let missing = 5usize.saturating_sub(self.community.len());
        let cards: Vec<Card> = (0..missing).map(|_| draw(&mut self.deck)).collect();
        self.community.extend_from_slice(&cards);
        cards
    }

    fn showdown(&mut self, events: &mut Vec<RoundEvent>) {
        self.run_out();
        self.street = Street::Showdown;
        let player = self.best_hand(Actor::Player);
        let cpu = self.best_hand(Actor::Cpu);
        events.push(RoundEvent::ShowdownHands {
            player: player.name.clone(),
            cpu: cpu.name.clone(),
        });

        let pot = self.pot;
        let winner = match player.score.cmp(&cpu.score) {
            std::cmp::Ordering::Greater => Some(Actor::Player),
            std::cmp::Ordering::Less => Some(Actor::Cpu),
            std::cmp::Ordering::Equal => None,
        };
        let awarded = match winner {
            Some(Actor::Player) => PerActor::new(pot, 0),
            Some(Actor::Cpu) => PerActor::new(0, pot),
            None => split_pot(pot),
        };
        self.stacks.player += awarded.player;
        self.stacks.cpu += awarded.cpu;
        self.pot = 0;
        match winner {
            Some(actor) => events.push(RoundEvent::PotAwarded { actor, amount: pot }),
            None => events.push(RoundEvent::PotSplit {
                player: awarded.player,
                cpu: awarded.cpu,
            }),
        }
        info!(player = %player.name, cpu = %cpu.name, ?winner, pot, "showdown");
        self.finish(HandOutcome::Showdown {
            player,
            cpu,
            winner,
            pot,
            awarded,
        });
    }

    fn best_hand(&self, actor: Actor) -> EvaluatedHand {
        let mut cards = Vec::with_capacity(7);
        cards.extend_from_slice(&self.hole[actor]);
        cards.extend_from_slice(&self.community);
        match evaluate_best(&cards) {
            Ok(hand) => hand,
            Err(e) => panic!("showdown with {} cards: {}", cards.len(), e),
        }
    }

    fn finish(&mut self, outcome: HandOutcome) {
        self.outcome = Some(outcome);
        self.in_hand = false;
        self.hand_over = true;
    }
}

fn draw(deck: &mut Deck) -> Card {
    match deck.deal_one() {
        Ok(card) => card,
        Err(e) => panic!("{}: a hand draws at most 9 cards", e),
    }
}
