use crate::config::SwipeConfig;
use crate::deck::{generate_deck, Card};
use crate::gesture::{GestureTracker, Offset, Point};
use crate::swipe::{command_swipe, resolve, Decision};
use log::{debug, info};

// Identifies one commit: the reset epoch plus the card it was made on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeTicket {
    epoch: u64,
    position: usize,
    pub decision: Decision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating(SwipeTicket),
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionAction {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    Swipe(Option<Decision>),
    AnimationElapsed(SwipeTicket),
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    config: SwipeConfig,
    deck: Vec<Card>,
    position: usize,
    liked: Vec<Card>,
    gesture: GestureTracker,
    phase: Phase,
    epoch: u64,
}

impl Session {
    pub fn new(config: SwipeConfig) -> Self {
        let deck = generate_deck(config.deck_size, &config.image_url_template);
        let phase = if deck.is_empty() {
            Phase::Complete
        } else {
            Phase::Idle
        };
        Self {
            config,
            deck,
            position: 0,
            liked: Vec::new(),
            gesture: GestureTracker::new(),
            phase,
            epoch: 0,
        }
    }

    // true when anything observable changed
    pub fn apply(&mut self, action: SessionAction) -> bool {
        match action {
            SessionAction::PointerDown(point) => self.start_gesture(point),
            SessionAction::PointerMove(point) => self.move_gesture(point),
            SessionAction::PointerUp => {
                let was_active = self.gesture.is_active();
                self.end_gesture();
                was_active
            }
            SessionAction::Swipe(direction) => self.command(direction).is_some(),
            SessionAction::AnimationElapsed(ticket) => self.complete_animation(ticket),
            SessionAction::Reset => {
                self.reset();
                true
            }
        }
    }

    pub fn start_gesture(&mut self, point: Point) -> bool {
        if self.is_exhausted() {
            return false;
        }
        if let Phase::Animating(ticket) = self.phase {
            debug!("ignoring drag while {} animation plays", ticket.decision.as_str());
            return false;
        }
        self.gesture.start(point);
        true
    }

    pub fn move_gesture(&mut self, point: Point) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.gesture.move_to(point)
    }

    pub fn end_gesture(&mut self) -> Option<SwipeTicket> {
        if !self.gesture.is_active() || self.is_exhausted() {
            return None;
        }
        let offset = self.gesture.end();
        match resolve(offset, self.config.swipe_threshold) {
            Some(decision) => self.commit(decision),
            None => {
                self.gesture.reset_offset();
                None
            }
        }
    }

    pub fn command(&mut self, direction: Option<Decision>) -> Option<SwipeTicket> {
        let decision = command_swipe(direction, self.is_exhausted())?;
        if let Phase::Animating(ticket) = self.phase {
            debug!(
                "ignoring {} command while {} animation plays",
                decision.as_str(),
                ticket.decision.as_str()
            );
            return None;
        }
        self.gesture.clear();
        self.commit(decision)
    }

    fn commit(&mut self, decision: Decision) -> Option<SwipeTicket> {
        if self.phase != Phase::Idle {
            return None;
        }
        let card = self.deck.get_mut(self.position)?;
        if decision == Decision::Like {
            card.liked = true;
            self.liked.push(card.clone());
        }
        debug!("card {} committed as {}", card.id, decision.as_str());

        let ticket = SwipeTicket {
            epoch: self.epoch,
            position: self.position,
            decision,
        };
        self.phase = Phase::Animating(ticket);
        Some(ticket)
    }

    pub fn complete_animation(&mut self, ticket: SwipeTicket) -> bool {
        if self.phase != Phase::Animating(ticket) {
            return false;
        }
        self.position += 1;
        self.gesture.clear();
        if self.position >= self.deck.len() {
            info!(
                "deck finished: liked {} of {}",
                self.liked.len(),
                self.deck.len()
            );
            self.phase = Phase::Complete;
        } else {
            self.phase = Phase::Idle;
        }
        true
    }

    pub fn reset(&mut self) {
        let epoch = self.epoch.wrapping_add(1);
        *self = Self::new(self.config.clone());
        self.epoch = epoch;
        info!("session reset with {} cards", self.deck.len());
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn liked(&self) -> &[Card] {
        &self.liked
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.position)
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.deck.len()
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    pub fn offset(&self) -> Offset {
        self.gesture.offset()
    }

    pub fn pending_ticket(&self) -> Option<SwipeTicket> {
        match self.phase {
            Phase::Animating(ticket) => Some(ticket),
            _ => None,
        }
    }

    pub fn committed_decision(&self) -> Option<Decision> {
        self.pending_ticket().map(|ticket| ticket.decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_of(size: usize) -> Session {
        Session::new(SwipeConfig {
            deck_size: size,
            ..SwipeConfig::default()
        })
    }

    fn drag(session: &mut Session, dx: f64) -> Option<SwipeTicket> {
        assert!(session.start_gesture(Point::new(200.0, 200.0)));
        session.move_gesture(Point::new(200.0 + dx, 210.0));
        session.end_gesture()
    }

    fn swipe_and_settle(session: &mut Session, decision: Decision) {
        let ticket = session.command(Some(decision)).expect("swipe accepted");
        assert!(session.complete_animation(ticket));
    }

    #[test]
    fn like_pass_like_over_three_cards() {
        let mut session = session_of(3);
        swipe_and_settle(&mut session, Decision::Like);
        swipe_and_settle(&mut session, Decision::Pass);
        swipe_and_settle(&mut session, Decision::Like);

        let liked: Vec<usize> = session.liked().iter().map(|card| card.id).collect();
        assert_eq!(liked, vec![0, 2]);
        assert!(session.liked().iter().all(|card| card.liked));
        assert!(session.is_complete());
        assert_eq!(session.position(), 3);
    }

    #[test]
    fn short_drag_snaps_back() {
        let mut session = session_of(3);
        assert_eq!(drag(&mut session, 50.0), None);
        assert_eq!(session.offset(), Offset::ZERO);
        assert_eq!(session.position(), 0);
        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.is_dragging());
    }

    #[test]
    fn drag_on_the_threshold_does_not_commit() {
        let mut session = session_of(3);
        assert_eq!(drag(&mut session, 100.0), None);
        assert_eq!(drag(&mut session, -100.0), None);
        assert!(session.liked().is_empty());
    }

    #[test]
    fn long_drag_commits_and_likes_immediately() {
        let mut session = session_of(3);
        let ticket = drag(&mut session, 140.0).expect("committed");
        assert_eq!(ticket.decision, Decision::Like);
        assert_eq!(session.committed_decision(), Some(Decision::Like));
        // liked before the cursor moves
        assert_eq!(session.liked().len(), 1);
        assert_eq!(session.position(), 0);
        // offset stays put until the animation settles
        assert_eq!(session.offset(), Offset::new(140.0, 10.0));

        assert!(session.complete_animation(ticket));
        assert_eq!(session.position(), 1);
        assert_eq!(session.committed_decision(), None);
        assert_eq!(session.offset(), Offset::ZERO);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn leftward_drag_passes() {
        let mut session = session_of(2);
        let ticket = drag(&mut session, -180.0).expect("committed");
        assert_eq!(ticket.decision, Decision::Pass);
        assert!(session.liked().is_empty());
    }

    #[test]
    fn input_is_rejected_while_animating() {
        let mut session = session_of(3);
        let ticket = session.command(Some(Decision::Pass)).unwrap();

        assert!(!session.start_gesture(Point::new(0.0, 0.0)));
        assert_eq!(session.command(Some(Decision::Like)), None);
        assert!(session.liked().is_empty());

        assert!(session.complete_animation(ticket));
        assert_eq!(session.position(), 1);
        // a duplicate timer fire does not advance twice
        assert!(!session.complete_animation(ticket));
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn earlier_ticket_cannot_advance_the_next_card() {
        let mut session = session_of(3);
        let first = session.command(Some(Decision::Like)).unwrap();
        assert!(session.complete_animation(first));

        let second = session.command(Some(Decision::Like)).unwrap();
        assert_ne!(first, second);
        assert!(!session.complete_animation(first));
        assert_eq!(session.position(), 1);
        assert_eq!(session.pending_ticket(), Some(second));

        assert!(session.complete_animation(second));
        assert_eq!(session.position(), 2);
    }

    #[test]
    fn button_clears_an_in_flight_drag() {
        let mut session = session_of(3);
        session.start_gesture(Point::new(0.0, 0.0));
        session.move_gesture(Point::new(30.0, 0.0));
        session.command(Some(Decision::Like)).unwrap();
        assert!(!session.is_dragging());
        assert_eq!(session.end_gesture(), None);
        assert_eq!(session.liked().len(), 1);
    }

    #[test]
    fn exhausted_deck_ignores_everything() {
        let mut session = session_of(1);
        swipe_and_settle(&mut session, Decision::Pass);
        let before = session.clone();

        assert_eq!(session.command(Some(Decision::Pass)), None);
        assert_eq!(session.command(Some(Decision::Like)), None);
        assert!(!session.start_gesture(Point::new(0.0, 0.0)));
        assert!(!session.move_gesture(Point::new(300.0, 0.0)));
        assert_eq!(session.end_gesture(), None);
        assert_eq!(session, before);
    }

    #[test]
    fn unset_direction_is_a_no_op() {
        let mut session = session_of(2);
        assert_eq!(session.command(None), None);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn completes_exactly_once() {
        let mut session = session_of(2);
        swipe_and_settle(&mut session, Decision::Like);
        assert!(!session.is_complete());
        swipe_and_settle(&mut session, Decision::Like);
        assert!(session.is_complete());
        assert_eq!(session.pending_ticket(), None);
    }

    #[test]
    fn liked_count_matches_like_decisions() {
        let mut session = session_of(10);
        let mut likes = 0;
        for index in 0..10 {
            let decision = if index % 3 == 0 {
                likes += 1;
                Decision::Like
            } else {
                Decision::Pass
            };
            swipe_and_settle(&mut session, decision);
        }
        assert_eq!(session.liked().len(), likes);
    }

    #[test]
    fn reset_restores_a_fresh_deck() {
        let mut session = session_of(3);
        swipe_and_settle(&mut session, Decision::Like);
        swipe_and_settle(&mut session, Decision::Like);
        swipe_and_settle(&mut session, Decision::Like);
        assert!(session.is_complete());

        session.reset();
        assert_eq!(session.position(), 0);
        assert!(session.liked().is_empty());
        assert_eq!(session.deck().len(), 3);
        assert!(session.deck().iter().all(|card| !card.liked));
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn stale_ticket_after_reset_is_inert() {
        let mut session = session_of(3);
        let stale = session.command(Some(Decision::Like)).unwrap();
        session.reset();

        let fresh = session.command(Some(Decision::Like)).unwrap();
        assert_ne!(stale, fresh);
        assert!(!session.complete_animation(stale));
        assert_eq!(session.position(), 0);
        assert!(session.complete_animation(fresh));
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn empty_deck_starts_complete() {
        let mut session = session_of(0);
        assert!(session.is_complete());
        assert_eq!(session.command(Some(Decision::Like)), None);
    }

    #[test]
    fn apply_reports_changes() {
        let mut session = session_of(2);
        assert!(!session.apply(SessionAction::PointerMove(Point::new(10.0, 0.0))));
        assert!(!session.apply(SessionAction::PointerUp));
        assert!(session.apply(SessionAction::PointerDown(Point::new(0.0, 0.0))));
        assert!(session.apply(SessionAction::PointerMove(Point::new(-150.0, 0.0))));
        assert!(session.apply(SessionAction::PointerUp));

        let ticket = session.pending_ticket().unwrap();
        assert_eq!(ticket.decision, Decision::Pass);
        assert!(session.apply(SessionAction::AnimationElapsed(ticket)));
        assert!(!session.apply(SessionAction::Swipe(None)));
        assert!(session.apply(SessionAction::Reset));
        assert_eq!(session.position(), 0);
    }
}
