//! Lexer
//!
//!     Walks the source left to right, driven by the [rule table](super::rules).
//!     At each cursor position the rules of the state on top of the stack are
//!     tried in order; the first match is emitted and may push or pop a state.
//!     When nothing matches, one character is emitted as [TokenKind::Error] so
//!     the scan always makes progress.
//!
//!     Tokens are produced lazily. Their texts, concatenated, are exactly the
//!     input: nothing is dropped, duplicated or normalised.

use super::rules::{Action, RuleTable, StateId, Transition, RULES};
use super::token::{Token, TokenKind};
use std::collections::VecDeque;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Scan `source`, returning a lazy token iterator.
pub fn scan(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Scan `source` eagerly.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    scan(source).collect()
}

/// A single scan over one source buffer.
///
/// Not restartable: create a new lexer to scan again.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    rules: &'static RuleTable,
    pos: usize,
    stack: Vec<StateId>,
    /// Tokens matched but not yet yielded (rules emitting several groups)
    pending: VecDeque<Token<'src>>,
    emitted: usize,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        debug!(len = source.len(), "scan started");
        Self {
            source,
            rules: &RULES,
            pos: 0,
            stack: vec![StateId::Root],
            pending: VecDeque::new(),
            emitted: 0,
            finished: false,
        }
    }

    /// Byte offset of the next unscanned character.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The active state.
    pub fn state(&self) -> StateId {
        self.stack.last().copied().unwrap_or(StateId::Root)
    }

    /// The state stack, bottom first. Always starts with `root`.
    pub fn state_stack(&self) -> &[StateId] {
        &self.stack
    }

    /// Consume input at the cursor, queueing at least one token.
    fn step(&mut self) {
        let source = self.source;
        let rules = self.rules;
        let rest = &source[self.pos..];
        let start = self.pos;

        for rule in rules.rules(self.state()) {
            let consumed = match rule.action {
                Action::Emit(kind) => match rule.find(rest) {
                    Some(m) if !m.is_empty() => {
                        self.pending.push_back(Token::new(kind, m.as_str(), start));
                        m.end()
                    }
                    _ => continue,
                },
                Action::ByGroups(kinds) => match rule.captures(rest) {
                    Some(caps) if caps.get(0).is_some_and(|m| !m.is_empty()) => {
                        for (index, kind) in kinds.iter().enumerate() {
                            if let Some(group) = caps.get(index + 1).filter(|g| !g.is_empty()) {
                                self.pending.push_back(Token::new(
                                    *kind,
                                    group.as_str(),
                                    start + group.start(),
                                ));
                            }
                        }
                        caps.get(0).map_or(0, |m| m.end())
                    }
                    _ => continue,
                },
            };

            self.pos += consumed;
            self.apply(rule.transition);
            return;
        }

        let width = rest.chars().next().map_or(rest.len(), char::len_utf8);
        debug!(
            offset = start,
            state = self.state().name(),
            text = &rest[..width],
            "no rule matched"
        );
        self.pending
            .push_back(Token::new(TokenKind::Error, &rest[..width], start));
        self.pos += width;
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => {}
            Transition::Push(state) => {
                trace!(state = state.name(), depth = self.stack.len() + 1, "push");
                self.stack.push(state);
            }
            Transition::Pop => {
                // root is never popped
                if self.stack.len() > 1 {
                    let left = self.stack.pop().map(StateId::name);
                    trace!(state = ?left, depth = self.stack.len(), "pop");
                }
            }
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pending.is_empty() {
            if self.pos >= self.source.len() {
                if !self.finished {
                    self.finished = true;
                    debug!(
                        tokens = self.emitted,
                        depth = self.stack.len(),
                        "scan finished"
                    );
                }
                return None;
            }
            self.step();
        }

        self.emitted += 1;
        self.pending.pop_front()
    }
}

impl FusedIterator for Lexer<'_> {}
