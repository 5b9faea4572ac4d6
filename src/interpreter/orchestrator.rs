//! Interpretation across all parses, with disambiguation between survivors
//!
//! `interpret` never blocks: when more than one parse holds it hands back a
//! [`Disambiguation`] carrying the renderings to show, and the caller picks
//! one with [`Disambiguation::select`]. `interpret_interactive` wraps that
//! protocol around a [`SelectionPrompt`] for front ends that can ask directly.

use crate::core::config::InterpreterConfig;
use crate::core::error::{InterpretError, Result};
use crate::interpreter::command::CommandInterpreter;
use crate::interpreter::goal::Goal;
use crate::interpreter::render::DisambiguationRenderer;
use crate::parse::ParseResult;
use crate::rules::PhysicalLaw;
use crate::world::{AttributeMatcher, WorldState};
use serde::{Deserialize, Serialize};

/// A parse together with the goal it yields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretationResult {
    pub parse: ParseResult,
    pub goal: Goal,
}

/// Result of interpreting a batch of parses
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Exactly one parse holds in this world
    Resolved(InterpretationResult),
    /// Several parses hold; the user has to pick one
    NeedsDisambiguation(Disambiguation),
}

/// Pending choice between surviving interpretations
#[derive(Debug, Clone)]
pub struct Disambiguation {
    candidates: Vec<InterpretationResult>,
    choices: Vec<String>,
}

impl Disambiguation {
    /// Renderings of the competing parses, index-aligned with `select`
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn candidates(&self) -> &[InterpretationResult] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The interpretation at `selection`, which must be in `0..len()`
    pub fn select(&self, selection: usize) -> Result<InterpretationResult> {
        self.candidates
            .get(selection)
            .cloned()
            .ok_or(InterpretError::InvalidSelection {
                selection,
                choices: self.candidates.len(),
            })
    }
}

/// Asks the user to pick one of several renderings
pub trait SelectionPrompt {
    /// The chosen index, or `None` if the answer was not a number.
    /// Errors end the interaction (e.g. input closed).
    fn prompt_selection(&mut self, choices: &[String]) -> Result<Option<usize>>;
}

/// Runs every parse through the command interpreter and settles ties
pub struct Interpreter<'a> {
    world: &'a WorldState,
    matcher: &'a dyn AttributeMatcher,
    physics: &'a dyn PhysicalLaw,
    renderer: DisambiguationRenderer,
}

impl<'a> Interpreter<'a> {
    pub fn new(
        world: &'a WorldState,
        matcher: &'a dyn AttributeMatcher,
        physics: &'a dyn PhysicalLaw,
    ) -> Self {
        Self {
            world,
            matcher,
            physics,
            renderer: DisambiguationRenderer::default(),
        }
    }

    pub fn with_config(mut self, config: &InterpreterConfig) -> Self {
        self.renderer = DisambiguationRenderer::from_config(config);
        self
    }

    /// Interpret every parse; fails with `NoInterpretation` when none holds
    ///
    /// Command-level errors (`NothingHeld`, `CannotMoveFloor`,
    /// `UnsupportedRelation`) from any parse abort the whole call.
    pub fn interpret(&self, parses: Vec<ParseResult>) -> Result<Outcome> {
        let interpreter = CommandInterpreter::new(self.world, self.matcher, self.physics);
        let total = parses.len();

        let mut survivors = Vec::new();
        for (index, parse) in parses.into_iter().enumerate() {
            match interpreter.interpret_command(&parse.command)? {
                Some(goal) => {
                    tracing::debug!(parse = index, disjuncts = goal.len(), "Parse interpreted");
                    survivors.push(InterpretationResult { parse, goal });
                }
                None => tracing::debug!(parse = index, "Parse has no interpretation"),
            }
        }

        tracing::info!(parses = total, survivors = survivors.len(), "Interpretation finished");

        match survivors.len() {
            0 => Err(InterpretError::NoInterpretation),
            1 => Ok(Outcome::Resolved(survivors.remove(0))),
            _ => {
                let choices = survivors
                    .iter()
                    .map(|survivor| self.renderer.render(&survivor.parse))
                    .collect();
                Ok(Outcome::NeedsDisambiguation(Disambiguation {
                    candidates: survivors,
                    choices,
                }))
            }
        }
    }

    /// Interpret and, if needed, ask `prompt` until it gives a valid index
    ///
    /// The returned list always holds exactly one interpretation.
    pub fn interpret_interactive(
        &self,
        parses: Vec<ParseResult>,
        prompt: &mut dyn SelectionPrompt,
    ) -> Result<Vec<InterpretationResult>> {
        let pending = match self.interpret(parses)? {
            Outcome::Resolved(result) => return Ok(vec![result]),
            Outcome::NeedsDisambiguation(pending) => pending,
        };

        loop {
            match prompt.prompt_selection(pending.choices())? {
                Some(selection) => match pending.select(selection) {
                    Ok(result) => return Ok(vec![result]),
                    Err(err) => tracing::warn!("{}", err),
                },
                None => tracing::warn!("Selection is not a number"),
            }
        }
    }
}
