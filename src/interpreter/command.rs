//! Single-parse interpretation - turns one command tree into a goal

use crate::core::error::{InterpretError, Result};
use crate::interpreter::goal::{Goal, GoalBuilder, GoalKind, TargetMap};
use crate::interpreter::resolver::EntityResolver;
use crate::interpreter::validator::PhysicalLawValidator;
use crate::parse::Command;
use crate::rules::PhysicalLaw;
use crate::world::{dedup_by_id, AttributeMatcher, ObjectWithCoord, WorldState};

/// Interprets a single command against a world snapshot
pub struct CommandInterpreter<'a> {
    world: &'a WorldState,
    matcher: &'a dyn AttributeMatcher,
    resolver: EntityResolver<'a>,
    validator: PhysicalLawValidator<'a>,
}

impl<'a> CommandInterpreter<'a> {
    pub fn new(
        world: &'a WorldState,
        matcher: &'a dyn AttributeMatcher,
        physics: &'a dyn PhysicalLaw,
    ) -> Self {
        Self {
            world,
            matcher,
            resolver: EntityResolver::new(world, matcher),
            validator: PhysicalLawValidator::new(physics),
        }
    }

    /// The goal `command` asks for, or `None` if it cannot hold in this world
    ///
    /// Errors are reserved for commands that make no sense at all: "it" with
    /// an empty arm, moving the floor, or relating something to the floor's position.
    pub fn interpret_command(&self, command: &Command) -> Result<Option<Goal>> {
        let Some(subjects) = self.subjects(command)? else {
            return Ok(None);
        };

        let Some(loc) = &command.loc else {
            let mut map = TargetMap::new();
            for subject in &subjects {
                map.insert(subject.id.clone(), Vec::new());
            }
            return Ok(Some(GoalBuilder::build(&map, GoalKind::Hold)));
        };

        let targets = dedup_by_id(self.resolver.resolve(&loc.ent)?);
        if targets.is_empty() {
            tracing::debug!("No object matches the destination");
            return Ok(None);
        }

        let mut map = TargetMap::new();
        for subject in &subjects {
            let valid = self.validator.filter_valid(subject, &targets, loc.rel);
            if !valid.is_empty() {
                map.insert(subject.id.clone(), valid);
            }
        }

        if map.is_empty() {
            tracing::debug!(
                subjects = subjects.len(),
                targets = targets.len(),
                relation = %loc.rel,
                "No subject has an admissible target"
            );
            return Ok(None);
        }

        Ok(Some(GoalBuilder::build(&map, GoalKind::Relate(loc.rel))))
    }

    /// The objects the command acts on, de-duplicated; `None` if nothing matches
    fn subjects(&self, command: &Command) -> Result<Option<Vec<ObjectWithCoord>>> {
        let Some(entity) = &command.ent else {
            return match self.world.held_object()? {
                Some(held) => Ok(Some(vec![held])),
                None => Err(InterpretError::NothingHeld),
            };
        };

        if self.matcher.is_floor(&entity.obj) {
            return Err(InterpretError::CannotMoveFloor);
        }

        let subjects = dedup_by_id(self.resolver.resolve(entity)?);
        if subjects.is_empty() {
            tracing::debug!("No object matches the subject");
            return Ok(None);
        }
        Ok(Some(subjects))
    }
}
