//! Goal formulas: disjunctions of conjunctions of ground literals

use crate::core::types::{ObjectId, Relation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relation named by a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Predicate {
    Holding,
    Ontop,
    Inside,
    Above,
    Under,
    Beside,
    LeftOf,
    RightOf,
}

impl Predicate {
    pub fn name(&self) -> &'static str {
        match self {
            Predicate::Holding => "holding",
            Predicate::Ontop => "ontop",
            Predicate::Inside => "inside",
            Predicate::Above => "above",
            Predicate::Under => "under",
            Predicate::Beside => "beside",
            Predicate::LeftOf => "leftof",
            Predicate::RightOf => "rightof",
        }
    }
}

impl From<Relation> for Predicate {
    fn from(relation: Relation) -> Self {
        match relation {
            Relation::Ontop => Predicate::Ontop,
            Relation::Inside => Predicate::Inside,
            Relation::Above => Predicate::Above,
            Relation::Under => Predicate::Under,
            Relation::Beside => Predicate::Beside,
            Relation::LeftOf => Predicate::LeftOf,
            Relation::RightOf => Predicate::RightOf,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One ground fact, e.g. `holding(e)` or `inside(e,k)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub pol: bool,
    pub rel: Predicate,
    pub args: Vec<ObjectId>,
}

impl Literal {
    pub fn positive(rel: Predicate, args: Vec<ObjectId>) -> Self {
        Self {
            pol: true,
            rel,
            args,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.pol {
            f.write_str("-")?;
        }
        write!(f, "{}(", self.rel)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(")")
    }
}

pub type Conjunction = Vec<Literal>;

/// A goal in disjunctive normal form; any one conjunction satisfies it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Goal(pub Vec<Conjunction>);

impl Goal {
    pub fn disjuncts(&self) -> &[Conjunction] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every literal in the goal, in order
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.0.iter().flatten()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, conjunction) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            for (j, literal) in conjunction.iter().enumerate() {
                if j > 0 {
                    f.write_str(" & ")?;
                }
                write!(f, "{}", literal)?;
            }
        }
        Ok(())
    }
}

/// Admissible targets per subject, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetMap {
    entries: Vec<(ObjectId, Vec<ObjectId>)>,
}

impl TargetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the targets of `subject`, replacing any previous entry
    pub fn insert(&mut self, subject: ObjectId, targets: Vec<ObjectId>) {
        match self.entries.iter_mut().find(|(key, _)| *key == subject) {
            Some(entry) => entry.1 = targets,
            None => self.entries.push((subject, targets)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ObjectId, &[ObjectId])> {
        self.entries
            .iter()
            .map(|(subject, targets)| (subject, targets.as_slice()))
    }
}

/// What the goal asks of each subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    /// Be in the arm
    Hold,
    /// Stand in the relation to one of its targets
    Relate(Relation),
}

pub struct GoalBuilder;

impl GoalBuilder {
    /// Turn admissible subject/target pairs into a goal
    ///
    /// Each disjunct holds a single literal. For `Hold` the targets are ignored.
    pub fn build(map: &TargetMap, kind: GoalKind) -> Goal {
        let disjuncts = match kind {
            GoalKind::Hold => map
                .iter()
                .map(|(subject, _)| vec![Literal::positive(Predicate::Holding, vec![subject.clone()])])
                .collect(),
            GoalKind::Relate(relation) => map
                .iter()
                .flat_map(|(subject, targets)| {
                    targets.iter().map(move |target| {
                        vec![Literal::positive(
                            relation.into(),
                            vec![subject.clone(), target.clone()],
                        )]
                    })
                })
                .collect(),
        };
        Goal(disjuncts)
    }
}
