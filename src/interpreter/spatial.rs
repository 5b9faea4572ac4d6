//! Spatial relation matching - which objects stand in a relation to a reference

use crate::core::types::{Form, Relation};
use crate::parse::Descriptor;
use crate::world::{AttributeMatcher, ObjectWithCoord, WorldState};

/// Enumerates world objects that satisfy a relation to a reference object
pub struct SpatialMatcher<'a> {
    world: &'a WorldState,
    matcher: &'a dyn AttributeMatcher,
}

impl<'a> SpatialMatcher<'a> {
    pub fn new(world: &'a WorldState, matcher: &'a dyn AttributeMatcher) -> Self {
        Self { world, matcher }
    }

    /// Objects fitting `descriptor` that are `relation` to `reference`
    ///
    /// Stacks are indexed left to right and heights bottom up. The floor only
    /// takes part as the support of `ontop`; every other combination with it,
    /// and any reference without a coordinate, yields nothing.
    pub fn match_candidates(
        &self,
        relation: Relation,
        descriptor: &Descriptor,
        reference: &ObjectWithCoord,
    ) -> Vec<ObjectWithCoord> {
        let Some(coord) = reference.coord else {
            if reference.is_floor() && relation == Relation::Ontop {
                return (0..self.world.stack_count())
                    .flat_map(|x| self.in_stack(x, 0, 1, descriptor))
                    .collect();
            }
            return Vec::new();
        };

        let (x, y) = (coord.x, coord.y);
        match relation {
            Relation::Ontop if reference.form != Form::Box => {
                self.in_stack(x, y + 1, y + 2, descriptor)
            }
            Relation::Inside if reference.form == Form::Box => {
                self.in_stack(x, y + 1, y + 2, descriptor)
            }
            Relation::Above => self.in_stack(x, y + 1, self.world.stack_height(x), descriptor),
            Relation::Under => self.in_stack(x, 0, y, descriptor),
            Relation::Beside => {
                let mut candidates = Vec::new();
                if x > 0 {
                    candidates.extend(self.whole_stack(x - 1, descriptor));
                }
                if x + 1 < self.world.stack_count() {
                    candidates.extend(self.whole_stack(x + 1, descriptor));
                }
                candidates
            }
            Relation::LeftOf => (0..x)
                .flat_map(|stack| self.whole_stack(stack, descriptor))
                .collect(),
            Relation::RightOf => (x + 1..self.world.stack_count())
                .flat_map(|stack| self.whole_stack(stack, descriptor))
                .collect(),
            Relation::Ontop | Relation::Inside => Vec::new(),
        }
    }

    fn in_stack(
        &self,
        stack: usize,
        from: usize,
        to: usize,
        descriptor: &Descriptor,
    ) -> Vec<ObjectWithCoord> {
        self.matcher
            .objects_in_stack_range(stack, from, to, self.world, descriptor)
    }

    fn whole_stack(&self, stack: usize, descriptor: &Descriptor) -> Vec<ObjectWithCoord> {
        self.in_stack(stack, 0, self.world.stack_height(stack), descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Color, ObjectId, Size};
    use crate::world::{DescriptorMatcher, ObjectDefinition};
    use std::collections::BTreeMap;

    // | a |   | d |
    // | b |   | e | f |
    // | c |   | g | h |
    //   0   1   2   3
    fn make_world() -> WorldState {
        let mut objects = BTreeMap::new();
        let defs = [
            ("a", Form::Ball, Size::Small),
            ("b", Form::Box, Size::Large),
            ("c", Form::Table, Size::Large),
            ("d", Form::Brick, Size::Small),
            ("e", Form::Brick, Size::Large),
            ("f", Form::Pyramid, Size::Small),
            ("g", Form::Plank, Size::Large),
            ("h", Form::Brick, Size::Large),
        ];
        for (id, form, size) in defs {
            objects.insert(ObjectId::from(id), ObjectDefinition::new(form, size, Color::Red));
        }
        WorldState::new(
            vec![
                vec!["c".into(), "b".into(), "a".into()],
                vec![],
                vec!["g".into(), "e".into(), "d".into()],
                vec!["h".into(), "f".into()],
            ],
            objects,
        )
    }

    fn reference(world: &WorldState, id: &str) -> ObjectWithCoord {
        let id = ObjectId::from(id);
        let definition = *world.definition(&id).unwrap();
        let coord = world.coordinate_of(&id);
        ObjectWithCoord::new(id, &definition, coord)
    }

    fn ids(objects: &[ObjectWithCoord]) -> Vec<&str> {
        objects.iter().map(|o| o.id.as_str()).collect()
    }

    fn any() -> Descriptor {
        Descriptor::form(Form::AnyForm)
    }

    #[test]
    fn test_ontop_floor_returns_bottom_row() {
        let world = make_world();
        let spatial = SpatialMatcher::new(&world, &DescriptorMatcher);
        let found = spatial.match_candidates(Relation::Ontop, &any(), &ObjectWithCoord::floor());
        assert_eq!(ids(&found), vec!["c", "g", "h"]);
    }

    #[test]
    fn test_floor_only_supports_ontop() {
        let world = make_world();
        let spatial = SpatialMatcher::new(&world, &DescriptorMatcher);
        let floor = ObjectWithCoord::floor();
        for relation in [
            Relation::Inside,
            Relation::Above,
            Relation::Under,
            Relation::Beside,
            Relation::LeftOf,
            Relation::RightOf,
        ] {
            assert!(spatial.match_candidates(relation, &any(), &floor).is_empty());
        }
    }

    #[test]
    fn test_ontop_non_box() {
        let world = make_world();
        let spatial = SpatialMatcher::new(&world, &DescriptorMatcher);
        let found = spatial.match_candidates(Relation::Ontop, &any(), &reference(&world, "c"));
        assert_eq!(ids(&found), vec!["b"]);
    }

    #[test]
    fn test_ontop_box_is_empty_inside_box_is_not() {
        let world = make_world();
        let spatial = SpatialMatcher::new(&world, &DescriptorMatcher);
        let bx = reference(&world, "b");
        assert!(spatial.match_candidates(Relation::Ontop, &any(), &bx).is_empty());
        let found = spatial.match_candidates(Relation::Inside, &any(), &bx);
        assert_eq!(ids(&found), vec!["a"]);
    }

    #[test]
    fn test_inside_non_box_is_empty() {
        let world = make_world();
        let spatial = SpatialMatcher::new(&world, &DescriptorMatcher);
        let table = reference(&world, "c");
        assert!(spatial.match_candidates(Relation::Inside, &any(), &table).is_empty());
    }

    #[test]
    fn test_above_and_under() {
        let world = make_world();
        let spatial = SpatialMatcher::new(&world, &DescriptorMatcher);
        let plank = reference(&world, "g");
        let above = spatial.match_candidates(Relation::Above, &any(), &plank);
        assert_eq!(ids(&above), vec!["e", "d"]);
        let top = reference(&world, "d");
        let under = spatial.match_candidates(Relation::Under, &any(), &top);
        assert_eq!(ids(&under), vec!["g", "e"]);
    }

    #[test]
    fn test_beside_at_left_boundary() {
        let world = make_world();
        let spatial = SpatialMatcher::new(&world, &DescriptorMatcher);
        // stack 1 is empty, so nothing beside stack 0
        let found = spatial.match_candidates(Relation::Beside, &any(), &reference(&world, "a"));
        assert!(found.is_empty());
    }

    #[test]
    fn test_beside_at_right_boundary() {
        let world = make_world();
        let spatial = SpatialMatcher::new(&world, &DescriptorMatcher);
        let found = spatial.match_candidates(Relation::Beside, &any(), &reference(&world, "h"));
        assert_eq!(ids(&found), vec!["g", "e", "d"]);
    }

    #[test]
    fn test_leftof_and_rightof() {
        let world = make_world();
        let spatial = SpatialMatcher::new(&world, &DescriptorMatcher);
        let left = spatial.match_candidates(Relation::LeftOf, &any(), &reference(&world, "e"));
        assert_eq!(ids(&left), vec!["c", "b", "a"]);
        let right = spatial.match_candidates(Relation::RightOf, &any(), &reference(&world, "e"));
        assert_eq!(ids(&right), vec!["h", "f"]);
    }

    #[test]
    fn test_candidates_filtered_by_descriptor() {
        let world = make_world();
        let spatial = SpatialMatcher::new(&world, &DescriptorMatcher);
        let bricks = Descriptor::form(Form::Brick);
        let found = spatial.match_candidates(Relation::RightOf, &bricks, &reference(&world, "c"));
        assert_eq!(ids(&found), vec!["e", "d", "h"]);
    }

    #[test]
    fn test_reference_without_coordinate() {
        let world = make_world();
        let spatial = SpatialMatcher::new(&world, &DescriptorMatcher);
        let mut held = reference(&world, "a");
        held.coord = None;
        assert!(spatial.match_candidates(Relation::Above, &any(), &held).is_empty());
    }
}
