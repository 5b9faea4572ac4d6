//! Integration tests for the interpretation pipeline

use shrdlite::core::error::{InterpretError, Result};
use shrdlite::core::types::{Color, Form, ObjectId, Relation, Size};
use shrdlite::interpreter::{
    Goal, InterpretationResult, Interpreter, Literal, Outcome, Predicate, SelectionPrompt,
};
use shrdlite::parse::{load_parses, Command, Descriptor, Entity, Location, Object, ParseResult};
use shrdlite::rules::StackingRules;
use shrdlite::world::{DescriptorMatcher, WorldLoader, WorldState};
use std::path::Path;

struct ScriptedPrompt {
    answers: Vec<Option<usize>>,
    shown: Vec<Vec<String>>,
}

impl ScriptedPrompt {
    fn new(answers: Vec<Option<usize>>) -> Self {
        Self {
            answers,
            shown: Vec::new(),
        }
    }
}

impl SelectionPrompt for ScriptedPrompt {
    fn prompt_selection(&mut self, choices: &[String]) -> Result<Option<usize>> {
        self.shown.push(choices.to_vec());
        Ok(self.answers[self.shown.len() - 1])
    }
}

fn world_from_json(json: &str) -> WorldState {
    WorldLoader::load_from_json(json).expect("test world should load")
}

fn base(form: Form, size: Option<Size>, color: Option<Color>) -> Object {
    Object::base(Descriptor::new(form, size, color))
}

fn the(object: Object) -> Entity {
    Entity::the(object)
}

fn floor() -> Entity {
    the(Object::base(Descriptor::floor()))
}

fn interpret(world: &WorldState, parses: Vec<ParseResult>) -> Result<Outcome> {
    Interpreter::new(world, &DescriptorMatcher, &StackingRules).interpret(parses)
}

#[test]
fn test_take_single_candidate() {
    let world = world_from_json(
        r#"{
            "stacks": [["ball1"]],
            "holding": null,
            "arm": 0,
            "objects": {"ball1": {"form": "ball", "size": "small", "color": "red"}}
        }"#,
    );
    let parse = ParseResult {
        input: "take the red ball".to_string(),
        command: Command::take(the(base(Form::Ball, None, Some(Color::Red)))),
    };

    let Outcome::Resolved(result) = interpret(&world, vec![parse]).unwrap() else {
        panic!("expected a single interpretation");
    };
    assert_eq!(
        result.goal,
        Goal(vec![vec![Literal {
            pol: true,
            rel: Predicate::Holding,
            args: vec![ObjectId::from("ball1")],
        }]])
    );
}

#[test]
fn test_physically_impossible_relocation() {
    let world = world_from_json(
        r#"{
            "stacks": [["e"], ["m"]],
            "objects": {
                "e": {"form": "ball", "size": "large", "color": "white"},
                "m": {"form": "box", "size": "small", "color": "blue"}
            }
        }"#,
    );
    let parse = ParseResult {
        input: "put the large ball inside the small box".to_string(),
        command: Command::put(
            Some(the(base(Form::Ball, Some(Size::Large), None))),
            Location::new(Relation::Inside, the(base(Form::Box, Some(Size::Small), None))),
        ),
    };

    let result = interpret(&world, vec![parse]);
    assert!(matches!(result, Err(InterpretError::NoInterpretation)));
}

#[test]
fn test_it_with_nothing_held() {
    let world = world_from_json(r#"{"stacks": [[]], "objects": {}}"#);
    let parse = ParseResult {
        input: "put it on the floor".to_string(),
        command: Command::put(None, Location::new(Relation::Ontop, floor())),
    };

    let result = interpret(&world, vec![parse]);
    assert!(matches!(result, Err(InterpretError::NothingHeld)));
}

#[test]
fn test_beside_at_stack_boundary() {
    let world = world_from_json(
        r#"{
            "stacks": [["t"], ["a"], ["b"]],
            "objects": {
                "t": {"form": "table", "size": "large", "color": "blue"},
                "a": {"form": "brick", "size": "small", "color": "red"},
                "b": {"form": "brick", "size": "small", "color": "green"}
            }
        }"#,
    );
    let brick_beside_table = Object::qualified(
        base(Form::Brick, None, None),
        Relation::Beside,
        the(base(Form::Table, None, None)),
    );
    let parse = ParseResult {
        input: "take the brick beside the table".to_string(),
        command: Command::take(the(brick_beside_table)),
    };

    let Outcome::Resolved(result) = interpret(&world, vec![parse]).unwrap() else {
        panic!("expected a single interpretation");
    };
    assert_eq!(result.goal.to_string(), "holding(a)");
}

fn ambiguous_parses() -> Vec<ParseResult> {
    let input = "put the white ball in a box on the floor";
    let white_ball = || base(Form::Ball, None, Some(Color::White));
    let a_box = || base(Form::Box, None, None);

    let into_box_on_floor = ParseResult {
        input: input.to_string(),
        command: Command::put(
            Some(the(white_ball())),
            Location::new(
                Relation::Inside,
                the(Object::qualified(a_box(), Relation::Ontop, floor())),
            ),
        ),
    };
    let ball_in_box_onto_floor = ParseResult {
        input: input.to_string(),
        command: Command::put(
            Some(the(Object::qualified(
                white_ball(),
                Relation::Inside,
                the(a_box()),
            ))),
            Location::new(Relation::Ontop, floor()),
        ),
    };
    vec![into_box_on_floor, ball_in_box_onto_floor]
}

#[test]
fn test_ambiguity_is_resolved_by_selection() {
    // the white ball already sits in box k, and box l is free on the floor
    let world = world_from_json(
        r#"{
            "stacks": [["k", "e"], ["l"]],
            "objects": {
                "e": {"form": "ball", "size": "large", "color": "white"},
                "k": {"form": "box", "size": "large", "color": "yellow"},
                "l": {"form": "box", "size": "large", "color": "red"}
            }
        }"#,
    );
    let interpreter = Interpreter::new(&world, &DescriptorMatcher, &StackingRules);

    let Outcome::NeedsDisambiguation(pending) = interpreter.interpret(ambiguous_parses()).unwrap()
    else {
        panic!("expected disambiguation");
    };
    assert_eq!(
        pending.choices(),
        &[
            "put the white ball in a box that is on the floor",
            "put the white ball that is in a box on the floor",
        ]
    );

    let mut prompt = ScriptedPrompt::new(vec![Some(2), None, Some(1)]);
    let results = interpreter
        .interpret_interactive(ambiguous_parses(), &mut prompt)
        .unwrap();
    assert_eq!(prompt.shown.len(), 3);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].goal.to_string(), "ontop(e,floor)");
    assert_eq!(results[0].parse, ambiguous_parses()[1]);
}

#[test]
fn test_identical_goals_still_prompt() {
    // two parses of "take the ball" that differ only in quantifier
    let world = world_from_json(
        r#"{"stacks": [["e"]], "objects": {"e": {"form": "ball", "size": "large", "color": "white"}}}"#,
    );
    let parse = ParseResult {
        input: "take the ball".to_string(),
        command: Command::take(the(base(Form::Ball, None, None))),
    };
    let mut other = parse.clone();
    if let Some(ent) = other.command.ent.as_mut() {
        ent.quant = shrdlite::parse::Quantifier::Any;
    }

    let outcome = interpret(&world, vec![parse, other]).unwrap();
    assert!(matches!(outcome, Outcome::NeedsDisambiguation(ref p) if p.len() == 2));
}

#[test]
fn test_bundled_small_world_scenarios() {
    let world_path = Path::new("data/worlds/small.json");
    let parses_path = Path::new("data/parses/white_ball_in_box.json");
    if !world_path.exists() || !parses_path.exists() {
        eprintln!("Skipping test: bundled data not found");
        return;
    }

    let world = WorldLoader::load_from_file(world_path).unwrap();
    let parses = load_parses(parses_path).unwrap();
    assert_eq!(parses.len(), 2);

    // only the "into a box that is on the floor" reading holds here
    let Outcome::Resolved(result) = interpret(&world, parses).unwrap() else {
        panic!("expected a single interpretation");
    };
    assert_eq!(result.goal.to_string(), "inside(e,k)");

    let put_it = load_parses(Path::new("data/parses/put_it_on_floor.json")).unwrap();
    let Outcome::Resolved(result) = interpret(&world, put_it).unwrap() else {
        panic!("expected a single interpretation");
    };
    assert_eq!(result.goal.to_string(), "ontop(a,floor)");
}

#[test]
fn test_result_serialization_shape() {
    let world = world_from_json(
        r#"{"stacks": [["e"]], "objects": {"e": {"form": "ball", "size": "large", "color": "white"}}}"#,
    );
    let parse = ParseResult {
        input: "take the ball".to_string(),
        command: Command::take(the(base(Form::Ball, None, None))),
    };
    let Outcome::Resolved(result) = interpret(&world, vec![parse]).unwrap() else {
        panic!("expected a single interpretation");
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["parse"]["input"], "take the ball");
    assert_eq!(json["parse"]["prs"]["cmd"], "take");
    assert_eq!(json["goal"][0][0]["rel"], "holding");

    let back: InterpretationResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}
