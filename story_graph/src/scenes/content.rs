//! The reference story: three paths, five beats each, with per-choice
//! score deltas.

use serde::{Deserialize, Serialize};

use scoring_engine::Dimension::{Action, Compassion, Honesty, Hope, SelfWorth, Vulnerability};
use scoring_engine::ScoreDelta;

use super::{Choice, Scene, SceneId, SceneVariant, StoryGraph};

/// Which opening the user selected; each path carries its own initial
/// delta and entry scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoryPath {
    /// Path A: in a relationship, with plans tonight.
    PlansTonight,
    /// Path B: in a relationship, no plans and no message.
    NoPlans,
    /// Path C: single, waking up to silence.
    Single,
}

impl StoryPath {
    /// All paths in declared order.
    pub const ALL: [StoryPath; 3] = [StoryPath::PlansTonight, StoryPath::NoPlans, StoryPath::Single];

    /// Delta applied to the zero vector before the first scene.
    pub fn initial_delta(&self) -> ScoreDelta {
        match self {
            StoryPath::PlansTonight => ScoreDelta::new().with(Hope, 1).with(Honesty, 1),
            StoryPath::NoPlans => ScoreDelta::new().with(Hope, -1).with(SelfWorth, -1),
            StoryPath::Single => ScoreDelta::new().with(SelfWorth, 1).with(Action, -1),
        }
    }

    /// Entry scene of this path.
    pub fn start_scene(&self) -> SceneId {
        match self {
            StoryPath::PlansTonight => SceneId::new("A1"),
            StoryPath::NoPlans => SceneId::new("B1"),
            StoryPath::Single => SceneId::new("C1"),
        }
    }
}

/// Build the reference story graph.
pub fn reference_story() -> StoryGraph {
    let mut graph = StoryGraph::new();

    // Path A: relationship with plans tonight.
    graph.add_scene(Scene::new(
        "A1",
        SceneVariant::Story,
        "You check your phone. Your partner sent a sweet message confirming tonight's date.",
        vec![
            Choice::to(
                "Smile and feel grateful",
                ScoreDelta::new().with(Hope, 1).with(Compassion, 1),
                "A2",
            ),
            Choice::to(
                "Feel nervous - something feels important today",
                ScoreDelta::new().with(Vulnerability, 1).with(Hope, -1),
                "A2",
            ),
        ],
    ));
    graph.add_scene(Scene::new(
        "A2",
        SceneVariant::Story,
        "You think about what you want to say tonight.",
        vec![
            Choice::to(
                "I want to tell them something honest",
                ScoreDelta::new().with(Honesty, 1).with(Vulnerability, 1),
                "A3",
            ),
            Choice::to(
                "I want tonight to be perfect, no heavy talk",
                ScoreDelta::new().with(Honesty, -1).with(Compassion, 1),
                "A3",
            ),
        ],
    ));
    graph.add_scene(Scene::new(
        "A3",
        SceneVariant::Tension,
        "A memory surfaces: a moment recently when you felt unseen.",
        vec![
            Choice::to(
                "Bring it up tonight",
                ScoreDelta::new().with(Honesty, 1).with(Action, 1),
                "A4",
            ),
            Choice::to(
                "Keep it to yourself",
                ScoreDelta::new().with(Honesty, -1).with(Action, -1),
                "A4",
            ),
        ],
    ));
    graph.add_scene(Scene::new(
        "A4",
        SceneVariant::Hesitation,
        "Do you tell them the truth about what you've been needing lately, \
         even if it might start a difficult conversation?",
        vec![
            Choice::to(
                "Yes, honesty",
                ScoreDelta::new().with(Honesty, 2).with(Vulnerability, 1),
                "A5_Honesty",
            ),
            Choice::to(
                "No, protect the moment",
                ScoreDelta::new().with(Honesty, -2).with(Compassion, 1),
                "A5_Protect",
            ),
        ],
    ));
    graph.add_scene(Scene::new(
        "A5_Honesty",
        SceneVariant::Crossroad,
        "Do you let them see the part of you you're most afraid to show?",
        vec![
            Choice::ending(
                "Yes",
                ScoreDelta::new().with(Vulnerability, 2).with(SelfWorth, 1),
            ),
            Choice::ending(
                "Not yet",
                ScoreDelta::new().with(Vulnerability, -1).with(Action, -1),
            ),
        ],
    ));
    graph.add_scene(Scene::new(
        "A5_Protect",
        SceneVariant::Crossroad,
        "Do you let them see the part of you you're most afraid to show?",
        vec![
            Choice::ending(
                "Yes",
                ScoreDelta::new().with(Vulnerability, 2).with(Honesty, 1),
            ),
            Choice::ending(
                "Not yet",
                ScoreDelta::new().with(Vulnerability, -2).with(SelfWorth, -1),
            ),
        ],
    ));

    // Path B: relationship, no plans.
    graph.add_scene(Scene::new(
        "B1",
        SceneVariant::Story,
        "You check your phone. No message. No plan.",
        vec![
            Choice::to(
                "Tell yourself it's fine",
                ScoreDelta::new().with(Honesty, -1).with(SelfWorth, -1),
                "B2",
            ),
            Choice::to(
                "Feel a quiet ache",
                ScoreDelta::new().with(Vulnerability, 1).with(Honesty, 1),
                "B2",
            ),
        ],
    ));
    graph.add_scene(Scene::new(
        "B2",
        SceneVariant::Story,
        "You think of reasons: They're busy. They forgot. They don't care as much anymore.",
        vec![
            Choice::to(
                "Reach out first",
                ScoreDelta::new().with(Action, 2).with(Hope, 1),
                "B3",
            ),
            Choice::to(
                "Wait for them to text",
                ScoreDelta::new().with(Action, -1).with(SelfWorth, -1),
                "B3",
            ),
        ],
    ));
    graph.add_scene(Scene::new(
        "B3",
        SceneVariant::Tension,
        "You remember the last time you felt neglected.",
        vec![
            Choice::to(
                "Confront the feeling",
                ScoreDelta::new().with(Honesty, 1).with(Action, 1),
                "B4",
            ),
            Choice::to(
                "Push it down",
                ScoreDelta::new().with(Honesty, -1).with(Vulnerability, -1),
                "B4",
            ),
        ],
    ));
    graph.add_scene(Scene::new(
        "B4",
        SceneVariant::Hesitation,
        "Do you tell them you feel forgotten, or do you convince yourself it's not a big deal?",
        vec![
            Choice::to(
                "Tell them",
                ScoreDelta::new().with(Honesty, 2).with(Vulnerability, 1),
                "B5_Tell",
            ),
            Choice::to(
                "Stay silent",
                ScoreDelta::new().with(Honesty, -1).with(Vulnerability, -1),
                "B5_Silent",
            ),
        ],
    ));
    graph.add_scene(Scene::new(
        "B5_Tell",
        SceneVariant::Crossroad,
        "Do you stay because you're afraid of being alone, or because you still believe in this love?",
        vec![
            Choice::ending(
                "I believe in us",
                ScoreDelta::new().with(Hope, 2).with(Compassion, 1),
            ),
            Choice::ending(
                "I'm afraid of being alone",
                ScoreDelta::new().with(Hope, -2).with(SelfWorth, -1),
            ),
        ],
    ));
    graph.add_scene(Scene::new(
        "B5_Silent",
        SceneVariant::Crossroad,
        "Do you stay because you're afraid of being alone, or because you still believe in this love?",
        vec![
            Choice::ending(
                "I believe in us",
                ScoreDelta::new().with(Hope, 1).with(Compassion, 1),
            ),
            Choice::ending(
                "I'm afraid of being alone",
                ScoreDelta::new().with(Hope, -2).with(Vulnerability, -2),
            ),
        ],
    ));

    // Path C: single.
    graph.add_scene(Scene::new(
        "C1",
        SceneVariant::Story,
        "You wake up to silence. Maybe peaceful. Maybe heavy.",
        vec![
            Choice::to(
                "Enjoy the quiet",
                ScoreDelta::new().with(SelfWorth, 1).with(Compassion, 1),
                "C2",
            ),
            Choice::to(
                "Feel the loneliness",
                ScoreDelta::new().with(Hope, -1).with(Vulnerability, 1),
                "C2",
            ),
        ],
    ));
    graph.add_scene(Scene::new(
        "C2",
        SceneVariant::Story,
        "You see couples posting on social media.",
        vec![
            Choice::to(
                "Smile for them",
                ScoreDelta::new().with(Compassion, 2).with(Hope, 1),
                "C3",
            ),
            Choice::to(
                "Feel a sting",
                ScoreDelta::new().with(SelfWorth, -1).with(Hope, -1),
                "C3",
            ),
        ],
    ));
    graph.add_scene(Scene::new(
        "C3",
        SceneVariant::Tension,
        "You think of someone from your past.",
        vec![
            Choice::to(
                "Reach out",
                ScoreDelta::new().with(Action, 2).with(Vulnerability, 1),
                "C4",
            ),
            Choice::to(
                "Don't reopen old wounds",
                ScoreDelta::new().with(Action, -1).with(SelfWorth, 1),
                "C4",
            ),
        ],
    ));
    graph.add_scene(Scene::new(
        "C4",
        SceneVariant::Hesitation,
        "Do you admit to yourself that you're lonely, or do you bury the feeling under distractions?",
        vec![
            Choice::to(
                "Admit it",
                ScoreDelta::new().with(Honesty, 1).with(Vulnerability, 2),
                "C5_Admit",
            ),
            Choice::to(
                "Bury it",
                ScoreDelta::new().with(Honesty, -1).with(Action, -1),
                "C5_Bury",
            ),
        ],
    ));
    graph.add_scene(Scene::new(
        "C5_Admit",
        SceneVariant::Crossroad,
        "Do you believe you deserve love, or do you tell yourself it's safer not to hope?",
        vec![
            Choice::ending(
                "I deserve love",
                ScoreDelta::new().with(SelfWorth, 2).with(Hope, 2),
            ),
            Choice::ending(
                "It's safer not to hope",
                ScoreDelta::new().with(Hope, -2).with(SelfWorth, -1),
            ),
        ],
    ));
    graph.add_scene(Scene::new(
        "C5_Bury",
        SceneVariant::Crossroad,
        "Do you believe you deserve love, or do you tell yourself it's safer not to hope?",
        vec![
            Choice::ending(
                "I deserve love",
                ScoreDelta::new().with(SelfWorth, 1).with(Hope, 1),
            ),
            Choice::ending(
                "It's safer not to hope",
                ScoreDelta::new().with(Hope, -2).with(Vulnerability, -1),
            ),
        ],
    ));

    graph
}
