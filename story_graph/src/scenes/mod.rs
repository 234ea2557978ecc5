//! Scene definitions - the branching narrative graph.

mod content;

pub use content::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use scoring_engine::ScoreDelta;

/// Identifier of a scene within the story graph (e.g. `"A1"`,
/// `"B5_Tell"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneId(pub String);

impl SceneId {
    /// Create a scene id from its wire name.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for SceneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Narrative register of a scene, from establishing beats to the final
/// crossroad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneVariant {
    /// An establishing or transitional beat.
    Story,
    /// A beat that surfaces an uncomfortable memory.
    Tension,
    /// The beat where the user weighs a hard admission.
    Hesitation,
    /// The final beat; its choices end the journey.
    Crossroad,
}

/// Where a choice leads: another scene, or the end of the journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceTarget {
    /// Advance to the named scene.
    Scene(SceneId),
    /// Terminal choice: the accumulated scores go to the resolver.
    Ending,
}

/// A selectable option within a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    /// Score adjustment applied when this choice is taken.
    pub delta: ScoreDelta,
    pub target: ChoiceTarget,
}

impl Choice {
    /// A choice leading to another scene.
    pub fn to(label: impl Into<String>, delta: ScoreDelta, next: impl Into<SceneId>) -> Self {
        Self {
            label: label.into(),
            delta,
            target: ChoiceTarget::Scene(next.into()),
        }
    }

    /// A terminal choice that ends the journey.
    pub fn ending(label: impl Into<String>, delta: ScoreDelta) -> Self {
        Self {
            label: label.into(),
            delta,
            target: ChoiceTarget::Ending,
        }
    }
}

/// A single narrative beat with its choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    pub variant: SceneVariant,
    pub text: String,
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Create a scene with its choices.
    pub fn new(
        id: impl Into<SceneId>,
        variant: SceneVariant,
        text: impl Into<String>,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            id: id.into(),
            variant,
            text: text.into(),
            choices,
        }
    }
}

/// Structural problems in authored story content.
///
/// Caught fail-fast by [`StoryGraph::validate`] rather than surfacing
/// mid-journey.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("scene {0} has no choices")]
    NoChoices(SceneId),

    #[error("scene {scene} choice {index} points to unknown scene {target}")]
    DanglingTarget {
        scene: SceneId,
        index: usize,
        target: SceneId,
    },

    #[error("start scene {0} is not in the graph")]
    MissingStart(SceneId),
}

/// The full branching story: scenes indexed by id.
///
/// Immutable once built and validated; walking it never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoryGraph {
    scenes: HashMap<SceneId, Scene>,
}

impl StoryGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scene to the graph, returning its id.
    pub fn add_scene(&mut self, scene: Scene) -> SceneId {
        let id = scene.id.clone();
        self.scenes.insert(id.clone(), scene);
        id
    }

    /// Look up a scene by id.
    pub fn scene(&self, id: &SceneId) -> Option<&Scene> {
        self.scenes.get(id)
    }

    /// Number of scenes in the graph.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Fail-fast structural validation.
    ///
    /// Every start scene must exist, every scene must offer at least
    /// one choice, and every non-terminal choice must point at a scene
    /// that is in the graph.
    pub fn validate(&self, starts: &[SceneId]) -> Result<(), GraphError> {
        for start in starts {
            if !self.scenes.contains_key(start) {
                return Err(GraphError::MissingStart(start.clone()));
            }
        }

        for scene in self.scenes.values() {
            if scene.choices.is_empty() {
                return Err(GraphError::NoChoices(scene.id.clone()));
            }
            for (index, choice) in scene.choices.iter().enumerate() {
                if let ChoiceTarget::Scene(target) = &choice.target {
                    if !self.scenes.contains_key(target) {
                        return Err(GraphError::DanglingTarget {
                            scene: scene.id.clone(),
                            index,
                            target: target.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoring_engine::Dimension;

    fn delta(dimension: Dimension, value: i32) -> ScoreDelta {
        ScoreDelta::new().with(dimension, value)
    }

    #[test]
    fn test_add_and_look_up_scene() {
        let mut graph = StoryGraph::new();
        let id = graph.add_scene(Scene::new(
            "X1",
            SceneVariant::Story,
            "A beat",
            vec![Choice::ending("Done", ScoreDelta::new())],
        ));

        assert_eq!(graph.scene_count(), 1);
        assert_eq!(graph.scene(&id).map(|s| s.text.as_str()), Some("A beat"));
    }

    #[test]
    fn test_validate_catches_dangling_target() {
        let mut graph = StoryGraph::new();
        graph.add_scene(Scene::new(
            "X1",
            SceneVariant::Story,
            "A beat",
            vec![Choice::to("Onward", delta(Dimension::Hope, 1), "X2")],
        ));

        let result = graph.validate(&[SceneId::new("X1")]);
        assert!(matches!(result, Err(GraphError::DanglingTarget { .. })));
    }

    #[test]
    fn test_validate_catches_missing_start() {
        let graph = StoryGraph::new();
        let result = graph.validate(&[SceneId::new("X1")]);
        assert!(matches!(result, Err(GraphError::MissingStart(_))));
    }

    #[test]
    fn test_validate_catches_choiceless_scene() {
        let mut graph = StoryGraph::new();
        graph.add_scene(Scene::new("X1", SceneVariant::Story, "Dead end", vec![]));

        let result = graph.validate(&[]);
        assert!(matches!(result, Err(GraphError::NoChoices(_))));
    }

    #[test]
    fn test_scene_serde_round_trip() {
        let scene = Scene::new(
            "X1",
            SceneVariant::Crossroad,
            "The final question",
            vec![
                Choice::ending("Yes", delta(Dimension::Vulnerability, 2)),
                Choice::ending("Not yet", delta(Dimension::Action, -1)),
            ],
        );

        let json = serde_json::to_string(&scene).expect("scene should serialize");
        let back: Scene = serde_json::from_str(&json).expect("scene should parse");
        assert_eq!(back, scene);
    }
}
