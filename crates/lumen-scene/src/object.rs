//! Scene objects and the components attached to them.

use serde::{Deserialize, Serialize};

use crate::particles::ParticleEmitter;

/// Position, Euler rotation in degrees, and scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

/// Mesh and material drawn for an object, both by asset name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderComponent {
    pub mesh: String,
    pub material: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Collider {
    Cylinder { size: [f32; 3], position: [f32; 3] },
    Box { half_extents: [f32; 3], position: [f32; 3] },
    Sphere { radius: f32, position: [f32; 3] },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Component {
    Light {
        color: [f32; 3],
        radius: f32,
        intensity: f32,
    },
    ParticleSystem {
        gravity: [f32; 3],
        emitters: Vec<ParticleEmitter>,
    },
    TriggerVolume {
        colliders: Vec<Collider>,
        /// Attach the enter/leave logging behaviour.
        #[serde(default)]
        enter_behaviour: bool,
    },
    /// Free-fly keyboard and mouse camera control.
    CameraControl,
}

/// A node in the scene graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameObject {
    pub name: String,
    #[serde(default)]
    pub transform: Transform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub look_at: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<RenderComponent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<GameObject>,
}

impl GameObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::default(),
            look_at: None,
            render: None,
            components: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_position(mut self, position: [f32; 3]) -> Self {
        self.transform.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: [f32; 3]) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.transform.scale = [scale; 3];
        self
    }

    pub fn looking_at(mut self, target: [f32; 3]) -> Self {
        self.look_at = Some(target);
        self
    }

    pub fn with_render(mut self, mesh: &str, material: &str) -> Self {
        self.render = Some(RenderComponent {
            mesh: mesh.to_string(),
            material: material.to_string(),
        });
        self
    }

    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    pub fn with_child(mut self, child: GameObject) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first search of this object and its descendants.
    pub fn find(&self, name: &str) -> Option<&GameObject> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    /// This object plus all descendants.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(GameObject::count).sum::<usize>()
    }

    /// Visit this object and every descendant, parents first.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a GameObject)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GameObject {
        GameObject::new("Sword")
            .with_position([-3.05, -2.75, 2.83])
            .with_render("sword", "SwordMaterial")
            .with_child(GameObject::new("Particles").with_position([0.0, 0.0, 4.0]))
    }

    #[test]
    fn transform_defaults_to_identity() {
        let t = Transform::default();
        assert_eq!(t.position, [0.0; 3]);
        assert_eq!(t.rotation, [0.0; 3]);
        assert_eq!(t.scale, [1.0; 3]);
    }

    #[test]
    fn builder_sets_fields() {
        let obj = GameObject::new("World")
            .with_rotation([90.0, 0.0, 180.0])
            .with_uniform_scale(0.8);
        assert_eq!(obj.transform.rotation, [90.0, 0.0, 180.0]);
        assert_eq!(obj.transform.scale, [0.8; 3]);
        assert!(obj.render.is_none());
    }

    #[test]
    fn find_searches_children() {
        let obj = sample();
        assert_eq!(obj.find("Sword").map(|o| o.name.as_str()), Some("Sword"));
        let particles = obj.find("Particles").unwrap();
        assert_eq!(particles.transform.position, [0.0, 0.0, 4.0]);
        assert!(obj.find("Ball").is_none());
    }

    #[test]
    fn count_includes_descendants() {
        assert_eq!(sample().count(), 2);
        assert_eq!(GameObject::new("Empty").count(), 1);
    }

    #[test]
    fn walk_visits_parents_first() {
        let mut names = Vec::new();
        sample().walk(&mut |o| names.push(o.name.clone()));
        assert_eq!(names, vec!["Sword", "Particles"]);
    }

    #[test]
    fn empty_fields_are_omitted_from_json() {
        let value = serde_json::to_value(GameObject::new("Demo Parent")).unwrap();
        assert!(value.get("render").is_none());
        assert!(value.get("children").is_none());
        assert!(value.get("look_at").is_none());

        let back: GameObject = serde_json::from_value(value).unwrap();
        assert_eq!(back, GameObject::new("Demo Parent"));
    }

    #[test]
    fn components_are_tagged() {
        let light = Component::Light {
            color: [1.0; 3],
            radius: 20.0,
            intensity: 18.0,
        };
        let value = serde_json::to_value(&light).unwrap();
        assert_eq!(value["type"], "Light");
        assert_eq!(value["radius"], 20.0);

        let value = serde_json::to_value(Component::CameraControl).unwrap();
        assert_eq!(value["type"], "CameraControl");
    }
}
