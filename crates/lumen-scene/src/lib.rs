//! Declarative scene authoring for the tutorial layer.
//!
//! Everything here is plain data handed to the engine: which assets to
//! load, which objects to create, which uniforms each material starts with.
//! Loading, simulation and drawing happen engine-side.

pub mod assets;
pub mod default_scene;
pub mod keymap;
pub mod layer;
pub mod object;
pub mod particles;
pub mod scene;

pub use assets::{AssetManifest, SolidTexture, TextureDesc};
pub use default_scene::{build_default_scene, SceneBundle};
pub use keymap::LightingKeymap;
pub use layer::DefaultSceneLayer;
pub use object::{Collider, Component, GameObject, RenderComponent, Transform};
pub use particles::{EmitterKind, ParticleEmitter};
pub use scene::{GuiDefaults, Scene, Skybox};
