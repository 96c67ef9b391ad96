//! The tutorial scene: a world mesh, a sword, a ball and a pipe, each with
//! its own particle emitter, lit by one point light under a city skybox.

use lumen_renderer::{LightingToggles, Material, ShaderProgramDesc, UniformValue};

use crate::assets::{AssetManifest, TextureDesc};
use crate::object::{Collider, Component, GameObject};
use crate::particles::{spawn_interval, EmitterKind, ParticleEmitter};
use crate::scene::{GuiDefaults, Scene, Skybox};

/// Shader every lit material uses.
pub const LIT_SHADER: &str = "standard";

const VERTEX_DIR: &str = "shaders/vertex_shaders";
const FRAGMENT_DIR: &str = "shaders/fragment_shaders";

/// A freshly built scene plus everything needed to load it.
#[derive(Debug, Clone)]
pub struct SceneBundle {
    pub scene: Scene,
    pub manifest: AssetManifest,
    /// Materials whose lighting switches follow the active preset.
    pub lit_materials: Vec<String>,
}

/// Per-material settings of the lit shader.
struct LitMaterial {
    name: &'static str,
    light_direction: [f32; 3],
    specular_strength: f32,
    rim_color: [f32; 3],
    rim: f32,
    texture: &'static str,
    emissive_map: &'static str,
    emissive_color: [f32; 3],
}

const LIT_MATERIALS: [LitMaterial; 4] = [
    LitMaterial {
        name: "WorldMaterial",
        light_direction: [0.0, -1.0, -1.0],
        specular_strength: 0.0,
        rim_color: [0.3, 3.2, 6.5],
        rim: 1.0,
        texture: "world_texture",
        emissive_map: "world_emissive",
        emissive_color: [0.0, 1.0, 0.0],
    },
    LitMaterial {
        name: "SwordMaterial",
        light_direction: [0.0, 0.0, -1.0],
        specular_strength: 1.0,
        rim_color: [1.0, 1.0, 1.0],
        rim: 1.0,
        texture: "sword_texture",
        emissive_map: "sword_emissive",
        emissive_color: [0.0, 1.0, 1.0],
    },
    LitMaterial {
        name: "BallMaterial",
        light_direction: [0.0, 0.0, -1.0],
        specular_strength: 5.0,
        rim_color: [1.1, 1.7, 3.5],
        rim: 1.0,
        texture: "ball_texture",
        emissive_map: "ball_emissive",
        emissive_color: [1.0, 0.0, 0.0],
    },
    LitMaterial {
        name: "PipeMaterial",
        light_direction: [0.0, 0.0, -1.0],
        specular_strength: 2.0,
        rim_color: [1.5, 1.1, 0.8],
        rim: 0.7,
        texture: "pipe_texture",
        emissive_map: "pipe_emissive",
        emissive_color: [0.77, 0.0, 1.0],
    },
];

impl LitMaterial {
    fn build(&self, toggles: &LightingToggles) -> Material {
        let mut mat = Material::new(self.name, LIT_SHADER);
        mat.set("u_ALight.color", [1.0f32, 1.0, 1.0]);
        mat.set("u_ALight.ambientStrength", 1.0f32);
        mat.set("u_DLight.color", [1.0f32, 1.0, 1.0]);
        mat.set("u_DLight.direction", self.light_direction);
        mat.set("u_DLight.factor", 1.0f32);
        mat.set("u_SLight.specularStrength", self.specular_strength);
        mat.set("u_Custom.rimColor", self.rim_color);
        mat.set("u_Custom.rim", self.rim);
        mat.set("toggleColorCorrect", false);
        mat.set("emissiveMap", UniformValue::Texture(self.emissive_map.into()));
        mat.set("emissiveColor", self.emissive_color);
        mat.set("emissiveIntensity", 1.0f32);
        mat.set("texColor", UniformValue::Texture(self.texture.into()));
        toggles.apply_to(&mut mat);
        mat
    }
}

/// Build the tutorial scene with lit materials set to `toggles`.
pub fn build_default_scene(toggles: &LightingToggles) -> SceneBundle {
    let manifest = default_manifest();

    let mut materials: Vec<Material> = LIT_MATERIALS.iter().map(|m| m.build(toggles)).collect();
    let lit_materials = materials.iter().map(|m| m.name.clone()).collect();

    let mut test = Material::new("TestMaterial", "test");
    test.set("u_Custom.rimColor", [1.0f32, 1.0, 1.0]);
    test.set("u_Custom.rim", 1.0f32);
    test.set("texColor", UniformValue::Texture("ball_texture".into()));
    materials.push(test);

    let camera = GameObject::new("Main Camera")
        .with_position([-7.275, 0.267, 5.262])
        .looking_at([0.0, 0.0, 5.0])
        .with_component(Component::CameraControl);

    let mut scene = Scene::new(camera);
    scene.skybox = Some(Skybox {
        cubemap: "city_scape".into(),
        shader: "skybox".into(),
        // Cubemap faces are authored y-up; the world is z-up.
        rotation_axis: [1.0, 0.0, 0.0],
        rotation_degrees: 90.0,
    });
    scene.color_lut = Some("toon".into());
    scene.gui = GuiDefaults::default();
    scene.materials = materials;
    scene.objects = default_objects();

    SceneBundle {
        scene,
        manifest,
        lit_materials,
    }
}

fn program(debug_name: &str, vertex: &str, fragment: &str) -> ShaderProgramDesc {
    ShaderProgramDesc::new(
        debug_name,
        format!("{VERTEX_DIR}/{vertex}"),
        format!("{FRAGMENT_DIR}/{fragment}"),
    )
}

fn default_manifest() -> AssetManifest {
    let mut m = AssetManifest::new();

    m.add_shader(
        "deferred_forward",
        program("Deferred - GBuffer Generation", "basic.glsl", "deferred_forward.glsl"),
    );
    m.add_shader(
        LIT_SHADER,
        program("Standard - GBuffer Generation", "basic.glsl", "Standard.glsl"),
    );
    m.add_shader(
        "test",
        program("Test - GBuffer Generation", "basic.glsl", "Test.glsl"),
    );
    m.add_shader(
        "pipe",
        program("Pipe - GBuffer Generation", "basic.glsl", "PipeShader.glsl"),
    );
    m.add_shader(
        "foliage",
        program("Foliage", "foliage.glsl", "deferred_forward.glsl"),
    );
    m.add_shader(
        "multitexture",
        program("Multitexturing", "vert_multitextured.glsl", "frag_multitextured.glsl"),
    );
    m.add_shader(
        "displacement",
        program("Displacement Mapping", "displacement_mapping.glsl", "deferred_forward.glsl"),
    );
    m.add_shader(
        "cel",
        program("Cel Shading", "displacement_mapping.glsl", "cel_shader.glsl"),
    );
    m.add_shader(
        "skybox",
        program("Skybox", "skybox_vert.glsl", "skybox_frag.glsl"),
    );

    m.add_mesh("world", "World.obj");
    m.add_mesh("sword", "Sword.obj");
    m.add_mesh("ball", "SliceBall.obj");
    m.add_mesh("pipe", "Pipe.obj");

    m.add_texture("box_diffuse", TextureDesc::new("textures/box-diffuse.png"));
    m.add_texture("box_specular", TextureDesc::new("textures/box-specular.png"));
    m.add_texture("leaves", TextureDesc::new("textures/leaves.png").nearest());
    for (prefix, file) in [
        ("world", "WorldTexture"),
        ("sword", "SwordTexture_V2"),
        ("ball", "BallTexture"),
        ("pipe", "PipeTexture"),
    ] {
        m.add_texture(
            &format!("{prefix}_texture"),
            TextureDesc::new(format!("textures/{file}.png")),
        );
    }
    for (prefix, file) in [
        ("world", "WorldTexture_EMap"),
        ("sword", "SwordTexture_EMap"),
        ("ball", "BallTexture_EMap"),
        ("pipe", "PipeTexture_EMap"),
    ] {
        m.add_texture(
            &format!("{prefix}_emissive"),
            TextureDesc::new(format!("textures/{file}.png")),
        );
    }
    m.add_texture("ui_sprite", TextureDesc::new("textures/ui-sprite.png"));

    m.add_solid_texture("normal_map_default", [0.5, 0.5, 1.0]);
    m.add_solid_texture("solid_black", [0.0, 0.0, 0.0]);
    m.add_solid_texture("solid_grey", [0.5, 0.5, 0.5]);
    m.add_solid_texture("solid_white", [1.0, 1.0, 1.0]);

    m.add_lut("toon", TextureDesc::new("luts/toon-1D.png").clamped());
    m.add_cubemap("city_scape", "cubemaps/CityScape/CityScape.png");

    m
}

fn particles(gravity: [f32; 3], emitter: ParticleEmitter) -> Component {
    Component::ParticleSystem {
        gravity,
        emitters: vec![emitter],
    }
}

fn default_objects() -> Vec<GameObject> {
    let thirty_degrees = 30f32.to_radians();

    let light = GameObject::new("Light")
        .with_position([30.0, 0.0, 30.0])
        .with_component(Component::Light {
            color: [1.0, 1.0, 1.0],
            radius: 20.0,
            intensity: 18.0,
        });

    let world = GameObject::new("World")
        .with_rotation([90.0, 0.0, 180.0])
        .with_uniform_scale(0.8)
        .with_render("world", "WorldMaterial");

    let sword = GameObject::new("Sword")
        .with_position([-3.05, -2.75, 2.83])
        .with_render("sword", "SwordMaterial")
        .with_child(
            GameObject::new("Particles")
                .with_position([0.0, 0.0, 4.0])
                .with_component(particles(
                    [0.0, 0.0, -9.81],
                    ParticleEmitter {
                        position: [0.0; 3],
                        color: [0.0, 1.0, 1.0, 1.0],
                        lifetime: 1.0,
                        velocity: [0.0; 3],
                        kind: EmitterKind::Box {
                            timer: spawn_interval(1.0),
                            half_extents: [0.3, 0.1, 3.0],
                            size_range: [0.2, 0.2],
                            life_range: [5.0, 5.0],
                        },
                    },
                )),
        );

    let ball = GameObject::new("Ball")
        .with_position([0.0, 0.0, 5.0])
        .with_rotation([90.0, 0.0, 0.0])
        .with_render("ball", "BallMaterial")
        .with_child(GameObject::new("Particles").with_component(particles(
            [0.0, 0.0, -9.81],
            ParticleEmitter {
                position: [0.0, 0.0, -1.0],
                color: [1.0, 0.0, 0.0, 1.0],
                lifetime: 1.0,
                velocity: [0.0; 3],
                kind: EmitterKind::Stream {
                    timer: spawn_interval(0.5),
                    angle: thirty_degrees,
                    size_range: [0.15, 0.2],
                    life_range: [5.0, 5.0],
                },
            },
        )));

    let pipe = GameObject::new("Pipe")
        .with_position([0.0, 0.0, 1.18])
        .with_rotation([90.0, 0.0, -92.0])
        .with_render("pipe", "PipeMaterial")
        .with_child(GameObject::new("Particles").with_component(particles(
            [0.0; 3],
            ParticleEmitter {
                position: [0.0; 3],
                color: [0.7, 0.0, 1.0, 1.0],
                lifetime: 1.0,
                velocity: [0.0, 30.0, 0.0],
                kind: EmitterKind::Cone {
                    timer: spawn_interval(1000.0),
                    angle: thirty_degrees,
                    size_range: [0.2, 0.2],
                    life_range: [0.0, 0.2],
                },
            },
        )));

    let trigger = GameObject::new("Trigger").with_component(Component::TriggerVolume {
        colliders: vec![Collider::Cylinder {
            size: [3.0, 3.0, 1.0],
            position: [0.0, 0.0, 0.5],
        }],
        enter_behaviour: true,
    });

    vec![
        GameObject::new("Lights"),
        light,
        world,
        sword,
        ball,
        pipe,
        GameObject::new("Demo Parent"),
        trigger,
    ]
}

// =============================================================================
// Tests
// =============================================================================
