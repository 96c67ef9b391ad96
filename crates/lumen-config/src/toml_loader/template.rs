//! Commented default `config.toml`.

/// Generate the default TOML config content with comments.
pub(super) fn default_config_toml() -> &'static str {
    r##"# Lumen Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Week 6 Tutorial"
# width = 1600           # 1-16384
# height = 900           # 1-16384

[effects]
# enabled = true

[effects.bloom]
# enabled = true
# document = "bloom.json"
# normalize_on_load = false

[lighting]
# ambient = true
# diffuse = true
# specular = true
# custom = false         # rim light
# emissive = true
# texture = true

[keybinds]
# off = "1"
# ambient_only = "2"
# specular_only = "3"
# ambient_specular = "4"
# ambient_specular_emissive = "5"
# all_but_custom = "6"
# all = "7"
# untextured = "T"
# textured = "Y"

[scene]
# load_from_file = false
# path = "scene.json"
# manifest = "scene-manifest.json"
# save_on_build = true

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
}
