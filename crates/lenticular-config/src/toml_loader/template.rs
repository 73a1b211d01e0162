//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Lenticular Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[material]
# divisions = 10           # 1-plane.max_divisions, strip pairs per slice
# ridge_height = 0.05      # 0.0-0.2
# edge_smoothness = 0.1    # 0.0 (hard edge) - 1.0 (linear ramp)

[carousel]
# slice_count = 3          # 1-16, 1 disables dragging
# radius = 1.2             # 0.1-10.0
# sensitivity = 0.008      # radians per pixel of drag
# damping = 8.0            # snap convergence rate
# snap_epsilon = 0.001     # radians
# rotation_override = 0.0  # fixed ring angle in radians
# auto_rotate = false
# auto_rotate_speed = 0.3  # radians per second
# draggable = true

[parallax]
# tilt_gain = 2.0          # 0.0-10.0
# pointer_clamp = 0.02     # 0.0-0.1

[plane]
# width = 0.5604           # 51/91
# height = 1.0
# max_divisions = 100      # mesh is built with 2 * max_divisions columns

[camera]
# position = [0.0, 0.0, 3.0]

[textures]
active = "nostalgia"

[[textures.sets]]
key = "nostalgia"
texture_a = "textures/nostalgia/nostalgia-train.mp4"
texture_b = "textures/nostalgia/nostalgia-woman.mp4"

[[textures.sets]]
key = "vhs"
texture_a = "textures/vhs/vhs-train.mp4"
texture_b = "textures/vhs/vhs-running.mp4"

[[textures.sets]]
key = "water"
texture_a = "textures/water/water-closeup.mp4"
texture_b = "textures/water/water-shirt.mp4"

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
}
