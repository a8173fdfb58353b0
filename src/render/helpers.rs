use glam::Vec3;

/// A-Frame `position`/`scale` attribute text: `"x y z"`.
pub fn vec3_attr(v: Vec3) -> String {
    format!("{} {} {}", v.x, v.y, v.z)
}

/// A-Frame animation component value.
pub fn animation_attr(property: &str, to: &str, dur_ms: u32, delay_ms: u32, easing: &str) -> String {
    let mut out = format!("property: {property}; to: {to}; dur: {dur_ms}; easing: {easing}");
    if delay_ms > 0 {
        out.push_str(&format!("; delay: {delay_ms}"));
    }
    out
}

/// Looping linear drift, used for clouds.
pub fn drift_attr(to: Vec3, dur_ms: u32) -> String {
    format!(
        "property: position; to: {}; dur: {dur_ms}; loop: true; easing: linear",
        vec3_attr(to)
    )
}

/// Characters per line on a stone; inscriptions wrap wider than the placeholder.
#[inline]
pub fn text_wrap_count(inscribed: bool, placeholder: u32, inscribed_wrap: u32) -> u32 {
    if inscribed {
        inscribed_wrap
    } else {
        placeholder
    }
}

/// Layering for 2D tombstones: lower on screen means closer, so drawn on top.
#[inline]
pub fn depth_z_index(y_percent: f32) -> i32 {
    (y_percent * 10.0).round() as i32
}

/// Fade far-away 2D stones toward the sky.
#[inline]
pub fn haze_brightness(scale: f32) -> f32 {
    0.7 + 0.3 * scale.clamp(0.0, 1.0)
}
