use crate::constants::{CHIME_DURATION_SEC, CHIME_HZ, CHIME_VELOCITY};
use web_sys as web;

/// Lazily created audio context; browsers only allow it after a user gesture,
/// and placing a stone always is one.
#[derive(Default)]
pub struct Chime {
    ctx: Option<web::AudioContext>,
}

impl Chime {
    fn context(&mut self) -> Option<&web::AudioContext> {
        if self.ctx.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => self.ctx = Some(ctx),
                Err(e) => {
                    log::warn!("[audio] AudioContext unavailable: {:?}", e);
                    return None;
                }
            }
        }
        self.ctx.as_ref()
    }

    /// Soft bell for a newly placed stone; smaller (farther) stones ring higher.
    pub fn ring(&mut self, scale: f32) {
        let Some(ctx) = self.context() else {
            return;
        };
        _ = ctx.resume();
        let freq = CHIME_HZ * (1.5 - 0.5 * scale.clamp(0.0, 1.0));
        trigger_one_shot(ctx, freq, CHIME_VELOCITY, CHIME_DURATION_SEC);
    }
}

fn trigger_one_shot(audio_ctx: &web::AudioContext, frequency_hz: f32, velocity: f32, duration_sec: f64) {
    if let Ok(src) = web::OscillatorNode::new(audio_ctx) {
        src.set_type(web::OscillatorType::Sine);
        src.frequency().set_value(frequency_hz);
        if let Ok(g) = web::GainNode::new(audio_ctx) {
            g.gain().set_value(0.0);
            let now = audio_ctx.current_time();
            let t0 = now + 0.005;
            _ = g.gain().linear_ramp_to_value_at_time(velocity, t0 + 0.02);
            _ = g.gain().linear_ramp_to_value_at_time(0.0, t0 + duration_sec);
            _ = src.connect_with_audio_node(&g);
            _ = g.connect_with_audio_node(&audio_ctx.destination());
            _ = src.start_with_when(t0);
            _ = src.stop_with_when(t0 + duration_sec + 0.05);
        }
    }
}
