use crate::constants::{CUE_MASTER_GAIN, NOISE_BUFFER_SEC, TONE_ATTACK_SEC, TONE_PEAK_GAIN};
use neuro_core::constants::{CUE_RAMP_SEC, NOISE_FILTER_HZ, NOISE_VOLUME_DB};
use neuro_core::{db_to_gain, CueEvent, ToneCue};
use web_sys as web;

fn js_err(what: &str) -> impl Fn(wasm_bindgen::JsValue) -> anyhow::Error + '_ {
    move |e| anyhow::anyhow!("{what}: {:?}", e)
}

fn create_gain(ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(ctx).map_err(js_err(label))?;
    g.gain().set_value(value);
    Ok(g)
}

/// Pink noise via Paul Kellet's economy filter over xorshift white noise.
fn pink_noise(len: usize, mut seed: u32) -> Vec<f32> {
    let (mut b0, mut b1, mut b2) = (0.0f32, 0.0f32, 0.0f32);
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let white = (seed as f32 / u32::MAX as f32) * 2.0 - 1.0;
        b0 = 0.99765 * b0 + white * 0.0990460;
        b1 = 0.96300 * b1 + white * 0.2965164;
        b2 = 0.57000 * b2 + white * 1.0526913;
        out.push((b0 + b1 + b2 + white * 0.1848) * 0.2);
    }
    out
}

/// WebAudio side of the cue tracker: one-shot tones plus a looping pink
/// noise bed behind a lowpass filter.
///
/// ```text
/// osc -> env ---------------------------> master -> destination
/// noise(loop) -> lowpass -> noise_gain ->
/// ```
pub struct CueAudio {
    ctx: web::AudioContext,
    master: web::GainNode,
    noise_filter: web::BiquadFilterNode,
    noise_gain: web::GainNode,
    _noise_source: web::AudioBufferSourceNode,
}

impl CueAudio {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(js_err("AudioContext"))?;
        let master = create_gain(&ctx, CUE_MASTER_GAIN, "master gain")?;
        let _ = master.connect_with_audio_node(&ctx.destination());

        let noise_filter = web::BiquadFilterNode::new(&ctx).map_err(js_err("BiquadFilterNode"))?;
        noise_filter.set_type(web::BiquadFilterType::Lowpass);
        noise_filter.frequency().set_value(NOISE_FILTER_HZ);
        let noise_gain = create_gain(&ctx, 0.0, "noise gain")?;

        let sr = ctx.sample_rate();
        let len = (sr * NOISE_BUFFER_SEC) as u32;
        let buffer = ctx
            .create_buffer(1, len, sr)
            .map_err(js_err("noise buffer"))?;
        let mut samples = pink_noise(len as usize, 0x9E37_79B9);
        buffer
            .copy_to_channel(&mut samples, 0)
            .map_err(js_err("noise buffer fill"))?;
        let source = ctx
            .create_buffer_source()
            .map_err(js_err("noise source"))?;
        source.set_buffer(Some(&buffer));
        source.set_loop(true);

        let _ = source.connect_with_audio_node(&noise_filter);
        let _ = noise_filter.connect_with_audio_node(&noise_gain);
        let _ = noise_gain.connect_with_audio_node(&master);
        source.start().map_err(js_err("noise start"))?;

        log::info!("[audio] cue graph ready ({} Hz)", sr);
        Ok(Self {
            ctx,
            master,
            noise_filter,
            noise_gain,
            _noise_source: source,
        })
    }

    /// Browsers keep the context suspended until a user gesture.
    pub fn resume(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            let _ = self.ctx.resume();
        }
    }

    pub fn apply(&self, event: &CueEvent) {
        match event {
            CueEvent::Tone(cue) => {
                self.play_tone(cue);
                self.ramp_filter(cue.filter_hz);
            }
            CueEvent::NoiseOn => self.ramp_noise(db_to_gain(NOISE_VOLUME_DB)),
            CueEvent::NoiseOff => self.ramp_noise(0.0),
        }
    }

    fn play_tone(&self, cue: &ToneCue) {
        let Ok(osc) = web::OscillatorNode::new(&self.ctx) else {
            return;
        };
        let Ok(env) = web::GainNode::new(&self.ctx) else {
            return;
        };
        osc.set_type(web::OscillatorType::Triangle);
        osc.frequency().set_value(cue.frequency_hz);
        env.gain().set_value(0.0);
        let t0 = self.ctx.current_time();
        let t_end = t0 + cue.duration_sec as f64;
        let _ = env
            .gain()
            .linear_ramp_to_value_at_time(TONE_PEAK_GAIN, t0 + TONE_ATTACK_SEC);
        let _ = env.gain().linear_ramp_to_value_at_time(0.0, t_end);
        let _ = osc.connect_with_audio_node(&env);
        let _ = env.connect_with_audio_node(&self.master);
        let _ = osc.start_with_when(t0);
        let _ = osc.stop_with_when(t_end + 0.02);
    }

    fn ramp_filter(&self, hz: f32) {
        let f = self.noise_filter.frequency();
        let now = self.ctx.current_time();
        let _ = f.cancel_scheduled_values(now);
        let _ = f.set_value_at_time(f.value(), now);
        let _ = f.linear_ramp_to_value_at_time(hz, now + CUE_RAMP_SEC);
    }

    fn ramp_noise(&self, target: f32) {
        let g = self.noise_gain.gain();
        let now = self.ctx.current_time();
        let _ = g.cancel_scheduled_values(now);
        let _ = g.set_value_at_time(g.value(), now);
        let _ = g.linear_ramp_to_value_at_time(target, now + CUE_RAMP_SEC);
        log::debug!("[audio] noise bed -> {target:.2}");
    }
}
