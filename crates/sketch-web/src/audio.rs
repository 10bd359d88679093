use fnv::FnvHashMap;
use sketch_core::assets::{load_with_fallback, path_variants};
use sketch_core::audio::VoiceGeneration;
use sketch_core::{AudioCue, ClipId};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// One-shot completions, tagged with the voice generation that played them,
/// waiting for the frame driver.
pub type EndedQueue = Rc<RefCell<Vec<(ClipId, u64)>>>;

struct ClipSlot {
    buffer: web::AudioBuffer,
    gain: web::GainNode,
    source: Option<web::AudioBufferSourceNode>,
    on_ended: Option<Closure<dyn FnMut()>>,
    voice: VoiceGeneration,
}

impl ClipSlot {
    fn detach(&mut self) {
        if let Some(src) = self.source.take() {
            src.set_onended(None);
            let _ = src.stop();
            let _ = src.disconnect();
        }
        self.on_ended = None;
        self.voice.stop();
    }
}

/// Decoded clips and the voices currently playing them. Each clip has a
/// single voice: cueing a clip again restarts it.
pub struct AudioBank {
    ctx: web::AudioContext,
    clips: FnvHashMap<ClipId, ClipSlot>,
    ended: EndedQueue,
}

fn create_gain(ctx: &web::AudioContext, label: &str) -> anyhow::Result<web::GainNode> {
    let gain =
        web::GainNode::new(ctx).map_err(|e| anyhow::anyhow!("{} GainNode error: {:?}", label, e))?;
    gain.connect_with_audio_node(&ctx.destination())
        .map_err(|e| anyhow::anyhow!("{} connect error: {:?}", label, e))?;
    Ok(gain)
}

impl AudioBank {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            ctx,
            clips: FnvHashMap::default(),
            ended: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub fn context(&self) -> &web::AudioContext {
        &self.ctx
    }

    pub fn ended_queue(&self) -> EndedQueue {
        self.ended.clone()
    }

    pub fn insert(&mut self, clip: ClipId, buffer: web::AudioBuffer) -> anyhow::Result<()> {
        let gain = create_gain(&self.ctx, clip)?;
        if let Some(mut old) = self.clips.insert(
            clip,
            ClipSlot {
                buffer,
                gain,
                source: None,
                on_ended: None,
                voice: VoiceGeneration::default(),
            },
        ) {
            old.detach();
        }
        Ok(())
    }

    pub fn is_playing(&self, clip: ClipId) -> bool {
        self.clips
            .get(clip)
            .map(|s| s.voice.is_playing())
            .unwrap_or(false)
    }

    pub fn execute(&mut self, cue: &AudioCue) {
        let result = match *cue {
            AudioCue::ResumeOutput => self.resume(),
            AudioCue::Play { clip, volume } => self.start(clip, volume, false),
            AudioCue::Loop { clip, volume } => self.start(clip, volume, true),
            AudioCue::LoopIfIdle { clip, volume } => {
                if self.is_playing(clip) {
                    Ok(())
                } else {
                    self.start(clip, volume, true)
                }
            }
            AudioCue::Stop(clip) => {
                self.stop(clip);
                Ok(())
            }
        };
        if let Err(e) = result {
            log::warn!("[audio] {:?} failed: {:?}", cue, e);
        }
    }

    /// A one-shot finished by itself. Returns false for completions of a
    /// voice that was already stopped or restarted.
    pub fn mark_ended(&mut self, clip: ClipId, generation: u64) -> bool {
        let Some(slot) = self.clips.get_mut(clip) else {
            return false;
        };
        if !slot.voice.finish(generation) {
            log::debug!("[audio] stale completion of {} ignored", clip);
            return false;
        }
        slot.source = None;
        slot.on_ended = None;
        true
    }

    fn resume(&self) -> Result<(), JsValue> {
        if self.ctx.state() != web::AudioContextState::Running {
            let _ = self.ctx.resume()?;
        }
        Ok(())
    }

    fn start(&mut self, clip: ClipId, volume: f32, looped: bool) -> Result<(), JsValue> {
        let Some(slot) = self.clips.get_mut(clip) else {
            log::debug!("[audio] {} not loaded; skipping", clip);
            return Ok(());
        };
        slot.detach();

        let src = self.ctx.create_buffer_source()?;
        src.set_buffer(Some(&slot.buffer));
        src.set_loop(looped);
        slot.gain.gain().set_value(volume);
        src.connect_with_audio_node(&slot.gain)?;

        let generation = slot.voice.begin();
        if !looped {
            let ended = self.ended.clone();
            let on_ended = Closure::wrap(Box::new(move || {
                ended.borrow_mut().push((clip, generation));
            }) as Box<dyn FnMut()>);
            src.set_onended(Some(on_ended.as_ref().unchecked_ref()));
            slot.on_ended = Some(on_ended);
        }
        if let Err(e) = src.start() {
            slot.voice.stop();
            return Err(e);
        }
        slot.source = Some(src);
        Ok(())
    }

    fn stop(&mut self, clip: ClipId) {
        if let Some(slot) = self.clips.get_mut(clip) {
            slot.detach();
        }
    }
}

async fn fetch_and_decode(ctx: &web::AudioContext, url: &str) -> Result<web::AudioBuffer, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await?
        .dyn_into()?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", resp.status())));
    }
    let bytes: js_sys::ArrayBuffer = JsFuture::from(resp.array_buffer()?).await?.dyn_into()?;
    JsFuture::from(ctx.decode_audio_data(&bytes)?)
        .await?
        .dyn_into()
}

/// Fetch and decode every clip, probing the root and `assets/` spellings of
/// each name. Clips that cannot be loaded are left out of the bank.
pub async fn load_clips(bank: &Rc<RefCell<AudioBank>>, clips: &'static [ClipId]) -> usize {
    let ctx = bank.borrow().context().clone();
    let mut loaded = 0;
    for &clip in clips {
        let paths = path_variants(clip);
        let result = load_with_fallback(clip, &paths, |url| {
            let ctx = ctx.clone();
            async move { fetch_and_decode(&ctx, &url).await }
        })
        .await;
        match result {
            Ok(found) => match bank.borrow_mut().insert(clip, found.value) {
                Ok(()) => loaded += 1,
                Err(e) => log::warn!("[audio] {}: {:?}", clip, e),
            },
            Err(e) => log::warn!("[audio] {}", e),
        }
    }
    log::info!("[audio] {}/{} clips ready", loaded, clips.len());
    loaded
}
