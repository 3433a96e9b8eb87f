//! View module - softbuffer/fontdue rendering
//!
//! Contains the Renderer struct and the frame/text drawing primitives. The
//! scene is redrawn in full every frame; slot rectangles come from the
//! shared `layout` module so pixels always match hit-testing.

pub mod frame;
pub mod scene;

pub use frame::{Frame, TextPainter};

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::path::Path;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use fontdue::{Font, FontSettings, Metrics};
use softbuffer::Surface;
use winit::window::Window;

use companion::model::AppModel;

/// Glyph cache key: (character, font_size as bits)
pub type GlyphCacheKey = (char, u32);
pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Well-known monospace font locations, tried in order
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansMono-Regular.ttf",
    "/System/Library/Fonts/Monaco.ttf",
    "/Library/Fonts/Andale Mono.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
];

/// Load the first usable system font
fn load_font() -> Result<Font> {
    for candidate in FONT_CANDIDATES {
        let path = Path::new(candidate);
        if !path.exists() {
            continue;
        }
        match std::fs::read(path) {
            Ok(bytes) => match Font::from_bytes(bytes, FontSettings::default()) {
                Ok(font) => {
                    tracing::debug!("Loaded font from {}", candidate);
                    return Ok(font);
                }
                Err(e) => tracing::warn!("Failed to parse font {}: {}", candidate, e),
            },
            Err(e) => tracing::warn!("Failed to read font {}: {}", candidate, e),
        }
    }
    Err(anyhow!(
        "no usable monospace font found; install DejaVu Sans Mono or equivalent"
    ))
}

pub struct Renderer {
    font: Font,
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
    font_size: f32,
    glyph_cache: GlyphCache,
    char_width: f32,
}

impl Renderer {
    /// Create a new renderer for the given window
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let (width, height) = {
            let size = window.inner_size();
            (size.width, size.height)
        };

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(
                NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
                NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
            )
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;

        let font = load_font()?;
        let font_size = 14.0;
        let (metrics, _) = font.rasterize('m', font_size);
        let char_width = metrics.advance_width;

        Ok(Self {
            font,
            surface,
            width,
            height,
            font_size,
            glyph_cache: GlyphCache::new(),
            char_width,
        })
    }

    /// Resize the backing surface after a window resize
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        self.surface
            .resize(
                NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
                NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
            )
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;
        Ok(())
    }

    /// Render the full scene and present it
    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let width = self.width as usize;
        let height = self.height as usize;

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to acquire buffer: {}", e))?;

        {
            let mut frame = Frame::new(&mut buffer, width, height);
            let mut text = TextPainter::new(
                &self.font,
                &mut self.glyph_cache,
                self.font_size,
                self.char_width,
            );
            scene::draw(&mut frame, &mut text, model);
        }

        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}
