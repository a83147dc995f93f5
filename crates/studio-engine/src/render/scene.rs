use crate::scene::{DrawList, Layer};
use crate::text::FontSystem;

use super::{QuadRenderer, RenderCtx, RenderTarget, TextRenderer};

/// Draws a whole [`DrawList`]: for each layer, quads then text.
#[derive(Default)]
pub struct SceneRenderer {
    quads: QuadRenderer,
    text: TextRenderer,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        list: &DrawList,
        fonts: &FontSystem,
    ) {
        self.quads.prepare(ctx, list);
        self.text.prepare(ctx, list, fonts);

        for layer in Layer::ALL {
            self.quads.draw(target, layer);
            self.text.draw(target, layer);
        }
    }
}
