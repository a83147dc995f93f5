/// Paint order bucket. Later layers draw over earlier ones.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub enum Layer {
    /// Full-window surface fill.
    Background,
    /// Regular widgets.
    #[default]
    Content,
    /// Popovers and dropdowns opened by a control.
    Overlay,
    /// Modal dialogs; covers everything else.
    Modal,
}

impl Layer {
    pub const COUNT: usize = 4;

    /// All layers in paint order.
    pub const ALL: [Layer; Layer::COUNT] =
        [Layer::Background, Layer::Content, Layer::Overlay, Layer::Modal];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_sorted_and_indexed() {
        for (i, layer) in Layer::ALL.iter().enumerate() {
            assert_eq!(layer.index(), i);
        }
        assert!(Layer::ALL.windows(2).all(|w| w[0] < w[1]));
    }
}
