//! Open/closed container for any block of card content.

/// Presentation style of a panel. Has no effect on behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelVariant {
    #[default]
    Standard,
    /// Highlighted, used for the synthetic introduction
    Emphasis,
    /// Technical details and diagrams
    Technical,
}

/// A titled panel that shows its content only while open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosurePanel<T> {
    title: String,
    content: T,
    open: bool,
    variant: PanelVariant,
}

impl<T> DisclosurePanel<T> {
    pub fn new(title: impl Into<String>, content: T, default_open: bool, variant: PanelVariant) -> Self {
        Self {
            title: title.into(),
            content,
            open: default_open,
            variant,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn variant(&self) -> PanelVariant {
        self.variant
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut T {
        &mut self.content
    }

    /// Content while open, `None` while closed
    pub fn visible_content(&self) -> Option<&T> {
        self.open.then_some(&self.content)
    }
}
