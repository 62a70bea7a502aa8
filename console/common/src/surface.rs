use crate::content::{Content, render_sections_html};
use crate::error::ConsoleError;
use crate::style::CssColor;

/// Something that can display the console's content.
pub trait OverlaySurface {
    /// Replaces whatever the surface currently shows.
    fn show(&mut self, content: &Content) -> Result<(), ConsoleError>;

    /// Shows named sections. The default renders them as HTML blocks.
    fn show_sections(&mut self, sections: &[(&str, &str)]) -> Result<(), ConsoleError> {
        self.show(&Content::Markup(render_sections_html(sections)))
    }

    fn set_color(&mut self, color: &CssColor) -> Result<(), ConsoleError>;
}

/// Surface that only remembers what it was asked to show.
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    content: Option<Content>,
    color: Option<CssColor>,
    pushes: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    pub fn color(&self) -> Option<&CssColor> {
        self.color.as_ref()
    }

    /// Number of times content was pushed.
    pub fn pushes(&self) -> usize {
        self.pushes
    }
}

impl OverlaySurface for MemorySurface {
    fn show(&mut self, content: &Content) -> Result<(), ConsoleError> {
        self.content = Some(content.clone());
        self.pushes += 1;
        Ok(())
    }

    fn set_color(&mut self, color: &CssColor) -> Result<(), ConsoleError> {
        self.color = Some(color.clone());
        Ok(())
    }
}
