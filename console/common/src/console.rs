//! Buffered console: collects text or named sections and pushes them to a
//! surface only when something changed since the last `update`.

use std::fmt::Display;

use indexmap::IndexMap;
use log::debug;

use crate::content::Content;
use crate::error::ConsoleError;
use crate::style::CssColor;
use crate::surface::OverlaySurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dirtiness {
    Clean,
    Text,
    Markup,
    Sections,
}

pub struct Console<S: OverlaySurface> {
    surface: S,
    text: String,
    sections: IndexMap<String, String>,
    dirty: Dirtiness,
}

impl<S: OverlaySurface> Console<S> {
    pub fn new(surface: S) -> Self {
        Console {
            surface,
            text: String::new(),
            sections: IndexMap::new(),
            dirty: Dirtiness::Clean,
        }
    }

    /// Replaces the displayed text. Sections stay buffered but are hidden
    /// until one of them changes again.
    pub fn set_text(&mut self, s: &str) {
        self.text.clear();
        self.text.push_str(s);
        self.dirty = Dirtiness::Text;
    }

    /// Replaces the displayed content with trusted HTML on the next
    /// `update`. Shares the buffer with `set_text`; the last call wins.
    pub fn set_markup(&mut self, markup: &str) {
        self.text.clear();
        self.text.push_str(markup);
        self.dirty = Dirtiness::Markup;
    }

    /// Sets a named section, keeping its original slot if it already exists.
    pub fn set_section(&mut self, name: &str, value: impl Display) {
        let value = value.to_string();
        match self.sections.get_mut(name) {
            Some(existing) => *existing = value,
            None => {
                self.sections.insert(name.to_string(), value);
            }
        }
        self.dirty = Dirtiness::Sections;
    }

    pub fn remove_section(&mut self, name: &str) -> bool {
        let removed = self.sections.shift_remove(name).is_some();
        if removed {
            self.dirty = Dirtiness::Sections;
        }
        removed
    }

    pub fn section(&self, name: &str) -> Option<&str> {
        self.sections.get(name).map(String::as_str)
    }

    /// Drops all text and sections; the next `update` blanks the surface.
    pub fn clear(&mut self) {
        self.text.clear();
        self.sections.clear();
        self.dirty = Dirtiness::Text;
    }

    /// Parses and applies a text colour immediately.
    pub fn set_color(&mut self, color: &str) -> Result<(), ConsoleError> {
        let color = CssColor::parse(color)?;
        self.surface.set_color(&color)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty != Dirtiness::Clean
    }

    /// Pushes buffered changes to the surface. Does nothing when clean.
    ///
    /// On error the console stays dirty so the next call retries.
    pub fn update(&mut self) -> Result<(), ConsoleError> {
        match self.dirty {
            Dirtiness::Clean => return Ok(()),
            Dirtiness::Text => {
                debug!("console: pushing {} bytes of text", self.text.len());
                self.surface.show(&Content::Text(self.text.clone()))?;
            }
            Dirtiness::Markup => {
                debug!("console: pushing {} bytes of markup", self.text.len());
                self.surface.show(&Content::Markup(self.text.clone()))?;
            }
            Dirtiness::Sections => {
                debug!("console: pushing {} sections", self.sections.len());
                let sections: Vec<(&str, &str)> = self
                    .sections
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect();
                self.surface.show_sections(&sections)?;
            }
        }
        self.dirty = Dirtiness::Clean;
        Ok(())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn test_update_when_clean_is_noop() {
        let mut console = Console::new(MemorySurface::new());
        assert!(!console.is_dirty());
        console.update().unwrap();
        assert_eq!(console.surface().pushes(), 0);
    }

    #[test]
    fn test_text_scenario() {
        let mut console = Console::new(MemorySurface::new());
        console.set_text("Loading 3/10");
        console.update().unwrap();
        assert_eq!(console.surface().content(), Some(&Content::text("Loading 3/10")));

        console.set_text("");
        console.update().unwrap();
        assert_eq!(console.surface().content(), Some(&Content::text("")));
        assert_eq!(console.surface().pushes(), 2);

        console.update().unwrap();
        assert_eq!(console.surface().pushes(), 2);
    }

    #[test]
    fn test_last_of_text_and_markup_wins() {
        let mut console = Console::new(MemorySurface::new());
        console.set_text("a");
        console.set_markup("<b>b</b>");
        console.update().unwrap();
        assert_eq!(console.surface().content(), Some(&Content::markup("<b>b</b>")));

        console.set_markup("<b>b</b>");
        console.set_text("c");
        console.update().unwrap();
        assert_eq!(console.surface().content(), Some(&Content::text("c")));
        assert_eq!(console.surface().pushes(), 2);
    }

    #[test]
    fn test_sections_keep_insertion_order() {
        let mut console = Console::new(MemorySurface::new());
        console.set_section("Stats", "frame time: 16.7ms");
        console.set_section("Flowers", "3 flowers");
        console.set_section("Stats", "frame time: 15.2ms");
        console.update().unwrap();
        assert_eq!(
            console.surface().content(),
            Some(&Content::markup(
                "<h3>Stats</h3><div>frame time: 15.2ms</div><br/><h3>Flowers</h3><div>3 flowers</div><br/>"
            ))
        );
    }

    #[test]
    fn test_remove_section() {
        let mut console = Console::new(MemorySurface::new());
        console.set_section("a", 1);
        console.update().unwrap();
        assert!(!console.remove_section("missing"));
        assert!(!console.is_dirty());
        assert!(console.remove_section("a"));
        console.update().unwrap();
        assert_eq!(console.surface().content(), Some(&Content::markup("")));
    }

    #[test]
    fn test_clear_blanks_surface() {
        let mut console = Console::new(MemorySurface::new());
        console.set_section("a", "b");
        console.update().unwrap();
        console.clear();
        console.update().unwrap();
        assert_eq!(console.surface().content(), Some(&Content::text("")));
        assert_eq!(console.section("a"), None);
    }

    #[test]
    fn test_set_color() {
        let mut console = Console::new(MemorySurface::new());
        console.set_color("#222").unwrap();
        assert_eq!(console.surface().color(), Some(&CssColor::rgb(0x22, 0x22, 0x22)));
        assert!(console.set_color("not a colour").is_err());
    }

    #[test]
    fn test_failed_update_stays_dirty() {
        struct Broken;
        impl OverlaySurface for Broken {
            fn show(&mut self, _: &Content) -> Result<(), ConsoleError> {
                Err(ConsoleError::MissingGlobal("body"))
            }
            fn set_color(&mut self, _: &CssColor) -> Result<(), ConsoleError> {
                Ok(())
            }
        }

        let mut console = Console::new(Broken);
        console.set_text("x");
        assert!(console.update().is_err());
        assert!(console.is_dirty());
    }
}
