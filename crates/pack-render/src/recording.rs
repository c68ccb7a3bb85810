// crates/pack-render/src/recording.rs
use crate::{Applicator, ApplyResult};
use pack_core::{Color, Font, StyleCommand, TextAlign};

/// Applicator that keeps every call it receives, in order. Stands in for a
/// native widget in tests and in the CLI's style dump.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingApplicator {
    calls: Vec<StyleCommand>,
}

impl RecordingApplicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[StyleCommand] {
        &self.calls
    }

    /// Number of recorded calls to the backend method `name`.
    pub fn count(&self, name: &str) -> usize {
        self.calls.iter().filter(|call| call.name() == name).count()
    }

    /// Most recent call to `name`.
    pub fn last(&self, name: &str) -> Option<&StyleCommand> {
        self.calls.iter().rev().find(|call| call.name() == name)
    }

    pub fn take(&mut self) -> Vec<StyleCommand> {
        std::mem::take(&mut self.calls)
    }
}

impl Applicator for RecordingApplicator {
    fn set_color(&mut self, color: Color) -> ApplyResult<()> {
        self.calls.push(StyleCommand::SetColor(color));
        Ok(())
    }

    fn set_background_color(&mut self, color: Color) -> ApplyResult<()> {
        self.calls.push(StyleCommand::SetBackgroundColor(color));
        Ok(())
    }

    fn set_font(&mut self, font: &Font) -> ApplyResult<()> {
        self.calls.push(StyleCommand::SetFont(font.clone()));
        Ok(())
    }

    fn set_alignment(&mut self, alignment: TextAlign) -> ApplyResult<()> {
        self.calls.push(StyleCommand::SetAlignment(alignment));
        Ok(())
    }

    fn set_hidden(&mut self, hidden: bool) -> ApplyResult<()> {
        self.calls.push(StyleCommand::SetHidden(hidden));
        Ok(())
    }

    fn refresh(&mut self) -> ApplyResult<()> {
        self.calls.push(StyleCommand::Refresh);
        Ok(())
    }
}
