//! Form field descriptors and text editing

use crate::utm::FieldName;

/// How a field takes input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// One of a fixed list of tags
    Choice,
    /// Calendar date typed as `YYYY-MM-DD` or stepped by day
    Date,
}

/// A single row of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub kind: FieldKind,
}

impl FormField {
    pub fn new(name: FieldName) -> Self {
        let kind = match name {
            FieldName::Source | FieldName::Medium => FieldKind::Choice,
            FieldName::DeliveryDate => FieldKind::Date,
            _ => FieldKind::Text,
        };
        Self { name, kind }
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    /// Guidance shown in the help line while the field is focused
    pub fn help(&self) -> &'static str {
        match self.name {
            FieldName::WebsiteUrl => "The page the campaign should land on, e.g. https://example.com/sale",
            FieldName::Source => "Where the link is distributed",
            FieldName::SourceOther => "Custom source tag (lowercase letters and digits)",
            FieldName::Medium => "What kind of channel carries the link",
            FieldName::MediumOther => "Custom medium tag (lowercase letters and digits)",
            FieldName::CampaignName => {
                "Lowercase letters, digits, '_' and '-' only. Pick a delivery date to prefix it"
            }
            FieldName::DeliveryDate => "Sets a YYYYMMDD_ prefix on the campaign name",
            FieldName::Content => "Tells links in the same campaign apart, e.g. top",
        }
    }
}

/// A keystroke applied to a text value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Push(char),
    Pop,
    Clear,
}

impl TextEdit {
    /// The value after this edit
    pub fn apply(self, value: &str) -> String {
        let mut next = value.to_string();
        match self {
            TextEdit::Push(c) => next.push(c),
            TextEdit::Pop => {
                next.pop();
            }
            TextEdit::Clear => next.clear(),
        }
        next
    }
}
