//! CSS class overrides for the widget's semantic slots
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A styled element of the widget markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClassSlot {
    Container,
    Header,
    Paragraph,
    Savings,
    Link,
    Button,
}

impl ClassSlot {
    pub const ALL: [Self; 6] = [
        Self::Container,
        Self::Header,
        Self::Paragraph,
        Self::Savings,
        Self::Link,
        Self::Button,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Header => "header",
            Self::Paragraph => "paragraph",
            Self::Savings => "savings",
            Self::Link => "link",
            Self::Button => "button",
        }
    }
}

impl FromStr for ClassSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.key() == s)
            .ok_or_else(|| format!("unknown class slot: {s}"))
    }
}

/// Class names applied to each slot. Unset slots render an empty class.
///
/// Deserializing a partial object merges it over the empty defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssClasses {
    pub container: String,
    pub header: String,
    pub paragraph: String,
    pub savings: String,
    pub link: String,
    pub button: String,
}

impl CssClasses {
    /// Merge `overrides` over the empty defaults.
    #[must_use]
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (ClassSlot, &'a str)>,
    {
        let mut classes = Self::default();
        for (slot, class) in overrides {
            classes.set(slot, class);
        }
        classes
    }

    /// Build from slot names as supplied by the host page. Unknown names are
    /// logged and skipped.
    #[must_use]
    pub fn from_named<'a, I>(named: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let overrides: Vec<(ClassSlot, &str)> = named
            .into_iter()
            .filter_map(|(name, class)| match name.parse::<ClassSlot>() {
                Ok(slot) => Some((slot, class)),
                Err(e) => {
                    log::warn!("render_group_buy > ignoring cssClasses entry: {e}");
                    None
                }
            })
            .collect();
        Self::with_overrides(overrides)
    }

    pub fn set(&mut self, slot: ClassSlot, class: impl Into<String>) {
        *self.slot_mut(slot) = class.into();
    }

    #[must_use]
    pub fn get(&self, slot: ClassSlot) -> &str {
        match slot {
            ClassSlot::Container => &self.container,
            ClassSlot::Header => &self.header,
            ClassSlot::Paragraph => &self.paragraph,
            ClassSlot::Savings => &self.savings,
            ClassSlot::Link => &self.link,
            ClassSlot::Button => &self.button,
        }
    }

    fn slot_mut(&mut self, slot: ClassSlot) -> &mut String {
        match slot {
            ClassSlot::Container => &mut self.container,
            ClassSlot::Header => &mut self.header,
            ClassSlot::Paragraph => &mut self.paragraph,
            ClassSlot::Savings => &mut self.savings,
            ClassSlot::Link => &mut self.link,
            ClassSlot::Button => &mut self.button,
        }
    }
}
