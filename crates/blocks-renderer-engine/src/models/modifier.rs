use std::fmt;
use std::str::FromStr;

/// A text decoration that can be switched on for a text leaf.
///
/// The declaration order of the variants is the canonical wrapping order:
/// bold is applied first (innermost), code last (outermost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
}

impl Modifier {
    /// All modifiers in canonical order
    pub const ALL: [Modifier; 5] = [
        Modifier::Bold,
        Modifier::Italic,
        Modifier::Underline,
        Modifier::Strikethrough,
        Modifier::Code,
    ];

    /// The name used for this modifier in the JSON document
    pub fn name(self) -> &'static str {
        match self {
            Modifier::Bold => "bold",
            Modifier::Italic => "italic",
            Modifier::Underline => "underline",
            Modifier::Strikethrough => "strikethrough",
            Modifier::Code => "code",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown modifier \"{0}\"")]
pub struct UnknownModifier(pub String);

impl FromStr for Modifier {
    type Err = UnknownModifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modifier::ALL
            .into_iter()
            .find(|modifier| modifier.name() == s)
            .ok_or_else(|| UnknownModifier(s.to_string()))
    }
}

/// Set of active modifiers on a text leaf.
///
/// Iteration always yields modifiers in canonical order, whatever order the
/// flags were declared in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierSet {
    bits: u8,
}

impl ModifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, modifier: Modifier) {
        self.bits |= modifier.bit();
    }

    pub fn remove(&mut self, modifier: Modifier) {
        self.bits &= !modifier.bit();
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.bits & modifier.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        Modifier::ALL
            .into_iter()
            .filter(move |modifier| self.contains(*modifier))
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut set = ModifierSet::new();
        for modifier in iter {
            set.insert(modifier);
        }
        set
    }
}
