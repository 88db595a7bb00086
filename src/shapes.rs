#![warn(clippy::all, clippy::pedantic)]

// Block shapes grouped into families. Each variant is a small grid written as
// rows of `-` (filled) and `.` (empty), read top to bottom.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;

pub const FILLED: char = '-';
pub const EMPTY: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShapeVariant {
    pattern: &'static [&'static str],
    weight: u32,
}

impl ShapeVariant {
    const fn new(pattern: &'static [&'static str], weight: u32) -> Self {
        Self { pattern, weight }
    }

    #[must_use]
    pub fn pattern(&self) -> &'static [&'static str] {
        self.pattern
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.pattern.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.pattern.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    // (column, row) pairs, row-major from the top left
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pattern.iter().enumerate().flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(|(_, symbol)| *symbol == FILLED)
                .map(move |(column, _)| (column, row))
        })
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells().count()
    }

    #[must_use]
    pub fn is_filled(&self, column: usize, row: usize) -> bool {
        self.pattern
            .get(row)
            .and_then(|line| line.chars().nth(column))
            .is_some_and(|symbol| symbol == FILLED)
    }
}

impl fmt::Display for ShapeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.pattern.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for symbol in line.chars() {
                f.write_str(if symbol == FILLED { "[]" } else { "  " })?;
            }
        }
        Ok(())
    }
}

// Family name -> variants, in the order consumers expect to see them.
#[rustfmt::skip]
const FAMILIES: &[(&str, &[ShapeVariant])] = &[
    ("lines", &[
        ShapeVariant::new(&["--"], 5),
        ShapeVariant::new(&["---"], 4),
        ShapeVariant::new(&["----"], 3),
        ShapeVariant::new(&["-----"], 2),
    ]),
    ("lShapes", &[
        ShapeVariant::new(&["..-", "---"], 3),
        ShapeVariant::new(&["-..", "---"], 3),
        ShapeVariant::new(&["-.", "--"], 4),
        ShapeVariant::new(&[".-", "--"], 4),
        ShapeVariant::new(&["-..", "-..", "---"], 2),
        ShapeVariant::new(&["..-", "..-", "---"], 2),
    ]),
    ("tShapes", &[
        ShapeVariant::new(&["---", ".-."], 3),
    ]),
    ("zShapes", &[
        ShapeVariant::new(&["--.", ".--"], 3),
        ShapeVariant::new(&[".--", "--."], 3),
    ]),
    ("squares", &[
        ShapeVariant::new(&["--", "--"], 4),
        ShapeVariant::new(&["---", "---", "---"], 2),
    ]),
    ("obliques", &[
        ShapeVariant::new(&["-..", ".-.", "..-"], 2),
        ShapeVariant::new(&["..-", ".-.", "-.."], 2),
    ]),
];

static CATALOG: Lazy<ShapeCatalog> = Lazy::new(ShapeCatalog::build);

// Built on first access, never mutated
#[must_use]
pub fn catalog() -> &'static ShapeCatalog {
    &CATALOG
}

/// Read-only mapping from family name to its ordered variants.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ShapeCatalog {
    families: BTreeMap<&'static str, &'static [ShapeVariant]>,
}

impl ShapeCatalog {
    fn build() -> Self {
        let families: BTreeMap<_, _> = FAMILIES.iter().copied().collect();
        debug!(
            "Shape catalog ready: {} families, {} variants",
            families.len(),
            families.values().map(|variants| variants.len()).sum::<usize>()
        );
        Self { families }
    }

    #[must_use]
    pub fn family(&self, name: &str) -> Option<&'static [ShapeVariant]> {
        self.families.get(name).copied()
    }

    pub fn families(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.families.keys().copied()
    }

    pub fn variants(&self) -> impl Iterator<Item = (&'static str, &'static ShapeVariant)> + '_ {
        self.families
            .iter()
            .flat_map(|(&name, &variants)| variants.iter().map(move |variant| (name, variant)))
    }

    #[must_use]
    pub fn family_weight(&self, name: &str) -> Option<u32> {
        self.family(name)
            .map(|variants| variants.iter().map(ShapeVariant::weight).sum())
    }

    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.variants().map(|(_, variant)| variant.weight()).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.families.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}
