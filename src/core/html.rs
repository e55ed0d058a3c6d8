// src/core/html.rs
//
// Selector paths over a parsed document. A path is a list of steps; each step
// runs its CSS selector inside the element picked by the step before it
// (the first step runs against the whole document).

use scraper::{ElementRef, Html, Selector};

/// Which match of a selector a step takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pick {
    First,
    /// Zero-based.
    Nth(usize),
}

impl std::fmt::Display for Pick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pick::First  => f.write_str("first"),
            Pick::Nth(n) => write!(f, "#{}", n + 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub css: &'static str,
    pub pick: Pick,
}

pub const fn first(css: &'static str) -> Step {
    Step { css, pick: Pick::First }
}

pub const fn nth(css: &'static str, n: usize) -> Step {
    Step { css, pick: Pick::Nth(n) }
}

/// Why a path stopped. Carries the step that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathError {
    BadSelector(Step),
    NoMatch(Step),
}

fn pick<'a>(mut it: impl Iterator<Item = ElementRef<'a>>, p: Pick) -> Option<ElementRef<'a>> {
    match p {
        Pick::First  => it.next(),
        Pick::Nth(n) => it.nth(n),
    }
}

/// Follow `steps` through `doc`. An empty path is a NoMatch on nothing and
/// never happens in practice; callers always pass at least one step.
pub fn walk<'a>(doc: &'a Html, steps: &[Step]) -> Result<ElementRef<'a>, PathError> {
    let mut cur: Option<ElementRef<'a>> = None;

    for step in steps {
        let sel = Selector::parse(step.css).map_err(|_| PathError::BadSelector(*step))?;
        let found = match cur {
            None     => pick(doc.select(&sel), step.pick),
            Some(el) => pick(el.select(&sel), step.pick),
        };
        cur = Some(found.ok_or(PathError::NoMatch(*step))?);
    }

    cur.ok_or(PathError::NoMatch(first("")))
}

/// All descendant text of `el`, concatenated.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}
