use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::fmt;

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// What an identifier names. Used as the id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Project,
    Page,
    Component,
}

impl IdKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            IdKind::Project => "project",
            IdKind::Page => "page",
            IdKind::Component => "component",
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Identifier source combining wall-clock milliseconds with a random
/// base-36 suffix: `{kind}_{millis}_{suffix}[_{type}]`.
///
/// The millisecond part never goes backwards for one generator, even if the
/// system clock does. The trailing type is for debugging; ids are opaque and
/// must not be parsed.
pub struct IdGenerator {
    rng: StdRng,
    last_millis: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            last_millis: 0,
        }
    }

    /// Deterministic suffixes, for tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            last_millis: 0,
        }
    }

    pub fn next_id(&mut self, kind: IdKind, component_type: Option<&str>) -> String {
        let millis = Utc::now().timestamp_millis().max(self.last_millis);
        self.last_millis = millis;

        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[self.rng.gen_range(0..BASE36.len())] as char)
            .collect();

        match component_type {
            Some(component_type) => format!("{}_{}_{}_{}", kind, millis, suffix, component_type),
            None => format!("{}_{}_{}", kind, millis, suffix),
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static GENERATOR: RefCell<IdGenerator> = RefCell::new(IdGenerator::new());
}

/// Generate an id from the thread-local generator
pub fn new_id(kind: IdKind, component_type: Option<&str>) -> String {
    GENERATOR.with(|generator| generator.borrow_mut().next_id(kind, component_type))
}

pub fn generate_project_id() -> String {
    new_id(IdKind::Project, None)
}

pub fn generate_page_id() -> String {
    new_id(IdKind::Page, None)
}

pub fn generate_component_id(component_type: &str) -> String {
    new_id(IdKind::Component, Some(component_type))
}
