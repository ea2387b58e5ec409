//! # Names
//!
//! Deriving the names under which variables and constraints are written.
//!
//! Names given by the user might be absent, duplicated, too long, or contain characters that
//! the file formats don't accept. Each entity gets a name that is nonempty, consists of legal
//! characters only and is unique within its table. Variables and constraints have independent
//! tables.
use std::collections::HashSet;
use std::ops::Index;

use tracing::trace;

use crate::data::linear_program::model::Model;
use crate::io::error::ExportError;
use crate::io::lp::OBJECTIVE_LABEL;
use crate::io::mps::COST_ROW;

/// Prefix of generated variable names.
pub const VARIABLE_PREFIX: &str = "V";
/// Prefix of generated constraint names.
pub const CONSTRAINT_PREFIX: &str = "C";

/// Longest name accepted by the LP format.
pub const MAX_NAME_LENGTH: usize = 255;

/// Characters other than ASCII letters and digits that may appear in a name.
const LEGAL_SYMBOLS: &str = "_.!#$%&()/,;?@{}|~";

/// Replaces illegal characters.
const REPLACEMENT: char = '_';

/// Names of the objective in the LP and MPS formats, which no constraint may have.
const RESERVED_CONSTRAINT_NAMES: [&str; 2] = [OBJECTIVE_LABEL, COST_ROW];

/// Words with a meaning in LP files, compared ignoring case.
///
/// A name equal to one of these is prefixed with `_`.
const KEYWORDS: [&str; 27] = [
    "bin", "binaries", "binary", "bound", "bounds", "end", "free", "gen", "general", "generals",
    "inf", "infinity", "int", "integer", "integers", "max", "maximise", "maximize", "maximum",
    "min", "minimise", "minimize", "minimum", "s.t.", "st", "st.", "subject",
];

/// Names in the order of the entities they belong to.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NameTable {
    names: Vec<String>,
}

impl NameTable {
    /// Derive a name for each entity.
    ///
    /// # Arguments
    ///
    /// * `raw_names`: The names given by the user, in order of the entity indices.
    /// * `prefix`: Used to generate names for unnamed entities, and all names when obfuscating.
    /// * `obfuscate`: Whether to ignore the user given names.
    ///
    /// # Return value
    ///
    /// Name `i` in the table is `prefix` followed by `i + 1` when obfuscating. Otherwise, it is
    /// the sanitized raw name made unique by appending `_1`, `_2`, ..., or the generated name if
    /// no usable raw name was given.
    ///
    /// # Errors
    ///
    /// When no unique name can be found for an entity.
    pub fn build<'a>(
        raw_names: impl IntoIterator<Item = Option<&'a str>>,
        prefix: &str,
        obfuscate: bool,
    ) -> Result<Self, ExportError> {
        Self::build_reserving(raw_names, prefix, obfuscate, &[])
    }

    /// Derive a name for each entity, avoiding the `reserved` names.
    ///
    /// A raw name that equals a reserved name is made unique in the same way as a duplicate.
    /// Generated names consist of the prefix and a number, and should not be reserved.
    ///
    /// # Errors
    ///
    /// When no unique name can be found for an entity.
    pub fn build_reserving<'a>(
        raw_names: impl IntoIterator<Item = Option<&'a str>>,
        prefix: &str,
        obfuscate: bool,
        reserved: &[&str],
    ) -> Result<Self, ExportError> {
        let raw_names = raw_names.into_iter();

        if obfuscate {
            let names = raw_names.enumerate()
                .map(|(i, _)| generated_name(prefix, i))
                .collect();
            return Ok(Self { names });
        }

        let mut registry = NameRegistry::with_reserved(raw_names.size_hint().0, reserved);
        for (i, raw_name) in raw_names.enumerate() {
            let fallback = generated_name(prefix, i);
            let base = match raw_name {
                Some(raw_name) if !raw_name.is_empty() => {
                    let sanitized = sanitize(raw_name);
                    if sanitized.len() > MAX_NAME_LENGTH {
                        trace!(index = i, "name too long, using generated name {}", fallback);
                        fallback.clone()
                    } else {
                        sanitized
                    }
                },
                _ => fallback.clone(),
            };

            registry.assign(base, &fallback)?;
        }

        Ok(registry.into_table())
    }

    /// All names, by entity index.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[allow(missing_docs)]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Length of the longest name, `0` for an empty table.
    pub fn max_length(&self) -> usize {
        self.names.iter().map(String::len).max().unwrap_or(0)
    }
}

impl Index<usize> for NameTable {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.names[index]
    }
}

/// Hands out names that are unique among all names it handed out before.
///
/// Collisions are resolved by appending `_k` for the smallest `k >= 1` that results in a new
/// name.
#[derive(Debug, Default)]
pub struct NameRegistry {
    assigned: Vec<String>,
    taken: HashSet<String>,
}

impl NameRegistry {
    fn with_reserved(capacity: usize, reserved: &[&str]) -> Self {
        let mut taken = HashSet::with_capacity(capacity + reserved.len());
        taken.extend(reserved.iter().map(|name| name.to_string()));

        Self {
            assigned: Vec::with_capacity(capacity),
            taken,
        }
    }

    /// Start from an existing table, such that derived names don't collide with it.
    pub fn from_table(table: &NameTable) -> Self {
        Self {
            assigned: Vec::new(),
            taken: table.names.iter().cloned().collect(),
        }
    }

    /// Reserve a new name derived from `base`, or from `fallback` if `base` is too long or all
    /// its variants are.
    ///
    /// The name is not added to the table that this registry produces, it is only returned.
    ///
    /// # Errors
    ///
    /// When no unique name within the length limit can be derived from either.
    pub fn derive(&mut self, base: &str, fallback: &str) -> Result<String, ExportError> {
        let name = self.first_free(base)
            .or_else(|| self.first_free(fallback))
            .ok_or_else(|| ExportError::NamingCollisionUnresolvable { name: base.to_string() })?;
        self.taken.insert(name.clone());

        Ok(name)
    }

    /// Reserve a name for the next entity in the table.
    ///
    /// The search starts from `base`, and from `fallback` if that doesn't give a name within the
    /// length limit.
    fn assign(&mut self, base: String, fallback: &str) -> Result<(), ExportError> {
        let name = if self.taken.contains(&base) {
            self.first_free(&base)
                .or_else(|| self.first_free(fallback))
                .ok_or(ExportError::NamingCollisionUnresolvable { name: base })?
        } else {
            base
        };

        self.taken.insert(name.clone());
        self.assigned.push(name);

        Ok(())
    }

    /// Find the first free name among `base`, `base_1`, `base_2`, ....
    ///
    /// Fewer names are taken than there are suffixes tried, so this only fails when the names
    /// get too long.
    fn first_free(&self, base: &str) -> Option<String> {
        if base.len() > MAX_NAME_LENGTH {
            return None;
        }
        if !self.taken.contains(base) {
            return Some(base.to_string());
        }

        (1..=self.taken.len() + 1)
            .map(|k| format!("{}_{}", base, k))
            .take_while(|candidate| candidate.len() <= MAX_NAME_LENGTH)
            .find(|candidate| !self.taken.contains(candidate))
    }

    fn into_table(self) -> NameTable {
        NameTable { names: self.assigned }
    }
}

/// The names of all variables and all constraints of a model.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModelNames {
    /// Variable names, by variable index.
    pub variables: NameTable,
    /// Constraint names, by constraint index.
    pub constraints: NameTable,
    obfuscated: bool,
}

impl ModelNames {
    /// Derive the variable and constraint names of a model.
    ///
    /// # Errors
    ///
    /// When no unique name can be found for an entity.
    pub fn build(model: &Model, obfuscate: bool) -> Result<Self, ExportError> {
        let variables = NameTable::build(
            model.variables.iter().map(|variable| variable.name.as_deref()),
            VARIABLE_PREFIX,
            obfuscate,
        )?;
        let constraints = NameTable::build_reserving(
            model.constraints.iter().map(|constraint| constraint.name.as_deref()),
            CONSTRAINT_PREFIX,
            obfuscate,
            &RESERVED_CONSTRAINT_NAMES,
        )?;

        Ok(Self { variables, constraints, obfuscated: obfuscate })
    }

    /// Whether the names were generated from indices only.
    pub fn is_obfuscated(&self) -> bool {
        self.obfuscated
    }
}

/// Name generated from the 0-based index `i`: the prefix followed by the 1-based index.
pub fn generated_name(prefix: &str, i: usize) -> String {
    format!("{}{}", prefix, i + 1)
}

/// Whether a character may appear in a name.
pub fn is_legal(character: char) -> bool {
    character.is_ascii_alphanumeric() || LEGAL_SYMBOLS.contains(character)
}

/// Whether a character may be the first character of a name.
pub fn is_legal_first(character: char) -> bool {
    character.is_ascii_alphabetic() || character == '_'
}

/// Whether a name could be read as something other than a name.
///
/// This is the case for keywords, and for names starting with an `e` or `E` followed by a digit
/// or another `e` or `E`, which can be taken for the exponent of a preceding number.
pub fn is_ambiguous(name: &str) -> bool {
    let mut characters = name.chars();
    let looks_like_exponent = matches!(characters.next(), Some('e' | 'E'))
        && characters.next().is_some_and(|c| c.is_ascii_digit() || c == 'e' || c == 'E');

    looks_like_exponent || KEYWORDS.iter().any(|keyword| keyword.eq_ignore_ascii_case(name))
}

/// Make a nonempty raw name legal.
///
/// A `_` is prepended if the first character can't start a name or the name is ambiguous, and
/// all illegal characters are replaced by `_`.
pub fn sanitize(raw_name: &str) -> String {
    debug_assert!(!raw_name.is_empty());

    let mut name = String::with_capacity(raw_name.len() + 1);
    name.extend(raw_name.chars().map(|c| if is_legal(c) { c } else { REPLACEMENT }));
    if !raw_name.starts_with(is_legal_first) || is_ambiguous(&name) {
        name.insert(0, REPLACEMENT);
    }

    name
}
