// WHY: Spell checking is an external capability of the host application. The
// engine only defines the boundary and merges whatever comes back; a missing
// or failing provider degrades to zero extra findings, never to an error.

use anyhow::Result;

use crate::report::Finding;
use crate::segmenter::Token;

/// Host-supplied spell-check capability.
///
/// Implementations receive the word tokens of the analyzed text and return
/// `Category::Spelling` findings with spans into the same text. Errors are
/// tolerated by the coordinator: the rest of the report stays usable.
pub trait SpellProvider {
    fn check_spelling(&self, tokens: &[Token<'_>]) -> Result<Vec<Finding>>;
}
