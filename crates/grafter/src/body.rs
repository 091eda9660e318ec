//! Statement splices into `body` lists.

use grafter_core::GraftError;
use tracing::debug;

use crate::collection::Collection;
use crate::source::Source;

const ENGINE_TARGET: &str = "grafter::engine";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Start,
    End,
    At(usize),
}

impl Placement {
    const fn index(self) -> usize {
        match self {
            Self::Start => 0,
            Self::End => usize::MAX,
            Self::At(index) => index,
        }
    }
}

impl Collection {
    /// Appends the statements of `source` to the end of each root's body.
    ///
    /// The body is the root's own `body` list, or that of its `body` child
    /// (a function's block, a class body). Every root receives its own
    /// freshly parsed copy of the statements.
    ///
    /// Returns `Ok(false)` when the collection is empty or some root has no
    /// body; such roots are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GraftError::Parse`] or [`GraftError::Conversion`] when the
    /// source cannot be turned into statements.
    pub fn append(&self, source: impl Into<Source>) -> Result<bool, GraftError> {
        self.splice_body(&source.into(), Placement::End)
    }

    /// Inserts the statements of `source` before body item `index`.
    ///
    /// An index past the end appends.
    ///
    /// # Errors
    ///
    /// As for [`append`](Self::append).
    pub fn append_at(&self, source: impl Into<Source>, index: usize) -> Result<bool, GraftError> {
        self.splice_body(&source.into(), Placement::At(index))
    }

    /// Inserts the statements of `source` at the start of each root's body.
    ///
    /// # Errors
    ///
    /// As for [`append`](Self::append).
    pub fn prepend(&self, source: impl Into<Source>) -> Result<bool, GraftError> {
        self.splice_body(&source.into(), Placement::Start)
    }

    /// Inserts the statements of `source` before body item `index`.
    ///
    /// # Errors
    ///
    /// As for [`append`](Self::append).
    pub fn prepend_at(&self, source: impl Into<Source>, index: usize) -> Result<bool, GraftError> {
        self.splice_body(&source.into(), Placement::At(index))
    }

    fn splice_body(&self, source: &Source, placement: Placement) -> Result<bool, GraftError> {
        if self.is_empty() {
            return Ok(false);
        }
        let text = self.engine().source_text(source)?;
        let mut accepted = true;
        for root in self {
            let Some(owner) = root.body_owner() else {
                debug!(
                    target: ENGINE_TARGET,
                    kind = %root.kind(),
                    "skipping body splice on a node without a body"
                );
                accepted = false;
                continue;
            };
            let statements = self.engine().fragment(&text)?;
            accepted &= owner.insert_items("body", placement.index(), statements);
        }
        Ok(accepted)
    }
}
