use alloc::string::String;
use core::fmt::{self, Write};
use core::ops::ControlFlow;

use crate::validator::ConstraintGroup;
use crate::violation::{join_path, Violation, Violations};

/// One node of a built validator: a field rule, a nested or for-each child, or a
/// conditional block.
///
/// `Break` means a fail-fast evaluation has recorded its violation and every caller
/// up the tree must stop.
pub(crate) trait Rule<T: ?Sized>: Send + Sync {
    fn evaluate(&self, target: &T, eval: &mut Evaluation<'_>) -> ControlFlow<()>;
}

/// State of a single `validate` call.
///
/// Owns the violations being collected and the path of the object currently under
/// evaluation; nothing here outlives the call.
pub(crate) struct Evaluation<'g> {
    group: &'g ConstraintGroup,
    fail_fast: bool,
    path: String,
    violations: Violations,
}

impl<'g> Evaluation<'g> {
    pub(crate) fn new(group: &'g ConstraintGroup, fail_fast: bool, prefix: &str) -> Self {
        Self {
            group,
            fail_fast,
            path: String::from(prefix),
            violations: Violations::new(),
        }
    }

    #[inline]
    pub(crate) fn group(&self) -> &'g ConstraintGroup {
        self.group
    }

    /// Full path of `name` relative to the current object.
    #[inline]
    pub(crate) fn field_path(&self, name: &str) -> String {
        join_path(&self.path, name)
    }

    /// Records a violation and tells the caller whether to keep going.
    pub(crate) fn report(&mut self, violation: Violation) -> ControlFlow<()> {
        if self.fail_fast {
            rail_event!(debug, field = violation.field_name(), "fail-fast validation stopped");
            self.violations.push(violation);
            return ControlFlow::Break(());
        }
        self.violations.push(violation);
        ControlFlow::Continue(())
    }

    /// Evaluates a child object rooted at `name` (and `[index]` for collection
    /// elements).
    ///
    /// The child runs fail-fast when either it or any ancestor is fail-fast. A
    /// `Break` raised only because of the child's own policy ends the child's
    /// subtree but not a collect-all parent.
    pub(crate) fn descend<F>(
        &mut self,
        name: &str,
        index: Option<&dyn fmt::Display>,
        child_fail_fast: bool,
        f: F,
    ) -> ControlFlow<()>
    where
        F: FnOnce(&mut Self) -> ControlFlow<()>,
    {
        let saved_len = self.path.len();
        let parent_fail_fast = self.fail_fast;

        if !name.is_empty() {
            if !self.path.is_empty() {
                self.path.push('.');
            }
            self.path.push_str(name);
        }
        if let Some(index) = index {
            let _ = write!(self.path, "[{index}]");
        }
        self.fail_fast = parent_fail_fast || child_fail_fast;

        let flow = f(self);

        self.path.truncate(saved_len);
        self.fail_fast = parent_fail_fast;

        if parent_fail_fast {
            flow
        } else {
            ControlFlow::Continue(())
        }
    }

    #[inline]
    pub(crate) fn finish(self) -> Violations {
        self.violations
    }
}
