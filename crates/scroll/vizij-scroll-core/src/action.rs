//! Action callbacks invoked with a progress factor.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::ActionError;

/// Something that receives progress factors in [0, 1].
///
/// `PartialEq` on implementors is identity: revoking by `{target, action}`
/// removes the entry registered with *this* action, not an equivalent one.
pub trait ScrollAction {
    fn invoke(&mut self, factor: f64) -> Result<(), ActionError>;
}

type ActionFn = dyn FnMut(f64) -> Result<(), ActionError>;

/// Shared native closure; clones compare equal to each other and to nothing else.
#[derive(Clone)]
pub struct Action(Rc<RefCell<ActionFn>>);

impl Action {
    pub fn new(mut f: impl FnMut(f64) + 'static) -> Self {
        Self::fallible(move |x| {
            f(x);
            Ok(())
        })
    }

    /// An action that may report failure instead of panicking.
    pub fn fallible(f: impl FnMut(f64) -> Result<(), ActionError> + 'static) -> Self {
        Action(Rc::new(RefCell::new(f)))
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Action) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ScrollAction for Action {
    fn invoke(&mut self, factor: f64) -> Result<(), ActionError> {
        let mut f = self
            .0
            .try_borrow_mut()
            .map_err(|_| ActionError::new("action re-entered while running"))?;
        f(factor)
    }
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Action({:p})", Rc::as_ptr(&self.0))
    }
}
