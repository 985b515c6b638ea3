use crate::example::Example;

/// Hands the current example to an external playground service.
///
/// Fire-and-forget: the widget treats the call itself as the request being
/// sent and never observes whether the open succeeded. Surfacing failures
/// is the collaborator's responsibility.
pub trait Sandbox {
    fn open(&mut self, example: &Example);
}

impl<F> Sandbox for F
where
    F: FnMut(&Example),
{
    fn open(&mut self, example: &Example) {
        self(example)
    }
}
