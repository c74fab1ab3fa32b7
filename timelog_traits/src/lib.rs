pub mod clock;

pub use clock::{Clock, FixedClock, ManualClock, SystemClock};

/// Anything lines can be appended to.
///
/// One operation, so decorators can wrap any implementation and expose the
/// same surface to their caller.
pub trait Appendable {
    type Error;

    fn write(&mut self, text: &str) -> Result<(), Self::Error>;
}

impl<A: Appendable + ?Sized> Appendable for &mut A {
    type Error = A::Error;

    #[inline]
    fn write(&mut self, text: &str) -> Result<(), Self::Error> {
        (**self).write(text)
    }
}

impl<A: Appendable + ?Sized> Appendable for Box<A> {
    type Error = A::Error;

    #[inline]
    fn write(&mut self, text: &str) -> Result<(), Self::Error> {
        (**self).write(text)
    }
}
