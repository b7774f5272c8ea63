//! Utilities for writing [`std::fmt`] implementations.

use std::fmt::{Debug, Display, Formatter};

struct FmtClosure<T>(T);

impl<T> Debug for FmtClosure<T>
where
    T: Fn(&mut Formatter<'_>) -> std::fmt::Result,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0(f)
    }
}

impl<T> Display for FmtClosure<T>
where
    T: Fn(&mut Formatter<'_>) -> std::fmt::Result,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0(f)
    }
}

/// Turns a closure that writes to a [`Formatter`] into a type that implements [`Display`] and
/// [`Debug`] by calling that closure.
pub fn fmt_closure<T: Fn(&mut Formatter<'_>) -> std::fmt::Result>(
    closure: T,
) -> impl Display + Debug {
    FmtClosure(closure)
}

/// Displays the items yielded by an iterator separated by a fixed string.
///
/// This struct is created by [`fmt_join`].
pub struct FmtJoin<'a, F> {
    sep: &'a str,
    get_iter: F,
}

impl<F, I> Display for FmtJoin<'_, F>
where
    F: Fn() -> I,
    I: IntoIterator,
    I::Item: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, item) in (self.get_iter)().into_iter().enumerate() {
            if index > 0 {
                f.write_str(self.sep)?;
            }
            Display::fmt(&item, f)?;
        }
        Ok(())
    }
}

impl<F, I> Debug for FmtJoin<'_, F>
where
    F: Fn() -> I,
    I: IntoIterator,
    I::Item: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Takes an iterator returning closure and returns a value that displays the yielded items
/// separated by `sep`.
///
/// Nothing is written for an empty iterator. The closure is called once per formatting
/// operation, so the returned value can be formatted repeatedly.
pub fn fmt_join<F, I>(sep: &str, get_iter: F) -> FmtJoin<'_, F>
where
    F: Fn() -> I,
    I: IntoIterator,
    I::Item: Display,
{
    FmtJoin { sep, get_iter }
}
